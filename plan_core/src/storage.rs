//! # Plan Storage
//!
//! The persistence adapter for floor plans: a key-value style slot holding
//! one JSON-serialized [`FloorPlan`] snapshot. Stores are injected into the
//! editing session rather than reached as ambient state, so tests use
//! [`MemoryStore`] and multiple sessions never collide on a slot.
//!
//! Loading is forgiving by contract: a payload that is missing, unreadable,
//! or fails the minimal structural check (a `venue` field and an `elements`
//! array) degrades to "no stored plan" and the caller starts fresh. Saving
//! uses the write-temp-then-rename pattern so an interrupted write never
//! corrupts the slot.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::plan::FloorPlan;
//! use plan_core::storage::{MemoryStore, PlanStore};
//!
//! let store = MemoryStore::new();
//! assert!(store.load().is_none());
//!
//! let plan = FloorPlan::new("Reception");
//! store.save(&plan).unwrap();
//! assert_eq!(store.load().unwrap().name, "Reception");
//! ```

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;

use crate::errors::{PlanError, PlanResult};
use crate::plan::FloorPlan;

/// Durable slot for one floor plan.
///
/// Implementations own a single fixed slot; which medium backs it is their
/// business. Callers treat `save` as fire-and-forget: a failure leaves the
/// in-memory snapshot authoritative for the session.
pub trait PlanStore {
    /// Load the stored plan, or `None` when the slot is empty or the
    /// payload is unusable. Never errors: a malformed payload is the same
    /// as no payload.
    fn load(&self) -> Option<FloorPlan>;

    /// Persist a snapshot, stamping `updated_at` with the save time.
    fn save(&self, plan: &FloorPlan) -> PlanResult<()>;
}

/// Serialize a snapshot for storage, refreshing `updated_at`.
fn to_payload(plan: &FloorPlan) -> PlanResult<String> {
    let mut stamped = plan.clone();
    stamped.updated_at = Utc::now();
    serde_json::to_string_pretty(&stamped).map_err(|e| PlanError::serialization(e.to_string()))
}

/// Parse a stored payload, or `None` when it does not look like a plan.
fn from_payload(payload: &str) -> Option<FloorPlan> {
    let value: Value = serde_json::from_str(payload).ok()?;
    // minimal structural check before committing to the full parse
    if !value.get("venue").is_some_and(Value::is_object) {
        return None;
    }
    if !value.get("elements").is_some_and(Value::is_array) {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// File-backed store: one plan per JSON file.
///
/// Saves are atomic: serialize, write to a `.tmp` sibling, fsync, rename.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanStore for JsonFileStore {
    fn load(&self) -> Option<FloorPlan> {
        let contents = fs::read_to_string(&self.path).ok()?;
        from_payload(&contents)
    }

    fn save(&self, plan: &FloorPlan) -> PlanResult<()> {
        let json = to_payload(plan)?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp_file = File::create(&tmp_path).map_err(|e| {
            PlanError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.write_all(json.as_bytes()).map_err(|e| {
            PlanError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        tmp_file.sync_all().map_err(|e| {
            PlanError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            PlanError::file_error("rename to final", self.path.display().to_string(), e.to_string())
        })?;

        Ok(())
    }
}

/// In-memory store: the test double, also usable by embedders that manage
/// durability themselves.
///
/// Holds the serialized payload rather than the struct so load/save exercise
/// the same JSON path as the file store. Single-threaded by design, matching
/// the one-actor editing model.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: RefCell<Option<String>>,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// A store whose saves always fail, for exercising the fire-and-forget
    /// path in session tests.
    pub fn failing() -> Self {
        MemoryStore {
            payload: RefCell::new(None),
            fail_saves: true,
        }
    }

    /// Seed the slot with a raw payload (valid or not).
    pub fn with_payload(payload: impl Into<String>) -> Self {
        MemoryStore {
            payload: RefCell::new(Some(payload.into())),
            fail_saves: false,
        }
    }
}

impl PlanStore for MemoryStore {
    fn load(&self) -> Option<FloorPlan> {
        self.payload.borrow().as_deref().and_then(from_payload)
    }

    fn save(&self, plan: &FloorPlan) -> PlanResult<()> {
        if self.fail_saves {
            return Err(PlanError::file_error("save", "<memory>", "simulated failure"));
        }
        *self.payload.borrow_mut() = Some(to_payload(plan)?);
        Ok(())
    }
}
