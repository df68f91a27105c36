//! # plan_core - Event Floor Plan Engine
//!
//! `plan_core` is the layout engine behind the Seatify seating-arrangement
//! builder: the floor plan model, the placement operations (add, move with
//! grid snapping, update, remove), and the validation engine that flags
//! over-seated tables and tight spacing.
//!
//! ## Design Philosophy
//!
//! - **Snapshot in, snapshot out**: placement and validation are pure
//!   functions over immutable plan snapshots
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Advisory, not blocking**: validation warns, it never prevents edits
//! - **Injected storage**: persistence is a trait the caller provides, not
//!   ambient state
//!
//! ## Quick Start
//!
//! ```rust
//! use plan_core::catalog::ElementKind;
//! use plan_core::session::EditorSession;
//! use plan_core::storage::MemoryStore;
//!
//! let mut session = EditorSession::open(MemoryStore::new());
//! let table = session.add_element(ElementKind::TableRound60, 10.0, 10.0);
//! session.move_element(table, 12.0, 18.0);
//!
//! for warning in session.warnings() {
//!     println!("{}", warning.message);
//! }
//!
//! // Serialize the snapshot for export or rendering collaborators
//! let json = serde_json::to_string_pretty(session.plan()).unwrap();
//! # let _ = json;
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Static element kind registry (footprints, capacities)
//! - [`plan`] - The FloorPlan aggregate, venue, and settings
//! - [`element`] - Placed elements and their property overrides
//! - [`placement`] - Pure placement operations over plan snapshots
//! - [`validation`] - Over-seating and spacing checks
//! - [`storage`] - Persistence adapter (file-backed and in-memory stores)
//! - [`session`] - Autosaving editor session over an injected store
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod element;
pub mod errors;
pub mod placement;
pub mod plan;
pub mod session;
pub mod storage;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use catalog::{ElementKind, ElementSpec, Shape};
pub use element::{ElementProperties, FloorPlanElement, Patch, PropertyPatch};
pub use errors::{PlanError, PlanResult};
pub use plan::{FloorPlan, FloorPlanSettings, Venue};
pub use session::EditorSession;
pub use storage::{JsonFileStore, MemoryStore, PlanStore};
pub use validation::{validate, ValidationWarning, WarningKind};
