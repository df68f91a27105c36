//! # Editor Session
//!
//! Ties a floor plan snapshot to an injected [`PlanStore`] and autosaves
//! after every edit. The session is the stateful wrapper the UI layer
//! talks to; the actual operations live in [`placement`](crate::placement)
//! as pure functions.
//!
//! Saves are fire-and-forget: a failed write is discarded and the
//! in-memory snapshot stays authoritative, so a full storage slot never
//! blocks or crashes the editing session.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::catalog::ElementKind;
//! use plan_core::session::EditorSession;
//! use plan_core::storage::MemoryStore;
//!
//! let mut session = EditorSession::open(MemoryStore::new());
//! let id = session.add_element(ElementKind::TableRound60, 10.0, 10.0);
//! session.move_element(id, 12.0, 18.0);
//!
//! // snapped to the default 5 ft grid, and already persisted
//! let table = session.plan().element(id).unwrap();
//! assert_eq!((table.x, table.y), (10.0, 20.0));
//! assert!(session.warnings().is_empty());
//! ```

use uuid::Uuid;

use crate::catalog::ElementKind;
use crate::element::PropertyPatch;
use crate::placement;
use crate::plan::{FloorPlan, FloorPlanSettings};
use crate::storage::PlanStore;
use crate::validation::{self, ValidationWarning};

/// One editing session over one floor plan.
pub struct EditorSession<S: PlanStore> {
    store: S,
    plan: FloorPlan,
}

impl<S: PlanStore> EditorSession<S> {
    /// Open a session against a store: resume the stored plan if one loads,
    /// otherwise start a fresh default plan.
    pub fn open(store: S) -> Self {
        let plan = store.load().unwrap_or_default();
        EditorSession { store, plan }
    }

    /// Open a session on a specific plan, ignoring whatever the store holds.
    pub fn with_plan(store: S, plan: FloorPlan) -> Self {
        EditorSession { store, plan }
    }

    /// The current snapshot. This is also the export surface: rendering
    /// collaborators read it to draw or rasterize the plan.
    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    /// Current advisory warnings for the snapshot.
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        validation::validate(&self.plan)
    }

    pub fn add_element(&mut self, kind: ElementKind, x: f64, y: f64) -> Uuid {
        let (next, id) = placement::add_element(&self.plan, kind, x, y);
        self.commit(next);
        id
    }

    pub fn move_element(&mut self, id: Uuid, x: f64, y: f64) {
        let next = placement::move_element(&self.plan, id, x, y);
        self.commit(next);
    }

    pub fn update_element_properties(&mut self, id: Uuid, patch: PropertyPatch) {
        let next = placement::update_element_properties(&self.plan, id, patch);
        self.commit(next);
    }

    pub fn set_rotation(&mut self, id: Uuid, degrees: i32) {
        let next = placement::set_rotation(&self.plan, id, degrees);
        self.commit(next);
    }

    pub fn remove_element(&mut self, id: Uuid) {
        let next = placement::remove_element(&self.plan, id);
        self.commit(next);
    }

    pub fn resize_venue(&mut self, width_ft: f64, length_ft: f64) {
        let next = placement::resize_venue(&self.plan, width_ft, length_ft);
        self.commit(next);
    }

    pub fn update_settings(&mut self, settings: FloorPlanSettings) {
        let mut next = self.plan.clone();
        next.settings = settings;
        next.touch();
        self.commit(next);
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        let mut next = self.plan.clone();
        next.name = name.into();
        next.touch();
        self.commit(next);
    }

    /// Adopt a new snapshot and persist it. A save failure is discarded:
    /// the snapshot we just adopted stays authoritative for the session.
    fn commit(&mut self, next: FloorPlan) {
        self.plan = next;
        let _ = self.store.save(&self.plan);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Patch;
    use crate::storage::MemoryStore;

    #[test]
    fn test_open_empty_store_starts_fresh() {
        let session = EditorSession::open(MemoryStore::new());
        assert_eq!(session.plan().element_count(), 0);
        assert_eq!(session.plan().name, "Untitled Plan");
    }

    #[test]
    fn test_edits_autosave() {
        let mut session = EditorSession::open(MemoryStore::new());
        let id = session.add_element(ElementKind::TableBanquet6, 10.0, 10.0);
        let plan_id = session.plan().id;

        // a second session over the same store resumes the saved plan
        let EditorSession { store, .. } = session;
        let resumed = EditorSession::open(store);
        assert_eq!(resumed.plan().id, plan_id);
        assert!(resumed.plan().element(id).is_some());
    }

    #[test]
    fn test_save_failure_keeps_session_alive() {
        let mut session = EditorSession::open(MemoryStore::failing());
        let id = session.add_element(ElementKind::Bar, 5.0, 5.0);
        session.move_element(id, 20.0, 20.0);

        // nothing persisted, but the in-memory snapshot is intact
        let el = session.plan().element(id).unwrap();
        assert_eq!((el.x, el.y), (20.0, 20.0));
    }

    #[test]
    fn test_session_ops_match_placement_semantics() {
        let mut session = EditorSession::open(MemoryStore::new());
        let id = session.add_element(ElementKind::TableRound60, 10.0, 10.0);

        session.update_element_properties(
            id,
            PropertyPatch {
                seats: Patch::Set(8),
                ..PropertyPatch::default()
            },
        );
        assert_eq!(session.warnings().len(), 1);

        session.remove_element(id);
        assert!(session.warnings().is_empty());
        assert_eq!(session.plan().element_count(), 0);
    }

    #[test]
    fn test_settings_and_rename() {
        let mut session = EditorSession::open(MemoryStore::new());
        session.rename("Spring Gala");
        session.update_settings(FloorPlanSettings {
            grid_size_ft: 2.0,
            snap_to_grid: false,
            show_grid: false,
        });

        assert_eq!(session.plan().name, "Spring Gala");
        assert!(!session.plan().settings.snap_to_grid);

        let id = session.add_element(ElementKind::DjBooth, 3.3, 4.4);
        session.move_element(id, 7.7, 8.8);
        let el = session.plan().element(id).unwrap();
        assert_eq!((el.x, el.y), (7.7, 8.8));
    }
}
