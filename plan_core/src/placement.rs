//! # Placement Engine
//!
//! Pure operations over floor plan snapshots: add, move, update, remove
//! elements and resize the venue. Every function takes a plan by reference
//! and returns a new snapshot; nothing here performs I/O or keeps state.
//! Callers persist the returned snapshot themselves (see
//! [`session`](crate::session) for the autosaving wrapper).
//!
//! Operations on an id that is not in the plan return the plan unchanged.
//! Stale ids arise legitimately from racing UI events (a delete landing
//! before a drag-end on the same element), so they are a no-op rather than
//! an error.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::catalog::ElementKind;
//! use plan_core::placement;
//! use plan_core::plan::FloorPlan;
//!
//! let plan = FloorPlan::new("Reception");
//! let (plan, id) = placement::add_element(&plan, ElementKind::TableRound60, 12.0, 18.0);
//!
//! // Default settings snap to a 5 ft grid on move
//! let plan = placement::move_element(&plan, id, 12.0, 18.0);
//! let table = plan.element(id).unwrap();
//! assert_eq!((table.x, table.y), (10.0, 20.0));
//! ```

use uuid::Uuid;

use crate::catalog::{ElementKind, Shape};
use crate::element::{FloorPlanElement, PropertyPatch};
use crate::plan::{FloorPlan, MIN_VENUE_FT};

/// Create a new element of the given kind at the given center position.
///
/// The position is taken exactly as given: snapping applies to subsequent
/// moves only, and no venue bounds check happens here: callers validate
/// the click coordinate before asking for an element.
pub fn create_element(kind: ElementKind, x: f64, y: f64) -> FloorPlanElement {
    FloorPlanElement {
        id: Uuid::new_v4(),
        kind,
        x,
        y,
        rotation: 0,
        properties: kind.default_properties(),
    }
}

/// Add a freshly created element to the plan.
///
/// Returns the new snapshot and the id assigned to the element.
pub fn add_element(plan: &FloorPlan, kind: ElementKind, x: f64, y: f64) -> (FloorPlan, Uuid) {
    let element = create_element(kind, x, y);
    let id = element.id;
    let mut next = plan.clone();
    next.elements.push(element);
    next.touch();
    (next, id)
}

/// Move an element to a new center position.
///
/// With `snap_to_grid` on, each coordinate is independently rounded to the
/// nearest multiple of the grid size (half rounds up); otherwise the raw
/// coordinate is used verbatim. An unknown id leaves the plan unchanged.
pub fn move_element(plan: &FloorPlan, id: Uuid, x: f64, y: f64) -> FloorPlan {
    let mut next = plan.clone();
    let (x, y) = if next.settings.snap_to_grid {
        let grid = next.settings.grid_size_ft;
        (snap(x, grid), snap(y, grid))
    } else {
        (x, y)
    };
    if let Some(el) = next.element_mut(id) {
        el.x = x;
        el.y = y;
        next.touch();
    }
    next
}

/// Apply a property patch to an element.
///
/// Fields marked `Keep` stay as they are; `Clear` reverts the field to the
/// catalog default. An unknown id leaves the plan unchanged.
pub fn update_element_properties(plan: &FloorPlan, id: Uuid, patch: PropertyPatch) -> FloorPlan {
    let mut next = plan.clone();
    if let Some(el) = next.element_mut(id) {
        patch.apply(&mut el.properties);
        next.touch();
    }
    next
}

/// Set an element's rotation, normalized to 0-359 degrees.
///
/// Rotation only applies to rectangular kinds; a circular element's
/// rotation stays at 0. An unknown id leaves the plan unchanged.
pub fn set_rotation(plan: &FloorPlan, id: Uuid, degrees: i32) -> FloorPlan {
    let mut next = plan.clone();
    if let Some(el) = next.element_mut(id) {
        if el.kind.spec().shape == Shape::Rectangle {
            el.rotation = degrees.rem_euclid(360) as u16;
            next.touch();
        }
    }
    next
}

/// Remove an element. An absent id leaves the plan unchanged.
pub fn remove_element(plan: &FloorPlan, id: Uuid) -> FloorPlan {
    let mut next = plan.clone();
    let before = next.elements.len();
    next.elements.retain(|el| el.id != id);
    if next.elements.len() != before {
        next.touch();
    }
    next
}

/// Resize the venue, clamping each axis to the 20 ft minimum.
///
/// Existing elements are not reflowed or bounds-checked; an element may end
/// up outside the new rectangle.
pub fn resize_venue(plan: &FloorPlan, width_ft: f64, length_ft: f64) -> FloorPlan {
    let mut next = plan.clone();
    next.venue.width_ft = width_ft.max(MIN_VENUE_FT);
    next.venue.length_ft = length_ft.max(MIN_VENUE_FT);
    next.touch();
    next
}

/// Round a coordinate to the nearest grid multiple, half away from zero.
fn snap(value: f64, grid_size_ft: f64) -> f64 {
    if grid_size_ft <= 0.0 {
        return value;
    }
    (value / grid_size_ft).round() * grid_size_ft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Patch;

    fn plan_with_table() -> (FloorPlan, Uuid) {
        add_element(&FloorPlan::new("Test"), ElementKind::TableRound60, 10.0, 10.0)
    }

    #[test]
    fn test_create_element_uses_catalog_defaults() {
        let el = create_element(ElementKind::TableBanquet8, 7.3, 9.9);
        assert_eq!(el.kind, ElementKind::TableBanquet8);
        // no snapping at creation
        assert_eq!((el.x, el.y), (7.3, 9.9));
        assert_eq!(el.rotation, 0);
        assert_eq!(el.properties.seats, Some(8));
        assert_eq!(el.properties.label.as_deref(), Some("Banquet 8"));
    }

    #[test]
    fn test_add_element_assigns_unique_ids() {
        let plan = FloorPlan::new("Test");
        let (plan, a) = add_element(&plan, ElementKind::Bar, 0.0, 0.0);
        let (plan, b) = add_element(&plan, ElementKind::Bar, 5.0, 5.0);
        assert_ne!(a, b);
        assert_eq!(plan.element_count(), 2);
    }

    #[test]
    fn test_move_snaps_to_grid() {
        let (plan, id) = plan_with_table();
        assert!(plan.settings.snap_to_grid);
        assert_eq!(plan.settings.grid_size_ft, 5.0);

        let plan = move_element(&plan, id, 12.0, 18.0);
        let el = plan.element(id).unwrap();
        assert_eq!((el.x, el.y), (10.0, 20.0));

        // half rounds up
        let plan = move_element(&plan, id, 12.5, 17.5);
        let el = plan.element(id).unwrap();
        assert_eq!((el.x, el.y), (15.0, 20.0));
    }

    #[test]
    fn test_move_without_snapping_is_verbatim() {
        let (mut plan, id) = plan_with_table();
        plan.settings.snap_to_grid = false;

        let plan = move_element(&plan, id, 12.3, 18.7);
        let el = plan.element(id).unwrap();
        assert_eq!((el.x, el.y), (12.3, 18.7));
    }

    #[test]
    fn test_move_unknown_id_is_a_noop() {
        let (plan, _) = plan_with_table();
        let moved = move_element(&plan, Uuid::new_v4(), 0.0, 0.0);
        assert_eq!(moved, plan);
    }

    #[test]
    fn test_update_properties_merges_shallowly() {
        let (plan, id) = plan_with_table();
        let plan = update_element_properties(
            &plan,
            id,
            PropertyPatch {
                seats: Patch::Set(8),
                ..PropertyPatch::default()
            },
        );
        let el = plan.element(id).unwrap();
        assert_eq!(el.properties.seats, Some(8));
        // untouched fields keep their seeded values
        assert_eq!(el.properties.label.as_deref(), Some("Round 60"));
    }

    #[test]
    fn test_clearing_label_reverts_to_spec_default() {
        let (plan, id) = plan_with_table();
        let plan = update_element_properties(
            &plan,
            id,
            PropertyPatch {
                label: Patch::Set("Head Table".to_string()),
                ..PropertyPatch::default()
            },
        );
        assert_eq!(plan.element(id).unwrap().effective_label(), "Head Table");

        let plan = update_element_properties(
            &plan,
            id,
            PropertyPatch {
                label: Patch::Clear,
                ..PropertyPatch::default()
            },
        );
        let el = plan.element(id).unwrap();
        assert_eq!(el.properties.label, None);
        assert_eq!(el.effective_label(), "Round 60");
    }

    #[test]
    fn test_rotation_normalizes() {
        let (plan, id) =
            add_element(&FloorPlan::new("Test"), ElementKind::TableBanquet8, 10.0, 10.0);
        let plan = set_rotation(&plan, id, 450);
        assert_eq!(plan.element(id).unwrap().rotation, 90);
        let plan = set_rotation(&plan, id, -90);
        assert_eq!(plan.element(id).unwrap().rotation, 270);
    }

    #[test]
    fn test_rotation_is_ignored_for_circular_kinds() {
        let (plan, id) = plan_with_table();
        let rotated = set_rotation(&plan, id, 45);
        assert_eq!(rotated.element(id).unwrap().rotation, 0);
        // nothing changed, so the snapshot is identical
        assert_eq!(rotated, plan);
    }

    #[test]
    fn test_remove_element() {
        let (plan, id) = plan_with_table();
        let plan = remove_element(&plan, id);
        assert_eq!(plan.element_count(), 0);
    }

    #[test]
    fn test_remove_absent_id_is_a_noop() {
        let empty = FloorPlan::new("Empty");
        let after = remove_element(&empty, Uuid::new_v4());
        assert_eq!(after, empty);

        let (plan, _) = plan_with_table();
        let after = remove_element(&plan, Uuid::new_v4());
        assert_eq!(after, plan);
    }

    #[test]
    fn test_resize_venue_clamps_to_minimum() {
        let plan = FloorPlan::new("Test");
        let plan = resize_venue(&plan, 100.0, 120.0);
        assert_eq!(plan.venue.width_ft, 100.0);
        assert_eq!(plan.venue.length_ft, 120.0);

        let plan = resize_venue(&plan, 5.0, 400.0);
        assert_eq!(plan.venue.width_ft, 20.0);
        assert_eq!(plan.venue.length_ft, 400.0);
    }

    #[test]
    fn test_resize_venue_leaves_elements_alone() {
        let (plan, id) = plan_with_table();
        let plan = move_element(&plan, id, 55.0, 75.0);
        let plan = resize_venue(&plan, 20.0, 20.0);
        // the element is now outside the venue, and that is allowed
        let el = plan.element(id).unwrap();
        assert_eq!((el.x, el.y), (55.0, 75.0));
    }

    #[test]
    fn test_snap_rounding() {
        assert_eq!(snap(12.0, 5.0), 10.0);
        assert_eq!(snap(18.0, 5.0), 20.0);
        assert_eq!(snap(12.5, 5.0), 15.0);
        assert_eq!(snap(0.4, 1.0), 0.0);
        assert_eq!(snap(7.0, 0.0), 7.0);
    }
}
