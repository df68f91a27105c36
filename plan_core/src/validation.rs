//! # Validation Engine
//!
//! Advisory checks over a floor plan snapshot. Validation is a pure, total
//! function: it never fails, never mutates, and recomputes everything on
//! each call (element counts stay small enough that the O(n²) pair scan is
//! not worth caching).
//!
//! Two rules run today, in this order:
//!
//! 1. **Over-seating**: an element's seat count exceeds its catalog
//!    capacity. Kinds without a seating concept are skipped.
//! 2. **Spacing**: two elements whose bounding boxes clear each other by
//!    less than 3 ft. Clearance is axis-aligned and ignores rotation;
//!    boxes that touch or overlap (gap clamped to 0) produce no warning.
//!    Both are documented behavior, carried over from the original tool.
//!
//! Warnings are ephemeral: recomputed on demand, never persisted, never
//! blocking. Warning order is deterministic: all over-seating warnings in
//! element order, then spacing warnings in pair order `(i, j)` with `i < j`.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::catalog::ElementKind;
//! use plan_core::plan::FloorPlan;
//! use plan_core::{placement, validation};
//!
//! let plan = FloorPlan::new("Reception");
//! let warnings = validation::validate(&plan);
//! assert!(warnings.is_empty());
//!
//! // Two banquet tables 1 ft apart trip the spacing rule
//! let (plan, _) = placement::add_element(&plan, ElementKind::TableBanquet6, 10.0, 10.0);
//! let (plan, _) = placement::add_element(&plan, ElementKind::TableBanquet6, 17.0, 10.0);
//! assert_eq!(validation::validate(&plan).len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::FloorPlanElement;
use crate::plan::FloorPlan;

/// Minimum clearance between elements before a spacing warning, in feet.
pub const SPACING_THRESHOLD_FT: f64 = 3.0;

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// An element seats more guests than its catalog capacity
    OverSeated,
    /// Two elements are closer than the spacing threshold
    Spacing,
    /// Guest-flow problems. Reserved: no rule emits this yet.
    Flow,
}

/// One advisory finding about a floor plan.
///
/// Warnings are derived data: recompute them from the plan, never store
/// them with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub kind: WarningKind,

    /// The offending element, when the warning concerns one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<Uuid>,

    /// The second element of a pair finding (spacing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_element_id: Option<Uuid>,

    /// Human-readable description for display
    pub message: String,
}

/// Run all checks against a plan snapshot.
///
/// Pure and deterministic: the same snapshot always yields the same
/// warning sequence. An empty plan yields an empty sequence.
pub fn validate(plan: &FloorPlan) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    check_over_seating(plan, &mut warnings);
    check_spacing(plan, &mut warnings);
    warnings
}

/// Flag elements whose effective seat count exceeds the catalog capacity.
///
/// Equality is fine; only strictly-over counts warn. Kinds with no seating
/// concept have no capacity to violate and are skipped outright.
fn check_over_seating(plan: &FloorPlan, warnings: &mut Vec<ValidationWarning>) {
    for el in &plan.elements {
        let Some(max_seats) = el.kind.spec().default_seats else {
            continue;
        };
        let seats = el.effective_seats().unwrap_or(max_seats);
        if seats > max_seats {
            warnings.push(ValidationWarning {
                kind: WarningKind::OverSeated,
                element_id: Some(el.id),
                other_element_id: None,
                message: format!(
                    "{} is set for {} seats but holds at most {}",
                    el.effective_label(),
                    seats,
                    max_seats
                ),
            });
        }
    }
}

/// Flag pairs whose bounding boxes clear each other by less than the
/// spacing threshold.
///
/// Pairs are scanned in `(i, j)` order with `i < j` so output order is
/// stable for a given plan.
fn check_spacing(plan: &FloorPlan, warnings: &mut Vec<ValidationWarning>) {
    for (i, a) in plan.elements.iter().enumerate() {
        for b in plan.elements.iter().skip(i + 1) {
            let gap = clearance_ft(a, b);
            if gap > 0.0 && gap < SPACING_THRESHOLD_FT {
                warnings.push(ValidationWarning {
                    kind: WarningKind::Spacing,
                    element_id: Some(a.id),
                    other_element_id: Some(b.id),
                    message: format!(
                        "{} and {} are only {:.1} ft apart (recommended: {} ft)",
                        a.effective_label(),
                        b.effective_label(),
                        gap,
                        SPACING_THRESHOLD_FT
                    ),
                });
            }
        }
    }
}

/// Axis-aligned clearance between two elements' bounding boxes, in feet.
///
/// Uses effective (override-aware) footprints and center distances per
/// axis; rotation is ignored. Touching or overlapping boxes clamp to 0.
fn clearance_ft(a: &FloorPlanElement, b: &FloorPlanElement) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let x_gap = dx - (a.effective_width_ft() + b.effective_width_ft()) / 2.0;
    let y_gap = dy - (a.effective_length_ft() + b.effective_length_ft()) / 2.0;
    x_gap.max(y_gap).max(0.0)
}
