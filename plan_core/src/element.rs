//! # Placed Elements
//!
//! A [`FloorPlanElement`] is one item placed in a venue: a kind from the
//! catalog, a center position in feet, a rotation, and a property bag that
//! overrides the catalog spec per instance.
//!
//! The property bag is a single struct with nullable fields rather than a
//! free-form map: a field is either overridden (`Some`) or the catalog spec
//! applies (`None`). The `effective_*` accessors resolve that fallback.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ElementKind;

/// One placed element within a floor plan.
///
/// Owned exclusively by its [`FloorPlan`](crate::plan::FloorPlan); elements
/// hold no references to each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlanElement {
    /// Unique within the process (v4 UUID)
    pub id: Uuid,

    /// Catalog kind this element instantiates
    pub kind: ElementKind,

    /// Center X in feet, venue-relative
    pub x: f64,

    /// Center Y in feet, venue-relative
    pub y: f64,

    /// Rotation in whole degrees, 0-359. Meaningful for rectangular kinds
    /// only; circular kinds keep it at 0.
    pub rotation: u16,

    /// Per-instance overrides of the catalog spec
    pub properties: ElementProperties,
}

impl FloorPlanElement {
    /// Display label: the property override, else the spec short label.
    pub fn effective_label(&self) -> &str {
        self.properties
            .label
            .as_deref()
            .unwrap_or(self.kind.spec().short_label)
    }

    /// Seat count: the property override, else the spec default.
    ///
    /// `None` for kinds with no seating concept and no override.
    pub fn effective_seats(&self) -> Option<u32> {
        self.properties.seats.or(self.kind.spec().default_seats)
    }

    /// Footprint width in feet: the property override, else the spec value.
    pub fn effective_width_ft(&self) -> f64 {
        self.properties.width_ft.unwrap_or(self.kind.spec().width_ft)
    }

    /// Footprint length in feet: the property override, else the spec value.
    pub fn effective_length_ft(&self) -> f64 {
        self.properties
            .length_ft
            .unwrap_or(self.kind.spec().length_ft)
    }
}

/// Per-instance property overrides.
///
/// Every field is optional; `None` means "use the catalog spec".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementProperties {
    /// Custom display label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Seat count override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,

    /// Footprint width override in feet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_ft: Option<f64>,

    /// Footprint length override in feet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_ft: Option<f64>,

    /// Display color override (CSS-style string, opaque to the core)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One field of a [`PropertyPatch`].
///
/// Distinguishes "leave the field alone" from "clear the override back to
/// the catalog default": the two cases a bare `Option` cannot separate.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    /// Leave the current value untouched
    #[default]
    Keep,
    /// Set the override to this value
    Set(T),
    /// Clear the override; the catalog spec applies again
    Clear,
}

impl<T> Patch<T> {
    /// Resolve this patch against the current value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Keep => current,
            Patch::Set(value) => Some(value),
            Patch::Clear => None,
        }
    }
}

/// Shallow-merge update for an element's property bag.
///
/// Defaults to all-`Keep`, so callers only name the fields they touch:
///
/// ```rust
/// use plan_core::element::{Patch, PropertyPatch};
///
/// let patch = PropertyPatch {
///     seats: Patch::Set(8),
///     label: Patch::Clear,
///     ..PropertyPatch::default()
/// };
/// # let _ = patch;
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyPatch {
    pub label: Patch<String>,
    pub seats: Patch<u32>,
    pub width_ft: Patch<f64>,
    pub length_ft: Patch<f64>,
    pub color: Patch<String>,
}

impl PropertyPatch {
    /// Apply this patch to a property bag, field by field.
    pub fn apply(self, props: &mut ElementProperties) {
        props.label = self.label.apply(props.label.take());
        props.seats = self.seats.apply(props.seats.take());
        props.width_ft = self.width_ft.apply(props.width_ft.take());
        props.length_ft = self.length_ft.apply(props.length_ft.take());
        props.color = self.color.apply(props.color.take());
    }
}
