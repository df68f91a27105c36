//! # Floor Plan Data Structures
//!
//! The `FloorPlan` struct is the aggregate root and the sole unit of
//! persistence: a venue rectangle, the placed elements, and the editor
//! settings. Plans serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! FloorPlan
//! ├── id / name / created_at / updated_at
//! ├── venue: Venue (extents in feet, static features)
//! ├── elements: Vec<FloorPlanElement> (insertion order = display order)
//! └── settings: FloorPlanSettings (grid size, snapping)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use plan_core::plan::FloorPlan;
//!
//! let plan = FloorPlan::new("Smith Wedding");
//! assert_eq!(plan.venue.width_ft, 60.0);
//! assert_eq!(plan.venue.length_ft, 80.0);
//!
//! let json = serde_json::to_string_pretty(&plan).unwrap();
//! # let _ = json;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::FloorPlanElement;

/// Current schema version for persisted plans
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Default venue extents for a fresh plan, in feet
pub const DEFAULT_VENUE_WIDTH_FT: f64 = 60.0;
pub const DEFAULT_VENUE_LENGTH_FT: f64 = 80.0;

/// Smallest allowed venue extent per axis, in feet
pub const MIN_VENUE_FT: f64 = 20.0;

/// Aggregate root for one event floor plan.
///
/// Elements are stored in insertion order; that order is display layering
/// only and carries no other meaning. Element ids are unique within the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Plan identifier
    pub id: Uuid,

    /// Schema version (for migration compatibility)
    pub version: String,

    /// User-facing plan name
    pub name: String,

    /// When the plan was created
    pub created_at: DateTime<Utc>,

    /// When the plan was last modified
    pub updated_at: DateTime<Utc>,

    /// The room/tent being laid out
    pub venue: Venue,

    /// All placed elements, in display order
    pub elements: Vec<FloorPlanElement>,

    /// Editor settings (grid, snapping)
    pub settings: FloorPlanSettings,
}

impl FloorPlan {
    /// Create a new empty plan with the default 60x80 ft venue.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        FloorPlan {
            id: Uuid::new_v4(),
            version: SCHEMA_VERSION.to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            venue: Venue::default(),
            elements: Vec::new(),
            settings: FloorPlanSettings::default(),
        }
    }

    /// Get an element by id.
    pub fn element(&self, id: Uuid) -> Option<&FloorPlanElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Get a mutable element by id. Does not touch the modified timestamp;
    /// callers that actually change something call [`FloorPlan::touch`].
    pub fn element_mut(&mut self, id: Uuid) -> Option<&mut FloorPlanElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        FloorPlan::new("Untitled Plan")
    }
}

/// The bounded rectangle being laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Width in feet (x axis)
    pub width_ft: f64,

    /// Length in feet (y axis)
    pub length_ft: f64,

    /// Fixed features of the room (doors, pillars). Informational only:
    /// nothing validates element placement against them.
    #[serde(default)]
    pub features: Vec<VenueFeature>,
}

impl Default for Venue {
    fn default() -> Self {
        Venue {
            width_ft: DEFAULT_VENUE_WIDTH_FT,
            length_ft: DEFAULT_VENUE_LENGTH_FT,
            features: Vec::new(),
        }
    }
}

/// A fixed feature of the venue itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueFeature {
    pub kind: VenueFeatureKind,
    /// Optional label (e.g. "Main entrance")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Position in feet, venue-relative
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueFeatureKind {
    Entry,
    Exit,
    Pillar,
}

/// Editor settings stored with the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlanSettings {
    /// Grid cell pitch in feet, used for snapping
    pub grid_size_ft: f64,

    /// Snap moved elements to the grid
    pub snap_to_grid: bool,

    /// Draw the grid (display-only; never affects placement)
    pub show_grid: bool,
}

impl Default for FloorPlanSettings {
    fn default() -> Self {
        FloorPlanSettings {
            grid_size_ft: 5.0,
            snap_to_grid: true,
            show_grid: true,
        }
    }
}
