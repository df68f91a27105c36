//! # Element Catalog
//!
//! Static registry of every placeable element kind with its physical
//! footprint, shape, and seating capacity. The catalog is the single source
//! of truth for element geometry: placed elements only carry overrides.
//!
//! The kind set is closed at build time. Adding a new element kind means
//! adding a variant here and a row in [`ElementKind::spec`]; there is no
//! run-time registration.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::catalog::{ElementKind, Shape};
//!
//! let spec = ElementKind::TableRound60.spec();
//! assert_eq!(spec.width_ft, 5.0);
//! assert_eq!(spec.default_seats, Some(6));
//! assert_eq!(spec.shape, Shape::Circle);
//!
//! // Non-seatable kinds have no capacity at all
//! assert_eq!(ElementKind::DanceFloor.spec().default_seats, None);
//! ```

use serde::{Deserialize, Serialize};

use crate::element::ElementProperties;

/// Footprint shape of an element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Circle,
    Rectangle,
}

/// Every placeable element kind.
///
/// Serializes to snake_case kind identifiers (e.g. `"table_round_60"`) so
/// persisted plans stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// 60" round table
    #[serde(rename = "table_round_60")]
    TableRound60,
    /// 72" round table
    #[serde(rename = "table_round_72")]
    TableRound72,
    /// 6 ft banquet table
    #[serde(rename = "table_banquet_6")]
    TableBanquet6,
    /// 8 ft banquet table
    #[serde(rename = "table_banquet_8")]
    TableBanquet8,
    /// Standing cocktail table (no seating)
    TableCocktail,
    DanceFloor,
    Bar,
    Stage,
    BuffetTable,
    DjBooth,
}

/// Static specification for one element kind.
///
/// One spec per kind, immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    /// Full display label (e.g. "60\" Round Table")
    pub label: &'static str,
    /// Short label used on the canvas and as the default element label
    pub short_label: &'static str,
    /// Footprint width in feet
    pub width_ft: f64,
    /// Footprint length in feet
    pub length_ft: f64,
    /// Default seat count; `None` for kinds with no seating concept
    pub default_seats: Option<u32>,
    /// Footprint shape
    pub shape: Shape,
    /// Glyph shown in the element palette
    pub icon: &'static str,
}

impl ElementKind {
    /// All kinds, in palette display order (tables first).
    pub const ALL: [ElementKind; 10] = [
        ElementKind::TableRound60,
        ElementKind::TableRound72,
        ElementKind::TableBanquet6,
        ElementKind::TableBanquet8,
        ElementKind::TableCocktail,
        ElementKind::DanceFloor,
        ElementKind::Bar,
        ElementKind::Stage,
        ElementKind::BuffetTable,
        ElementKind::DjBooth,
    ];

    /// Get the static spec for this kind.
    ///
    /// Total over the kind set: every variant has exactly one row.
    pub fn spec(&self) -> ElementSpec {
        match self {
            ElementKind::TableRound60 => ElementSpec {
                label: "60\" Round Table",
                short_label: "Round 60",
                width_ft: 5.0,
                length_ft: 5.0,
                default_seats: Some(6),
                shape: Shape::Circle,
                icon: "◯",
            },
            ElementKind::TableRound72 => ElementSpec {
                label: "72\" Round Table",
                short_label: "Round 72",
                width_ft: 6.0,
                length_ft: 6.0,
                default_seats: Some(10),
                shape: Shape::Circle,
                icon: "◯",
            },
            ElementKind::TableBanquet6 => ElementSpec {
                label: "6' Banquet Table",
                short_label: "Banquet 6",
                width_ft: 6.0,
                length_ft: 2.5,
                default_seats: Some(6),
                shape: Shape::Rectangle,
                icon: "▭",
            },
            ElementKind::TableBanquet8 => ElementSpec {
                label: "8' Banquet Table",
                short_label: "Banquet 8",
                width_ft: 8.0,
                length_ft: 2.5,
                default_seats: Some(8),
                shape: Shape::Rectangle,
                icon: "▭",
            },
            ElementKind::TableCocktail => ElementSpec {
                label: "Cocktail Table",
                short_label: "Cocktail",
                width_ft: 2.5,
                length_ft: 2.5,
                default_seats: None,
                shape: Shape::Circle,
                icon: "○",
            },
            ElementKind::DanceFloor => ElementSpec {
                label: "Dance Floor",
                short_label: "Dance Floor",
                width_ft: 12.0,
                length_ft: 12.0,
                default_seats: None,
                shape: Shape::Rectangle,
                icon: "▦",
            },
            ElementKind::Bar => ElementSpec {
                label: "Bar",
                short_label: "Bar",
                width_ft: 8.0,
                length_ft: 3.0,
                default_seats: None,
                shape: Shape::Rectangle,
                icon: "▬",
            },
            ElementKind::Stage => ElementSpec {
                label: "Stage",
                short_label: "Stage",
                width_ft: 16.0,
                length_ft: 12.0,
                default_seats: None,
                shape: Shape::Rectangle,
                icon: "▣",
            },
            ElementKind::BuffetTable => ElementSpec {
                label: "Buffet Table",
                short_label: "Buffet",
                width_ft: 8.0,
                length_ft: 2.5,
                default_seats: None,
                shape: Shape::Rectangle,
                icon: "▭",
            },
            ElementKind::DjBooth => ElementSpec {
                label: "DJ Booth",
                short_label: "DJ",
                width_ft: 6.0,
                length_ft: 4.0,
                default_seats: None,
                shape: Shape::Rectangle,
                icon: "♪",
            },
        }
    }

    /// Default property bag for a freshly placed element of this kind.
    ///
    /// Seeded from the spec: label starts at the short label, footprint at
    /// the spec footprint, seats at the spec default for seatable kinds.
    pub fn default_properties(&self) -> ElementProperties {
        let spec = self.spec();
        ElementProperties {
            label: Some(spec.short_label.to_string()),
            seats: spec.default_seats,
            width_ft: Some(spec.width_ft),
            length_ft: Some(spec.length_ft),
            color: None,
        }
    }

    /// True when this kind has a seating concept.
    pub fn is_seatable(&self) -> bool {
        self.spec().default_seats.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_spec() {
        for kind in ElementKind::ALL {
            let spec = kind.spec();
            assert!(spec.width_ft > 0.0, "{:?} has no width", kind);
            assert!(spec.length_ft > 0.0, "{:?} has no length", kind);
            assert!(!spec.label.is_empty());
            assert!(!spec.short_label.is_empty());
        }
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&ElementKind::TableRound60).unwrap();
        assert_eq!(json, "\"table_round_60\"");

        let json = serde_json::to_string(&ElementKind::DanceFloor).unwrap();
        assert_eq!(json, "\"dance_floor\"");

        let roundtrip: ElementKind = serde_json::from_str("\"table_banquet_8\"").unwrap();
        assert_eq!(roundtrip, ElementKind::TableBanquet8);
    }

    #[test]
    fn test_default_properties_seed_from_spec() {
        let props = ElementKind::TableRound60.default_properties();
        assert_eq!(props.label.as_deref(), Some("Round 60"));
        assert_eq!(props.seats, Some(6));
        assert_eq!(props.width_ft, Some(5.0));
        assert_eq!(props.length_ft, Some(5.0));

        let props = ElementKind::Stage.default_properties();
        assert_eq!(props.seats, None);
    }

    #[test]
    fn test_seatable_kinds() {
        assert!(ElementKind::TableRound60.is_seatable());
        assert!(ElementKind::TableBanquet8.is_seatable());
        assert!(!ElementKind::DanceFloor.is_seatable());
        assert!(!ElementKind::TableCocktail.is_seatable());
        assert!(!ElementKind::Bar.is_seatable());
    }
}
