//! World type, size, gravity and composition tables

use once_cell::sync::Lazy;

use super::RollTable;
use crate::entities::{Composition, WorldType};

/// A size row: label and diameter in km
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeEntry {
    pub label: &'static str,
    pub diameter_km: f64,
}

const fn size(label: &'static str, diameter_km: f64) -> SizeEntry {
    SizeEntry { label, diameter_km }
}

pub static WORLD_TYPE_TABLE: Lazy<RollTable<WorldType>> = Lazy::new(|| {
    RollTable::new(
        "world_type",
        vec![
            (2, 3, WorldType::Habitat),
            (4, 9, WorldType::Terrestrial),
            (10, 12, WorldType::Dwarf),
        ],
    )
});

pub static HABITAT_SIZE_TABLE: Lazy<RollTable<SizeEntry>> = Lazy::new(|| {
    RollTable::new(
        "habitat_size",
        vec![
            (2, 3, size("Outpost", 0.5)),
            (4, 6, size("Small station", 2.0)),
            (7, 9, size("Station", 5.0)),
            (10, 11, size("Large station", 12.0)),
            (12, 12, size("Megastructure", 50.0)),
        ],
    )
});

pub static TERRESTRIAL_SIZE_TABLE: Lazy<RollTable<SizeEntry>> = Lazy::new(|| {
    RollTable::new(
        "terrestrial_size",
        vec![
            (2, 2, size("Tiny", 3_000.0)),
            (3, 4, size("Small", 5_000.0)),
            (5, 6, size("Medium", 8_000.0)),
            (7, 8, size("Standard", 11_000.0)),
            (9, 10, size("Large", 13_000.0)),
            (11, 11, size("Huge", 16_000.0)),
            (12, 12, size("Super-terran", 19_000.0)),
        ],
    )
});

/// Surface gravity in g.
pub static TERRESTRIAL_GRAVITY_TABLE: Lazy<RollTable<f64>> = Lazy::new(|| {
    RollTable::new(
        "terrestrial_gravity",
        vec![
            (2, 2, 0.3),
            (3, 3, 0.5),
            (4, 5, 0.7),
            (6, 8, 1.0),
            (9, 10, 1.25),
            (11, 11, 1.5),
            (12, 12, 2.0),
        ],
    )
});

pub static DWARF_SIZE_TABLE: Lazy<RollTable<SizeEntry>> = Lazy::new(|| {
    RollTable::new(
        "dwarf_size",
        vec![
            (2, 3, size("Tiny", 400.0)),
            (4, 6, size("Small", 800.0)),
            (7, 9, size("Medium", 1_500.0)),
            (10, 11, size("Large", 2_200.0)),
            (12, 12, size("Huge", 3_000.0)),
        ],
    )
});

pub static DWARF_GRAVITY_TABLE: Lazy<RollTable<f64>> = Lazy::new(|| {
    RollTable::new(
        "dwarf_gravity",
        vec![(2, 4, 0.02), (5, 7, 0.05), (8, 10, 0.1), (11, 12, 0.16)],
    )
});

pub static DWARF_COMPOSITION_TABLE: Lazy<RollTable<Composition>> = Lazy::new(|| {
    RollTable::new(
        "dwarf_composition",
        vec![
            (2, 5, Composition::Carbonaceous),
            (6, 8, Composition::Silicaceous),
            (9, 11, Composition::Metallic),
            (12, 12, Composition::Other),
        ],
    )
});
