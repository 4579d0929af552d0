//! Static lookup tables
//!
//! Tables are data, built once on first use and never mutated. The generators
//! only ever ask a table for the row covering a roll; what the rows contain is
//! kept here, separate from the dice logic, so each table can be checked on
//! its own (full coverage, no overlaps, monotonic where it matters).

mod culture;
mod environment;
mod inhabitants;
mod secondary;
mod star;
mod starport;
mod stellar;
mod world;

pub use culture::{culture_table, CultureEntry};
pub use environment::{
    ATMOSPHERE_TABLE, HAZARD_INTENSITY_TABLE, HAZARD_TABLE, RESOURCE_TABLE, TEMPERATURE_TABLE,
};
pub use inhabitants::{GOVERNANCE_TABLE, POWER_STRUCTURE_TABLE, SOURCE_OF_POWER_TABLE, WEALTH_TABLE};
pub use secondary::{
    moon_count, orbit_distance_au, GiantClass, ACCRETION_MASS_FACTOR, BELT_DENSITY_TABLE,
    BELT_WIDTH_PER_PIP_AU, DISK_COUNT_TABLE, DISK_MASS_PER_PIP, DISK_TYPE_TABLE, DISK_ZONE_TABLE,
    GAS_GIANT_SIZE_TABLE, ICE_GIANT_SIZE_TABLE, MOON_SIZE_PER_PIP_KM, MOON_TYPE_TABLE,
    PLANET_TYPE_TABLE,
};
pub use star::{
    companion_count_modifier, SeparationBand, COMPANION_COUNT_TABLE, MIN_COMPANION_SEPARATION_AU,
    SEPARATION_TABLE, STAR_CLASS_TABLE,
};
pub use starport::{
    base_target, capabilities, starport_class_for_pvs, BASE_TARGETS, STARPORT_CLASS_THRESHOLDS,
};
pub use stellar::{stellar_property, STELLAR_PROPERTIES};
pub use world::{
    SizeEntry, DWARF_COMPOSITION_TABLE, DWARF_GRAVITY_TABLE, DWARF_SIZE_TABLE, HABITAT_SIZE_TABLE,
    TERRESTRIAL_GRAVITY_TABLE, TERRESTRIAL_SIZE_TABLE, WORLD_TYPE_TABLE,
};

/// One band of a roll table: every total in `min..=max` maps to `value`
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<T> {
    pub min: i32,
    pub max: i32,
    pub value: T,
}

/// A contiguous roll table
///
/// Rows are ordered and must tile `[first.min, last.max]` without gaps or
/// overlaps. Modified rolls that fall outside the table take the nearest end
/// row, the way a "2-" or "12+" entry reads on a printed table.
#[derive(Debug, Clone)]
pub struct RollTable<T> {
    name: &'static str,
    rows: Vec<TableRow<T>>,
}

impl<T> RollTable<T> {
    /// Build a table from `(min, max, value)` rows.
    ///
    /// Panics on an empty or non-contiguous table: tables are compile-time
    /// data, and a broken one is a programming error caught by the table tests.
    pub fn new(name: &'static str, rows: Vec<(i32, i32, T)>) -> Self {
        let rows: Vec<TableRow<T>> = rows
            .into_iter()
            .map(|(min, max, value)| TableRow { min, max, value })
            .collect();
        assert!(!rows.is_empty(), "table {} has no rows", name);
        for row in &rows {
            assert!(row.min <= row.max, "table {} has an inverted row", name);
        }
        for pair in rows.windows(2) {
            assert!(
                pair[1].min == pair[0].max + 1,
                "table {} is not contiguous at {}",
                name,
                pair[0].max
            );
        }
        Self { name, rows }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rows(&self) -> &[TableRow<T>] {
        &self.rows
    }

    /// Lowest total the table lists.
    pub fn min_roll(&self) -> i32 {
        self.rows.first().map(|r| r.min).unwrap_or_default()
    }

    /// Highest total the table lists.
    pub fn max_roll(&self) -> i32 {
        self.rows.last().map(|r| r.max).unwrap_or_default()
    }

    /// Row covering `roll`, clamped to the table's ends.
    pub fn row(&self, roll: i32) -> &TableRow<T> {
        let clamped = roll.clamp(self.min_roll(), self.max_roll());
        let index = self
            .rows
            .iter()
            .position(|r| clamped <= r.max)
            .unwrap_or(self.rows.len() - 1);
        &self.rows[index]
    }

    /// Value for `roll`, clamped to the table's ends.
    pub fn lookup(&self, roll: i32) -> &T {
        &self.row(roll).value
    }
}
