//! Environment tables for habitability

use once_cell::sync::Lazy;

use super::RollTable;
use crate::entities::{Atmosphere, Hazard, HazardIntensity, Resources, Temperature};

pub static ATMOSPHERE_TABLE: Lazy<RollTable<Atmosphere>> = Lazy::new(|| {
    RollTable::new(
        "atmosphere",
        vec![
            (2, 2, Atmosphere::Vacuum),
            (3, 3, Atmosphere::Trace),
            (4, 5, Atmosphere::Thin),
            (6, 8, Atmosphere::Standard),
            (9, 10, Atmosphere::Dense),
            (11, 11, Atmosphere::VeryDense),
            (12, 12, Atmosphere::Crushing),
        ],
    )
});

pub static TEMPERATURE_TABLE: Lazy<RollTable<Temperature>> = Lazy::new(|| {
    RollTable::new(
        "temperature",
        vec![
            (2, 2, Temperature::Frozen),
            (3, 4, Temperature::Cold),
            (5, 9, Temperature::Temperate),
            (10, 11, Temperature::Hot),
            (12, 12, Temperature::Scorching),
        ],
    )
});

pub static HAZARD_TABLE: Lazy<RollTable<Hazard>> = Lazy::new(|| {
    RollTable::new(
        "hazard",
        vec![
            (2, 6, Hazard::None),
            (7, 8, Hazard::Seismic),
            (9, 9, Hazard::Storms),
            (10, 10, Hazard::Toxic),
            (11, 11, Hazard::Radiation),
            (12, 12, Hazard::Biological),
        ],
    )
});

pub static HAZARD_INTENSITY_TABLE: Lazy<RollTable<HazardIntensity>> = Lazy::new(|| {
    RollTable::new(
        "hazard_intensity",
        vec![
            (2, 5, HazardIntensity::Minor),
            (6, 8, HazardIntensity::Moderate),
            (9, 10, HazardIntensity::Serious),
            (11, 12, HazardIntensity::Extreme),
        ],
    )
});

pub static RESOURCE_TABLE: Lazy<RollTable<Resources>> = Lazy::new(|| {
    RollTable::new(
        "resources",
        vec![
            (2, 2, Resources::Absent),
            (3, 4, Resources::Scarce),
            (5, 8, Resources::Moderate),
            (9, 10, Resources::Abundant),
            (11, 12, Resources::Bountiful),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hazards_from_seven_up() {
        for roll in 2..=6 {
            assert!(!HAZARD_TABLE.lookup(roll).is_present());
        }
        for roll in 7..=12 {
            assert!(HAZARD_TABLE.lookup(roll).is_present());
        }
    }

    #[test]
    fn middle_rolls_favour_living_conditions() {
        assert_eq!(*ATMOSPHERE_TABLE.lookup(7), Atmosphere::Standard);
        assert_eq!(*TEMPERATURE_TABLE.lookup(7), Temperature::Temperate);
        assert_eq!(*RESOURCE_TABLE.lookup(7), Resources::Moderate);
    }

    #[test]
    fn intensity_worsens_with_the_roll() {
        let mods: Vec<i32> = (2..=12).map(|r| HAZARD_INTENSITY_TABLE.lookup(r).modifier()).collect();
        assert!(mods.windows(2).all(|w| w[0] >= w[1]));
    }
}
