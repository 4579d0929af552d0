//! Disk, planet and moon tables, plus orbit-slot distances

use once_cell::sync::Lazy;

use super::RollTable;
use crate::entities::{BeltDensity, DiskType, GiantSize, MoonType, PlanetType};
use crate::value_objects::Zone;

/// Earth masses per pip of the disk mass roll.
pub const DISK_MASS_PER_PIP: f64 = 0.1;
/// Accretion disks hold half the material of a protoplanetary disk.
pub const ACCRETION_MASS_FACTOR: f64 = 0.5;
/// AU per pip of the belt width roll.
pub const BELT_WIDTH_PER_PIP_AU: f64 = 0.1;
/// Kilometres per pip of the moon size roll.
pub const MOON_SIZE_PER_PIP_KM: f64 = 250.0;

/// Distance of an orbit slot around a star of the given luminosity, in AU.
///
/// Titius-Bode spacing: slot 1 at 0.4 AU, then 0.4 + 0.3 * 2^(n-2), all
/// scaled by the square root of luminosity. Slots are numbered from 1, so
/// slot 0 has no distance.
pub fn orbit_distance_au(slot: u8, luminosity: f64) -> Option<f64> {
    let base = match slot {
        0 => return None,
        1 => 0.4,
        n => 0.4 + 0.3 * 2f64.powi(i32::from(n) - 2),
    };
    Some(base * luminosity.max(0.0).sqrt())
}

/// 1D6 to number of disks.
pub static DISK_COUNT_TABLE: Lazy<RollTable<usize>> =
    Lazy::new(|| RollTable::new("disk_count", vec![(1, 3, 1), (4, 6, 2)]));

pub static DISK_ZONE_TABLE: Lazy<RollTable<Zone>> = Lazy::new(|| {
    RollTable::new(
        "disk_zone",
        vec![
            (2, 3, Zone::Hot),
            (4, 9, Zone::Habitable),
            (10, 11, Zone::Cold),
            (12, 12, Zone::Outer),
        ],
    )
});

pub static DISK_TYPE_TABLE: Lazy<RollTable<DiskType>> = Lazy::new(|| {
    RollTable::new(
        "disk_type",
        vec![(2, 8, DiskType::Protoplanetary), (9, 12, DiskType::Accretion)],
    )
});

pub static PLANET_TYPE_TABLE: Lazy<RollTable<PlanetType>> = Lazy::new(|| {
    RollTable::new(
        "planet_type",
        vec![
            (2, 3, PlanetType::Belt),
            (4, 9, PlanetType::GasGiant),
            (10, 12, PlanetType::IceGiant),
        ],
    )
});

/// Size class of a giant with its diameter and mass scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GiantClass {
    pub size: GiantSize,
    /// Earth diameters
    pub diameter: f64,
    /// Earth masses per pip of the 2D6 mass roll
    pub mass_per_pip: f64,
}

const fn giant(size: GiantSize, diameter: f64, mass_per_pip: f64) -> GiantClass {
    GiantClass {
        size,
        diameter,
        mass_per_pip,
    }
}

pub static GAS_GIANT_SIZE_TABLE: Lazy<RollTable<GiantClass>> = Lazy::new(|| {
    RollTable::new(
        "gas_giant_size",
        vec![
            (2, 4, giant(GiantSize::Small, 6.0, 10.0)),
            (5, 9, giant(GiantSize::Standard, 9.0, 15.0)),
            (10, 12, giant(GiantSize::Large, 12.0, 30.0)),
        ],
    )
});

pub static ICE_GIANT_SIZE_TABLE: Lazy<RollTable<GiantClass>> = Lazy::new(|| {
    RollTable::new(
        "ice_giant_size",
        vec![
            (2, 6, giant(GiantSize::Small, 3.5, 2.0)),
            (7, 12, giant(GiantSize::Standard, 4.0, 3.0)),
        ],
    )
});

pub static BELT_DENSITY_TABLE: Lazy<RollTable<BeltDensity>> = Lazy::new(|| {
    RollTable::new(
        "belt_density",
        vec![
            (2, 5, BeltDensity::Sparse),
            (6, 9, BeltDensity::Moderate),
            (10, 12, BeltDensity::Dense),
        ],
    )
});

pub static MOON_TYPE_TABLE: Lazy<RollTable<MoonType>> = Lazy::new(|| {
    RollTable::new(
        "moon_type",
        vec![
            (2, 5, MoonType::Captured),
            (6, 9, MoonType::Rocky),
            (10, 12, MoonType::Icy),
        ],
    )
});

/// Moons for a planet type from a 1D6 draw: gas giants keep the draw, ice
/// giants halve it rounding up, belts have none.
pub fn moon_count(planet_type: PlanetType, d6: i32) -> u8 {
    let d6 = d6.clamp(1, 6) as u8;
    match planet_type {
        PlanetType::GasGiant => d6,
        PlanetType::IceGiant => (d6 + 1) / 2,
        PlanetType::Belt => 0,
    }
}
