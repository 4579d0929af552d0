//! Starport classes, capabilities and base target numbers

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::entities::{BaseType, Capability, StarportClass};

/// Minimum PVS for each class above X, ascending.
pub const STARPORT_CLASS_THRESHOLDS: [(i32, StarportClass); 5] = [
    (3, StarportClass::E),
    (6, StarportClass::D),
    (9, StarportClass::C),
    (12, StarportClass::B),
    (15, StarportClass::A),
];

/// Class whose PVS range contains `pvs`. Anything below the E threshold is X.
pub fn starport_class_for_pvs(pvs: i32) -> StarportClass {
    STARPORT_CLASS_THRESHOLDS
        .iter()
        .rev()
        .find(|(min, _)| pvs >= *min)
        .map(|(_, class)| *class)
        .unwrap_or(StarportClass::X)
}

pub fn capabilities(class: StarportClass) -> Vec<Capability> {
    match class {
        StarportClass::A => vec![
            Capability::RefinedFuel,
            Capability::StarshipShipyard,
            Capability::Overhaul,
            Capability::Highport,
        ],
        StarportClass::B => vec![
            Capability::RefinedFuel,
            Capability::SpacecraftShipyard,
            Capability::Overhaul,
        ],
        StarportClass::C => vec![Capability::UnrefinedFuel, Capability::RepairFacilities],
        StarportClass::D => vec![Capability::UnrefinedFuel, Capability::MinorRepairs],
        StarportClass::E => vec![Capability::LandingBeacon],
        StarportClass::X => Vec::new(),
    }
}

/// 2D6 target numbers; a missing key means the base cannot exist there.
pub static BASE_TARGETS: Lazy<BTreeMap<(BaseType, StarportClass), u8>> = Lazy::new(|| {
    use BaseType::*;
    use StarportClass as C;
    [
        ((Naval, C::A), 8),
        ((Naval, C::B), 8),
        ((Scout, C::A), 10),
        ((Scout, C::B), 8),
        ((Scout, C::C), 8),
        ((Scout, C::D), 7),
        ((Pirate, C::B), 12),
        ((Pirate, C::C), 10),
        ((Pirate, C::D), 12),
        ((Pirate, C::E), 12),
        ((Research, C::A), 8),
        ((Research, C::B), 10),
        ((Research, C::C), 10),
        ((Research, C::D), 12),
        ((Military, C::A), 10),
        ((Military, C::B), 10),
        ((Military, C::C), 12),
    ]
    .into_iter()
    .collect()
});

pub fn base_target(base: BaseType, class: StarportClass) -> Option<u8> {
    BASE_TARGETS.get(&(base, class)).copied()
}
