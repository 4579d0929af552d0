//! Value objects - Immutable objects defined by their attributes

mod dice;
mod names;
mod orbit;
mod provenance;
mod stellar;
mod tech_level;

pub use dice::{D66Roll, DiceRoll, RollRecord, DIE_FACES};
pub use names::WorldName;
pub use orbit::{OrbitRegistry, DEFAULT_ORBIT_SLOTS};
pub use provenance::{FieldRoll, GenerationMethod, Provenance};
pub use stellar::{SpectralClass, SpectralGrade, StellarProperty, StellarZones, Zone, ZoneScaling};
pub use tech_level::TechLevel;
