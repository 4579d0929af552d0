//! Starsmith domain
//!
//! Records, value objects and lookup tables for procedurally generated star
//! systems. Nothing in this crate draws random numbers: generators in
//! `starsmith-engine` roll the dice and hand the outcomes to the types here.

pub mod entities;
pub mod error;
pub mod ids;
pub mod tables;
pub mod value_objects;

pub use entities::{
    calculate_habitability_score, determine_world_development, habitability_rating,
    port_value_score, world_mass, Atmosphere, BasePresence, BaseType, BeltDensity, Capability,
    CompanionSet, Composition, CultureCategory, CultureProfile, CultureTrait, DevelopmentLevel,
    DiskRecord, DiskType, EnvironmentProfile, GiantSize, Governance, HabitabilityModifiers,
    HabitabilityRating, Hazard, HazardIntensity, Inhabitants, MoonRecord, MoonType,
    OrbitPlacement, PlanetBody, PlanetRecord, PlanetType, PowerStructure, Resources,
    SourceOfPower, StarRecord, StarSystem, StarportClass, StarportRecord, SystemType, Temperature,
    Wealth, WorldDevelopment, WorldPhysical, WorldRecord, WorldSize, WorldType,
    EARTH_DIAMETER_KM, POPULATION_MAX,
};
pub use error::DomainError;
pub use ids::{BodyId, StarId, StarSystemId, WorldId};
pub use value_objects::{
    D66Roll, DiceRoll, FieldRoll, GenerationMethod, OrbitRegistry, Provenance, RollRecord,
    SpectralClass, SpectralGrade, StellarProperty, StellarZones, TechLevel, WorldName, Zone,
    ZoneScaling, DEFAULT_ORBIT_SLOTS, DIE_FACES,
};
