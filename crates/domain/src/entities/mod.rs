//! Domain entities

pub mod culture;
pub mod development;
pub mod habitability;
pub mod inhabitants;
pub mod secondary;
pub mod star;
pub mod star_system;
pub mod starport;
pub mod world;

pub use culture::{CultureCategory, CultureProfile, CultureTrait};
pub use development::{determine_world_development, DevelopmentLevel, WorldDevelopment};
pub use habitability::{
    calculate_habitability_score, gravity_modifier, habitability_rating, tech_modifier, Atmosphere,
    EnvironmentProfile, HabitabilityModifiers, HabitabilityRating, Hazard, HazardIntensity,
    Resources, Temperature,
};
pub use inhabitants::{Governance, Inhabitants, PowerStructure, SourceOfPower, Wealth};
pub use secondary::{
    BeltDensity, DiskRecord, DiskType, GiantSize, MoonRecord, MoonType, OrbitPlacement,
    PlanetBody, PlanetRecord, PlanetType,
};
pub use star::{CompanionSet, StarRecord, SystemType};
pub use star_system::StarSystem;
pub use starport::{
    port_value_score, BasePresence, BaseType, Capability, StarportClass, StarportRecord,
};
pub use world::{
    world_mass, Composition, WorldPhysical, WorldRecord, WorldSize, WorldType, EARTH_DIAMETER_KM,
    POPULATION_MAX,
};
