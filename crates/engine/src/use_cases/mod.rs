//! Use cases - the generators.
//!
//! Each module owns one part of a star system. `system` runs them in order
//! to build a whole system.

pub mod culture;
pub mod error;
pub mod habitability;
pub mod inhabitants;
pub mod secondary;
pub mod star;
pub mod starport;
pub mod stellar;
pub mod system;
pub mod world;

// Re-export main types
pub use culture::GenerateCulture;
pub use error::GenerationError;
pub use habitability::{EnvironmentOutcome, RollEnvironment};
pub use inhabitants::GenerateInhabitants;
pub use secondary::{choose_slot_near_zone, GenerateSecondaryBodies, OrbitLayout};
pub use star::GenerateStar;
pub use starport::{set_base_presence, GenerateStarport, StarportInput};
pub use system::{GenerateStarSystem, GeneratorSettings, SystemInput};
pub use world::{GenerateWorld, WorldInput, WorldParams};
