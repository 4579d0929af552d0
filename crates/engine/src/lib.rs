//! Starsmith Engine library.
//!
//! Dice-driven generators for star systems built on `starsmith-domain`.
//!
//! ## Structure
//!
//! - `dice` - Dice roller over the random port
//! - `use_cases/` - One generator per part of a system, plus the orchestrator
//! - `infrastructure/` - Ports and their implementations, settings
//! - `app` - Application composition

pub mod app;
pub mod dice;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use dice::DiceRoller;
pub use use_cases::{GenerateStarSystem, GenerationError, GeneratorSettings, SystemInput};
