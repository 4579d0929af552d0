//! Infrastructure implementations.
//!
//! Port traits and their implementations for time and randomness, plus
//! settings loaded from the environment.

pub mod clock;
pub mod ports;
pub mod random;
pub mod settings;
