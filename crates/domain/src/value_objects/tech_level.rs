//! Technology level

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Technology level of a world's inhabitants, 0 (pre-industrial) to 20.
///
/// Tech level 7 is the baseline for starport scoring: lower levels count
/// against the Port Value Score, higher ones for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct TechLevel(u8);

impl TechLevel {
    pub const MAX: u8 = 20;
    /// Tech level that contributes nothing to the Port Value Score.
    pub const PORT_BASELINE: i32 = 7;

    pub fn new(level: i64) -> Result<Self, DomainError> {
        if !(0..=i64::from(Self::MAX)).contains(&level) {
            return Err(DomainError::invalid_parameter(
                "tech_level",
                format!("{} is outside 0-{}", level, Self::MAX),
            ));
        }
        Ok(Self(level as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_i32(&self) -> i32 {
        i32::from(self.0)
    }
}

impl TryFrom<i64> for TechLevel {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TechLevel> for u8 {
    fn from(level: TechLevel) -> Self {
        level.0
    }
}

impl fmt::Display for TechLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TL{}", self.0)
    }
}
