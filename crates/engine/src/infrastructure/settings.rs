//! Engine settings from the environment.
//!
//! All variables are optional. Missing ones fall back to the defaults; values
//! that are present but unreadable are rejected, never silently ignored.

use std::str::FromStr;

use starsmith_domain::{ZoneScaling, DEFAULT_ORBIT_SLOTS};

use crate::use_cases::GeneratorSettings;

pub const SEED_VAR: &str = "STARSMITH_SEED";
pub const ORBIT_SLOTS_VAR: &str = "STARSMITH_ORBIT_SLOTS";
pub const ZONE_HOT_VAR: &str = "STARSMITH_ZONE_HOT";
pub const ZONE_HABITABLE_INNER_VAR: &str = "STARSMITH_ZONE_HABITABLE_INNER";
pub const ZONE_HABITABLE_OUTER_VAR: &str = "STARSMITH_ZONE_HABITABLE_OUTER";
pub const ZONE_COLD_VAR: &str = "STARSMITH_ZONE_COLD";
pub const ZONE_OUTER_VAR: &str = "STARSMITH_ZONE_OUTER";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{var} has an unreadable value `{value}`")]
    Unreadable { var: &'static str, value: String },
    #[error("{var} is out of range: {reason}")]
    OutOfRange { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Seed for reproducible output. `None` uses the thread RNG.
    pub seed: Option<u64>,
    pub orbit_slots: u8,
    pub zone_scaling: ZoneScaling,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            seed: None,
            orbit_slots: DEFAULT_ORBIT_SLOTS,
            zone_scaling: ZoneScaling::default(),
        }
    }
}

impl EngineSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let zones = defaults.zone_scaling;

        let seed = parse_var::<u64>(&lookup, SEED_VAR)?;
        let orbit_slots = parse_var::<u8>(&lookup, ORBIT_SLOTS_VAR)?.unwrap_or(defaults.orbit_slots);
        if orbit_slots == 0 {
            return Err(SettingsError::OutOfRange {
                var: ORBIT_SLOTS_VAR,
                reason: "a system needs at least one orbit slot".to_string(),
            });
        }

        let zone_scaling = ZoneScaling {
            hot_edge: parse_var(&lookup, ZONE_HOT_VAR)?.unwrap_or(zones.hot_edge),
            habitable_inner: parse_var(&lookup, ZONE_HABITABLE_INNER_VAR)?
                .unwrap_or(zones.habitable_inner),
            habitable_outer: parse_var(&lookup, ZONE_HABITABLE_OUTER_VAR)?
                .unwrap_or(zones.habitable_outer),
            cold_edge: parse_var(&lookup, ZONE_COLD_VAR)?.unwrap_or(zones.cold_edge),
            outer_system: parse_var(&lookup, ZONE_OUTER_VAR)?.unwrap_or(zones.outer_system),
        };
        zone_scaling
            .validate()
            .map_err(|e| SettingsError::OutOfRange {
                var: "STARSMITH_ZONE_*",
                reason: e.to_string(),
            })?;

        Ok(Self {
            seed,
            orbit_slots,
            zone_scaling,
        })
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            orbit_slots: self.orbit_slots,
            zone_scaling: self.zone_scaling,
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, SettingsError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| SettingsError::Unreadable { var, value: raw }),
    }
}
