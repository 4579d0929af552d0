//! Habitability - environment conditions and the score built from them
//!
//! The score is a plain signed sum of seven independent components. Five come
//! from environment rolls, two are derived from the world itself (gravity and
//! the inhabitants' tech level).

use serde::{Deserialize, Serialize};

use crate::value_objects::TechLevel;

/// Atmospheric pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Atmosphere {
    Vacuum,
    Trace,
    Thin,
    Standard,
    Dense,
    VeryDense,
    Crushing,
}

impl Atmosphere {
    pub fn label(&self) -> &'static str {
        match self {
            Atmosphere::Vacuum => "Vacuum",
            Atmosphere::Trace => "Trace",
            Atmosphere::Thin => "Thin",
            Atmosphere::Standard => "Standard",
            Atmosphere::Dense => "Dense",
            Atmosphere::VeryDense => "Very dense",
            Atmosphere::Crushing => "Crushing",
        }
    }

    pub fn modifier(&self) -> i32 {
        match self {
            Atmosphere::Vacuum => -4,
            Atmosphere::Trace => -3,
            Atmosphere::Thin => -1,
            Atmosphere::Standard => 2,
            Atmosphere::Dense => 0,
            Atmosphere::VeryDense => -2,
            Atmosphere::Crushing => -4,
        }
    }
}

/// Surface temperature band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Frozen,
    Cold,
    Temperate,
    Hot,
    Scorching,
}

impl Temperature {
    pub fn label(&self) -> &'static str {
        match self {
            Temperature::Frozen => "Frozen",
            Temperature::Cold => "Cold",
            Temperature::Temperate => "Temperate",
            Temperature::Hot => "Hot",
            Temperature::Scorching => "Scorching",
        }
    }

    pub fn modifier(&self) -> i32 {
        match self {
            Temperature::Frozen | Temperature::Scorching => -4,
            Temperature::Cold | Temperature::Hot => -1,
            Temperature::Temperate => 2,
        }
    }
}

/// Dominant environmental hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hazard {
    None,
    Seismic,
    Storms,
    Toxic,
    Radiation,
    Biological,
}

impl Hazard {
    pub fn label(&self) -> &'static str {
        match self {
            Hazard::None => "None",
            Hazard::Seismic => "Seismic activity",
            Hazard::Storms => "Violent storms",
            Hazard::Toxic => "Toxic environment",
            Hazard::Radiation => "Radiation",
            Hazard::Biological => "Biological",
        }
    }

    pub fn modifier(&self) -> i32 {
        match self {
            Hazard::None => 0,
            Hazard::Seismic | Hazard::Storms => -1,
            Hazard::Toxic | Hazard::Radiation => -2,
            Hazard::Biological => -3,
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Hazard::None)
    }
}

/// Severity of a present hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardIntensity {
    Minor,
    Moderate,
    Serious,
    Extreme,
}

impl HazardIntensity {
    pub fn label(&self) -> &'static str {
        match self {
            HazardIntensity::Minor => "Minor",
            HazardIntensity::Moderate => "Moderate",
            HazardIntensity::Serious => "Serious",
            HazardIntensity::Extreme => "Extreme",
        }
    }

    pub fn modifier(&self) -> i32 {
        match self {
            HazardIntensity::Minor => 0,
            HazardIntensity::Moderate => -1,
            HazardIntensity::Serious => -2,
            HazardIntensity::Extreme => -3,
        }
    }
}

/// Availability of biochemical resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resources {
    Absent,
    Scarce,
    Moderate,
    Abundant,
    Bountiful,
}

impl Resources {
    pub fn label(&self) -> &'static str {
        match self {
            Resources::Absent => "Absent",
            Resources::Scarce => "Scarce",
            Resources::Moderate => "Moderate",
            Resources::Abundant => "Abundant",
            Resources::Bountiful => "Bountiful",
        }
    }

    pub fn modifier(&self) -> i32 {
        match self {
            Resources::Absent => -3,
            Resources::Scarce => -1,
            Resources::Moderate => 0,
            Resources::Abundant => 2,
            Resources::Bountiful => 3,
        }
    }
}

/// Rolled environment of a world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentProfile {
    pub atmosphere: Atmosphere,
    pub temperature: Temperature,
    pub hazard: Hazard,
    /// Only rolled when a hazard is present
    pub hazard_intensity: Option<HazardIntensity>,
    pub resources: Resources,
}

impl EnvironmentProfile {
    /// Modifier set for this environment plus the world-derived components.
    pub fn modifiers(&self, gravity: Option<f64>, tech_level: TechLevel) -> HabitabilityModifiers {
        HabitabilityModifiers {
            atmospheric_pressure: Some(f64::from(self.atmosphere.modifier())),
            temperature: Some(f64::from(self.temperature.modifier())),
            hazard: Some(f64::from(self.hazard.modifier())),
            hazard_intensity: self.hazard_intensity.map(|i| f64::from(i.modifier())),
            biochemical_resources: Some(f64::from(self.resources.modifier())),
            gravity: gravity.map(|g| f64::from(gravity_modifier(g))),
            tech_level: Some(f64::from(tech_modifier(tech_level))),
        }
    }
}

/// Signed habitability components; an absent component counts as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HabitabilityModifiers {
    pub atmospheric_pressure: Option<f64>,
    pub temperature: Option<f64>,
    pub hazard: Option<f64>,
    pub hazard_intensity: Option<f64>,
    pub biochemical_resources: Option<f64>,
    pub gravity: Option<f64>,
    pub tech_level: Option<f64>,
}

impl HabitabilityModifiers {
    /// Each component exactly once, absent ones as zero.
    pub fn components(&self) -> [f64; 7] {
        [
            self.atmospheric_pressure.unwrap_or(0.0),
            self.temperature.unwrap_or(0.0),
            self.hazard.unwrap_or(0.0),
            self.hazard_intensity.unwrap_or(0.0),
            self.biochemical_resources.unwrap_or(0.0),
            self.gravity.unwrap_or(0.0),
            self.tech_level.unwrap_or(0.0),
        ]
    }
}

/// Sum of the supplied habitability components.
pub fn calculate_habitability_score(modifiers: &HabitabilityModifiers) -> f64 {
    modifiers.components().iter().sum()
}

/// Gravity component: comfortable near 1 g, punishing at the extremes.
pub fn gravity_modifier(gravity: f64) -> i32 {
    if gravity < 0.2 {
        -2
    } else if gravity < 0.7 {
        -1
    } else if gravity <= 1.25 {
        1
    } else if gravity <= 1.5 {
        -1
    } else {
        -3
    }
}

/// Tech-level component: advanced inhabitants engineer around their world.
pub fn tech_modifier(tech_level: TechLevel) -> i32 {
    match tech_level.value() {
        14..=u8::MAX => 2,
        10..=13 => 1,
        _ => 0,
    }
}

/// Qualitative band for a habitability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HabitabilityRating {
    Hostile,
    Harsh,
    Marginal,
    Good,
    Excellent,
    Paradise,
}

impl HabitabilityRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitabilityRating::Hostile => "Hostile",
            HabitabilityRating::Harsh => "Harsh",
            HabitabilityRating::Marginal => "Marginal",
            HabitabilityRating::Good => "Good",
            HabitabilityRating::Excellent => "Excellent",
            HabitabilityRating::Paradise => "Paradise",
        }
    }
}

impl std::fmt::Display for HabitabilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rating band for `score`; each band includes its lower bound.
pub fn habitability_rating(score: f64) -> HabitabilityRating {
    if score >= 8.0 {
        HabitabilityRating::Paradise
    } else if score >= 4.0 {
        HabitabilityRating::Excellent
    } else if score >= 0.0 {
        HabitabilityRating::Good
    } else if score >= -4.0 {
        HabitabilityRating::Marginal
    } else if score >= -8.0 {
        HabitabilityRating::Harsh
    } else {
        HabitabilityRating::Hostile
    }
}
