//! Star entities - primaries, companions, and system multiplicity

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{DiceRoll, Provenance, SpectralClass, SpectralGrade, StellarProperty};
use crate::StarId;

/// Provenance field names for star rolls
pub mod fields {
    pub const CLASS: &str = "class";
    pub const GRADE: &str = "grade";
    pub const SEPARATION: &str = "separation";
    pub const SEPARATION_MULTIPLIER: &str = "separation_multiplier";
    pub const COMPANION_COUNT: &str = "companion_count";
}

/// A star, either the system primary or a companion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    id: StarId,
    class: SpectralClass,
    grade: SpectralGrade,
    /// Distance from the primary in AU; always 0 for the primary itself
    orbital_distance: f64,
    mass: f64,
    luminosity: f64,
    temperature: f64,
    provenance: Provenance,
}

impl StarRecord {
    pub fn new(
        id: StarId,
        class: SpectralClass,
        grade: SpectralGrade,
        properties: StellarProperty,
    ) -> Self {
        Self {
            id,
            class,
            grade,
            orbital_distance: 0.0,
            mass: properties.mass,
            luminosity: properties.luminosity,
            temperature: properties.temperature,
            provenance: Provenance::procedural(),
        }
    }

    pub fn with_orbital_distance(mut self, distance_au: f64) -> Self {
        self.orbital_distance = distance_au;
        self
    }

    /// Place a companion at `distance_au`, recording the band and
    /// multiplier rolls that produced it.
    pub fn with_separation(
        mut self,
        distance_au: f64,
        band: DiceRoll,
        multiplier: DiceRoll,
    ) -> Self {
        self.provenance.record(fields::SEPARATION, band);
        self.provenance.record(fields::SEPARATION_MULTIPLIER, multiplier);
        self.with_orbital_distance(distance_au)
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    pub fn id(&self) -> &StarId {
        &self.id
    }

    pub fn class(&self) -> SpectralClass {
        self.class
    }

    pub fn grade(&self) -> SpectralGrade {
        self.grade
    }

    pub fn orbital_distance(&self) -> f64 {
        self.orbital_distance
    }

    /// Solar masses
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Solar luminosities
    pub fn luminosity(&self) -> f64 {
        self.luminosity
    }

    /// Kelvin
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Move a companion by hand. The primary stays at the centre.
    pub fn set_orbital_distance(&mut self, distance_au: f64) -> Result<(), DomainError> {
        if self.is_primary() {
            return Err(DomainError::invalid_parameter(
                "orbital_distance",
                "the primary does not orbit",
            ));
        }
        if !distance_au.is_finite() || distance_au <= 0.0 {
            return Err(DomainError::invalid_parameter(
                "orbital_distance",
                format!("{} is not a positive distance", distance_au),
            ));
        }
        self.orbital_distance = distance_au;
        self.provenance.override_field(fields::SEPARATION);
        self.provenance.override_field(fields::SEPARATION_MULTIPLIER);
        Ok(())
    }

    pub fn is_primary(&self) -> bool {
        self.orbital_distance == 0.0
    }

    /// Spectral designation such as "G2".
    pub fn designation(&self) -> String {
        format!("{}{}", self.class, self.grade)
    }
}

/// Multiplicity of a star system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    Single,
    Binary,
    Trinary,
    Quaternary,
}

impl SystemType {
    /// Derived from the number of companions alone.
    ///
    /// Counts above three are reported as quaternary; the companion tables
    /// never produce more than three.
    pub fn from_companion_count(count: usize) -> Self {
        match count {
            0 => SystemType::Single,
            1 => SystemType::Binary,
            2 => SystemType::Trinary,
            _ => SystemType::Quaternary,
        }
    }

    pub fn star_count(&self) -> usize {
        match self {
            SystemType::Single => 1,
            SystemType::Binary => 2,
            SystemType::Trinary => 3,
            SystemType::Quaternary => 4,
        }
    }
}

impl std::fmt::Display for SystemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemType::Single => write!(f, "single"),
            SystemType::Binary => write!(f, "binary"),
            SystemType::Trinary => write!(f, "trinary"),
            SystemType::Quaternary => write!(f, "quaternary"),
        }
    }
}

/// Companion stars of a primary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionSet {
    companions: Vec<StarRecord>,
    system_type: SystemType,
    /// Draws made before any companion: the count roll
    provenance: Provenance,
}

impl CompanionSet {
    pub fn new(companions: Vec<StarRecord>, provenance: Provenance) -> Self {
        let system_type = SystemType::from_companion_count(companions.len());
        Self {
            companions,
            system_type,
            provenance,
        }
    }

    pub fn companions(&self) -> &[StarRecord] {
        &self.companions
    }

    pub fn system_type(&self) -> SystemType {
        self.system_type
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn len(&self) -> usize {
        self.companions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companions.is_empty()
    }
}
