//! World aggregate - the primary world of a star system
//!
//! Physical attributes come from the world generator. Environment,
//! population, inhabitants, development, starport and culture are attached by
//! later generators through the `apply_*` methods, which keep provenance
//! procedural. The `set_*` methods are manual edits: each one marks the
//! touched fields as overridden, flips the record to `Custom` and bumps
//! `updated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::culture::{CultureProfile, CultureTrait};
use super::development::WorldDevelopment;
use super::habitability::{calculate_habitability_score, EnvironmentProfile};
use super::inhabitants::Inhabitants;
use super::starport::{StarportClass, StarportRecord};
use crate::error::DomainError;
use crate::value_objects::{
    FieldRoll, GenerationMethod, Provenance, RollRecord, TechLevel, WorldName,
};
use crate::{StarSystemId, WorldId};

/// Mean diameter of Earth, the unit for world mass.
pub const EARTH_DIAMETER_KM: f64 = 12_742.0;

/// Highest population rating.
pub const POPULATION_MAX: u8 = 12;

/// Provenance field names for world rolls
pub mod fields {
    pub const WORLD_TYPE: &str = "world_type";
    pub const SIZE: &str = "size";
    pub const GRAVITY: &str = "gravity";
    pub const COMPOSITION: &str = "composition";
    pub const ATMOSPHERE: &str = "atmosphere";
    pub const TEMPERATURE: &str = "temperature";
    pub const HAZARD: &str = "hazard";
    pub const HAZARD_INTENSITY: &str = "hazard_intensity";
    pub const RESOURCES: &str = "resources";
    pub const HABITABILITY_SCORE: &str = "habitability_score";
    pub const POPULATION: &str = "population";
    pub const STARPORT_CLASS: &str = "starport_class";
    pub const PORT_VALUE_SCORE: &str = "port_value_score";
    pub const INHABITANTS: &str = "inhabitants";
    pub const CULTURE: &str = "culture";
    pub const ORBIT: &str = "orbit";

    /// Fields rolled for the environment, in roll order.
    pub const ENVIRONMENT: [&str; 5] = [ATMOSPHERE, TEMPERATURE, HAZARD, HAZARD_INTENSITY, RESOURCES];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorldType {
    /// Artificial structure: no gravity, mass or composition
    Habitat,
    Terrestrial,
    Dwarf,
}

impl WorldType {
    pub fn label(&self) -> &'static str {
        match self {
            WorldType::Habitat => "Habitat",
            WorldType::Terrestrial => "Terrestrial",
            WorldType::Dwarf => "Dwarf",
        }
    }

    pub fn is_habitat(&self) -> bool {
        matches!(self, WorldType::Habitat)
    }
}

impl std::fmt::Display for WorldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bulk composition of a dwarf world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Composition {
    Carbonaceous,
    Silicaceous,
    Metallic,
    Other,
}

impl Composition {
    pub fn label(&self) -> &'static str {
        match self {
            Composition::Carbonaceous => "Carbonaceous",
            Composition::Silicaceous => "Silicaceous",
            Composition::Metallic => "Metallic",
            Composition::Other => "Other",
        }
    }
}

/// Size class and diameter of a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSize {
    pub label: String,
    pub diameter_km: f64,
}

impl WorldSize {
    pub fn new(label: impl Into<String>, diameter_km: f64) -> Result<Self, DomainError> {
        if !diameter_km.is_finite() || diameter_km <= 0.0 {
            return Err(DomainError::invalid_parameter(
                "size",
                format!("{} km is not a positive diameter", diameter_km),
            ));
        }
        Ok(Self {
            label: label.into(),
            diameter_km,
        })
    }
}

/// Mass in Earth masses from surface gravity and diameter.
pub fn world_mass(gravity: f64, diameter_km: f64) -> f64 {
    let ratio = diameter_km / EARTH_DIAMETER_KM;
    gravity * ratio * ratio
}

/// Physical attributes rolled by the world generator
#[derive(Debug, Clone, PartialEq)]
pub struct WorldPhysical {
    pub world_type: WorldType,
    pub size: WorldSize,
    pub gravity: Option<f64>,
    pub composition: Option<Composition>,
}

/// The primary world of a star system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldRecord {
    // Identity
    id: WorldId,
    star_system_id: StarSystemId,
    name: WorldName,
    tech_level: TechLevel,

    // Physical
    world_type: WorldType,
    size: WorldSize,
    mass: Option<f64>,
    gravity: Option<f64>,
    composition: Option<Composition>,
    orbit_position: Option<u8>,

    // Environment and society
    environment: Option<EnvironmentProfile>,
    habitability_score: Option<f64>,
    population: Option<u8>,
    inhabitants: Option<Inhabitants>,
    development: Option<WorldDevelopment>,
    starport_class: Option<StarportClass>,
    port_value_score: Option<i32>,
    cultural_traits: Vec<CultureTrait>,

    provenance: Provenance,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WorldRecord {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// A freshly generated world. Habitats never carry gravity, mass or
    /// composition, whatever `physical` says.
    pub fn new(
        id: WorldId,
        star_system_id: StarSystemId,
        name: WorldName,
        tech_level: TechLevel,
        physical: WorldPhysical,
        provenance: Provenance,
        now: DateTime<Utc>,
    ) -> Self {
        let WorldPhysical {
            world_type,
            size,
            gravity,
            composition,
        } = physical;
        let (gravity, composition) = match world_type {
            WorldType::Habitat => (None, None),
            WorldType::Terrestrial => (gravity, None),
            WorldType::Dwarf => (gravity, composition),
        };
        let mass = gravity.map(|g| world_mass(g, size.diameter_km));
        Self {
            id,
            star_system_id,
            name,
            tech_level,
            world_type,
            size,
            mass,
            gravity,
            composition,
            orbit_position: None,
            environment: None,
            habitability_score: None,
            population: None,
            inhabitants: None,
            development: None,
            starport_class: None,
            port_value_score: None,
            cultural_traits: Vec::new(),
            provenance,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &WorldId {
        &self.id
    }

    #[inline]
    pub fn star_system_id(&self) -> &StarSystemId {
        &self.star_system_id
    }

    #[inline]
    pub fn name(&self) -> &WorldName {
        &self.name
    }

    #[inline]
    pub fn tech_level(&self) -> TechLevel {
        self.tech_level
    }

    #[inline]
    pub fn world_type(&self) -> WorldType {
        self.world_type
    }

    #[inline]
    pub fn size(&self) -> &WorldSize {
        &self.size
    }

    /// Earth masses; absent for habitats
    #[inline]
    pub fn mass(&self) -> Option<f64> {
        self.mass
    }

    /// Surface gravity in g; absent for habitats
    #[inline]
    pub fn gravity(&self) -> Option<f64> {
        self.gravity
    }

    #[inline]
    pub fn composition(&self) -> Option<Composition> {
        self.composition
    }

    #[inline]
    pub fn orbit_position(&self) -> Option<u8> {
        self.orbit_position
    }

    #[inline]
    pub fn environment(&self) -> Option<&EnvironmentProfile> {
        self.environment.as_ref()
    }

    #[inline]
    pub fn habitability_score(&self) -> Option<f64> {
        self.habitability_score
    }

    #[inline]
    pub fn population(&self) -> Option<u8> {
        self.population
    }

    #[inline]
    pub fn inhabitants(&self) -> Option<&Inhabitants> {
        self.inhabitants.as_ref()
    }

    #[inline]
    pub fn development(&self) -> Option<&WorldDevelopment> {
        self.development.as_ref()
    }

    #[inline]
    pub fn starport_class(&self) -> Option<StarportClass> {
        self.starport_class
    }

    #[inline]
    pub fn port_value_score(&self) -> Option<i32> {
        self.port_value_score
    }

    #[inline]
    pub fn cultural_traits(&self) -> &[CultureTrait] {
        &self.cultural_traits
    }

    #[inline]
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    #[inline]
    pub fn generation_method(&self) -> GenerationMethod {
        self.provenance.generation_method()
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Generated attachments
    // =========================================================================

    /// Place the world in an orbit slot during system generation.
    pub fn assign_orbit(&mut self, slot: u8, roll: Option<RollRecord>) {
        if let Some(roll) = roll {
            self.provenance.record(fields::ORBIT, roll);
        }
        self.orbit_position = Some(slot);
    }

    /// Attach a rolled environment and the score derived from it.
    pub fn apply_environment(
        &mut self,
        environment: EnvironmentProfile,
        rolls: Vec<FieldRoll>,
        habitability_score: f64,
    ) {
        for roll in rolls {
            self.provenance.record(roll.field, roll.roll);
        }
        self.environment = Some(environment);
        self.habitability_score = Some(habitability_score);
    }

    pub fn apply_population(&mut self, population: u8, roll: impl Into<RollRecord>) {
        self.provenance.record(fields::POPULATION, roll);
        self.population = Some(population.min(POPULATION_MAX));
    }

    pub fn apply_inhabitants(&mut self, inhabitants: Inhabitants) {
        self.inhabitants = Some(inhabitants);
    }

    pub fn apply_development(&mut self, development: WorldDevelopment) {
        self.development = Some(development);
    }

    pub fn apply_starport(&mut self, starport: &StarportRecord) {
        self.starport_class = Some(starport.class());
        self.port_value_score = Some(starport.port_value_score());
    }

    pub fn apply_culture(&mut self, culture: &CultureProfile) {
        self.cultural_traits = culture.traits().to_vec();
    }

    // =========================================================================
    // Manual edits
    // =========================================================================

    fn touch(&mut self, field: &str, now: DateTime<Utc>) {
        self.provenance.override_field(field);
        self.updated_at = now;
    }

    /// Recompute the score from the current environment, gravity and tech
    /// level. No-op before an environment is attached.
    fn rescore(&mut self) {
        if let Some(environment) = &self.environment {
            let modifiers = environment.modifiers(self.gravity, self.tech_level);
            self.habitability_score = Some(calculate_habitability_score(&modifiers));
        }
    }

    /// Set the size by hand. Mass follows the new diameter.
    pub fn set_size(&mut self, size: WorldSize, now: DateTime<Utc>) {
        self.mass = self.gravity.map(|g| world_mass(g, size.diameter_km));
        self.size = size;
        self.touch(fields::SIZE, now);
    }

    /// Set gravity by hand. Habitats have no gravity. Mass and the
    /// habitability score follow the new value.
    pub fn set_gravity(&mut self, gravity: f64, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.world_type.is_habitat() {
            return Err(DomainError::invalid_parameter(
                "gravity",
                "habitats have no gravity",
            ));
        }
        if !gravity.is_finite() || gravity <= 0.0 {
            return Err(DomainError::invalid_parameter(
                "gravity",
                format!("{} is not a positive gravity", gravity),
            ));
        }
        self.gravity = Some(gravity);
        self.mass = Some(world_mass(gravity, self.size.diameter_km));
        self.rescore();
        self.touch(fields::GRAVITY, now);
        Ok(())
    }

    /// Set composition by hand. Only dwarf worlds have one.
    pub fn set_composition(
        &mut self,
        composition: Composition,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.world_type != WorldType::Dwarf {
            return Err(DomainError::invalid_parameter(
                "composition",
                format!("{} worlds have no composition", self.world_type),
            ));
        }
        self.composition = Some(composition);
        self.touch(fields::COMPOSITION, now);
        Ok(())
    }

    /// Set the environment by hand. The habitability score is recomputed
    /// from it.
    pub fn set_environment(&mut self, environment: EnvironmentProfile, now: DateTime<Utc>) {
        self.environment = Some(environment);
        self.rescore();
        for field in fields::ENVIRONMENT {
            self.provenance.override_field(field);
        }
        self.touch(fields::HABITABILITY_SCORE, now);
    }

    pub fn set_habitability_score(&mut self, score: f64, now: DateTime<Utc>) {
        self.habitability_score = Some(score);
        self.touch(fields::HABITABILITY_SCORE, now);
    }

    pub fn set_population(&mut self, population: u8, now: DateTime<Utc>) -> Result<(), DomainError> {
        if population > POPULATION_MAX {
            return Err(DomainError::invalid_parameter(
                "population",
                format!("{} is outside 0-{}", population, POPULATION_MAX),
            ));
        }
        self.population = Some(population);
        self.touch(fields::POPULATION, now);
        Ok(())
    }

    pub fn set_starport_class(&mut self, class: StarportClass, now: DateTime<Utc>) {
        self.starport_class = Some(class);
        self.touch(fields::STARPORT_CLASS, now);
    }

    /// Move the world to another slot by hand. The caller is responsible for
    /// checking the slot against the system's other bodies.
    pub fn set_orbit_position(&mut self, slot: u8, now: DateTime<Utc>) {
        self.orbit_position = Some(slot);
        self.touch(fields::ORBIT, now);
    }

    /// Replace the inhabitants.
    pub fn set_inhabitants(&mut self, inhabitants: Inhabitants, now: DateTime<Utc>) {
        self.inhabitants = Some(inhabitants);
        self.touch(fields::INHABITANTS, now);
    }

    /// Take class and PVS from an edited or partly re-rolled starport.
    pub fn set_starport(&mut self, starport: &StarportRecord, now: DateTime<Utc>) {
        self.apply_starport(starport);
        self.provenance.override_field(fields::STARPORT_CLASS);
        self.touch(fields::PORT_VALUE_SCORE, now);
    }

    /// Take the traits of an edited or partly re-rolled culture.
    pub fn set_culture(&mut self, culture: &CultureProfile, now: DateTime<Utc>) {
        self.apply_culture(culture);
        self.touch(fields::CULTURE, now);
    }
}
