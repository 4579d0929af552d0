//! World generator - type, size, gravity and composition of the primary world.

use std::sync::Arc;

use starsmith_domain::entities::world::fields;
use starsmith_domain::tables::{
    SizeEntry, DWARF_COMPOSITION_TABLE, DWARF_GRAVITY_TABLE, DWARF_SIZE_TABLE, HABITAT_SIZE_TABLE,
    TERRESTRIAL_GRAVITY_TABLE, TERRESTRIAL_SIZE_TABLE, WORLD_TYPE_TABLE,
};
use starsmith_domain::{
    Provenance, StarSystemId, TechLevel, WorldId, WorldName, WorldPhysical, WorldRecord,
    WorldSize, WorldType,
};

use super::GenerationError;
use crate::dice::DiceRoller;
use crate::infrastructure::ports::ClockPort;

/// Raw world parameters as supplied by a caller.
#[derive(Debug, Clone)]
pub struct WorldInput {
    pub world_id: String,
    pub star_system_id: String,
    pub tech_level: i64,
    pub world_name: String,
}

/// World parameters after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldParams {
    pub world_id: WorldId,
    pub star_system_id: StarSystemId,
    pub tech_level: TechLevel,
    pub world_name: WorldName,
}

impl WorldInput {
    pub fn validate(self) -> Result<WorldParams, GenerationError> {
        Ok(WorldParams {
            world_id: WorldId::new(self.world_id)?,
            star_system_id: StarSystemId::new(self.star_system_id)?,
            tech_level: TechLevel::new(self.tech_level)?,
            world_name: WorldName::new(self.world_name)?,
        })
    }
}

pub struct GenerateWorld {
    dice: DiceRoller,
    clock: Arc<dyn ClockPort>,
}

impl GenerateWorld {
    pub fn new(dice: DiceRoller, clock: Arc<dyn ClockPort>) -> Self {
        Self { dice, clock }
    }

    /// Validate the input, then roll the world.
    pub fn execute(&self, input: WorldInput) -> Result<WorldRecord, GenerationError> {
        let params = input.validate()?;
        self.generate(params)
    }

    /// Roll order: type, size, gravity (not for habitats), composition
    /// (dwarfs only).
    pub fn generate(&self, params: WorldParams) -> Result<WorldRecord, GenerationError> {
        let mut provenance = Provenance::procedural();

        let type_roll = self.dice.roll_2d6();
        let world_type = *WORLD_TYPE_TABLE.lookup(type_roll.total);
        provenance.record(fields::WORLD_TYPE, type_roll);

        let size_roll = self.dice.roll_2d6();
        let size_table = match world_type {
            WorldType::Habitat => &*HABITAT_SIZE_TABLE,
            WorldType::Terrestrial => &*TERRESTRIAL_SIZE_TABLE,
            WorldType::Dwarf => &*DWARF_SIZE_TABLE,
        };
        let SizeEntry { label, diameter_km } = *size_table.lookup(size_roll.total);
        let size = WorldSize::new(label, diameter_km)?;
        provenance.record(fields::SIZE, size_roll);

        let gravity = match world_type {
            WorldType::Habitat => None,
            WorldType::Terrestrial | WorldType::Dwarf => {
                let table = if world_type == WorldType::Dwarf {
                    &*DWARF_GRAVITY_TABLE
                } else {
                    &*TERRESTRIAL_GRAVITY_TABLE
                };
                let roll = self.dice.roll_2d6();
                let gravity = *table.lookup(roll.total);
                provenance.record(fields::GRAVITY, roll);
                Some(gravity)
            }
        };

        let composition = if world_type == WorldType::Dwarf {
            let roll = self.dice.roll_2d6();
            let composition = *DWARF_COMPOSITION_TABLE.lookup(roll.total);
            provenance.record(fields::COMPOSITION, roll);
            Some(composition)
        } else {
            None
        };

        let world = WorldRecord::new(
            params.world_id,
            params.star_system_id,
            params.world_name,
            params.tech_level,
            WorldPhysical {
                world_type,
                size,
                gravity,
                composition,
            },
            provenance,
            self.clock.now(),
        );

        tracing::info!(
            world_id = %world.id(),
            star_system_id = %world.star_system_id(),
            world_type = %world.world_type(),
            size = %world.size().label,
            "World generated"
        );

        Ok(world)
    }
}
