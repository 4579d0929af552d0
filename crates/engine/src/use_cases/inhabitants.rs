//! Inhabitants generator and population roll.

use starsmith_domain::entities::inhabitants::fields;
use starsmith_domain::tables::{
    GOVERNANCE_TABLE, POWER_STRUCTURE_TABLE, SOURCE_OF_POWER_TABLE, WEALTH_TABLE,
};
use starsmith_domain::{DiceRoll, Inhabitants, Provenance, WorldType, POPULATION_MAX};

use crate::dice::DiceRoller;

pub struct GenerateInhabitants {
    dice: DiceRoller,
}

impl GenerateInhabitants {
    pub fn new(dice: DiceRoller) -> Self {
        Self { dice }
    }

    /// Roll order: wealth, power structure, governance, source of power.
    pub fn execute(&self) -> Inhabitants {
        let mut provenance = Provenance::procedural();

        let roll = self.dice.roll_2d6();
        let wealth = *WEALTH_TABLE.lookup(roll.total);
        provenance.record(fields::WEALTH, roll);

        let roll = self.dice.roll_2d6();
        let power_structure = *POWER_STRUCTURE_TABLE.lookup(roll.total);
        provenance.record(fields::POWER_STRUCTURE, roll);

        let roll = self.dice.roll_2d6();
        let governance = *GOVERNANCE_TABLE.lookup(roll.total);
        provenance.record(fields::GOVERNANCE, roll);

        let roll = self.dice.roll_2d6();
        let source_of_power = *SOURCE_OF_POWER_TABLE.lookup(roll.total);
        provenance.record(fields::SOURCE_OF_POWER, roll);

        tracing::debug!(
            wealth = wealth.label(),
            governance = governance.label(),
            "Inhabitants generated"
        );

        Inhabitants::new(
            wealth,
            power_structure,
            governance,
            source_of_power,
            provenance,
        )
    }

    /// Population digit: `2D6 - 2 + floor(score / 4)`, one less on habitats,
    /// clamped to `0..=12`.
    pub fn roll_population(&self, habitability_score: f64, world_type: WorldType) -> (u8, DiceRoll) {
        let roll = self.dice.roll_2d6();
        let habitat_penalty = if world_type.is_habitat() { 1 } else { 0 };
        let population = roll.total - 2 + (habitability_score / 4.0).floor() as i32 - habitat_penalty;
        let population = population.clamp(0, i32::from(POPULATION_MAX)) as u8;
        (population, roll)
    }
}
