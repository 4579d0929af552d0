//! Environment roller and habitability scoring.

use starsmith_domain::entities::world::fields;
use starsmith_domain::tables::{
    ATMOSPHERE_TABLE, HAZARD_INTENSITY_TABLE, HAZARD_TABLE, RESOURCE_TABLE, TEMPERATURE_TABLE,
};
use starsmith_domain::{
    calculate_habitability_score, habitability_rating, EnvironmentProfile, FieldRoll,
    HabitabilityModifiers, HabitabilityRating, RollRecord, WorldRecord,
};

use crate::dice::DiceRoller;

/// A rolled environment together with the score it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentOutcome {
    pub profile: EnvironmentProfile,
    /// Rolls in draw order, ready to append to the world's provenance
    pub rolls: Vec<FieldRoll>,
    pub modifiers: HabitabilityModifiers,
    pub score: f64,
    pub rating: HabitabilityRating,
}

pub struct RollEnvironment {
    dice: DiceRoller,
}

impl RollEnvironment {
    pub fn new(dice: DiceRoller) -> Self {
        Self { dice }
    }

    fn roll(&self, field: &str, rolls: &mut Vec<FieldRoll>) -> i32 {
        let roll = self.dice.roll_2d6();
        let total = roll.total;
        rolls.push(FieldRoll {
            field: field.to_string(),
            roll: RollRecord::Dice(roll),
        });
        total
    }

    /// Roll order: atmosphere, temperature, hazard, hazard intensity (only
    /// when a hazard is present), resources. Gravity and tech level come from
    /// the world itself.
    pub fn execute(&self, world: &WorldRecord) -> EnvironmentOutcome {
        let mut rolls = Vec::with_capacity(5);

        let atmosphere = *ATMOSPHERE_TABLE.lookup(self.roll(fields::ATMOSPHERE, &mut rolls));
        let temperature = *TEMPERATURE_TABLE.lookup(self.roll(fields::TEMPERATURE, &mut rolls));
        let hazard = *HAZARD_TABLE.lookup(self.roll(fields::HAZARD, &mut rolls));
        let hazard_intensity = if hazard.is_present() {
            let total = self.roll(fields::HAZARD_INTENSITY, &mut rolls);
            Some(*HAZARD_INTENSITY_TABLE.lookup(total))
        } else {
            None
        };
        let resources = *RESOURCE_TABLE.lookup(self.roll(fields::RESOURCES, &mut rolls));

        let profile = EnvironmentProfile {
            atmosphere,
            temperature,
            hazard,
            hazard_intensity,
            resources,
        };
        let modifiers = profile.modifiers(world.gravity(), world.tech_level());
        let score = calculate_habitability_score(&modifiers);
        let rating = habitability_rating(score);

        tracing::debug!(
            world_id = %world.id(),
            score,
            rating = %rating,
            "Environment rolled"
        );

        EnvironmentOutcome {
            profile,
            rolls,
            modifiers,
            score,
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::random::ScriptedRandom;
    use chrono::{TimeZone, Utc};
    use starsmith_domain::{
        Atmosphere, Hazard, HazardIntensity, Provenance, Resources, StarSystemId, TechLevel,
        Temperature, WorldId, WorldName, WorldPhysical, WorldSize, WorldType,
    };

    fn world(world_type: WorldType, gravity: Option<f64>, tech_level: i64) -> WorldRecord {
        WorldRecord::new(
            WorldId::new("w").unwrap(),
            StarSystemId::new("s").unwrap(),
            WorldName::new("Tessaly").unwrap(),
            TechLevel::new(tech_level).unwrap(),
            WorldPhysical {
                world_type,
                size: WorldSize::new("Medium", 11_000.0).unwrap(),
                gravity,
                composition: None,
            },
            Provenance::procedural(),
            Utc.with_ymd_and_hms(2300, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    fn roller(script: Vec<i32>) -> RollEnvironment {
        RollEnvironment::new(DiceRoller::new(Arc::new(ScriptedRandom::new(script))))
    }

    #[test]
    fn no_hazard_skips_the_intensity_roll() {
        // atmosphere 7 standard, temperature 7 temperate, hazard 4 none,
        // resources 10 abundant
        let outcome = roller(vec![3, 4, 3, 4, 2, 2, 5, 5])
            .execute(&world(WorldType::Terrestrial, Some(1.0), 12));

        assert_eq!(outcome.profile.atmosphere, Atmosphere::Standard);
        assert_eq!(outcome.profile.temperature, Temperature::Temperate);
        assert_eq!(outcome.profile.hazard, Hazard::None);
        assert_eq!(outcome.profile.hazard_intensity, None);
        assert_eq!(outcome.profile.resources, Resources::Abundant);

        let fields: Vec<&str> = outcome.rolls.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["atmosphere", "temperature", "hazard", "resources"]
        );

        // 2 + 2 + 0 + 2 + gravity 1 + tech 1
        assert_eq!(outcome.score, 8.0);
        assert_eq!(outcome.rating, HabitabilityRating::Paradise);
    }

    #[test]
    fn present_hazard_rolls_intensity_before_resources() {
        // atmosphere 2 vacuum, temperature 12 scorching, hazard 12 biological,
        // intensity 12 extreme, resources 2 absent
        let outcome = roller(vec![1, 1, 6, 6, 6, 6, 6, 6, 1, 1])
            .execute(&world(WorldType::Habitat, None, 3));

        assert_eq!(outcome.profile.hazard, Hazard::Biological);
        assert_eq!(
            outcome.profile.hazard_intensity,
            Some(HazardIntensity::Extreme)
        );
        let fields: Vec<&str> = outcome.rolls.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "atmosphere",
                "temperature",
                "hazard",
                "hazard_intensity",
                "resources"
            ]
        );

        // habitat: no gravity component; TL 3: no tech component
        assert_eq!(outcome.modifiers.gravity, None);
        assert_eq!(outcome.modifiers.tech_level, Some(0.0));
        assert_eq!(outcome.score, -4.0 - 4.0 - 3.0 - 3.0 - 3.0);
        assert_eq!(outcome.rating, HabitabilityRating::Hostile);
    }

    #[test]
    fn score_is_the_sum_of_components() {
        for seed in 0..50 {
            let script: Vec<i32> = (0..12).map(|i| (seed * 7 + i * 5) % 6 + 1).collect();
            let outcome =
                roller(script).execute(&world(WorldType::Terrestrial, Some(1.5), 14));
            let sum: f64 = outcome.modifiers.components().iter().sum();
            assert_eq!(outcome.score, sum);
        }
    }

    #[test]
    fn applying_outcome_records_rolls_on_world() {
        let mut world = world(WorldType::Terrestrial, Some(1.0), 9);
        let outcome = roller(vec![3, 4, 3, 4, 2, 2, 5, 5]).execute(&world);

        world.apply_environment(outcome.profile, outcome.rolls.clone(), outcome.score);

        assert_eq!(world.habitability_score(), Some(outcome.score));
        assert!(world.provenance().roll_for("atmosphere").is_some());
        assert!(world.provenance().roll_for("resources").is_some());
    }
}
