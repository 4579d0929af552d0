//! Star system orchestrator.
//!
//! Runs every generator for one system in a fixed order:
//! 1. Primary star, then companions
//! 2. Zones around the primary
//! 3. Primary world, placed in a slot as close to the habitable zone as
//!    possible and reserved
//! 4. Environment and habitability, development, inhabitants and population
//! 5. Starport, then culture
//! 6. Disks, then planets and their moons, in the slots that are left

use std::sync::Arc;

use starsmith_domain::entities::star_system::fields;
use starsmith_domain::{
    determine_world_development, OrbitRegistry, Provenance, StarSystem, Zone, ZoneScaling,
    DEFAULT_ORBIT_SLOTS,
};

use super::culture::GenerateCulture;
use super::habitability::RollEnvironment;
use super::inhabitants::GenerateInhabitants;
use super::secondary::{choose_slot_near_zone, GenerateSecondaryBodies, OrbitLayout};
use super::star::GenerateStar;
use super::starport::{GenerateStarport, StarportInput};
use super::world::{GenerateWorld, WorldInput};
use super::{stellar, GenerationError};
use crate::dice::DiceRoller;

/// Layout knobs shared by every system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    pub orbit_slots: u8,
    pub zone_scaling: ZoneScaling,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            orbit_slots: DEFAULT_ORBIT_SLOTS,
            zone_scaling: ZoneScaling::default(),
        }
    }
}

/// Raw parameters for a whole system, as supplied by a caller.
#[derive(Debug, Clone)]
pub struct SystemInput {
    pub star_system_id: String,
    pub world_id: String,
    pub world_name: String,
    pub tech_level: i64,
}

pub struct GenerateStarSystem {
    star: Arc<GenerateStar>,
    world: Arc<GenerateWorld>,
    environment: Arc<RollEnvironment>,
    inhabitants: Arc<GenerateInhabitants>,
    starport: Arc<GenerateStarport>,
    culture: Arc<GenerateCulture>,
    secondary: Arc<GenerateSecondaryBodies>,
    dice: DiceRoller,
    settings: GeneratorSettings,
}

impl GenerateStarSystem {
    pub fn new(
        star: Arc<GenerateStar>,
        world: Arc<GenerateWorld>,
        environment: Arc<RollEnvironment>,
        inhabitants: Arc<GenerateInhabitants>,
        starport: Arc<GenerateStarport>,
        culture: Arc<GenerateCulture>,
        secondary: Arc<GenerateSecondaryBodies>,
        dice: DiceRoller,
        settings: GeneratorSettings,
    ) -> Self {
        Self {
            star,
            world,
            environment,
            inhabitants,
            starport,
            culture,
            secondary,
            dice,
            settings,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate a full system. Inputs and settings are validated before the
    /// first draw.
    pub fn execute(&self, input: SystemInput) -> Result<StarSystem, GenerationError> {
        let params = WorldInput {
            world_id: input.world_id,
            star_system_id: input.star_system_id,
            tech_level: input.tech_level,
            world_name: input.world_name,
        }
        .validate()?;
        self.settings.zone_scaling.validate()?;
        let mut orbits = OrbitRegistry::new(self.settings.orbit_slots)?;

        let system_id = params.star_system_id.clone();
        let world_id = params.world_id.clone();
        let tech_level = params.tech_level;

        // 1-2. Stars and zones
        let primary = self.star.generate_primary(system_id.primary_star())?;
        let companions = self
            .star
            .generate_companions(&system_id, primary.class(), primary.grade())?;
        let zones = stellar::zones(primary.luminosity(), &self.settings.zone_scaling)?;
        let layout = OrbitLayout {
            star_system_id: &system_id,
            zones: &zones,
            luminosity: primary.luminosity(),
        };

        // 3. Primary world and its slot
        let mut world = self.world.generate(params)?;
        let (slot, slot_roll) =
            choose_slot_near_zone(&self.dice, &layout, &orbits, Zone::Habitable).ok_or_else(
                || GenerationError::NoAvailableOrbit {
                    star_system_id: system_id.to_string(),
                    capacity: orbits.capacity(),
                },
            )?;
        orbits.reserve(slot)?;
        world.assign_orbit(slot, slot_roll);

        // 4. Environment, development, inhabitants
        let environment = self.environment.execute(&world);
        let score = environment.score;
        world.apply_environment(environment.profile, environment.rolls, score);

        let development = determine_world_development(tech_level, score);

        let inhabitants = self.inhabitants.execute();
        let (population, population_roll) =
            self.inhabitants.roll_population(score, world.world_type());
        world.apply_population(population, population_roll);

        // 5. Starport and culture
        let starport = self.starport.execute(StarportInput {
            world_id: world_id.clone(),
            habitability_score: score,
            tech_level,
            wealth: inhabitants.wealth(),
            development_modifier: development.port_modifier,
        });
        world.apply_development(development);
        world.apply_inhabitants(inhabitants);
        world.apply_starport(&starport);

        let culture = self.culture.execute(world_id);
        world.apply_culture(&culture);

        // 6. Secondary bodies
        let mut provenance = Provenance::procedural();
        let (disk_count, roll) = self.secondary.roll_disk_count();
        provenance.record(fields::DISK_COUNT, roll);
        let disks = self
            .secondary
            .generate_disks(&layout, &mut orbits, disk_count)?;

        let (planet_count, roll) = self.secondary.roll_planet_count();
        provenance.record(fields::PLANET_COUNT, roll);
        let planets = self
            .secondary
            .generate_planets(&layout, &mut orbits, planet_count)?;

        let system = StarSystem {
            id: system_id,
            primary,
            companions,
            zones,
            orbits,
            world,
            starport,
            culture,
            disks,
            planets,
            provenance,
        };

        tracing::info!(
            star_system_id = %system.id,
            primary = %system.primary.designation(),
            system_type = %system.system_type(),
            world_orbit = slot,
            disks = system.disks.len(),
            planets = system.planets.len(),
            "Star system generated"
        );

        Ok(system)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{ClockPort, MockRandomPort, RandomPort};
    use crate::infrastructure::random::{ScriptedRandom, SeededRandom};
    use chrono::{TimeZone, Utc};
    use starsmith_domain::{BaseType, CultureCategory, GenerationMethod, PlanetType};

    fn orchestrator(random: Arc<dyn RandomPort>, settings: GeneratorSettings) -> GenerateStarSystem {
        let dice = DiceRoller::new(random);
        let clock: Arc<dyn ClockPort> =
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2300, 1, 1, 0, 0, 0).unwrap()));
        GenerateStarSystem::new(
            Arc::new(GenerateStar::new(dice.clone())),
            Arc::new(GenerateWorld::new(dice.clone(), clock)),
            Arc::new(RollEnvironment::new(dice.clone())),
            Arc::new(GenerateInhabitants::new(dice.clone())),
            Arc::new(GenerateStarport::new(dice.clone())),
            Arc::new(GenerateCulture::new(dice.clone())),
            Arc::new(GenerateSecondaryBodies::new(dice.clone())),
            dice,
            settings,
        )
    }

    fn seeded(seed: u64) -> GenerateStarSystem {
        orchestrator(Arc::new(SeededRandom::new(seed)), GeneratorSettings::default())
    }

    fn input() -> SystemInput {
        SystemInput {
            star_system_id: "sys-1".to_string(),
            world_id: "world-1".to_string(),
            world_name: "Meridian".to_string(),
            tech_level: 11,
        }
    }

    /// Passes draws through and keeps a copy of each.
    struct RecordingRandom {
        inner: SeededRandom,
        draws: Mutex<Vec<i32>>,
    }

    impl RandomPort for RecordingRandom {
        fn gen_range(&self, min: i32, max: i32) -> i32 {
            let value = self.inner.gen_range(min, max);
            self.draws.lock().unwrap().push(value);
            value
        }
    }

    #[test]
    fn same_seed_same_system() {
        let a = seeded(99).execute(input()).unwrap();
        let b = seeded(99).execute(input()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn replaying_draws_reproduces_the_system() {
        let recording = Arc::new(RecordingRandom {
            inner: SeededRandom::new(2024),
            draws: Mutex::new(Vec::new()),
        });
        let original = orchestrator(recording.clone(), GeneratorSettings::default())
            .execute(input())
            .unwrap();

        let draws = recording.draws.lock().unwrap().clone();
        let replayed = orchestrator(
            Arc::new(ScriptedRandom::new(draws)),
            GeneratorSettings::default(),
        )
        .execute(input())
        .unwrap();

        assert_eq!(original, replayed);
    }

    #[test]
    fn world_slot_is_reserved_and_all_orbits_unique() {
        for seed in 0..200 {
            let system = seeded(seed).execute(input()).unwrap();

            let orbits = system.body_orbits();
            let unique: HashSet<u8> = orbits.iter().copied().collect();
            assert_eq!(unique.len(), orbits.len(), "seed {}", seed);

            let world_slot = system.world.orbit_position().unwrap();
            assert_eq!(system.orbits.reserved(), Some(world_slot));
            assert!(orbits
                .iter()
                .all(|o| (1..=system.orbits.capacity()).contains(o)));
        }
    }

    #[test]
    fn world_is_fully_populated() {
        let system = seeded(7).execute(input()).unwrap();
        let world = &system.world;

        assert!(world.environment().is_some());
        let score = world.habitability_score().unwrap();
        assert!(world.population().unwrap() <= 12);
        assert!(world.inhabitants().is_some());
        assert_eq!(world.starport_class(), Some(system.starport.class()));
        assert_eq!(
            world.port_value_score(),
            Some(system.starport.port_value_score())
        );
        assert_eq!(world.cultural_traits(), system.culture.traits());
        assert_eq!(
            world.development().map(|d| d.development_score),
            Some(11.0 + score.max(0.0))
        );
        assert_eq!(world.generation_method(), GenerationMethod::Procedural);
        assert!(system.provenance.roll_for("disk_count").is_some());
        assert!(system.provenance.roll_for("planet_count").is_some());
    }

    #[test]
    fn world_prefers_the_habitable_zone() {
        for seed in 0..50 {
            let system = seeded(seed).execute(input()).unwrap();
            let layout = OrbitLayout::of(&system);
            let world_slot = system.world.orbit_position().unwrap();

            let habitable_exists = (1..=system.orbits.capacity())
                .any(|slot| layout.zone_of(slot) == Some(Zone::Habitable));
            if habitable_exists {
                assert_eq!(
                    layout.zone_of(world_slot),
                    Some(Zone::Habitable),
                    "seed {}",
                    seed
                );
            }
        }
    }

    #[test]
    fn every_body_reports_the_zone_of_its_slot() {
        for seed in 0..200 {
            let system = seeded(seed).execute(input()).unwrap();
            let layout = OrbitLayout::of(&system);

            for disk in &system.disks {
                assert_eq!(
                    Some(disk.zone()),
                    layout.zone_of(disk.orbit_position()),
                    "seed {} disk {}",
                    seed,
                    disk.id()
                );
            }
            for planet in &system.planets {
                assert_eq!(
                    Some(planet.zone()),
                    layout.zone_of(planet.orbit_position()),
                    "seed {} planet {}",
                    seed,
                    planet.id()
                );
            }
        }
    }

    #[test]
    fn single_slot_system_holds_only_the_world() {
        let settings = GeneratorSettings {
            orbit_slots: 1,
            ..GeneratorSettings::default()
        };
        let system = orchestrator(Arc::new(SeededRandom::new(5)), settings)
            .execute(input())
            .unwrap();

        assert_eq!(system.world.orbit_position(), Some(1));
        assert!(system.disks.is_empty());
        assert!(system.planets.is_empty());
    }

    #[test]
    fn invalid_input_fails_before_any_draw() {
        let mut random = MockRandomPort::new();
        random.expect_gen_range().never();
        let generator = orchestrator(Arc::new(random), GeneratorSettings::default());

        let err = generator
            .execute(SystemInput {
                tech_level: 25,
                ..input()
            })
            .unwrap_err();
        assert_eq!(err.field(), Some("tech_level"));
    }

    #[test]
    fn zero_orbit_slots_is_rejected() {
        let mut random = MockRandomPort::new();
        random.expect_gen_range().never();
        let settings = GeneratorSettings {
            orbit_slots: 0,
            ..GeneratorSettings::default()
        };

        let err = orchestrator(Arc::new(random), settings)
            .execute(input())
            .unwrap_err();
        assert_eq!(err.field(), Some("orbit_slots"));
    }

    #[test]
    fn reroll_planet_keeps_slot_and_id() {
        let system = (0..50)
            .map(|seed| seeded(seed).execute(input()).unwrap())
            .find(|s| !s.planets.is_empty())
            .unwrap();
        let target = system.planets[0].clone();

        let bodies = GenerateSecondaryBodies::new(DiceRoller::new(Arc::new(SeededRandom::new(1))));
        let rerolled = bodies
            .reroll_planet(&system, target.orbit_position())
            .unwrap();

        let fresh = rerolled.planet_at(target.orbit_position()).unwrap();
        assert_eq!(fresh.id(), target.id());
        assert_eq!(fresh.distance_au(), target.distance_au());
        assert_eq!(
            fresh.provenance().roll_for("orbit"),
            target.provenance().roll_for("orbit")
        );
        assert_eq!(rerolled.planets.len(), system.planets.len());
        assert_eq!(rerolled.world, system.world);
        assert_eq!(rerolled.disks, system.disks);
        assert_eq!(rerolled.body_orbits(), system.body_orbits());
        if fresh.planet_type() == PlanetType::Belt {
            assert!(fresh.moons().is_empty());
        }
    }

    #[test]
    fn partial_rerolls_reach_the_world_through_its_setters() {
        let system = seeded(11).execute(input()).unwrap();
        let dice = DiceRoller::new(Arc::new(SeededRandom::new(4)));
        let later = Utc.with_ymd_and_hms(2300, 6, 1, 0, 0, 0).unwrap();

        let starport =
            GenerateStarport::new(dice.clone()).reroll_base(&system.starport, BaseType::Scout);
        let culture =
            GenerateCulture::new(dice).reroll_category(&system.culture, CultureCategory::Economic);

        let mut world = system.world.clone();
        world.set_starport(&starport, later);
        world.set_culture(&culture, later);

        assert_eq!(world.starport_class(), Some(starport.class()));
        assert_eq!(world.cultural_traits(), culture.traits());
        assert_eq!(world.generation_method(), GenerationMethod::Custom);
        assert_eq!(world.updated_at(), later);
        assert_eq!(system.world.generation_method(), GenerationMethod::Procedural);
    }

    #[test]
    fn reroll_of_empty_slot_names_the_orbit() {
        let system = seeded(3).execute(input()).unwrap();
        let world_slot = system.world.orbit_position().unwrap();

        let bodies = GenerateSecondaryBodies::new(DiceRoller::new(Arc::new(SeededRandom::new(1))));
        let err = bodies.reroll_planet(&system, world_slot).unwrap_err();
        assert_eq!(err.field(), Some("orbit"));
    }
}
