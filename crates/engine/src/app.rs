//! Application state and composition.

use std::sync::Arc;

use crate::dice::DiceRoller;
use crate::infrastructure::{
    clock::SystemClock,
    ports::{ClockPort, RandomPort},
    random::{SeededRandom, SystemRandom},
    settings::EngineSettings,
};
use crate::use_cases;

/// Main application state.
///
/// Every generator shares one dice roller, so a seeded source drives the
/// whole system.
pub struct App {
    pub use_cases: UseCases,
    pub settings: EngineSettings,
}

/// Container for all use cases.
pub struct UseCases {
    pub star: Arc<use_cases::GenerateStar>,
    pub world: Arc<use_cases::GenerateWorld>,
    pub environment: Arc<use_cases::RollEnvironment>,
    pub inhabitants: Arc<use_cases::GenerateInhabitants>,
    pub starport: Arc<use_cases::GenerateStarport>,
    pub culture: Arc<use_cases::GenerateCulture>,
    pub secondary: Arc<use_cases::GenerateSecondaryBodies>,
    pub system: Arc<use_cases::GenerateStarSystem>,
}

impl UseCases {
    pub fn new(
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        settings: use_cases::GeneratorSettings,
    ) -> Self {
        let dice = DiceRoller::new(random);

        let star = Arc::new(use_cases::GenerateStar::new(dice.clone()));
        let world = Arc::new(use_cases::GenerateWorld::new(dice.clone(), clock));
        let environment = Arc::new(use_cases::RollEnvironment::new(dice.clone()));
        let inhabitants = Arc::new(use_cases::GenerateInhabitants::new(dice.clone()));
        let starport = Arc::new(use_cases::GenerateStarport::new(dice.clone()));
        let culture = Arc::new(use_cases::GenerateCulture::new(dice.clone()));
        let secondary = Arc::new(use_cases::GenerateSecondaryBodies::new(dice.clone()));

        let system = Arc::new(use_cases::GenerateStarSystem::new(
            star.clone(),
            world.clone(),
            environment.clone(),
            inhabitants.clone(),
            starport.clone(),
            culture.clone(),
            secondary.clone(),
            dice,
            settings,
        ));

        Self {
            star,
            world,
            environment,
            inhabitants,
            starport,
            culture,
            secondary,
            system,
        }
    }
}

impl App {
    /// Wire the generators from settings. A configured seed selects the
    /// seeded source, otherwise the thread RNG.
    pub fn new(settings: EngineSettings) -> Self {
        let random: Arc<dyn RandomPort> = match settings.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(SystemRandom::new()),
        };
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        Self::with_ports(settings, random, clock)
    }

    pub fn with_ports(
        settings: EngineSettings,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let use_cases = UseCases::new(random, clock, settings.generator_settings());
        Self {
            use_cases,
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::use_cases::SystemInput;
    use chrono::{TimeZone, Utc};

    fn input() -> SystemInput {
        SystemInput {
            star_system_id: "sys-9".to_string(),
            world_id: "world-9".to_string(),
            world_name: "Halcyon".to_string(),
            tech_level: 9,
        }
    }

    #[test]
    fn seeded_apps_generate_the_same_system() {
        let settings = EngineSettings {
            seed: Some(31),
            ..EngineSettings::default()
        };
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2310, 6, 1, 0, 0, 0).unwrap()));

        let a = App::with_ports(settings.clone(), Arc::new(SeededRandom::new(31)), clock.clone());
        let b = App::with_ports(settings, Arc::new(SeededRandom::new(31)), clock);

        assert_eq!(
            a.use_cases.system.execute(input()).unwrap(),
            b.use_cases.system.execute(input()).unwrap()
        );
    }

    #[test]
    fn settings_reach_the_orchestrator() {
        let settings = EngineSettings {
            seed: Some(4),
            orbit_slots: 3,
            ..EngineSettings::default()
        };
        let app = App::new(settings);

        assert_eq!(app.use_cases.system.settings().orbit_slots, 3);
        let system = app.use_cases.system.execute(input()).unwrap();
        assert_eq!(system.orbits.capacity(), 3);
        assert!(system.body_orbits().len() <= 3);
    }
}
