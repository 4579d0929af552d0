//! Across many seeded systems no two bodies share an orbit slot.

use std::collections::HashSet;

use starsmith_engine::infrastructure::settings::EngineSettings;
use starsmith_engine::use_cases::SystemInput;
use starsmith_engine::App;

fn input(run: u64) -> SystemInput {
    SystemInput {
        star_system_id: format!("sys-{}", run),
        world_id: format!("world-{}", run),
        world_name: "Tessaly".to_string(),
        tech_level: (run % 21) as i64,
    }
}

#[test]
fn no_two_bodies_share_a_slot_over_a_thousand_systems() {
    for run in 0..1000u64 {
        let app = App::new(EngineSettings {
            seed: Some(run),
            ..EngineSettings::default()
        });
        let system = app.use_cases.system.execute(input(run)).unwrap();

        let orbits = system.body_orbits();
        let unique: HashSet<u8> = orbits.iter().copied().collect();
        assert_eq!(unique.len(), orbits.len(), "run {}: {:?}", run, orbits);

        let world_slot = system.world.orbit_position().unwrap();
        assert_eq!(system.orbits.reserved(), Some(world_slot), "run {}", run);
        assert!(system.disks.iter().all(|d| d.orbit_position() != world_slot));
        assert!(system.planets.iter().all(|p| p.orbit_position() != world_slot));

        for planet in &system.planets {
            let moons: HashSet<u8> = planet.moons().iter().map(|m| m.orbit_position()).collect();
            assert_eq!(moons.len(), planet.moons().len(), "run {}", run);
        }
    }
}

#[test]
fn small_systems_never_overfill() {
    for run in 0..200u64 {
        let app = App::new(EngineSettings {
            seed: Some(run),
            orbit_slots: 4,
            ..EngineSettings::default()
        });
        let system = app.use_cases.system.execute(input(run)).unwrap();

        let orbits = system.body_orbits();
        assert!(orbits.len() <= 4);
        assert!(orbits.iter().all(|o| (1..=4).contains(o)));
    }
}
