//! Star system aggregate

use serde::{Deserialize, Serialize};

use super::culture::CultureProfile;
use super::secondary::{DiskRecord, PlanetRecord};
use super::star::{CompanionSet, StarRecord, SystemType};
use super::starport::StarportRecord;
use super::world::WorldRecord;
use crate::value_objects::{OrbitRegistry, Provenance, StellarZones};
use crate::StarSystemId;

/// Provenance field names for system-level rolls
pub mod fields {
    pub const DISK_COUNT: &str = "disk_count";
    pub const PLANET_COUNT: &str = "planet_count";
}

/// Everything generated for one star system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub id: StarSystemId,
    pub primary: StarRecord,
    pub companions: CompanionSet,
    pub zones: StellarZones,
    pub orbits: OrbitRegistry,
    pub world: WorldRecord,
    pub starport: StarportRecord,
    pub culture: CultureProfile,
    pub disks: Vec<DiskRecord>,
    pub planets: Vec<PlanetRecord>,
    /// System-level rolls: disk and planet counts
    pub provenance: Provenance,
}

impl StarSystem {
    pub fn system_type(&self) -> SystemType {
        self.companions.system_type()
    }

    /// Orbit slot of every body, primary world first.
    pub fn body_orbits(&self) -> Vec<u8> {
        self.world
            .orbit_position()
            .into_iter()
            .chain(self.disks.iter().map(|d| d.orbit_position()))
            .chain(self.planets.iter().map(|p| p.orbit_position()))
            .collect()
    }

    pub fn planet_at(&self, orbit: u8) -> Option<&PlanetRecord> {
        self.planets.iter().find(|p| p.orbit_position() == orbit)
    }

    /// Swap in a planet for the one in the same slot. Returns false when no
    /// planet holds that slot.
    pub fn replace_planet(&mut self, planet: PlanetRecord) -> bool {
        match self
            .planets
            .iter_mut()
            .find(|p| p.orbit_position() == planet.orbit_position())
        {
            Some(slot) => {
                *slot = planet;
                true
            }
            None => false,
        }
    }
}
