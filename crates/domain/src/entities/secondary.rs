//! Secondary bodies - disks, planets, and moons

use serde::{Deserialize, Serialize};

use crate::value_objects::{Provenance, Zone};
use crate::BodyId;

/// Provenance field names for secondary-body rolls
pub mod fields {
    pub const ZONE: &str = "zone";
    pub const TYPE: &str = "type";
    pub const MASS: &str = "mass";
    pub const ORBIT: &str = "orbit";
    pub const SIZE: &str = "size";
    pub const DENSITY: &str = "density";
    pub const WIDTH: &str = "width";
    pub const MOON_COUNT: &str = "moon_count";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiskType {
    Protoplanetary,
    Accretion,
}

/// Where a body sits: its slot, that slot's distance, and the zone the
/// distance falls in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitPlacement {
    pub orbit_position: u8,
    pub distance_au: f64,
    pub zone: Zone,
}

/// A circumstellar disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskRecord {
    id: BodyId,
    #[serde(flatten)]
    placement: OrbitPlacement,
    /// Zone the disk was rolled for; differs from `zone` when that zone had
    /// no free slot
    rolled_zone: Zone,
    disk_type: DiskType,
    /// Earth masses
    mass: f64,
    provenance: Provenance,
}

impl DiskRecord {
    pub fn new(
        id: BodyId,
        placement: OrbitPlacement,
        rolled_zone: Zone,
        disk_type: DiskType,
        mass: f64,
        provenance: Provenance,
    ) -> Self {
        Self {
            id,
            placement,
            rolled_zone,
            disk_type,
            mass,
            provenance,
        }
    }

    pub fn id(&self) -> &BodyId {
        &self.id
    }

    pub fn placement(&self) -> OrbitPlacement {
        self.placement
    }

    pub fn orbit_position(&self) -> u8 {
        self.placement.orbit_position
    }

    pub fn distance_au(&self) -> f64 {
        self.placement.distance_au
    }

    /// Zone of the slot the disk occupies.
    pub fn zone(&self) -> Zone {
        self.placement.zone
    }

    pub fn rolled_zone(&self) -> Zone {
        self.rolled_zone
    }

    pub fn disk_type(&self) -> DiskType {
        self.disk_type
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetType {
    Belt,
    GasGiant,
    IceGiant,
}

impl PlanetType {
    pub fn is_giant(&self) -> bool {
        !matches!(self, PlanetType::Belt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiantSize {
    Small,
    Standard,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeltDensity {
    Sparse,
    Moderate,
    Dense,
}

/// Type-specific attributes of a planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanetBody {
    #[serde(rename_all = "camelCase")]
    GasGiant {
        size: GiantSize,
        /// Earth diameters
        diameter: f64,
        /// Earth masses
        mass: f64,
    },
    #[serde(rename_all = "camelCase")]
    IceGiant {
        size: GiantSize,
        diameter: f64,
        mass: f64,
    },
    #[serde(rename_all = "camelCase")]
    Belt { density: BeltDensity, width_au: f64 },
}

impl PlanetBody {
    pub fn planet_type(&self) -> PlanetType {
        match self {
            PlanetBody::GasGiant { .. } => PlanetType::GasGiant,
            PlanetBody::IceGiant { .. } => PlanetType::IceGiant,
            PlanetBody::Belt { .. } => PlanetType::Belt,
        }
    }

    pub fn mass(&self) -> Option<f64> {
        match self {
            PlanetBody::GasGiant { mass, .. } | PlanetBody::IceGiant { mass, .. } => Some(*mass),
            PlanetBody::Belt { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonType {
    Captured,
    Rocky,
    Icy,
}

/// A moon of a planet; its orbit position is unique within that planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonRecord {
    id: BodyId,
    orbit_position: u8,
    moon_type: MoonType,
    diameter_km: f64,
    provenance: Provenance,
}

impl MoonRecord {
    pub fn new(
        id: BodyId,
        orbit_position: u8,
        moon_type: MoonType,
        diameter_km: f64,
        provenance: Provenance,
    ) -> Self {
        Self {
            id,
            orbit_position,
            moon_type,
            diameter_km,
            provenance,
        }
    }

    pub fn id(&self) -> &BodyId {
        &self.id
    }

    pub fn orbit_position(&self) -> u8 {
        self.orbit_position
    }

    pub fn moon_type(&self) -> MoonType {
        self.moon_type
    }

    pub fn diameter_km(&self) -> f64 {
        self.diameter_km
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }
}

/// A planet or belt in an orbit slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRecord {
    id: BodyId,
    #[serde(flatten)]
    placement: OrbitPlacement,
    body: PlanetBody,
    moons: Vec<MoonRecord>,
    provenance: Provenance,
}

impl PlanetRecord {
    pub fn new(
        id: BodyId,
        placement: OrbitPlacement,
        body: PlanetBody,
        moons: Vec<MoonRecord>,
        provenance: Provenance,
    ) -> Self {
        Self {
            id,
            placement,
            body,
            moons,
            provenance,
        }
    }

    pub fn id(&self) -> &BodyId {
        &self.id
    }

    pub fn placement(&self) -> OrbitPlacement {
        self.placement
    }

    pub fn orbit_position(&self) -> u8 {
        self.placement.orbit_position
    }

    pub fn distance_au(&self) -> f64 {
        self.placement.distance_au
    }

    pub fn zone(&self) -> Zone {
        self.placement.zone
    }

    pub fn body(&self) -> &PlanetBody {
        &self.body
    }

    pub fn moons(&self) -> &[MoonRecord] {
        &self.moons
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn planet_type(&self) -> PlanetType {
        self.body.planet_type()
    }
}
