//! Secondary-body generator - disks, planets and their moons.
//!
//! Every body claims a free slot from the system's [`OrbitRegistry`]. When
//! the registry runs out the generator reports `NoAvailableOrbit`; it never
//! places two bodies in one slot.

use starsmith_domain::entities::secondary::fields;
use starsmith_domain::tables::{
    moon_count, orbit_distance_au, ACCRETION_MASS_FACTOR, BELT_DENSITY_TABLE,
    BELT_WIDTH_PER_PIP_AU, DISK_COUNT_TABLE, DISK_MASS_PER_PIP, DISK_TYPE_TABLE, DISK_ZONE_TABLE,
    GAS_GIANT_SIZE_TABLE, ICE_GIANT_SIZE_TABLE, MOON_SIZE_PER_PIP_KM, MOON_TYPE_TABLE,
    PLANET_TYPE_TABLE,
};
use starsmith_domain::{
    BodyId, DiceRoll, DiskRecord, DiskType, MoonRecord, OrbitPlacement, OrbitRegistry,
    PlanetBody, PlanetRecord, PlanetType, Provenance, RollRecord, StarSystem, StarSystemId,
    StellarZones, Zone,
};

use super::GenerationError;
use crate::dice::DiceRoller;

/// Planets per system: 1D6 plus this.
pub const PLANET_COUNT_BONUS: i32 = 2;

/// Where a system's bodies can go.
#[derive(Debug, Clone, Copy)]
pub struct OrbitLayout<'a> {
    pub star_system_id: &'a StarSystemId,
    pub zones: &'a StellarZones,
    /// Luminosity of the primary, in L☉
    pub luminosity: f64,
}

impl<'a> OrbitLayout<'a> {
    pub fn of(system: &'a StarSystem) -> Self {
        Self {
            star_system_id: &system.id,
            zones: &system.zones,
            luminosity: system.primary.luminosity(),
        }
    }

    /// Distance of `slot` in AU; `None` for slot 0.
    pub fn distance(&self, slot: u8) -> Option<f64> {
        orbit_distance_au(slot, self.luminosity)
    }

    pub fn zone_of(&self, slot: u8) -> Option<Zone> {
        self.distance(slot).map(|au| self.zones.zone_of(au))
    }

    /// Distance and zone of a slot a body is about to take.
    pub fn place(&self, slot: u8) -> Result<OrbitPlacement, GenerationError> {
        let distance_au = self.distance(slot).ok_or_else(|| {
            GenerationError::invalid_parameter("orbit", "orbit slots are numbered from 1")
        })?;
        Ok(OrbitPlacement {
            orbit_position: slot,
            distance_au,
            zone: self.zones.zone_of(distance_au),
        })
    }

    fn exhausted(&self, orbits: &OrbitRegistry) -> GenerationError {
        GenerationError::NoAvailableOrbit {
            star_system_id: self.star_system_id.to_string(),
            capacity: orbits.capacity(),
        }
    }
}

/// A free slot for a body that belongs in `zone`.
///
/// Picks uniformly among the free slots inside the zone and returns the draw.
/// With none free there, takes the free slot closest to the zone (lowest slot
/// on ties) without drawing. `None` when every slot is taken.
pub fn choose_slot_near_zone(
    dice: &DiceRoller,
    layout: &OrbitLayout<'_>,
    orbits: &OrbitRegistry,
    zone: Zone,
) -> Option<(u8, Option<RollRecord>)> {
    let free = orbits.free_slots();
    let in_zone: Vec<u8> = free
        .iter()
        .copied()
        .filter(|slot| layout.zone_of(*slot) == Some(zone))
        .collect();
    if let Some((slot, roll)) = dice.pick_from(&in_zone) {
        return Some((slot, Some(roll)));
    }

    let gap = |slot: u8| {
        layout
            .distance(slot)
            .map_or(f64::INFINITY, |au| layout.zones.distance_to(zone, au))
    };
    free.into_iter()
        .min_by(|a, b| gap(*a).total_cmp(&gap(*b)))
        .map(|slot| (slot, None))
}

pub struct GenerateSecondaryBodies {
    dice: DiceRoller,
}

impl GenerateSecondaryBodies {
    pub fn new(dice: DiceRoller) -> Self {
        Self { dice }
    }

    // =========================================================================
    // Counts
    // =========================================================================

    pub fn roll_disk_count(&self) -> (usize, DiceRoll) {
        let roll = self.dice.roll_1d6();
        (*DISK_COUNT_TABLE.lookup(roll.total), roll)
    }

    pub fn roll_planet_count(&self) -> (usize, DiceRoll) {
        let roll = self.dice.roll_1d6();
        let count = (roll.total + PLANET_COUNT_BONUS).max(0) as usize;
        (count, roll)
    }

    // =========================================================================
    // Disks
    // =========================================================================

    /// Roll order: zone, type, mass, then the slot. The disk reports the zone
    /// of the slot it lands in; the rolled zone is kept alongside.
    pub fn generate_disk(
        &self,
        layout: &OrbitLayout<'_>,
        orbits: &mut OrbitRegistry,
    ) -> Result<DiskRecord, GenerationError> {
        if !orbits.has_free_slot() {
            return Err(layout.exhausted(orbits));
        }
        let mut provenance = Provenance::procedural();

        let roll = self.dice.roll_2d6();
        let rolled_zone = *DISK_ZONE_TABLE.lookup(roll.total);
        provenance.record(fields::ZONE, roll);

        let roll = self.dice.roll_2d6();
        let disk_type = *DISK_TYPE_TABLE.lookup(roll.total);
        provenance.record(fields::TYPE, roll);

        let roll = self.dice.roll_2d6();
        let factor = match disk_type {
            DiskType::Protoplanetary => 1.0,
            DiskType::Accretion => ACCRETION_MASS_FACTOR,
        };
        let mass = f64::from(roll.total) * DISK_MASS_PER_PIP * factor;
        provenance.record(fields::MASS, roll);

        let (slot, slot_roll) = choose_slot_near_zone(&self.dice, layout, orbits, rolled_zone)
            .ok_or_else(|| layout.exhausted(orbits))?;
        let placement = layout.place(slot)?;
        orbits.occupy(slot)?;
        if let Some(roll) = slot_roll {
            provenance.record(fields::ORBIT, roll);
        }

        Ok(DiskRecord::new(
            layout.star_system_id.body("disk", slot),
            placement,
            rolled_zone,
            disk_type,
            mass,
            provenance,
        ))
    }

    /// Up to `count` disks; stops early with a warning when slots run out.
    pub fn generate_disks(
        &self,
        layout: &OrbitLayout<'_>,
        orbits: &mut OrbitRegistry,
        count: usize,
    ) -> Result<Vec<DiskRecord>, GenerationError> {
        let mut disks = Vec::with_capacity(count);
        for _ in 0..count {
            match self.generate_disk(layout, orbits) {
                Ok(disk) => disks.push(disk),
                Err(e) if e.is_capacity() => {
                    tracing::warn!(
                        star_system_id = %layout.star_system_id,
                        requested = count,
                        placed = disks.len(),
                        "Orbit slots exhausted while placing disks"
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(disks)
    }

    // =========================================================================
    // Planets
    // =========================================================================

    /// Slot first (uniform among free slots), then the body and its moons.
    pub fn generate_planet(
        &self,
        layout: &OrbitLayout<'_>,
        orbits: &mut OrbitRegistry,
    ) -> Result<PlanetRecord, GenerationError> {
        let (slot, slot_roll) = self
            .dice
            .pick_from(&orbits.free_slots())
            .ok_or_else(|| layout.exhausted(orbits))?;
        orbits.occupy(slot)?;

        let provenance = Provenance::procedural().with_roll(fields::ORBIT, slot_roll);
        self.build_planet(layout, slot, provenance)
    }

    /// Up to `count` planets; stops early with a warning when slots run out.
    pub fn generate_planets(
        &self,
        layout: &OrbitLayout<'_>,
        orbits: &mut OrbitRegistry,
        count: usize,
    ) -> Result<Vec<PlanetRecord>, GenerationError> {
        let mut planets = Vec::with_capacity(count);
        for _ in 0..count {
            match self.generate_planet(layout, orbits) {
                Ok(planet) => planets.push(planet),
                Err(e) if e.is_capacity() => {
                    tracing::warn!(
                        star_system_id = %layout.star_system_id,
                        requested = count,
                        placed = planets.len(),
                        "Orbit slots exhausted while placing planets"
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(planets)
    }

    /// Roll everything about a planet in an already claimed slot.
    fn build_planet(
        &self,
        layout: &OrbitLayout<'_>,
        slot: u8,
        mut provenance: Provenance,
    ) -> Result<PlanetRecord, GenerationError> {
        let placement = layout.place(slot)?;
        let id = layout.star_system_id.body("planet", slot);

        let roll = self.dice.roll_2d6();
        let planet_type = *PLANET_TYPE_TABLE.lookup(roll.total);
        provenance.record(fields::TYPE, roll);

        let body = match planet_type {
            PlanetType::GasGiant | PlanetType::IceGiant => {
                let table = if planet_type == PlanetType::GasGiant {
                    &*GAS_GIANT_SIZE_TABLE
                } else {
                    &*ICE_GIANT_SIZE_TABLE
                };
                let roll = self.dice.roll_2d6();
                let class = *table.lookup(roll.total);
                provenance.record(fields::SIZE, roll);

                let roll = self.dice.roll_2d6();
                let mass = f64::from(roll.total) * class.mass_per_pip;
                provenance.record(fields::MASS, roll);

                if planet_type == PlanetType::GasGiant {
                    PlanetBody::GasGiant {
                        size: class.size,
                        diameter: class.diameter,
                        mass,
                    }
                } else {
                    PlanetBody::IceGiant {
                        size: class.size,
                        diameter: class.diameter,
                        mass,
                    }
                }
            }
            PlanetType::Belt => {
                let roll = self.dice.roll_2d6();
                let density = *BELT_DENSITY_TABLE.lookup(roll.total);
                provenance.record(fields::DENSITY, roll);

                let roll = self.dice.roll_2d6();
                let width_au = f64::from(roll.total) * BELT_WIDTH_PER_PIP_AU;
                provenance.record(fields::WIDTH, roll);

                PlanetBody::Belt { density, width_au }
            }
        };

        let moons = self.generate_moons(&id, planet_type, &mut provenance);

        tracing::debug!(
            body_id = %id,
            orbit = slot,
            planet_type = ?planet_type,
            moons = moons.len(),
            "Planet generated"
        );

        Ok(PlanetRecord::new(id, placement, body, moons, provenance))
    }

    // =========================================================================
    // Moons
    // =========================================================================

    /// Moons of a planet, numbered from 1. Belts have none and roll nothing.
    pub fn generate_moons(
        &self,
        planet_id: &BodyId,
        planet_type: PlanetType,
        planet_provenance: &mut Provenance,
    ) -> Vec<MoonRecord> {
        if !planet_type.is_giant() {
            return Vec::new();
        }
        let roll = self.dice.roll_1d6();
        let count = moon_count(planet_type, roll.total);
        planet_provenance.record(fields::MOON_COUNT, roll);

        (1..=count)
            .map(|orbit| {
                let mut provenance = Provenance::procedural();

                let roll = self.dice.roll_2d6();
                let moon_type = *MOON_TYPE_TABLE.lookup(roll.total);
                provenance.record(fields::TYPE, roll);

                let roll = self.dice.roll_2d6();
                let diameter_km = f64::from(roll.total) * MOON_SIZE_PER_PIP_KM;
                provenance.record(fields::SIZE, roll);

                MoonRecord::new(planet_id.moon(orbit), orbit, moon_type, diameter_km, provenance)
            })
            .collect()
    }

    // =========================================================================
    // Re-rolls
    // =========================================================================

    /// A copy of `system` with the planet in `orbit` rolled again in place.
    ///
    /// The planet keeps its slot, id and slot draw; everything else is fresh.
    pub fn reroll_planet(
        &self,
        system: &StarSystem,
        orbit: u8,
    ) -> Result<StarSystem, GenerationError> {
        let planet = system.planet_at(orbit).ok_or_else(|| {
            GenerationError::invalid_parameter("orbit", format!("no planet in slot {}", orbit))
        })?;

        let mut provenance = Provenance::procedural();
        if let Some(roll) = planet.provenance().roll_for(fields::ORBIT) {
            provenance.record(fields::ORBIT, roll.clone());
        }
        let fresh = self.build_planet(&OrbitLayout::of(system), orbit, provenance)?;

        let mut next = system.clone();
        next.replace_planet(fresh);
        Ok(next)
    }
}
