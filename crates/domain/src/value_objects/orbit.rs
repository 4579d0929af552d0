//! Orbit slots and their occupancy

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Default number of orbit slots around a primary.
pub const DEFAULT_ORBIT_SLOTS: u8 = 12;

/// Occupancy of the orbit slots of one star system
///
/// Slots are numbered `1..=capacity`. The primary world's slot is reserved:
/// it is never free, and it is never handed out again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitRegistry {
    capacity: u8,
    reserved: Option<u8>,
    occupied: BTreeSet<u8>,
}

impl OrbitRegistry {
    pub fn new(capacity: u8) -> Result<Self, DomainError> {
        if capacity == 0 {
            return Err(DomainError::invalid_parameter(
                "orbit_slots",
                "a system needs at least one orbit slot",
            ));
        }
        Ok(Self {
            capacity,
            reserved: None,
            occupied: BTreeSet::new(),
        })
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn reserved(&self) -> Option<u8> {
        self.reserved
    }

    fn check_slot(&self, slot: u8) -> Result<(), DomainError> {
        if slot == 0 || slot > self.capacity {
            return Err(DomainError::invalid_parameter(
                "orbit",
                format!("slot {} is outside 1-{}", slot, self.capacity),
            ));
        }
        Ok(())
    }

    /// Reserve the primary world's slot.
    pub fn reserve(&mut self, slot: u8) -> Result<(), DomainError> {
        self.check_slot(slot)?;
        if let Some(existing) = self.reserved {
            return Err(DomainError::validation(format!(
                "slot {} is already reserved for the primary world",
                existing
            )));
        }
        if self.occupied.contains(&slot) {
            return Err(DomainError::invalid_parameter(
                "orbit",
                format!("slot {} is already occupied", slot),
            ));
        }
        self.reserved = Some(slot);
        Ok(())
    }

    pub fn is_free(&self, slot: u8) -> bool {
        slot >= 1
            && slot <= self.capacity
            && self.reserved != Some(slot)
            && !self.occupied.contains(&slot)
    }

    /// Free slots in ascending order.
    pub fn free_slots(&self) -> Vec<u8> {
        (1..=self.capacity).filter(|s| self.is_free(*s)).collect()
    }

    pub fn has_free_slot(&self) -> bool {
        (1..=self.capacity).any(|s| self.is_free(s))
    }

    /// Claim a free slot for a secondary body. Never overwrites.
    pub fn occupy(&mut self, slot: u8) -> Result<(), DomainError> {
        self.check_slot(slot)?;
        if !self.is_free(slot) {
            return Err(DomainError::invalid_parameter(
                "orbit",
                format!("slot {} is already taken", slot),
            ));
        }
        self.occupied.insert(slot);
        Ok(())
    }

    /// Give a slot back, e.g. before re-rolling the body in it.
    pub fn release(&mut self, slot: u8) -> bool {
        self.occupied.remove(&slot)
    }

    /// Slots held by secondary bodies.
    pub fn occupied(&self) -> impl Iterator<Item = u8> + '_ {
        self.occupied.iter().copied()
    }
}
