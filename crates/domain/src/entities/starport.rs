//! Starport - port class, capabilities, and bases

use serde::{Deserialize, Serialize};

use crate::tables::{base_target, capabilities};
use crate::value_objects::{DiceRoll, Provenance, RollRecord, TechLevel};
use crate::WorldId;

/// Starport quality, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StarportClass {
    X,
    E,
    D,
    C,
    B,
    A,
}

impl StarportClass {
    pub const ALL: [StarportClass; 6] = [
        StarportClass::X,
        StarportClass::E,
        StarportClass::D,
        StarportClass::C,
        StarportClass::B,
        StarportClass::A,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            StarportClass::A => "Excellent",
            StarportClass::B => "Good",
            StarportClass::C => "Routine",
            StarportClass::D => "Poor",
            StarportClass::E => "Frontier",
            StarportClass::X => "No starport",
        }
    }
}

impl std::fmt::Display for StarportClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            StarportClass::X => "X",
            StarportClass::E => "E",
            StarportClass::D => "D",
            StarportClass::C => "C",
            StarportClass::B => "B",
            StarportClass::A => "A",
        };
        write!(f, "{}", letter)
    }
}

/// Service offered by a starport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    RefinedFuel,
    UnrefinedFuel,
    StarshipShipyard,
    SpacecraftShipyard,
    Overhaul,
    RepairFacilities,
    MinorRepairs,
    Highport,
    LandingBeacon,
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::RefinedFuel => "Refined fuel",
            Capability::UnrefinedFuel => "Unrefined fuel",
            Capability::StarshipShipyard => "Starship shipyard",
            Capability::SpacecraftShipyard => "Spacecraft shipyard",
            Capability::Overhaul => "Overhaul",
            Capability::RepairFacilities => "Repair facilities",
            Capability::MinorRepairs => "Minor repairs",
            Capability::Highport => "Highport",
            Capability::LandingBeacon => "Landing beacon",
        }
    }
}

/// Kind of base that may operate at a starport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseType {
    Naval,
    Scout,
    Pirate,
    Research,
    Military,
}

impl BaseType {
    /// Roll order for base presence.
    pub const ALL: [BaseType; 5] = [
        BaseType::Naval,
        BaseType::Scout,
        BaseType::Pirate,
        BaseType::Research,
        BaseType::Military,
    ];

    /// Provenance field for this base's presence roll.
    pub fn field(&self) -> &'static str {
        match self {
            BaseType::Naval => "base.naval",
            BaseType::Scout => "base.scout",
            BaseType::Pirate => "base.pirate",
            BaseType::Research => "base.research",
            BaseType::Military => "base.military",
        }
    }
}

impl std::fmt::Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BaseType::Naval => "naval",
            BaseType::Scout => "scout",
            BaseType::Pirate => "pirate",
            BaseType::Research => "research",
            BaseType::Military => "military",
        };
        write!(f, "{}", label)
    }
}

/// Whether one base type is present
///
/// `target` is absent when the base cannot exist at the port's class.
/// `roll` is absent when no roll was made: either there was no target or the
/// value was set by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePresence {
    pub base_type: BaseType,
    pub present: bool,
    pub target: Option<u8>,
    pub roll: Option<DiceRoll>,
}

impl BasePresence {
    /// Outcome for a base that cannot exist at this class.
    pub fn impossible(base_type: BaseType) -> Self {
        Self {
            base_type,
            present: false,
            target: None,
            roll: None,
        }
    }

    pub fn rolled(base_type: BaseType, target: u8, roll: DiceRoll) -> Self {
        Self {
            base_type,
            present: roll.total >= i32::from(target),
            target: Some(target),
            roll: Some(roll),
        }
    }
}

/// Port Value Score: `floor(score / 4) + (TL - 7) + wealth + development`.
pub fn port_value_score(
    habitability_score: f64,
    tech_level: TechLevel,
    wealth_modifier: i32,
    development_modifier: i32,
) -> i32 {
    let habitability = (habitability_score / 4.0).floor() as i32;
    habitability + (tech_level.as_i32() - TechLevel::PORT_BASELINE) + wealth_modifier + development_modifier
}

/// A world's starport
///
/// Class, score and capabilities are fixed once classified. Bases change
/// only through [`StarportRecord::with_rerolled_base`] and
/// [`StarportRecord::set_base_presence`], both of which leave provenance
/// `Custom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarportRecord {
    world_id: WorldId,
    class: StarportClass,
    port_value_score: i32,
    capabilities: Vec<Capability>,
    /// One entry per base type, in roll order
    bases: Vec<BasePresence>,
    provenance: Provenance,
}

impl StarportRecord {
    /// A classified port. Capabilities follow from the class.
    pub fn new(
        world_id: WorldId,
        class: StarportClass,
        port_value_score: i32,
        bases: Vec<BasePresence>,
        provenance: Provenance,
    ) -> Self {
        Self {
            world_id,
            class,
            port_value_score,
            capabilities: capabilities(class),
            bases,
            provenance,
        }
    }

    pub fn world_id(&self) -> &WorldId {
        &self.world_id
    }

    pub fn class(&self) -> StarportClass {
        self.class
    }

    pub fn port_value_score(&self) -> i32 {
        self.port_value_score
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn bases(&self) -> &[BasePresence] {
        &self.bases
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn base(&self, base_type: BaseType) -> Option<&BasePresence> {
        self.bases.iter().find(|b| b.base_type == base_type)
    }

    /// Base types that are present.
    pub fn present_bases(&self) -> impl Iterator<Item = BaseType> + '_ {
        self.bases.iter().filter(|b| b.present).map(|b| b.base_type)
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// A copy with one base replaced by a fresh outcome. Its old roll gives
    /// way to the new one.
    pub fn with_rerolled_base(&self, presence: BasePresence) -> Self {
        let field = presence.base_type.field();
        let fresh: Vec<RollRecord> = presence.roll.iter().cloned().map(RollRecord::from).collect();
        let mut next = self.clone();
        next.replace_base(presence);
        next.provenance.replace_rolls(field, fresh);
        next
    }

    /// Set a base by hand. No roll is recorded.
    pub fn set_base_presence(&mut self, base_type: BaseType, present: bool) {
        self.replace_base(BasePresence {
            base_type,
            present,
            target: base_target(base_type, self.class),
            roll: None,
        });
        self.provenance.override_field(base_type.field());
    }

    fn replace_base(&mut self, presence: BasePresence) {
        match self
            .bases
            .iter_mut()
            .find(|b| b.base_type == presence.base_type)
        {
            Some(slot) => *slot = presence,
            None => {
                self.bases.push(presence);
                self.bases.sort_by_key(|b| b.base_type);
            }
        }
    }
}
