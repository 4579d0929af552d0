//! Starport classifier and base presence.

use starsmith_domain::tables::{base_target, starport_class_for_pvs};
use starsmith_domain::{
    port_value_score, BasePresence, BaseType, Provenance, StarportClass, StarportRecord,
    TechLevel, Wealth, WorldId,
};

use crate::dice::DiceRoller;

/// Everything the classifier needs to know about a world.
#[derive(Debug, Clone, PartialEq)]
pub struct StarportInput {
    pub world_id: WorldId,
    pub habitability_score: f64,
    pub tech_level: TechLevel,
    pub wealth: Wealth,
    pub development_modifier: i32,
}

pub struct GenerateStarport {
    dice: DiceRoller,
}

impl GenerateStarport {
    pub fn new(dice: DiceRoller) -> Self {
        Self { dice }
    }

    /// Classify the port from its PVS, then roll each base in order. Bases
    /// that cannot exist at the class are recorded without a roll.
    pub fn execute(&self, input: StarportInput) -> StarportRecord {
        let pvs = port_value_score(
            input.habitability_score,
            input.tech_level,
            input.wealth.port_modifier(),
            input.development_modifier,
        );
        let class = starport_class_for_pvs(pvs);

        let mut provenance = Provenance::procedural();
        let mut bases = Vec::with_capacity(BaseType::ALL.len());
        for base in BaseType::ALL {
            let presence = self.roll_base_presence(base, class);
            if let Some(roll) = &presence.roll {
                provenance.record(base.field(), roll.clone());
            }
            bases.push(presence);
        }

        let record = StarportRecord::new(input.world_id, class, pvs, bases, provenance);

        tracing::info!(
            world_id = %record.world_id(),
            class = %record.class(),
            pvs,
            bases = record.present_bases().count(),
            "Starport classified"
        );

        record
    }

    /// Roll one base against its target at `class`.
    pub fn roll_base_presence(&self, base: BaseType, class: StarportClass) -> BasePresence {
        match base_target(base, class) {
            Some(target) => BasePresence::rolled(base, target, self.dice.roll_2d6()),
            None => BasePresence::impossible(base),
        }
    }

    /// A copy of `record` with one base rolled again. Everything else is
    /// untouched; the copy is marked custom. A world holding the old port
    /// takes the new one through `WorldRecord::set_starport`.
    pub fn reroll_base(&self, record: &StarportRecord, base: BaseType) -> StarportRecord {
        let next = record.with_rerolled_base(self.roll_base_presence(base, record.class()));
        tracing::debug!(world_id = %next.world_id(), base = %base, "Base re-rolled");
        next
    }
}

/// A copy of `record` with a base set by hand.
pub fn set_base_presence(record: &StarportRecord, base: BaseType, present: bool) -> StarportRecord {
    let mut next = record.clone();
    next.set_base_presence(base, present);
    next
}
