//! Culture generator - one d66 trait per category.

use starsmith_domain::tables::culture_table;
use starsmith_domain::{
    CultureCategory, CultureProfile, CultureTrait, D66Roll, Provenance, WorldId,
};

use crate::dice::DiceRoller;

pub struct GenerateCulture {
    dice: DiceRoller,
}

impl GenerateCulture {
    pub fn new(dice: DiceRoller) -> Self {
        Self { dice }
    }

    fn roll_trait(&self, category: CultureCategory) -> (CultureTrait, D66Roll) {
        let roll = self.dice.roll_d66();
        let entry = culture_table(category).lookup(roll.ordinal() as i32);
        let culture_trait = CultureTrait {
            category,
            label: entry.label.to_string(),
            description: entry.description.to_string(),
            roll: roll.code(),
        };
        (culture_trait, roll)
    }

    /// Social, economic, then technological.
    pub fn execute(&self, world_id: WorldId) -> CultureProfile {
        let mut provenance = Provenance::procedural();
        let mut traits = Vec::with_capacity(CultureCategory::ALL.len());
        for category in CultureCategory::ALL {
            let (culture_trait, roll) = self.roll_trait(category);
            provenance.record(category.field(), roll);
            traits.push(culture_trait);
        }

        tracing::debug!(world_id = %world_id, "Culture generated");

        CultureProfile::new(world_id, traits, provenance)
    }

    /// A copy of `profile` with one category rolled again. A world holding
    /// the old profile takes the new one through `WorldRecord::set_culture`.
    pub fn reroll_category(
        &self,
        profile: &CultureProfile,
        category: CultureCategory,
    ) -> CultureProfile {
        let (culture_trait, roll) = self.roll_trait(category);
        let mut next = profile.clone();
        next.replace(culture_trait, roll);
        next
    }
}
