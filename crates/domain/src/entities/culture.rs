//! Culture - d66 traits per category

use serde::{Deserialize, Serialize};

use crate::value_objects::{D66Roll, Provenance};
use crate::WorldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CultureCategory {
    Social,
    Economic,
    Technological,
}

impl CultureCategory {
    /// Roll order.
    pub const ALL: [CultureCategory; 3] = [
        CultureCategory::Social,
        CultureCategory::Economic,
        CultureCategory::Technological,
    ];

    pub fn field(&self) -> &'static str {
        match self {
            CultureCategory::Social => "culture.social",
            CultureCategory::Economic => "culture.economic",
            CultureCategory::Technological => "culture.technological",
        }
    }
}

impl std::fmt::Display for CultureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CultureCategory::Social => "social",
            CultureCategory::Economic => "economic",
            CultureCategory::Technological => "technological",
        };
        write!(f, "{}", label)
    }
}

/// One cultural trait and the code that selected it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureTrait {
    pub category: CultureCategory,
    pub label: String,
    pub description: String,
    /// d66 code, "11" through "66"
    pub roll: String,
}

/// The cultural traits of a world, one per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureProfile {
    world_id: WorldId,
    traits: Vec<CultureTrait>,
    provenance: Provenance,
}

impl CultureProfile {
    pub fn new(world_id: WorldId, traits: Vec<CultureTrait>, provenance: Provenance) -> Self {
        Self {
            world_id,
            traits,
            provenance,
        }
    }

    pub fn world_id(&self) -> &WorldId {
        &self.world_id
    }

    /// Traits in category order.
    pub fn traits(&self) -> &[CultureTrait] {
        &self.traits
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn get(&self, category: CultureCategory) -> Option<&CultureTrait> {
        self.traits.iter().find(|t| t.category == category)
    }

    /// Replace the trait for its category, keeping category order.
    pub fn replace(&mut self, culture_trait: CultureTrait, roll: D66Roll) {
        let category = culture_trait.category;
        match self.traits.iter_mut().find(|t| t.category == category) {
            Some(slot) => *slot = culture_trait,
            None => {
                self.traits.push(culture_trait);
                self.traits.sort_by_key(|t| t.category);
            }
        }
        self.provenance.replace_rolls(category.field(), vec![roll.into()]);
    }

    /// Set a trait by hand.
    pub fn set_trait(&mut self, culture_trait: CultureTrait) {
        let category = culture_trait.category;
        match self.traits.iter_mut().find(|t| t.category == category) {
            Some(slot) => *slot = culture_trait,
            None => {
                self.traits.push(culture_trait);
                self.traits.sort_by_key(|t| t.category);
            }
        }
        self.provenance.override_field(category.field());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn culture_trait(category: CultureCategory, label: &str, roll: &str) -> CultureTrait {
        CultureTrait {
            category,
            label: label.to_string(),
            description: String::new(),
            roll: roll.to_string(),
        }
    }

    fn profile() -> CultureProfile {
        let provenance = Provenance::procedural()
            .with_roll("culture.social", D66Roll::new(1, 1).unwrap())
            .with_roll("culture.economic", D66Roll::new(2, 2).unwrap());
        CultureProfile::new(
            WorldId::new("w").unwrap(),
            vec![
                culture_trait(CultureCategory::Social, "Xenophobic", "11"),
                culture_trait(CultureCategory::Economic, "Guild-controlled", "22"),
            ],
            provenance,
        )
    }

    #[test]
    fn replace_touches_only_its_category() {
        let mut culture = profile();
        let roll = D66Roll::new(6, 6).unwrap();
        culture.replace(culture_trait(CultureCategory::Social, "Xenophilic", "66"), roll);

        assert_eq!(culture.get(CultureCategory::Social).unwrap().label, "Xenophilic");
        assert_eq!(culture.get(CultureCategory::Economic).unwrap().label, "Guild-controlled");
        assert!(culture.provenance().is_custom());
        assert!(!culture.provenance().is_overridden("culture.social"));
        assert_eq!(culture.provenance().roll_for("culture.social").unwrap().value(), 66);
    }

    #[test]
    fn missing_category_is_inserted_in_order() {
        let mut culture = profile();
        culture.set_trait(culture_trait(CultureCategory::Technological, "Luddite", "11"));
        let order: Vec<_> = culture.traits().iter().map(|t| t.category).collect();
        assert_eq!(order, CultureCategory::ALL.to_vec());
        assert!(culture.provenance().is_overridden("culture.technological"));
    }
}
