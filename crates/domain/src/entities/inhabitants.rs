//! Inhabitants - wealth and the shape of a world's government

use serde::{Deserialize, Serialize};

use crate::value_objects::Provenance;

/// Provenance field names for the inhabitant rolls
pub mod fields {
    pub const WEALTH: &str = "wealth";
    pub const POWER_STRUCTURE: &str = "power_structure";
    pub const GOVERNANCE: &str = "governance";
    pub const SOURCE_OF_POWER: &str = "source_of_power";
}

/// Average prosperity of the population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wealth {
    Destitute,
    Poor,
    Struggling,
    Average,
    Comfortable,
    Affluent,
    Prosperous,
}

impl Wealth {
    pub fn label(&self) -> &'static str {
        match self {
            Wealth::Destitute => "Destitute",
            Wealth::Poor => "Poor",
            Wealth::Struggling => "Struggling",
            Wealth::Average => "Average",
            Wealth::Comfortable => "Comfortable",
            Wealth::Affluent => "Affluent",
            Wealth::Prosperous => "Prosperous",
        }
    }

    /// Social standing modifier
    pub fn soc_modifier(&self) -> i32 {
        match self {
            Wealth::Destitute => -2,
            Wealth::Poor | Wealth::Struggling => -1,
            Wealth::Average => 0,
            Wealth::Comfortable => 1,
            Wealth::Affluent => 2,
            Wealth::Prosperous => 3,
        }
    }

    /// Contribution to the Port Value Score
    pub fn port_modifier(&self) -> i32 {
        match self {
            Wealth::Destitute => -2,
            Wealth::Poor => -1,
            Wealth::Struggling | Wealth::Average => 0,
            Wealth::Comfortable => 1,
            Wealth::Affluent => 2,
            Wealth::Prosperous => 3,
        }
    }
}

/// How authority is distributed across the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerStructure {
    Anarchy,
    Confederation,
    Federation,
    UnitaryState,
    Hegemony,
}

impl PowerStructure {
    pub fn label(&self) -> &'static str {
        match self {
            PowerStructure::Anarchy => "Anarchy",
            PowerStructure::Confederation => "Confederation",
            PowerStructure::Federation => "Federation",
            PowerStructure::UnitaryState => "Unitary state",
            PowerStructure::Hegemony => "Hegemony",
        }
    }
}

/// Quality of government
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Governance {
    Failed,
    Corrupt,
    Inefficient,
    Adequate,
    Effective,
    Exemplary,
}

impl Governance {
    pub fn label(&self) -> &'static str {
        match self {
            Governance::Failed => "Failed",
            Governance::Corrupt => "Corrupt",
            Governance::Inefficient => "Inefficient",
            Governance::Adequate => "Adequate",
            Governance::Effective => "Effective",
            Governance::Exemplary => "Exemplary",
        }
    }
}

/// Where rulers draw their legitimacy from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceOfPower {
    Kratocracy,
    Aristocracy,
    Plutocracy,
    Democracy,
    Meritocracy,
    Theocracy,
}

impl SourceOfPower {
    pub fn label(&self) -> &'static str {
        match self {
            SourceOfPower::Kratocracy => "Kratocracy",
            SourceOfPower::Aristocracy => "Aristocracy",
            SourceOfPower::Plutocracy => "Plutocracy",
            SourceOfPower::Democracy => "Democracy",
            SourceOfPower::Meritocracy => "Meritocracy",
            SourceOfPower::Theocracy => "Theocracy",
        }
    }
}

/// Socio-political profile of a world's population
///
/// The four attributes are rolled independently. Setting one by hand clears
/// only that attribute's roll from provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inhabitants {
    wealth: Wealth,
    power_structure: PowerStructure,
    governance: Governance,
    source_of_power: SourceOfPower,
    provenance: Provenance,
}

impl Inhabitants {
    pub fn new(
        wealth: Wealth,
        power_structure: PowerStructure,
        governance: Governance,
        source_of_power: SourceOfPower,
        provenance: Provenance,
    ) -> Self {
        Self {
            wealth,
            power_structure,
            governance,
            source_of_power,
            provenance,
        }
    }

    pub fn wealth(&self) -> Wealth {
        self.wealth
    }

    pub fn power_structure(&self) -> PowerStructure {
        self.power_structure
    }

    pub fn governance(&self) -> Governance {
        self.governance
    }

    pub fn source_of_power(&self) -> SourceOfPower {
        self.source_of_power
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn soc_modifier(&self) -> i32 {
        self.wealth.soc_modifier()
    }

    pub fn set_wealth(&mut self, wealth: Wealth) {
        self.wealth = wealth;
        self.provenance.override_field(fields::WEALTH);
    }

    pub fn set_power_structure(&mut self, power_structure: PowerStructure) {
        self.power_structure = power_structure;
        self.provenance.override_field(fields::POWER_STRUCTURE);
    }

    pub fn set_governance(&mut self, governance: Governance) {
        self.governance = governance;
        self.provenance.override_field(fields::GOVERNANCE);
    }

    pub fn set_source_of_power(&mut self, source_of_power: SourceOfPower) {
        self.source_of_power = source_of_power;
        self.provenance.override_field(fields::SOURCE_OF_POWER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{DiceRoll, GenerationMethod};

    fn rolled() -> Inhabitants {
        let provenance = Provenance::procedural()
            .with_roll(fields::WEALTH, DiceRoll::two_d6(4, 4).unwrap())
            .with_roll(fields::POWER_STRUCTURE, DiceRoll::two_d6(3, 4).unwrap())
            .with_roll(fields::GOVERNANCE, DiceRoll::two_d6(5, 5).unwrap())
            .with_roll(fields::SOURCE_OF_POWER, DiceRoll::two_d6(1, 6).unwrap());
        Inhabitants::new(
            Wealth::Average,
            PowerStructure::Federation,
            Governance::Effective,
            SourceOfPower::Democracy,
            provenance,
        )
    }

    #[test]
    fn wealth_modifiers() {
        assert_eq!(Wealth::Destitute.soc_modifier(), -2);
        assert_eq!(Wealth::Struggling.soc_modifier(), -1);
        assert_eq!(Wealth::Struggling.port_modifier(), 0);
        assert_eq!(Wealth::Prosperous.port_modifier(), 3);
    }

    #[test]
    fn manual_wealth_clears_only_its_roll() {
        let mut inhabitants = rolled();
        inhabitants.set_wealth(Wealth::Affluent);

        assert_eq!(inhabitants.provenance().generation_method(), GenerationMethod::Custom);
        assert!(inhabitants.provenance().roll_for(fields::WEALTH).is_none());
        assert!(inhabitants.provenance().roll_for(fields::GOVERNANCE).is_some());
        assert!(inhabitants.provenance().is_overridden(fields::WEALTH));
        assert_eq!(inhabitants.soc_modifier(), 2);
    }

    #[test]
    fn every_setter_flips_to_custom() {
        let mut a = rolled();
        a.set_power_structure(PowerStructure::Hegemony);
        assert!(a.provenance().is_custom());

        let mut b = rolled();
        b.set_governance(Governance::Failed);
        assert!(b.provenance().is_custom());

        let mut c = rolled();
        c.set_source_of_power(SourceOfPower::Theocracy);
        assert!(c.provenance().is_custom());
        assert_eq!(c.provenance().rolls().len(), 3);
    }
}
