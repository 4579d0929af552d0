//! Inhabitant tables

use once_cell::sync::Lazy;

use super::RollTable;
use crate::entities::{Governance, PowerStructure, SourceOfPower, Wealth};

pub static WEALTH_TABLE: Lazy<RollTable<Wealth>> = Lazy::new(|| {
    RollTable::new(
        "wealth",
        vec![
            (2, 2, Wealth::Destitute),
            (3, 4, Wealth::Poor),
            (5, 6, Wealth::Struggling),
            (7, 8, Wealth::Average),
            (9, 10, Wealth::Comfortable),
            (11, 11, Wealth::Affluent),
            (12, 12, Wealth::Prosperous),
        ],
    )
});

pub static POWER_STRUCTURE_TABLE: Lazy<RollTable<PowerStructure>> = Lazy::new(|| {
    RollTable::new(
        "power_structure",
        vec![
            (2, 3, PowerStructure::Anarchy),
            (4, 5, PowerStructure::Confederation),
            (6, 8, PowerStructure::Federation),
            (9, 11, PowerStructure::UnitaryState),
            (12, 12, PowerStructure::Hegemony),
        ],
    )
});

pub static GOVERNANCE_TABLE: Lazy<RollTable<Governance>> = Lazy::new(|| {
    RollTable::new(
        "governance",
        vec![
            (2, 2, Governance::Failed),
            (3, 4, Governance::Corrupt),
            (5, 6, Governance::Inefficient),
            (7, 8, Governance::Adequate),
            (9, 10, Governance::Effective),
            (11, 12, Governance::Exemplary),
        ],
    )
});

pub static SOURCE_OF_POWER_TABLE: Lazy<RollTable<SourceOfPower>> = Lazy::new(|| {
    RollTable::new(
        "source_of_power",
        vec![
            (2, 2, SourceOfPower::Kratocracy),
            (3, 4, SourceOfPower::Aristocracy),
            (5, 6, SourceOfPower::Plutocracy),
            (7, 8, SourceOfPower::Democracy),
            (9, 10, SourceOfPower::Meritocracy),
            (11, 12, SourceOfPower::Theocracy),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wealth_modifiers_rise_with_the_roll() {
        let soc: Vec<i32> = (2..=12).map(|r| WEALTH_TABLE.lookup(r).soc_modifier()).collect();
        assert!(soc.windows(2).all(|w| w[0] <= w[1]));
        let port: Vec<i32> = (2..=12).map(|r| WEALTH_TABLE.lookup(r).port_modifier()).collect();
        assert!(port.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn governance_spans_2d6() {
        assert_eq!(*GOVERNANCE_TABLE.lookup(2), Governance::Failed);
        assert_eq!(*GOVERNANCE_TABLE.lookup(12), Governance::Exemplary);
        assert_eq!(*POWER_STRUCTURE_TABLE.lookup(10), PowerStructure::UnitaryState);
        assert_eq!(*SOURCE_OF_POWER_TABLE.lookup(7), SourceOfPower::Democracy);
    }
}
