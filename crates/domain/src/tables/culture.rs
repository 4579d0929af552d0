//! d66 culture tables
//!
//! Rows are written with d66 codes ("11"-"66") and stored by ordinal so the
//! shared roll-table contiguity check covers all 36 codes.

use once_cell::sync::Lazy;

use super::RollTable;
use crate::entities::CultureCategory;
use crate::value_objects::DIE_FACES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CultureEntry {
    pub label: &'static str,
    pub description: &'static str,
}

/// Ordinal (0-35) of a d66 code written as a number, e.g. 34.
const fn ordinal(code: i32) -> i32 {
    (code / 10 - 1) * DIE_FACES as i32 + (code % 10 - 1)
}

fn d66_table(
    name: &'static str,
    rows: &[(i32, i32, &'static str, &'static str)],
) -> RollTable<CultureEntry> {
    RollTable::new(
        name,
        rows.iter()
            .map(|(from, to, label, description)| {
                (
                    ordinal(*from),
                    ordinal(*to),
                    CultureEntry {
                        label: *label,
                        description: *description,
                    },
                )
            })
            .collect(),
    )
}

static SOCIAL: Lazy<RollTable<CultureEntry>> = Lazy::new(|| {
    d66_table(
        "culture_social",
        &[
            (11, 12, "Xenophobic", "Outsiders are feared and kept at a distance"),
            (13, 15, "Insular", "Turned inward; little interest in the wider sector"),
            (16, 23, "Traditionalist", "Custom and precedent outweigh novelty"),
            (24, 26, "Hierarchical", "Rank and station govern every interaction"),
            (31, 33, "Communal", "Property and duty are shared by the community"),
            (34, 35, "Honor-bound", "Reputation is currency and oaths are binding"),
            (36, 42, "Hedonistic", "Pleasure and leisure are openly pursued"),
            (43, 45, "Militaristic", "Martial service is the path to respect"),
            (46, 52, "Pious", "Faith shapes law, calendar, and daily life"),
            (53, 56, "Egalitarian", "Status is flat and privilege is distrusted"),
            (61, 63, "Cosmopolitan", "Many peoples and customs mix freely"),
            (64, 66, "Xenophilic", "Offworlders and their ideas are eagerly welcomed"),
        ],
    )
});

static ECONOMIC: Lazy<RollTable<CultureEntry>> = Lazy::new(|| {
    d66_table(
        "culture_economic",
        &[
            (11, 13, "Subsistence", "Most effort goes into survival"),
            (14, 16, "Barter economy", "Goods and favours trade without currency"),
            (21, 23, "Guild-controlled", "Trades are licensed and jealously guarded"),
            (24, 26, "Agrarian", "Farming and food exports dominate"),
            (31, 33, "Extractive", "Mining and raw materials drive the economy"),
            (34, 36, "Mercantile", "Trade houses and brokers hold real power"),
            (41, 43, "Industrial", "Heavy manufacturing employs the many"),
            (44, 46, "Financial hub", "Capital flows through local exchanges"),
            (51, 53, "Planned economy", "Central authorities allocate production"),
            (54, 56, "Corporate", "Megacorporations own land, labour, and law"),
            (61, 63, "Free market", "Light regulation and fierce competition"),
            (64, 66, "Post-scarcity", "Automation meets every basic need"),
        ],
    )
});

static TECHNOLOGICAL: Lazy<RollTable<CultureEntry>> = Lazy::new(|| {
    d66_table(
        "culture_technological",
        &[
            (11, 12, "Luddite", "Advanced technology is shunned or banned"),
            (13, 15, "Tech-averse", "New devices are met with suspicion"),
            (16, 22, "Salvage culture", "Society runs on scavenged and repaired gear"),
            (23, 25, "Retro-tech", "Old designs are preferred for their reliability"),
            (26, 33, "Pragmatic", "Technology is adopted when it pays for itself"),
            (34, 36, "Augmented", "Cybernetic enhancement is commonplace"),
            (41, 43, "Robotics-reliant", "Robots do most physical labour"),
            (44, 46, "Networked", "Everything and everyone is always connected"),
            (51, 53, "Bioengineered", "Living technology replaces machines"),
            (54, 56, "Research-driven", "Laboratories and universities lead society"),
            (61, 63, "Cutting-edge", "The newest technology is adopted first"),
            (64, 66, "Transhumanist", "The human form is a starting point"),
        ],
    )
});

pub fn culture_table(category: CultureCategory) -> &'static RollTable<CultureEntry> {
    match category {
        CultureCategory::Social => &*SOCIAL,
        CultureCategory::Economic => &*ECONOMIC,
        CultureCategory::Technological => &*TECHNOLOGICAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::D66Roll;

    #[test]
    fn every_category_covers_all_36_codes() {
        for category in CultureCategory::ALL {
            let table = culture_table(category);
            assert_eq!(table.min_roll(), 0, "{}", category);
            assert_eq!(table.max_roll(), 35, "{}", category);
            let rows: i32 = table.rows().iter().map(|r| r.max - r.min + 1).sum();
            assert_eq!(rows, 36, "{}", category);
        }
    }

    #[test]
    fn each_code_maps_to_exactly_one_trait() {
        for category in CultureCategory::ALL {
            let table = culture_table(category);
            for roll in D66Roll::all() {
                let ordinal = roll.ordinal() as i32;
                let matching = table
                    .rows()
                    .iter()
                    .filter(|r| r.min <= ordinal && ordinal <= r.max)
                    .count();
                assert_eq!(matching, 1, "{} {}", category, roll);
            }
        }
    }

    #[test]
    fn code_ordinals() {
        assert_eq!(ordinal(11), 0);
        assert_eq!(ordinal(16), 5);
        assert_eq!(ordinal(21), 6);
        assert_eq!(ordinal(66), 35);
    }

    #[test]
    fn sample_lookups() {
        let social = culture_table(CultureCategory::Social);
        let code = D66Roll::parse("21").unwrap();
        assert_eq!(social.lookup(code.ordinal() as i32).label, "Traditionalist");
        let tech = culture_table(CultureCategory::Technological);
        assert_eq!(tech.lookup(ordinal(66)).label, "Transhumanist");
    }
}
