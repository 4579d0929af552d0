//! Star and companion tables

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::RollTable;
use crate::value_objects::{SpectralClass, SpectralGrade};

/// Companions never orbit closer than this, in AU.
pub const MIN_COMPANION_SEPARATION_AU: f64 = 0.5;

pub static STAR_CLASS_TABLE: Lazy<RollTable<SpectralClass>> = Lazy::new(|| {
    RollTable::new(
        "star_class",
        vec![
            (2, 2, SpectralClass::O),
            (3, 3, SpectralClass::B),
            (4, 4, SpectralClass::A),
            (5, 5, SpectralClass::F),
            (6, 7, SpectralClass::G),
            (8, 9, SpectralClass::K),
            (10, 12, SpectralClass::M),
        ],
    )
});

/// Modified 2D6 total to number of companions.
pub static COMPANION_COUNT_TABLE: Lazy<RollTable<usize>> = Lazy::new(|| {
    RollTable::new(
        "companion_count",
        vec![(2, 7, 0), (8, 9, 1), (10, 11, 2), (12, 12, 3)],
    )
});

/// Bright, massive primaries are more likely to have companions.
pub fn companion_count_modifier(class: SpectralClass, grade: SpectralGrade) -> i32 {
    let class_modifier = match class {
        SpectralClass::O => 3,
        SpectralClass::B => 2,
        SpectralClass::A => 1,
        SpectralClass::F | SpectralClass::G => 0,
        SpectralClass::K => -1,
        SpectralClass::M => -2,
    };
    let grade_modifier = if grade.value() <= 4 { 1 } else { 0 };
    class_modifier + grade_modifier
}

/// Distance band of a companion from the primary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationBand {
    Close,
    Near,
    Far,
    Distant,
}

impl SeparationBand {
    /// AU per pip of the 1D6 multiplier.
    pub fn au_per_pip(&self) -> f64 {
        match self {
            SeparationBand::Close => 0.5,
            SeparationBand::Near => 5.0,
            SeparationBand::Far => 50.0,
            SeparationBand::Distant => 500.0,
        }
    }
}

pub static SEPARATION_TABLE: Lazy<RollTable<SeparationBand>> = Lazy::new(|| {
    RollTable::new(
        "companion_separation",
        vec![
            (2, 4, SeparationBand::Close),
            (5, 7, SeparationBand::Near),
            (8, 10, SeparationBand::Far),
            (11, 12, SeparationBand::Distant),
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(g: i64) -> SpectralGrade {
        SpectralGrade::new(g).unwrap()
    }

    #[test]
    fn class_table_covers_2d6() {
        assert_eq!(STAR_CLASS_TABLE.min_roll(), 2);
        assert_eq!(STAR_CLASS_TABLE.max_roll(), 12);
        assert_eq!(*STAR_CLASS_TABLE.lookup(7), SpectralClass::G);
        assert_eq!(*STAR_CLASS_TABLE.lookup(10), SpectralClass::M);
    }

    #[test]
    fn companion_count_clamps_modified_rolls() {
        assert_eq!(*COMPANION_COUNT_TABLE.lookup(0), 0);
        assert_eq!(*COMPANION_COUNT_TABLE.lookup(9), 1);
        assert_eq!(*COMPANION_COUNT_TABLE.lookup(15), 3);
    }

    #[test]
    fn count_modifier() {
        assert_eq!(companion_count_modifier(SpectralClass::O, grade(0)), 4);
        assert_eq!(companion_count_modifier(SpectralClass::G, grade(5)), 0);
        assert_eq!(companion_count_modifier(SpectralClass::M, grade(9)), -2);
    }

    #[test]
    fn separation_bands_widen() {
        let bands: Vec<f64> = SEPARATION_TABLE.rows().iter().map(|r| r.value.au_per_pip()).collect();
        assert!(bands.windows(2).all(|w| w[0] < w[1]));
        assert!(SeparationBand::Close.au_per_pip() >= MIN_COMPANION_SEPARATION_AU);
    }
}
