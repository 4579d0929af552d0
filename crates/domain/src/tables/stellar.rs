//! Main-sequence properties by spectral class and grade

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::DomainError;
use crate::value_objects::{SpectralClass, SpectralGrade, StellarProperty};

/// Per class: masses, luminosities, temperatures for grades 0 through 9.
type ClassRows = (SpectralClass, [f64; 10], [f64; 10], [f64; 10]);

const ROWS: [ClassRows; 7] = [
    (
        SpectralClass::O,
        [120.0, 90.0, 70.0, 60.0, 50.0, 40.0, 35.0, 30.0, 25.0, 20.0],
        [
            1_400_000.0, 1_000_000.0, 750_000.0, 550_000.0, 400_000.0, 260_000.0, 180_000.0,
            120_000.0, 80_000.0, 55_000.0,
        ],
        [
            52_000.0, 50_000.0, 48_000.0, 46_000.0, 44_000.0, 41_000.0, 38_000.0, 36_000.0,
            34_000.0, 32_000.0,
        ],
    ),
    (
        SpectralClass::B,
        [18.0, 15.0, 12.0, 10.0, 8.0, 6.5, 5.4, 4.5, 3.8, 3.2],
        [40_000.0, 25_000.0, 12_000.0, 5_000.0, 2_200.0, 900.0, 500.0, 300.0, 180.0, 100.0],
        [
            30_000.0, 25_400.0, 22_000.0, 18_700.0, 17_000.0, 15_400.0, 14_000.0, 13_000.0,
            11_900.0, 10_500.0,
        ],
    ),
    (
        SpectralClass::A,
        [2.9, 2.7, 2.5, 2.3, 2.1, 1.95, 1.85, 1.75, 1.65, 1.6],
        [60.0, 45.0, 35.0, 28.0, 22.0, 18.0, 15.0, 12.0, 10.0, 8.5],
        [9_700.0, 9_300.0, 8_800.0, 8_600.0, 8_250.0, 8_100.0, 7_910.0, 7_760.0, 7_590.0, 7_400.0],
    ),
    (
        SpectralClass::F,
        [1.55, 1.5, 1.45, 1.4, 1.35, 1.3, 1.25, 1.2, 1.15, 1.1],
        [7.5, 6.5, 5.6, 4.8, 4.2, 3.6, 3.1, 2.6, 2.2, 1.9],
        [7_220.0, 7_030.0, 6_810.0, 6_720.0, 6_640.0, 6_510.0, 6_340.0, 6_240.0, 6_170.0, 6_060.0],
    ),
    (
        SpectralClass::G,
        [1.06, 1.03, 1.0, 0.98, 0.96, 0.94, 0.92, 0.9, 0.88, 0.86],
        [1.35, 1.2, 1.0, 0.95, 0.9, 0.84, 0.78, 0.72, 0.66, 0.6],
        [5_920.0, 5_880.0, 5_770.0, 5_720.0, 5_680.0, 5_660.0, 5_600.0, 5_550.0, 5_480.0, 5_380.0],
    ),
    (
        SpectralClass::K,
        [0.84, 0.8, 0.78, 0.74, 0.7, 0.67, 0.64, 0.62, 0.6, 0.58],
        [0.52, 0.45, 0.38, 0.32, 0.27, 0.22, 0.18, 0.15, 0.12, 0.1],
        [5_270.0, 5_170.0, 5_100.0, 4_830.0, 4_600.0, 4_440.0, 4_300.0, 4_100.0, 3_990.0, 3_930.0],
    ),
    (
        SpectralClass::M,
        [0.57, 0.5, 0.44, 0.37, 0.23, 0.16, 0.12, 0.1, 0.09, 0.08],
        [0.07, 0.05, 0.035, 0.015, 0.008, 0.004, 0.002, 0.001, 0.0006, 0.0003],
        [3_850.0, 3_660.0, 3_560.0, 3_430.0, 3_210.0, 3_060.0, 2_810.0, 2_680.0, 2_570.0, 2_380.0],
    ),
];

/// Dense (class, grade) map, 70 entries.
pub static STELLAR_PROPERTIES: Lazy<BTreeMap<(SpectralClass, SpectralGrade), StellarProperty>> =
    Lazy::new(|| {
        let mut map = BTreeMap::new();
        for (class, masses, luminosities, temperatures) in ROWS.iter() {
            for grade in SpectralGrade::all() {
                let i = usize::from(grade.value());
                map.insert(
                    (*class, grade),
                    StellarProperty {
                        mass: masses[i],
                        luminosity: luminosities[i],
                        temperature: temperatures[i],
                    },
                );
            }
        }
        map
    });

pub fn stellar_property(
    class: SpectralClass,
    grade: SpectralGrade,
) -> Result<StellarProperty, DomainError> {
    STELLAR_PROPERTIES
        .get(&(class, grade))
        .copied()
        .ok_or_else(|| DomainError::validation(format!("no stellar data for {}{}", class, grade)))
}
