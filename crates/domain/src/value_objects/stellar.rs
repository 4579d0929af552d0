//! Stellar classification and orbital zones

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Main-sequence spectral class, hottest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    /// All classes from brightest to dimmest.
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    /// Row of this class in the stellar property table.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpectralClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" => Ok(SpectralClass::O),
            "B" => Ok(SpectralClass::B),
            "A" => Ok(SpectralClass::A),
            "F" => Ok(SpectralClass::F),
            "G" => Ok(SpectralClass::G),
            "K" => Ok(SpectralClass::K),
            "M" => Ok(SpectralClass::M),
            other => Err(DomainError::invalid_parameter(
                "class",
                format!("unknown spectral class '{}'", other),
            )),
        }
    }
}

/// Subdivision within a class: 0 is the brightest, 9 the dimmest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct SpectralGrade(u8);

impl SpectralGrade {
    pub const MAX: u8 = 9;

    pub fn new(grade: i64) -> Result<Self, DomainError> {
        if !(0..=i64::from(Self::MAX)).contains(&grade) {
            return Err(DomainError::invalid_parameter(
                "grade",
                format!("{} is outside 0-{}", grade, Self::MAX),
            ));
        }
        Ok(Self(grade as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = SpectralGrade> {
        (0..=Self::MAX).map(SpectralGrade)
    }
}

impl TryFrom<i64> for SpectralGrade {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpectralGrade> for u8 {
    fn from(grade: SpectralGrade) -> Self {
        grade.0
    }
}

impl fmt::Display for SpectralGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical properties of a main-sequence star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarProperty {
    /// Solar masses
    pub mass: f64,
    /// Solar luminosities
    pub luminosity: f64,
    /// Effective temperature in kelvin
    pub temperature: f64,
}

/// Zone scaling constants, in AU for a star of one solar luminosity.
///
/// Each boundary scales with the square root of luminosity. The constants
/// must be positive and strictly increasing in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneScaling {
    pub hot_edge: f64,
    pub habitable_inner: f64,
    pub habitable_outer: f64,
    pub cold_edge: f64,
    pub outer_system: f64,
}

impl Default for ZoneScaling {
    fn default() -> Self {
        Self {
            hot_edge: 0.4,
            habitable_inner: 0.95,
            habitable_outer: 1.37,
            cold_edge: 2.7,
            outer_system: 40.0,
        }
    }
}

impl ZoneScaling {
    fn constants(&self) -> [f64; 5] {
        [
            self.hot_edge,
            self.habitable_inner,
            self.habitable_outer,
            self.cold_edge,
            self.outer_system,
        ]
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let constants = self.constants();
        if constants.iter().any(|c| !c.is_finite() || *c <= 0.0) {
            return Err(DomainError::validation(
                "zone scaling constants must be positive and finite",
            ));
        }
        if constants.windows(2).any(|w| w[0] >= w[1]) {
            return Err(DomainError::validation(
                "zone scaling constants must be strictly increasing",
            ));
        }
        Ok(())
    }

    /// Boundaries for a star of the given luminosity.
    pub fn zones_for(&self, luminosity: f64) -> Result<StellarZones, DomainError> {
        self.validate()?;
        if !luminosity.is_finite() || luminosity <= 0.0 {
            return Err(DomainError::invalid_parameter(
                "luminosity",
                format!("{} is not a positive finite luminosity", luminosity),
            ));
        }
        let factor = luminosity.sqrt();
        Ok(StellarZones {
            hot_edge: self.hot_edge * factor,
            habitable_inner: self.habitable_inner * factor,
            habitable_outer: self.habitable_outer * factor,
            cold_edge: self.cold_edge * factor,
            outer_system: self.outer_system * factor,
        })
    }
}

/// Orbital zone boundaries around a star, in AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarZones {
    pub hot_edge: f64,
    pub habitable_inner: f64,
    pub habitable_outer: f64,
    pub cold_edge: f64,
    pub outer_system: f64,
}

impl StellarZones {
    /// Boundaries from innermost to outermost.
    pub fn boundaries(&self) -> [f64; 5] {
        [
            self.hot_edge,
            self.habitable_inner,
            self.habitable_outer,
            self.cold_edge,
            self.outer_system,
        ]
    }

    /// Inner and outer edge of a zone, in AU.
    pub fn bounds(&self, zone: Zone) -> (f64, f64) {
        match zone {
            Zone::Inferno => (0.0, self.hot_edge),
            Zone::Hot => (self.hot_edge, self.habitable_inner),
            Zone::Habitable => (self.habitable_inner, self.habitable_outer),
            Zone::Cold => (self.habitable_outer, self.cold_edge),
            Zone::Outer => (self.cold_edge, self.outer_system),
            Zone::Deep => (self.outer_system, f64::INFINITY),
        }
    }

    /// How far `distance_au` lies outside a zone; zero inside it.
    pub fn distance_to(&self, zone: Zone, distance_au: f64) -> f64 {
        let (inner, outer) = self.bounds(zone);
        if distance_au < inner {
            inner - distance_au
        } else if distance_au >= outer {
            distance_au - outer
        } else {
            0.0
        }
    }

    /// Zone containing an orbit at `distance_au`. Lower bounds are inclusive.
    pub fn zone_of(&self, distance_au: f64) -> Zone {
        if distance_au < self.hot_edge {
            Zone::Inferno
        } else if distance_au < self.habitable_inner {
            Zone::Hot
        } else if distance_au < self.habitable_outer {
            Zone::Habitable
        } else if distance_au < self.cold_edge {
            Zone::Cold
        } else if distance_au < self.outer_system {
            Zone::Outer
        } else {
            Zone::Deep
        }
    }
}

/// Orbital zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Inferno,
    Hot,
    Habitable,
    Cold,
    Outer,
    Deep,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Zone::Inferno => "inferno",
            Zone::Hot => "hot",
            Zone::Habitable => "habitable",
            Zone::Cold => "cold",
            Zone::Outer => "outer",
            Zone::Deep => "deep",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_class_is_case_insensitive() {
        assert_eq!("g".parse::<SpectralClass>().unwrap(), SpectralClass::G);
        assert_eq!(" M ".parse::<SpectralClass>().unwrap(), SpectralClass::M);
    }

    #[test]
    fn unknown_class_names_the_field() {
        let err = "Q".parse::<SpectralClass>().unwrap_err();
        assert_eq!(err.field(), Some("class"));
    }

    #[test]
    fn grade_bounds() {
        assert!(SpectralGrade::new(0).is_ok());
        assert!(SpectralGrade::new(9).is_ok());
        assert_eq!(SpectralGrade::new(10).unwrap_err().field(), Some("grade"));
        assert_eq!(SpectralGrade::new(-1).unwrap_err().field(), Some("grade"));
        assert_eq!(SpectralGrade::all().count(), 10);
    }

    #[test]
    fn grade_deserialization_validates() {
        let ok: SpectralGrade = serde_json::from_str("4").unwrap();
        assert_eq!(ok.value(), 4);
        assert!(serde_json::from_str::<SpectralGrade>("12").is_err());
    }

    #[test]
    fn default_scaling_is_valid() {
        assert!(ZoneScaling::default().validate().is_ok());
    }

    #[test]
    fn non_increasing_scaling_is_rejected() {
        let scaling = ZoneScaling {
            habitable_outer: 0.9,
            ..ZoneScaling::default()
        };
        assert!(matches!(
            scaling.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn sun_like_zones() {
        let zones = ZoneScaling::default().zones_for(1.0).unwrap();
        assert_eq!(zones.habitable_inner, 0.95);
        assert_eq!(zones.zone_of(1.0), Zone::Habitable);
        assert_eq!(zones.zone_of(0.1), Zone::Inferno);
        assert_eq!(zones.zone_of(0.5), Zone::Hot);
        assert_eq!(zones.zone_of(2.0), Zone::Cold);
        assert_eq!(zones.zone_of(10.0), Zone::Outer);
        assert_eq!(zones.zone_of(100.0), Zone::Deep);
    }

    #[test]
    fn zone_lower_bounds_are_inclusive() {
        let zones = ZoneScaling::default().zones_for(1.0).unwrap();
        assert_eq!(zones.zone_of(zones.habitable_inner), Zone::Habitable);
        assert_eq!(zones.zone_of(zones.habitable_outer), Zone::Cold);
    }

    #[test]
    fn bounds_agree_with_zone_of() {
        let zones = ZoneScaling::default().zones_for(2.0).unwrap();
        for zone in [Zone::Inferno, Zone::Hot, Zone::Habitable, Zone::Cold, Zone::Outer] {
            let (inner, outer) = zones.bounds(zone);
            let middle = (inner + outer) / 2.0;
            assert_eq!(zones.zone_of(middle), zone);
            assert_eq!(zones.distance_to(zone, middle), 0.0);
        }
        let (_, habitable_outer) = zones.bounds(Zone::Habitable);
        assert!((zones.distance_to(Zone::Habitable, habitable_outer + 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn invalid_luminosity_is_rejected() {
        let scaling = ZoneScaling::default();
        assert_eq!(
            scaling.zones_for(0.0).unwrap_err().field(),
            Some("luminosity")
        );
        assert!(scaling.zones_for(f64::NAN).is_err());
        assert!(scaling.zones_for(-2.0).is_err());
    }
}
