//! World development level

use serde::{Deserialize, Serialize};

use crate::value_objects::TechLevel;

/// How developed a world's society and infrastructure are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentLevel {
    Underdeveloped,
    Developing,
    Mature,
    Developed,
    WellDeveloped,
    VeryDeveloped,
}

impl DevelopmentLevel {
    /// Levels with the minimum development score for each, highest first.
    const THRESHOLDS: [(f64, DevelopmentLevel); 5] = [
        (20.0, DevelopmentLevel::VeryDeveloped),
        (16.0, DevelopmentLevel::WellDeveloped),
        (12.0, DevelopmentLevel::Developed),
        (9.0, DevelopmentLevel::Mature),
        (6.0, DevelopmentLevel::Developing),
    ];

    pub fn from_score(development_score: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| development_score >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(DevelopmentLevel::Underdeveloped)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DevelopmentLevel::Underdeveloped => "Underdeveloped",
            DevelopmentLevel::Developing => "Developing",
            DevelopmentLevel::Mature => "Mature",
            DevelopmentLevel::Developed => "Developed",
            DevelopmentLevel::WellDeveloped => "Well developed",
            DevelopmentLevel::VeryDeveloped => "Very developed",
        }
    }

    pub fn governance_modifier(&self) -> &'static str {
        match self {
            DevelopmentLevel::Underdeveloped => "Frontier rule",
            DevelopmentLevel::Developing => "Provisional authority",
            DevelopmentLevel::Mature => "Established order",
            DevelopmentLevel::Developed => "Bureaucratic",
            DevelopmentLevel::WellDeveloped => "Institutional",
            DevelopmentLevel::VeryDeveloped => "Entrenched",
        }
    }

    /// Multiplier applied to standard port fees.
    pub fn port_fee_multiplier(&self) -> f64 {
        match self {
            DevelopmentLevel::Underdeveloped => 0.5,
            DevelopmentLevel::Developing => 0.75,
            DevelopmentLevel::Mature => 1.0,
            DevelopmentLevel::Developed => 1.25,
            DevelopmentLevel::WellDeveloped => 1.5,
            DevelopmentLevel::VeryDeveloped => 2.0,
        }
    }

    /// Tech level typically needed to reach this level. Informational only.
    pub fn minimum_tech_level(&self) -> Option<u8> {
        match self {
            DevelopmentLevel::Underdeveloped | DevelopmentLevel::Developing => None,
            DevelopmentLevel::Mature => Some(7),
            DevelopmentLevel::Developed => Some(9),
            DevelopmentLevel::WellDeveloped => Some(11),
            DevelopmentLevel::VeryDeveloped => Some(13),
        }
    }

    /// Contribution to the Port Value Score.
    pub fn port_modifier(&self) -> i32 {
        match self {
            DevelopmentLevel::Underdeveloped => -2,
            DevelopmentLevel::Developing => 0,
            DevelopmentLevel::Mature => 1,
            DevelopmentLevel::Developed => 2,
            DevelopmentLevel::WellDeveloped => 4,
            DevelopmentLevel::VeryDeveloped => 6,
        }
    }
}

impl std::fmt::Display for DevelopmentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolved development of a world, with the level's metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldDevelopment {
    pub development_score: f64,
    pub level: DevelopmentLevel,
    pub governance_modifier: String,
    pub port_fee_multiplier: f64,
    pub minimum_tech_level: Option<u8>,
    pub port_modifier: i32,
}

/// Development from tech level and habitability.
///
/// Only `tech_level + max(0, habitability_score)` matters: a hostile world is
/// not penalised below its tech level.
pub fn determine_world_development(tech_level: TechLevel, habitability_score: f64) -> WorldDevelopment {
    let development_score = f64::from(tech_level.value()) + habitability_score.max(0.0);
    let level = DevelopmentLevel::from_score(development_score);
    WorldDevelopment {
        development_score,
        level,
        governance_modifier: level.governance_modifier().to_string(),
        port_fee_multiplier: level.port_fee_multiplier(),
        minimum_tech_level: level.minimum_tech_level(),
        port_modifier: level.port_modifier(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tl(level: i64) -> TechLevel {
        TechLevel::new(level).unwrap()
    }

    #[test]
    fn only_summed_score_matters() {
        let a = determine_world_development(tl(20), 0.0);
        let b = determine_world_development(tl(14), 6.0);
        assert_eq!(a, b);
        assert_eq!(a.level, DevelopmentLevel::VeryDeveloped);
    }

    #[test]
    fn negative_habitability_is_floored_at_zero() {
        let hostile = determine_world_development(tl(10), -12.0);
        let neutral = determine_world_development(tl(10), 0.0);
        assert_eq!(hostile.level, neutral.level);
        assert_eq!(hostile.development_score, 10.0);
    }

    #[test]
    fn thresholds() {
        assert_eq!(DevelopmentLevel::from_score(5.9), DevelopmentLevel::Underdeveloped);
        assert_eq!(DevelopmentLevel::from_score(6.0), DevelopmentLevel::Developing);
        assert_eq!(DevelopmentLevel::from_score(9.0), DevelopmentLevel::Mature);
        assert_eq!(DevelopmentLevel::from_score(12.0), DevelopmentLevel::Developed);
        assert_eq!(DevelopmentLevel::from_score(16.0), DevelopmentLevel::WellDeveloped);
        assert_eq!(DevelopmentLevel::from_score(19.9), DevelopmentLevel::WellDeveloped);
        assert_eq!(DevelopmentLevel::from_score(20.0), DevelopmentLevel::VeryDeveloped);
    }

    #[test]
    fn level_is_monotonic_in_score() {
        let mut previous = DevelopmentLevel::from_score(0.0);
        for tenth in 0..=300 {
            let level = DevelopmentLevel::from_score(f64::from(tenth) / 10.0);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn metadata_for_top_four_levels_only() {
        assert!(DevelopmentLevel::Underdeveloped.minimum_tech_level().is_none());
        assert!(DevelopmentLevel::Developing.minimum_tech_level().is_none());
        assert_eq!(DevelopmentLevel::Mature.minimum_tech_level(), Some(7));
        assert_eq!(DevelopmentLevel::VeryDeveloped.minimum_tech_level(), Some(13));
    }

    #[test]
    fn minimum_tech_level_is_not_enforced() {
        // TL3 on a paradise world still reads as developing
        let dev = determine_world_development(tl(3), 5.0);
        assert_eq!(dev.level, DevelopmentLevel::Developing);
        let dev = determine_world_development(tl(5), 10.0);
        assert_eq!(dev.level, DevelopmentLevel::Developed);
        assert_eq!(dev.minimum_tech_level, Some(9));
    }
}
