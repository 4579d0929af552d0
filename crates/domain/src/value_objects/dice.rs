//! Dice roll value objects
//!
//! Generation is driven by six-sided dice only:
//! - 2D6 for every table lookup (triangular distribution over 2-12)
//! - 1D6 for small counts (disks, planets, moons)
//! - d66 for wide trait tables (36 equally likely two-digit codes)
//!
//! These types only hold outcomes. Drawing them is the engine's job, so the
//! domain stays free of any random source.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Number of faces on every die used by the generators.
pub const DIE_FACES: u8 = 6;

fn check_face(face: u8) -> Result<u8, DomainError> {
    if (1..=DIE_FACES).contains(&face) {
        Ok(face)
    } else {
        Err(DomainError::invalid_parameter(
            "die_face",
            format!("{} is not a d6 face", face),
        ))
    }
}

/// The faces of one or more d6 and their sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRoll {
    /// Individual die results, in the order they were drawn
    pub dice: Vec<u8>,
    /// Sum of all faces
    pub total: i32,
}

impl DiceRoll {
    /// Build a roll from drawn faces.
    pub fn from_faces(dice: Vec<u8>) -> Result<Self, DomainError> {
        if dice.is_empty() {
            return Err(DomainError::invalid_parameter(
                "dice",
                "a roll needs at least one die",
            ));
        }
        for face in &dice {
            check_face(*face)?;
        }
        let total = dice.iter().map(|d| i32::from(*d)).sum();
        Ok(Self { dice, total })
    }

    /// Build a 2D6 roll.
    pub fn two_d6(die1: u8, die2: u8) -> Result<Self, DomainError> {
        Self::from_faces(vec![die1, die2])
    }

    /// Build a 1D6 roll.
    pub fn one_d6(die: u8) -> Result<Self, DomainError> {
        Self::from_faces(vec![die])
    }

    /// Format as a breakdown string (e.g., "2d6[4, 5] = 9")
    pub fn breakdown(&self) -> String {
        let faces: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        format!("{}d6[{}] = {}", self.dice.len(), faces.join(", "), self.total)
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.breakdown())
    }
}

/// A d66 roll: tens die then units die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct D66Roll {
    pub tens: u8,
    pub units: u8,
}

impl D66Roll {
    pub fn new(tens: u8, units: u8) -> Result<Self, DomainError> {
        Ok(Self {
            tens: check_face(tens)?,
            units: check_face(units)?,
        })
    }

    /// Parse a code such as "34".
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        let bytes = code.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(DomainError::parse(format!("Invalid d66 code: '{}'", code)));
        }
        let digit = |b: u8| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(DomainError::parse(format!("Invalid d66 code: '{}'", code)))
            }
        };
        Self::new(digit(bytes[0])?, digit(bytes[1])?)
    }

    /// Two-digit code, "11" through "66".
    pub fn code(&self) -> String {
        format!("{}{}", self.tens, self.units)
    }

    /// Position of this code among the 36 outcomes, 0 ("11") to 35 ("66").
    pub fn ordinal(&self) -> usize {
        usize::from(self.tens - 1) * usize::from(DIE_FACES) + usize::from(self.units - 1)
    }

    /// Every d66 code in ascending order.
    pub fn all() -> impl Iterator<Item = D66Roll> {
        (1..=DIE_FACES).flat_map(|tens| (1..=DIE_FACES).map(move |units| D66Roll { tens, units }))
    }
}

impl fmt::Display for D66Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tens, self.units)
    }
}

/// One entry in a record's provenance: the draw that produced a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RollRecord {
    /// Sum of d6 faces
    Dice(DiceRoll),
    /// d66 code
    D66(D66Roll),
    /// Uniform draw from an inclusive range (spectral grade, orbit choice)
    Pick { value: i32, min: i32, max: i32 },
}

impl RollRecord {
    /// The numeric value this draw contributed.
    pub fn value(&self) -> i32 {
        match self {
            RollRecord::Dice(roll) => roll.total,
            RollRecord::D66(roll) => (roll.tens as i32) * 10 + roll.units as i32,
            RollRecord::Pick { value, .. } => *value,
        }
    }
}

impl From<DiceRoll> for RollRecord {
    fn from(roll: DiceRoll) -> Self {
        RollRecord::Dice(roll)
    }
}

impl From<D66Roll> for RollRecord {
    fn from(roll: D66Roll) -> Self {
        RollRecord::D66(roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_two_d6_total() {
        let roll = DiceRoll::two_d6(4, 5).unwrap();
        assert_eq!(roll.total, 9);
        assert_eq!(roll.dice, vec![4, 5]);
    }

    #[test]
    fn test_face_out_of_range() {
        assert!(DiceRoll::two_d6(0, 3).is_err());
        assert!(DiceRoll::two_d6(3, 7).is_err());
        assert!(DiceRoll::from_faces(vec![]).is_err());
    }

    #[test]
    fn test_breakdown() {
        let roll = DiceRoll::two_d6(4, 5).unwrap();
        assert_eq!(roll.breakdown(), "2d6[4, 5] = 9");
        assert_eq!(DiceRoll::one_d6(3).unwrap().to_string(), "1d6[3] = 3");
    }

    #[test]
    fn test_d66_code_and_ordinal() {
        let roll = D66Roll::new(3, 4).unwrap();
        assert_eq!(roll.code(), "34");
        assert_eq!(roll.ordinal(), 15);
        assert_eq!(D66Roll::new(1, 1).unwrap().ordinal(), 0);
        assert_eq!(D66Roll::new(6, 6).unwrap().ordinal(), 35);
    }

    #[test]
    fn test_d66_parse() {
        assert_eq!(D66Roll::parse("52").unwrap(), D66Roll::new(5, 2).unwrap());
        assert!(D66Roll::parse("70").is_err());
        assert!(D66Roll::parse("5").is_err());
        assert!(D66Roll::parse("a1").is_err());
    }

    #[test]
    fn test_d66_all_has_36_distinct_codes() {
        let codes: HashSet<String> = D66Roll::all().map(|r| r.code()).collect();
        assert_eq!(codes.len(), 36);
        let ordinals: Vec<usize> = D66Roll::all().map(|r| r.ordinal()).collect();
        assert_eq!(ordinals, (0..36).collect::<Vec<_>>());
    }

    #[test]
    fn test_roll_record_value() {
        let dice: RollRecord = DiceRoll::two_d6(6, 6).unwrap().into();
        assert_eq!(dice.value(), 12);
        let d66: RollRecord = D66Roll::new(2, 5).unwrap().into();
        assert_eq!(d66.value(), 25);
        let pick = RollRecord::Pick {
            value: 7,
            min: 0,
            max: 9,
        };
        assert_eq!(pick.value(), 7);
    }
}
