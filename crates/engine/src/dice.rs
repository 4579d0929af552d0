//! Dice engine.
//!
//! Every random draw in the engine goes through [`DiceRoller`], which wraps
//! the injected [`RandomPort`]. Generators never touch an RNG directly, so a
//! scripted or seeded port reproduces a whole generation.

use std::sync::Arc;

use starsmith_domain::{D66Roll, DiceRoll, RollRecord, DIE_FACES};

use crate::infrastructure::ports::RandomPort;

/// Rolls six-sided dice over a random port.
#[derive(Clone)]
pub struct DiceRoller {
    random: Arc<dyn RandomPort>,
}

impl DiceRoller {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    fn face(&self) -> u8 {
        let max = i32::from(DIE_FACES);
        self.random.gen_range(1, max).clamp(1, max) as u8
    }

    fn roll_faces(&self, count: usize) -> DiceRoll {
        let dice: Vec<u8> = (0..count).map(|_| self.face()).collect();
        let total = dice.iter().map(|d| i32::from(*d)).sum();
        DiceRoll { dice, total }
    }

    pub fn roll_2d6(&self) -> DiceRoll {
        self.roll_faces(2)
    }

    pub fn roll_1d6(&self) -> DiceRoll {
        self.roll_faces(1)
    }

    /// Tens die first, then units.
    pub fn roll_d66(&self) -> D66Roll {
        let tens = self.face();
        let units = self.face();
        D66Roll { tens, units }
    }

    /// Uniform integer in `min..=max`.
    pub fn pick(&self, min: i32, max: i32) -> i32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        self.random.gen_range(low, high).clamp(low, high)
    }

    /// Pick an element uniformly, returning it with the draw to record.
    ///
    /// The recorded value is the index into `items`.
    pub fn pick_from<T: Copy>(&self, items: &[T]) -> Option<(T, RollRecord)> {
        let last = items.len().checked_sub(1)?;
        let max = i32::try_from(last).unwrap_or(i32::MAX);
        let index = self.pick(0, max);
        let item = *items.get(index as usize)?;
        Some((
            item,
            RollRecord::Pick {
                value: index,
                min: 0,
                max,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::infrastructure::ports::MockRandomPort;
    use crate::infrastructure::random::SeededRandom;
    use mockall::predicate::*;

    const SAMPLES: usize = 36_000;

    fn seeded(seed: u64) -> DiceRoller {
        DiceRoller::new(Arc::new(SeededRandom::new(seed)))
    }

    /// Whether `count` lies within `tolerance` (a fraction) of `expected`.
    fn near(count: usize, expected: f64, tolerance: f64) -> bool {
        (count as f64 - expected).abs() <= expected * tolerance
    }

    fn scripted(values: Vec<i32>) -> DiceRoller {
        let mut random = MockRandomPort::new();
        let mut values = values.into_iter();
        random
            .expect_gen_range()
            .returning(move |min, _| values.next().unwrap_or(min));
        DiceRoller::new(Arc::new(random))
    }

    #[test]
    fn roll_2d6_sums_two_faces() {
        let mut random = MockRandomPort::new();
        let mut values = vec![4, 5].into_iter();
        random
            .expect_gen_range()
            .with(eq(1), eq(6))
            .times(2)
            .returning(move |_, _| values.next().unwrap_or(1));

        let roll = DiceRoller::new(Arc::new(random)).roll_2d6();

        assert_eq!(roll.dice, vec![4, 5]);
        assert_eq!(roll.total, 9);
    }

    #[test]
    fn roll_1d6_has_one_face() {
        let roll = scripted(vec![3]).roll_1d6();
        assert_eq!(roll.dice, vec![3]);
        assert_eq!(roll.total, 3);
    }

    #[test]
    fn out_of_range_port_values_are_clamped_to_faces() {
        let roll = scripted(vec![0, 9]).roll_2d6();
        assert_eq!(roll.dice, vec![1, 6]);
    }

    #[test]
    fn d66_rolls_tens_then_units() {
        let roll = scripted(vec![5, 2]).roll_d66();
        assert_eq!(roll.code(), "52");
    }

    #[test]
    fn pick_passes_bounds_through() {
        let mut random = MockRandomPort::new();
        random
            .expect_gen_range()
            .with(eq(0), eq(9))
            .times(1)
            .returning(|_, _| 7);

        assert_eq!(DiceRoller::new(Arc::new(random)).pick(0, 9), 7);
    }

    #[test]
    fn pick_from_records_the_index() {
        let (slot, record) = scripted(vec![2]).pick_from(&[4u8, 6, 9]).unwrap();
        assert_eq!(slot, 9);
        assert_eq!(
            record,
            RollRecord::Pick {
                value: 2,
                min: 0,
                max: 2
            }
        );
    }

    #[test]
    fn pick_from_empty_is_none() {
        let empty: [u8; 0] = [];
        assert!(scripted(vec![]).pick_from(&empty).is_none());
    }

    #[test]
    fn d66_covers_all_36_codes_evenly() {
        let dice = seeded(66);
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for _ in 0..SAMPLES {
            *counts.entry(dice.roll_d66().code()).or_default() += 1;
        }

        assert_eq!(counts.len(), 36);
        for tens in 1..=DIE_FACES {
            for units in 1..=DIE_FACES {
                let code = format!("{}{}", tens, units);
                let count = counts.get(&code).copied().unwrap_or(0);
                assert!(near(count, 1_000.0, 0.15), "{} came up {} times", code, count);
            }
        }
    }

    #[test]
    fn two_d6_totals_follow_the_triangle() {
        let dice = seeded(2);
        let mut counts = [0usize; 13];
        for _ in 0..SAMPLES {
            let total = dice.roll_2d6().total;
            assert!((2..=12).contains(&total), "total {}", total);
            counts[total as usize] += 1;
        }

        // Ways to make each total out of 36
        for total in 2..=12usize {
            let ways = 6 - (7i32 - total as i32).abs();
            let expected = SAMPLES as f64 * f64::from(ways) / 36.0;
            assert!(
                near(counts[total], expected, 0.15),
                "total {} came up {} times, expected about {}",
                total,
                counts[total],
                expected
            );
        }
        let most_common = (2..=12usize).max_by_key(|t| counts[*t]);
        assert_eq!(most_common, Some(7));
    }

    #[test]
    fn one_d6_faces_are_uniform() {
        let dice = seeded(1);
        let mut counts = [0usize; 7];
        for _ in 0..SAMPLES {
            counts[dice.roll_1d6().total as usize] += 1;
        }
        assert_eq!(counts[0], 0);
        for face in 1..=usize::from(DIE_FACES) {
            assert!(
                near(counts[face], 6_000.0, 0.1),
                "face {} came up {} times",
                face,
                counts[face]
            );
        }
    }
}
