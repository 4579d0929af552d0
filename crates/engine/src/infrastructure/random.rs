//! Random sources.
//!
//! - `SystemRandom` draws from the thread RNG
//! - `SeededRandom` is deterministic for a given seed
//! - `ScriptedRandom` replays a fixed list of values, for replaying a
//!   generation draw by draw

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infrastructure::ports::RandomPort;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // RNG state is valid even after a poisoning panic.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn ordered(min: i32, max: i32) -> (i32, i32) {
    if min <= max {
        (min, max)
    } else {
        (max, min)
    }
}

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        let (min, max) = ordered(min, max);
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Deterministic random source.
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomPort for SeededRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        let (min, max) = ordered(min, max);
        lock(&self.rng).gen_range(min..=max)
    }
}

/// Replays a fixed sequence of values.
///
/// Each draw takes the next value, clamped into the requested range. When the
/// script runs out it starts again from the top.
pub struct ScriptedRandom {
    script: Vec<i32>,
    pending: Mutex<VecDeque<i32>>,
}

impl ScriptedRandom {
    pub fn new(script: impl Into<Vec<i32>>) -> Self {
        let script = script.into();
        Self {
            pending: Mutex::new(script.iter().copied().collect()),
            script,
        }
    }

    /// Draws left before the script wraps around.
    pub fn remaining(&self) -> usize {
        lock(&self.pending).len()
    }
}

impl RandomPort for ScriptedRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        let (min, max) = ordered(min, max);
        let mut pending = lock(&self.pending);
        if pending.is_empty() {
            pending.extend(self.script.iter().copied());
        }
        pending.pop_front().unwrap_or(min).clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_random_is_deterministic() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let draws_a: Vec<i32> = (0..50).map(|_| a.gen_range(1, 6)).collect();
        let draws_b: Vec<i32> = (0..50).map(|_| b.gen_range(1, 6)).collect();
        assert_eq!(draws_a, draws_b);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn seeded_random_stays_in_range() {
        let random = SeededRandom::new(7);
        for _ in 0..1000 {
            let value = random.gen_range(1, 6);
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn scripted_random_replays_then_wraps() {
        let random = ScriptedRandom::new(vec![3, 5]);
        assert_eq!(random.gen_range(1, 6), 3);
        assert_eq!(random.remaining(), 1);
        assert_eq!(random.gen_range(1, 6), 5);
        assert_eq!(random.gen_range(1, 6), 3);
    }

    #[test]
    fn scripted_random_clamps_into_range() {
        let random = ScriptedRandom::new(vec![9, -1]);
        assert_eq!(random.gen_range(1, 6), 6);
        assert_eq!(random.gen_range(1, 6), 1);
    }

    #[test]
    fn empty_script_returns_min() {
        let random = ScriptedRandom::new(Vec::new());
        assert_eq!(random.gen_range(2, 5), 2);
    }

    #[test]
    fn system_random_accepts_reversed_bounds() {
        let value = SystemRandom::new().gen_range(6, 1);
        assert!((1..=6).contains(&value));
    }
}
