//! Uniform integer sources for rolling.
//!
//! The engine draws every random number through [`RandomSource`], so a
//! seeded [`StdRng`] makes generation reproducible and tests can script
//! exact roll sequences.

use rand::Rng;
use rand::rngs::StdRng;

/// A seedable source of uniform integers.
pub trait RandomSource {
    /// Draw a uniform integer in `low..=high`.
    fn roll(&mut self, low: u32, high: u32) -> u32;

    /// Draw a percentile roll in `1..=100`.
    fn percentile(&mut self) -> u32 {
        self.roll(1, 100)
    }

    /// Pick a uniform index into a collection of `len` elements.
    ///
    /// `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        let high = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.roll(0, high) as usize
    }
}

impl RandomSource for StdRng {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

/// A source that replays a fixed sequence of draws.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedRolls {
    values: std::collections::VecDeque<u32>,
    drawn: usize,
}

#[cfg(test)]
impl ScriptedRolls {
    pub(crate) fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            drawn: 0,
        }
    }

    /// How many values have been drawn so far.
    pub(crate) fn drawn(&self) -> usize {
        self.drawn
    }

    /// How many scripted values remain.
    pub(crate) fn remaining(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRolls {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        let value = self.values.pop_front().expect("scripted rolls exhausted");
        assert!(
            (low..=high).contains(&value),
            "scripted value {value} outside {low}..={high}"
        );
        self.drawn += 1;
        value
    }
}
