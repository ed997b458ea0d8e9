//! Repeated rolling, rank inflation, and consolidation into a power list.

use serde::{Deserialize, Serialize};

use pf_core::Power;

use super::roll_once;
use crate::error::{RulesError, RulesResult};
use crate::rng::RandomSource;

/// Parameters of a power generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Number of base rolls.
    pub base_count: u32,
    /// Starting percent chance of an extra roll after each base roll.
    /// Decays by one after every extra roll that succeeds.
    pub extra_chance: f64,
    /// Percent chance, per draw, that a power gains another rank.
    pub extra_rank_chance: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            base_count: 3,
            extra_chance: 10.0,
            extra_rank_chance: 5.0,
        }
    }
}

impl GenerationParams {
    /// Validated constructor.
    ///
    /// Both chances must be finite and non-negative, the extra chance at
    /// most 100, and the extra rank chance below 100 (at 100 every draw
    /// would add another rank forever).
    pub fn new(base_count: u32, extra_chance: f64, extra_rank_chance: f64) -> RulesResult<Self> {
        if !extra_chance.is_finite() || !(0.0..=100.0).contains(&extra_chance) {
            return Err(RulesError::InvalidParameter {
                name: "extra chance",
                value: extra_chance.to_string(),
                reason: "must be between 0 and 100",
            });
        }
        if !extra_rank_chance.is_finite() || !(0.0..100.0).contains(&extra_rank_chance) {
            return Err(RulesError::InvalidParameter {
                name: "extra rank chance",
                value: extra_rank_chance.to_string(),
                reason: "must be at least 0 and below 100",
            });
        }
        Ok(Self {
            base_count,
            extra_chance,
            extra_rank_chance,
        })
    }

    /// Parse raw user input.
    pub fn parse(base_count: &str, extra_chance: &str, extra_rank_chance: &str) -> RulesResult<Self> {
        let base = base_count
            .trim()
            .parse::<u32>()
            .map_err(|_| RulesError::InvalidParameter {
                name: "base count",
                value: base_count.to_string(),
                reason: "must be a non-negative integer",
            })?;
        let extra = parse_percent("extra chance", extra_chance)?;
        let rank = parse_percent("extra rank chance", extra_rank_chance)?;
        Self::new(base, extra, rank)
    }

    /// Re-check the invariants, e.g. after deserializing.
    pub fn validate(&self) -> RulesResult<()> {
        Self::new(self.base_count, self.extra_chance, self.extra_rank_chance).map(|_| ())
    }
}

fn parse_percent(name: &'static str, raw: &str) -> RulesResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| RulesError::InvalidParameter {
            name,
            value: raw.to_string(),
            reason: "must be a number",
        })
}

/// Roll the raw, unconsolidated power list.
///
/// Runs `base_count` base rolls, each followed by its own decaying
/// extra-roll loop, then applies rank inflation to every power rolled.
pub fn roll_raw<R: RandomSource + ?Sized>(params: &GenerationParams, rng: &mut R) -> Vec<Power> {
    let mut powers: Vec<Power> = Vec::new();

    for _ in 0..params.base_count {
        roll_into(&mut powers, rng);

        let mut threshold = params.extra_chance;
        while threshold > 0.0 {
            let draw = f64::from(rng.percentile());
            if draw > threshold {
                break;
            }
            roll_into(&mut powers, rng);
            threshold -= 1.0;
        }
    }

    for power in &mut powers {
        while f64::from(rng.percentile()) <= params.extra_rank_chance {
            power.rank += 1;
        }
    }

    powers
}

fn roll_into<R: RandomSource + ?Sized>(powers: &mut Vec<Power>, rng: &mut R) {
    if let Some(power) = roll_once(rng, powers).into_new_power() {
        tracing::debug!(power = %power.name, frequency = power.frequency, "new power");
        powers.push(power);
    }
}

/// Merge duplicate powers, summing ranks and OR-ing the alpha flag.
///
/// Entries keep the position of their first occurrence.
pub fn consolidate(powers: Vec<Power>) -> Vec<Power> {
    let mut merged: Vec<Power> = Vec::with_capacity(powers.len());
    for power in powers {
        match merged.iter_mut().find(|p| p.same_power(&power)) {
            Some(existing) => {
                existing.rank += power.rank;
                existing.alpha |= power.alpha;
            }
            None => merged.push(power),
        }
    }
    merged
}

/// Generate a consolidated power list.
pub fn generate<R: RandomSource + ?Sized>(params: &GenerationParams, rng: &mut R) -> Vec<Power> {
    let powers = consolidate(roll_raw(params, rng));
    tracing::debug!(
        count = powers.len(),
        total_rank = pf_core::power::total_rank(&powers),
        "generated powers"
    );
    powers
}

/// Replace `powers` with a fresh list generated from raw user input.
///
/// Malformed input is rejected without touching `powers`; the rejection is
/// logged and reported only through the `false` return.
pub fn regenerate_powers<R: RandomSource + ?Sized>(
    powers: &mut Vec<Power>,
    base_count: &str,
    extra_chance: &str,
    extra_rank_chance: &str,
    rng: &mut R,
) -> bool {
    match GenerationParams::parse(base_count, extra_chance, extra_rank_chance) {
        Ok(params) => {
            *powers = generate(&params, rng);
            true
        }
        Err(e) => {
            tracing::warn!("power generation rejected: {e}");
            false
        }
    }
}
