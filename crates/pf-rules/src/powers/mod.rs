//! Power rolling and generation.
//!
//! A single percentile roll either names a new power from the table
//! (1-90), bumps an existing power by one rank (91-99), or boosts an
//! existing power by five ranks and marks it alpha (100).

pub mod engine;

pub use engine::{GenerationParams, consolidate, generate, regenerate_powers, roll_raw};

use pf_core::Power;
use pf_core::power::TABLE_SIZE;

use crate::rng::RandomSource;

/// Lowest roll that bumps an existing power instead of naming a new one.
pub const RANK_BUMP_MIN: u32 = TABLE_SIZE as u32 + 1;
/// The roll that boosts a power to alpha.
pub const ALPHA_ROLL: u32 = 100;
/// Ranks added by an alpha roll.
pub const ALPHA_RANKS: u32 = 5;

/// What a single power roll produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    /// A brand-new rank-1 power to append.
    NewPower(Power),
    /// The existing power at `index` gained one rank.
    RankBump {
        /// Index into the existing list.
        index: usize,
    },
    /// The existing power at `index` gained five ranks and became alpha.
    AlphaBump {
        /// Index into the existing list.
        index: usize,
    },
    /// A rank bump was rolled with nothing to bump.
    Wasted,
}

impl RollOutcome {
    /// The new power, if this roll created one.
    pub fn into_new_power(self) -> Option<Power> {
        match self {
            Self::NewPower(p) => Some(p),
            _ => None,
        }
    }
}

/// Resolve one roll against the powers rolled so far.
///
/// Rank bumps mutate the chosen entry of `existing` in place. A natural 100
/// with nothing to boost is re-rolled until it yields a usable outcome, so it
/// can never be wasted nor create an alpha power from nothing.
pub fn roll_once<R: RandomSource + ?Sized>(rng: &mut R, existing: &mut [Power]) -> RollOutcome {
    loop {
        let r = rng.percentile();
        match r {
            ALPHA_ROLL => {
                if existing.is_empty() {
                    tracing::trace!("natural 100 with no powers, re-rolling");
                    continue;
                }
                let index = rng.pick(existing.len());
                let power = &mut existing[index];
                power.rank += ALPHA_RANKS;
                power.alpha = true;
                tracing::debug!(power = %power.name, rank = power.rank, "alpha boost");
                return RollOutcome::AlphaBump { index };
            }
            r if r >= RANK_BUMP_MIN => {
                if existing.is_empty() {
                    return RollOutcome::Wasted;
                }
                let index = rng.pick(existing.len());
                let power = &mut existing[index];
                power.rank += 1;
                tracing::debug!(power = %power.name, rank = power.rank, "rank bump");
                return RollOutcome::RankBump { index };
            }
            r => {
                // 1..=90 always has a table entry
                let frequency = u8::try_from(r).unwrap_or(TABLE_SIZE);
                return match Power::from_table(frequency) {
                    Some(power) => RollOutcome::NewPower(power),
                    None => RollOutcome::Wasted,
                };
            }
        }
    }
}
