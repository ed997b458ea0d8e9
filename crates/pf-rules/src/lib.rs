//! Character rules engine for Powerforge.
//!
//! Provides the probabilistic power generator and the stat resolution
//! pipeline that turns root stats plus keyword-tagged armor and weapons
//! into the final combat statistics of a character. Everything here is a
//! synchronous computation over data the caller owns; randomness comes in
//! through a [`RandomSource`].

pub mod character;
pub mod config;
pub mod encumbrance;
pub mod error;
pub mod keywords;
pub mod powers;
pub mod resolve;
pub mod rng;
pub mod select;

pub use character::{CharacterRequest, generate_character};
pub use config::GenerationConfig;
pub use encumbrance::{Encumbrance, penalties};
pub use error::{RulesError, RulesResult};
pub use powers::{
    GenerationParams, RollOutcome, consolidate, generate, regenerate_powers, roll_once,
};
pub use resolve::{ResolvedSheet, ResolvedWeapon, resolve, resolve_sheet};
pub use rng::RandomSource;
pub use select::{SelectionCriteria, select_items};
