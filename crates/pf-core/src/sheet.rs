//! The character sheet: the unit persisted and exchanged with the front end.

use serde::{Deserialize, Serialize};

use crate::item::{Armor, Weapon};
use crate::power::{Power, is_consolidated};
use crate::stats::RootStats;

/// A character's stats, equipment and powers.
///
/// The sheet has no identity of its own; the storage layer keys it by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Base attributes and defense offsets.
    #[serde(default)]
    pub root: RootStats,
    /// Equipped armor.
    #[serde(default)]
    pub armor: Vec<Armor>,
    /// Equipped weapons.
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    /// Consolidated power list.
    #[serde(default)]
    pub powers: Vec<Power>,
}

impl CharacterSheet {
    /// Create a sheet with root stats and nothing equipped.
    pub fn new(root: RootStats) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    /// Returns true if the power list satisfies the uniqueness invariant.
    pub fn powers_consolidated(&self) -> bool {
        is_consolidated(&self.powers)
    }
}
