//! DEX and speed penalties from armor weight classes.

use serde::{Deserialize, Serialize};

use pf_core::{Armor, Tagged};

/// Tag that exempts an armor piece from all encumbrance.
pub const POWER_TAG: &str = "power";
/// Tag for medium armor.
pub const MEDIUM_TAG: &str = "medium";
/// Tag for heavy armor.
pub const HEAVY_TAG: &str = "heavy";

/// Combined encumbrance penalties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encumbrance {
    /// Added to effective DEX.
    pub dex: i32,
    /// Added to base movement speed.
    pub speed: i32,
}

impl Encumbrance {
    /// Penalty for a single armor piece.
    ///
    /// `power` overrides any weight tag on the same piece; `medium` wins
    /// over `heavy` when both are present.
    pub fn of(armor: &Armor) -> Self {
        if armor.has_tag(POWER_TAG) {
            Self::default()
        } else if armor.has_tag(MEDIUM_TAG) {
            Self { dex: -1, speed: 0 }
        } else if armor.has_tag(HEAVY_TAG) {
            Self { dex: -3, speed: -5 }
        } else {
            Self::default()
        }
    }
}

/// Sum the penalties of every equipped armor piece.
pub fn penalties(armor: &[Armor]) -> Encumbrance {
    armor.iter().map(Encumbrance::of).fold(Encumbrance::default(), |acc, e| Encumbrance {
        dex: acc.dex.saturating_add(e.dex),
        speed: acc.speed.saturating_add(e.speed),
    })
}
