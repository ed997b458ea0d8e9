//! Armor and weapon catalogs that characters are equipped from.

use serde::{Deserialize, Serialize};

use crate::item::{Armor, Tagged, Weapon};
use crate::keyword::KeywordCatalog;

/// The armor and weapon lists available for selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Available armor.
    #[serde(default)]
    pub armor: Vec<Armor>,
    /// Available weapons.
    #[serde(default)]
    pub weapons: Vec<Weapon>,
}

impl Catalog {
    /// Create a catalog from armor and weapon lists.
    pub fn new(armor: Vec<Armor>, weapons: Vec<Weapon>) -> Self {
        Self { armor, weapons }
    }

    /// Every distinct tag in use, in first-seen order (armor first).
    pub fn distinct_tags(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let all = self
            .armor
            .iter()
            .flat_map(Tagged::tags)
            .chain(self.weapons.iter().flat_map(Tagged::tags));
        for tag in all {
            if !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        seen
    }

    /// Register every tag in use into the keyword catalog if absent.
    ///
    /// Returns how many keywords were added.
    pub fn register_keywords(&self, keywords: &mut KeywordCatalog) -> usize {
        keywords.register_tags(self.distinct_tags())
    }
}
