//! Equippable armor and weapons.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::parse::split_tag_string;

/// A piece of armor.
///
/// Tags carry the weight class (`light`, `medium`, `heavy`), the `power`
/// exemption, and any keyword names understood by the modifier resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    /// Display name.
    pub name: String,
    /// Armor bonus.
    #[serde(default)]
    pub bonus: i32,
    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Armor {
    /// Create an armor piece.
    pub fn new(name: impl Into<String>, bonus: i32, tags: &[&str]) -> Self {
        Self {
            name: name.into(),
            bonus,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// A weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display name.
    pub name: String,
    /// Raw damage before any attribute bonus.
    #[serde(default)]
    pub damage: i32,
    /// Comma-joined keyword tags (e.g. `"finesse, Strong(2)"`).
    #[serde(default)]
    pub tags: String,
    /// The attribute that may add to damage, if any.
    #[serde(default)]
    pub stat: Option<Attribute>,
}

impl Weapon {
    /// Create a weapon.
    pub fn new(
        name: impl Into<String>,
        damage: i32,
        tags: impl Into<String>,
        stat: Option<Attribute>,
    ) -> Self {
        Self {
            name: name.into(),
            damage,
            tags: tags.into(),
            stat,
        }
    }

    /// The individual tags of the comma-joined tag string.
    pub fn tag_list(&self) -> Vec<&str> {
        split_tag_string(&self.tags).collect()
    }

    /// Returns true if the tag string mentions `finesse`, ignoring case.
    pub fn is_finesse(&self) -> bool {
        self.tags.to_ascii_lowercase().contains("finesse")
    }
}

/// Anything that carries keyword tags.
pub trait Tagged {
    /// The tags on this item, in order.
    fn tags(&self) -> Vec<&str>;

    /// Returns true if any tag equals `tag`, ignoring ASCII case.
    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl Tagged for Armor {
    fn tags(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.trim()).collect()
    }
}

impl Tagged for Weapon {
    fn tags(&self) -> Vec<&str> {
        self.tag_list()
    }
}
