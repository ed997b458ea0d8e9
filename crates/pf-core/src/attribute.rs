//! The eight attributes and the per-attribute value block.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the eight base attributes of the ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    /// Strength.
    #[serde(rename = "STR")]
    Str,
    /// Agility.
    #[serde(rename = "AGL")]
    Agl,
    /// Fighting.
    #[serde(rename = "FGT")]
    Fgt,
    /// Awareness.
    #[serde(rename = "AWE")]
    Awe,
    /// Stamina.
    #[serde(rename = "STA")]
    Sta,
    /// Dexterity.
    #[serde(rename = "DEX")]
    Dex,
    /// Intellect.
    #[serde(rename = "INT")]
    Int,
    /// Presence.
    #[serde(rename = "PRE")]
    Pre,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 8] = [
        Self::Str,
        Self::Agl,
        Self::Fgt,
        Self::Awe,
        Self::Sta,
        Self::Dex,
        Self::Int,
        Self::Pre,
    ];

    /// The three-letter code used in catalogs and keyword descriptions.
    pub fn code(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Agl => "AGL",
            Self::Fgt => "FGT",
            Self::Awe => "AWE",
            Self::Sta => "STA",
            Self::Dex => "DEX",
            Self::Int => "INT",
            Self::Pre => "PRE",
        }
    }

    /// Parse an attribute from its code, ignoring case and surrounding whitespace.
    pub fn from_code(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|attr| attr.code().eq_ignore_ascii_case(s))
    }

    /// Match an upper-case code exactly, as written in keyword descriptions.
    pub fn from_exact_code(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.code() == s)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CoreError::UnknownAttribute(s.to_string()))
    }
}

/// A signed value for each of the eight attributes.
///
/// Serves as root values, modifier accumulators, and effective values alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBlock {
    /// Strength.
    #[serde(rename = "STR", default)]
    pub strength: i32,
    /// Agility.
    #[serde(rename = "AGL", default)]
    pub agility: i32,
    /// Fighting.
    #[serde(rename = "FGT", default)]
    pub fighting: i32,
    /// Awareness.
    #[serde(rename = "AWE", default)]
    pub awareness: i32,
    /// Stamina.
    #[serde(rename = "STA", default)]
    pub stamina: i32,
    /// Dexterity.
    #[serde(rename = "DEX", default)]
    pub dexterity: i32,
    /// Intellect.
    #[serde(rename = "INT", default)]
    pub intellect: i32,
    /// Presence.
    #[serde(rename = "PRE", default)]
    pub presence: i32,
}

impl AttributeBlock {
    /// Read the value for an attribute.
    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Str => self.strength,
            Attribute::Agl => self.agility,
            Attribute::Fgt => self.fighting,
            Attribute::Awe => self.awareness,
            Attribute::Sta => self.stamina,
            Attribute::Dex => self.dexterity,
            Attribute::Int => self.intellect,
            Attribute::Pre => self.presence,
        }
    }

    /// Mutable access to the value for an attribute.
    pub fn get_mut(&mut self, attr: Attribute) -> &mut i32 {
        match attr {
            Attribute::Str => &mut self.strength,
            Attribute::Agl => &mut self.agility,
            Attribute::Fgt => &mut self.fighting,
            Attribute::Awe => &mut self.awareness,
            Attribute::Sta => &mut self.stamina,
            Attribute::Dex => &mut self.dexterity,
            Attribute::Int => &mut self.intellect,
            Attribute::Pre => &mut self.presence,
        }
    }

    /// Set the value for an attribute.
    pub fn set(&mut self, attr: Attribute, value: i32) {
        *self.get_mut(attr) = value;
    }

    /// Add a delta to an attribute, saturating at the `i32` bounds.
    pub fn add(&mut self, attr: Attribute, delta: i32) {
        let value = self.get_mut(attr);
        *value = value.saturating_add(delta);
    }

    /// Element-wise sum of two blocks.
    pub fn plus(&self, other: &AttributeBlock) -> AttributeBlock {
        let mut out = *self;
        for attr in Attribute::ALL {
            out.add(attr, other.get(attr));
        }
        out
    }

    /// Iterate `(attribute, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(|attr| (attr, self.get(attr)))
    }

    /// Returns true if every value is zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, v)| v == 0)
    }
}
