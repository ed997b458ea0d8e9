//! Root stats: the eight base attributes plus the base defense offsets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeBlock};
use crate::error::{CoreError, CoreResult};

/// A character's base values before any item or armor modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootStats {
    /// The eight base attributes.
    #[serde(default)]
    pub attributes: AttributeBlock,
    /// Base Dodge offset (added to effective AGL).
    #[serde(default)]
    pub dodge: i32,
    /// Base Parry offset (added to effective FGT).
    #[serde(default)]
    pub parry: i32,
    /// Base Fortitude offset (added to effective STA).
    #[serde(default)]
    pub fortitude: i32,
    /// Base Will offset (added to effective AWE).
    #[serde(default)]
    pub will: i32,
    /// Base Toughness, independent of the STA attribute itself.
    #[serde(default)]
    pub toughness: i32,
}

/// A single editable field of [`RootStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    /// One of the eight attributes.
    Attribute(Attribute),
    /// The Dodge offset.
    Dodge,
    /// The Parry offset.
    Parry,
    /// The Fortitude offset.
    Fortitude,
    /// The Will offset.
    Will,
    /// The Toughness base.
    Toughness,
}

impl StatField {
    /// Parse a field name: an attribute code or one of the defense names.
    pub fn parse(s: &str) -> CoreResult<Self> {
        if let Some(attr) = Attribute::from_code(s) {
            return Ok(Self::Attribute(attr));
        }
        match s.trim().to_lowercase().as_str() {
            "dodge" => Ok(Self::Dodge),
            "parry" => Ok(Self::Parry),
            "fortitude" | "fort" => Ok(Self::Fortitude),
            "will" => Ok(Self::Will),
            "toughness" => Ok(Self::Toughness),
            _ => Err(CoreError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute(attr) => write!(f, "{attr}"),
            Self::Dodge => write!(f, "Dodge"),
            Self::Parry => write!(f, "Parry"),
            Self::Fortitude => write!(f, "Fortitude"),
            Self::Will => write!(f, "Will"),
            Self::Toughness => write!(f, "Toughness"),
        }
    }
}

impl RootStats {
    /// Read a field.
    pub fn get(&self, field: StatField) -> i32 {
        match field {
            StatField::Attribute(attr) => self.attributes.get(attr),
            StatField::Dodge => self.dodge,
            StatField::Parry => self.parry,
            StatField::Fortitude => self.fortitude,
            StatField::Will => self.will,
            StatField::Toughness => self.toughness,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: StatField, value: i32) {
        match field {
            StatField::Attribute(attr) => self.attributes.set(attr, value),
            StatField::Dodge => self.dodge = value,
            StatField::Parry => self.parry = value,
            StatField::Fortitude => self.fortitude = value,
            StatField::Will => self.will = value,
            StatField::Toughness => self.toughness = value,
        }
    }

    /// Apply a direct edit from raw user input.
    ///
    /// Both the field name and the value are validated before anything is
    /// written, so a rejected edit leaves the stats exactly as they were.
    pub fn apply_edit(&mut self, field: &str, raw: &str) -> CoreResult<StatField> {
        let field = StatField::parse(field)?;
        let value = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| CoreError::InvalidNumber {
                field: field.to_string(),
                value: raw.to_string(),
            })?;
        self.set(field, value);
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_field_parse() {
        assert_eq!(
            StatField::parse("str").unwrap(),
            StatField::Attribute(Attribute::Str)
        );
        assert_eq!(StatField::parse("Dodge").unwrap(), StatField::Dodge);
        assert_eq!(StatField::parse("TOUGHNESS").unwrap(), StatField::Toughness);
        assert!(StatField::parse("luck").is_err());
    }

    #[test]
    fn apply_edit_sets_value() {
        let mut root = RootStats::default();
        root.apply_edit("AGL", "4").unwrap();
        root.apply_edit("parry", " -2 ").unwrap();
        assert_eq!(root.attributes.agility, 4);
        assert_eq!(root.parry, -2);
    }

    #[test]
    fn apply_edit_rejects_non_numeric() {
        let mut root = RootStats::default();
        root.toughness = 3;
        let before = root;
        let err = root.apply_edit("toughness", "abc").unwrap_err();
        assert!(matches!(err, CoreError::InvalidNumber { .. }));
        assert_eq!(root, before);
    }

    #[test]
    fn apply_edit_rejects_unknown_field() {
        let mut root = RootStats::default();
        let before = root;
        assert!(root.apply_edit("luck", "3").is_err());
        assert_eq!(root, before);
    }

    #[test]
    fn get_matches_set() {
        let mut root = RootStats::default();
        root.set(StatField::Will, 6);
        root.set(StatField::Attribute(Attribute::Int), 2);
        assert_eq!(root.get(StatField::Will), 6);
        assert_eq!(root.get(StatField::Attribute(Attribute::Int)), 2);
    }
}
