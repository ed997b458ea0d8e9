//! Core types for Powerforge: attributes, items, keywords, powers, and
//! character sheets.
//!
//! This crate defines the plain data records the rules engine consumes and
//! produces. It holds no randomness and no rules logic beyond parsing tags
//! and keyword descriptions.

/// The eight attributes and per-attribute value blocks.
pub mod attribute;
/// Armor and weapon catalogs.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Armor, weapons, and the tagged-item abstraction.
pub mod item;
/// The keyword catalog.
pub mod keyword;
/// Tag and description parsing helpers.
pub mod parse;
/// Powers and the power table.
pub mod power;
/// Character sheets.
pub mod sheet;
/// Root stats and direct stat edits.
pub mod stats;

/// Re-export attribute types.
pub use attribute::{Attribute, AttributeBlock};
/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Armor, Tagged, Weapon};
/// Re-export keyword types.
pub use keyword::{Keyword, KeywordCatalog};
/// Re-export power types.
pub use power::Power;
/// Re-export the character sheet.
pub use sheet::CharacterSheet;
/// Re-export stat types.
pub use stats::{RootStats, StatField};
