//! Derived statistics: effective attributes, defenses, speed, and weapon DCs.
//!
//! Resolution is pure. It reads the root stats, equipped items and keyword
//! catalog and returns a display-ready [`ResolvedSheet`]; calling it again
//! on the same input yields the same sheet.

use serde::{Deserialize, Serialize};

use pf_core::{
    Armor, Attribute, AttributeBlock, CharacterSheet, KeywordCatalog, Power, RootStats, Weapon,
};

use crate::encumbrance::{self, Encumbrance};
use crate::keywords;

/// Movement speed before armor penalties.
pub const BASE_SPEED: i32 = 30;
/// Added to effective damage to get a weapon's DC.
pub const DC_OFFSET: i32 = 15;

/// A weapon with its resolved damage and DC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedWeapon {
    /// The weapon as equipped.
    pub weapon: Weapon,
    /// Raw damage plus any attribute bonus.
    pub effective_damage: i32,
    /// Difficulty class: effective damage + 15.
    pub dc: i32,
}

/// A fully materialized character sheet for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSheet {
    /// Root values as stored.
    pub base: AttributeBlock,
    /// Keyword modifiers plus the encumbrance DEX penalty.
    pub modifiers: AttributeBlock,
    /// `base + modifiers`.
    pub effective: AttributeBlock,
    /// Root Dodge + effective AGL.
    pub dodge: i32,
    /// Root Parry + effective FGT.
    pub parry: i32,
    /// Root Fortitude + effective STA.
    pub fortitude: i32,
    /// Root Toughness + effective STA.
    pub toughness: i32,
    /// Root Will + effective AWE.
    pub will: i32,
    /// Base speed plus the encumbrance speed penalty.
    pub speed: i32,
    /// Encumbrance applied by the equipped armor.
    pub encumbrance: Encumbrance,
    /// Equipped armor, unchanged.
    pub armor: Vec<Armor>,
    /// Equipped weapons with damage and DC.
    pub weapons: Vec<ResolvedWeapon>,
    /// The character's powers.
    pub powers: Vec<Power>,
}

/// Resolve root stats and equipment into the displayed sheet.
///
/// All sums saturate at the `i32` bounds, so extreme stored values clamp
/// instead of overflowing.
pub fn resolve(
    root: &RootStats,
    armor: &[Armor],
    weapons: &[Weapon],
    powers: &[Power],
    catalog: &KeywordCatalog,
) -> ResolvedSheet {
    let mut modifiers = keywords::resolve_items(armor, weapons, catalog);
    let encumbrance = encumbrance::penalties(armor);
    modifiers.add(Attribute::Dex, encumbrance.dex);

    let effective = root.attributes.plus(&modifiers);

    let weapons = weapons
        .iter()
        .map(|weapon| {
            let effective_damage = weapon_damage(weapon, &effective);
            ResolvedWeapon {
                weapon: weapon.clone(),
                effective_damage,
                dc: effective_damage.saturating_add(DC_OFFSET),
            }
        })
        .collect();

    ResolvedSheet {
        base: root.attributes,
        modifiers,
        effective,
        dodge: root.dodge.saturating_add(effective.agility),
        parry: root.parry.saturating_add(effective.fighting),
        fortitude: root.fortitude.saturating_add(effective.stamina),
        toughness: root.toughness.saturating_add(effective.stamina),
        will: root.will.saturating_add(effective.awareness),
        speed: BASE_SPEED.saturating_add(encumbrance.speed),
        encumbrance,
        armor: armor.to_vec(),
        weapons,
        powers: powers.to_vec(),
    }
}

/// Resolve a whole character sheet.
pub fn resolve_sheet(sheet: &CharacterSheet, catalog: &KeywordCatalog) -> ResolvedSheet {
    resolve(&sheet.root, &sheet.armor, &sheet.weapons, &sheet.powers, catalog)
}

/// Effective damage of a weapon given effective attributes.
///
/// STR weapons always add effective STR. DEX weapons add effective DEX only
/// when tagged finesse. Any other stat adds nothing.
pub fn weapon_damage(weapon: &Weapon, effective: &AttributeBlock) -> i32 {
    match weapon.stat {
        Some(Attribute::Str) => weapon.damage.saturating_add(effective.strength),
        Some(Attribute::Dex) if weapon.is_finesse() => {
            weapon.damage.saturating_add(effective.dexterity)
        }
        _ => weapon.damage,
    }
}
