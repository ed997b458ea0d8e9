//! Generating a whole character from a request and a catalog.

use serde::{Deserialize, Serialize};

use pf_core::{Catalog, CharacterSheet, RootStats};

use crate::error::RulesResult;
use crate::powers::{self, GenerationParams};
use crate::rng::RandomSource;
use crate::select::{SelectionCriteria, select_items};

/// Everything needed to generate a character; stored as a preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRequest {
    /// Base attributes and defense offsets.
    #[serde(default)]
    pub root: RootStats,
    /// Power generation parameters.
    #[serde(default)]
    pub generation: GenerationParams,
    /// Armor to equip.
    #[serde(default)]
    pub armor: SelectionCriteria,
    /// Weapons to equip.
    #[serde(default)]
    pub weapons: SelectionCriteria,
}

impl CharacterRequest {
    /// Set the root stats.
    pub fn with_root(mut self, root: RootStats) -> Self {
        self.root = root;
        self
    }

    /// Set the power generation parameters.
    pub fn with_generation(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }

    /// Set the armor selection.
    pub fn with_armor(mut self, armor: SelectionCriteria) -> Self {
        self.armor = armor;
        self
    }

    /// Set the weapon selection.
    pub fn with_weapons(mut self, weapons: SelectionCriteria) -> Self {
        self.weapons = weapons;
        self
    }
}

/// Build a character: select armor, then weapons, then roll powers.
///
/// Fails only if the generation parameters are out of range, which can
/// happen for requests deserialized from storage.
pub fn generate_character<R: RandomSource + ?Sized>(
    request: &CharacterRequest,
    catalog: &Catalog,
    rng: &mut R,
) -> RulesResult<CharacterSheet> {
    request.generation.validate()?;

    let mut sheet = CharacterSheet::new(request.root);
    sheet.armor = select_items(&catalog.armor, &request.armor, rng);
    sheet.weapons = select_items(&catalog.weapons, &request.weapons, rng);
    sheet.powers = powers::generate(&request.generation, rng);

    tracing::debug!(
        armor = sheet.armor.len(),
        weapons = sheet.weapons.len(),
        powers = sheet.powers.len(),
        "generated character"
    );
    Ok(sheet)
}
