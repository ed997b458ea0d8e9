//! JSON key-value storage for characters, presets, keywords and catalogs.
//!
//! Each collection lives in its own file inside the data directory. A
//! missing file loads as an empty collection.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use pf_core::{Armor, Catalog, CharacterSheet, KeywordCatalog, Weapon};
use pf_rules::CharacterRequest;

pub const CHARACTERS_FILE: &str = "characters.json";
pub const PRESETS_FILE: &str = "presets.json";
pub const KEYWORDS_FILE: &str = "keywords.json";
pub const ARMOR_FILE: &str = "armor.json";
pub const WEAPONS_FILE: &str = "weapons.json";

/// Stored characters keyed by name.
pub type Characters = BTreeMap<String, CharacterSheet>;
/// Stored presets keyed by name.
pub type Presets = BTreeMap<String, CharacterRequest>;

/// A data directory holding the JSON collections.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn exists(&self, file: &str) -> bool {
        self.path(file).exists()
    }

    fn load<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T, String> {
        let path = self.path(file);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no file, using empty collection");
            return Ok(T::default());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_json::from_str(&content).map_err(|e| format!("invalid {}: {e}", path.display()))
    }

    fn save<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("cannot create {}: {e}", self.dir.display()))?;
        let path = self.path(file);
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        fs::write(&path, content).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved");
        Ok(())
    }

    pub fn characters(&self) -> Result<Characters, String> {
        self.load(CHARACTERS_FILE)
    }

    pub fn save_characters(&self, characters: &Characters) -> Result<(), String> {
        self.save(CHARACTERS_FILE, characters)
    }

    /// Load a single character by name.
    pub fn character(&self, name: &str) -> Result<CharacterSheet, String> {
        self.characters()?
            .remove(name)
            .ok_or_else(|| format!("character not found: \"{name}\""))
    }

    /// Insert or replace a single character.
    pub fn put_character(&self, name: &str, sheet: CharacterSheet) -> Result<(), String> {
        let mut characters = self.characters()?;
        characters.insert(name.to_string(), sheet);
        self.save_characters(&characters)
    }

    pub fn presets(&self) -> Result<Presets, String> {
        self.load(PRESETS_FILE)
    }

    pub fn save_presets(&self, presets: &Presets) -> Result<(), String> {
        self.save(PRESETS_FILE, presets)
    }

    pub fn keywords(&self) -> Result<KeywordCatalog, String> {
        self.load(KEYWORDS_FILE)
    }

    pub fn save_keywords(&self, keywords: &KeywordCatalog) -> Result<(), String> {
        self.save(KEYWORDS_FILE, keywords)
    }

    pub fn save_catalog(&self, catalog: &Catalog) -> Result<(), String> {
        self.save(ARMOR_FILE, &catalog.armor)?;
        self.save(WEAPONS_FILE, &catalog.weapons)
    }

    /// Load the armor and weapon catalogs together with the keyword catalog.
    ///
    /// Every tag in use is registered as a keyword if missing, and the
    /// keyword file is rewritten when anything was added.
    pub fn catalog(&self) -> Result<(Catalog, KeywordCatalog), String> {
        let armor: Vec<Armor> = self.load(ARMOR_FILE)?;
        let weapons: Vec<Weapon> = self.load(WEAPONS_FILE)?;
        let catalog = Catalog::new(armor, weapons);

        let mut keywords = self.keywords()?;
        let added = catalog.register_keywords(&mut keywords);
        if added > 0 {
            tracing::info!(added, "registered new keywords from catalog tags");
            self.save_keywords(&keywords)?;
        }
        Ok((catalog, keywords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{Attribute, Keyword, RootStats};

    #[test]
    fn missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        assert!(store.characters().unwrap().is_empty());
        assert!(store.presets().unwrap().is_empty());
        let (catalog, keywords) = store.catalog().unwrap();
        assert!(catalog.armor.is_empty());
        assert!(keywords.is_empty());
        assert!(!store.exists(KEYWORDS_FILE));
    }

    #[test]
    fn put_and_get_character() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut root = RootStats::default();
        root.will = 3;
        store.put_character("Nova", CharacterSheet::new(root)).unwrap();
        assert_eq!(store.character("Nova").unwrap().root.will, 3);
        assert!(store.character("Nobody").is_err());
    }

    #[test]
    fn catalog_load_registers_and_persists_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let mut keywords = KeywordCatalog::new();
        keywords.insert("finesse", Keyword::new("Light and quick.", false));
        store.save_keywords(&keywords).unwrap();
        store
            .save_catalog(&Catalog::new(
                vec![Armor::new("Plate", 5, &["heavy"])],
                vec![Weapon::new("Rapier", 3, "finesse, Keen(2)", Some(Attribute::Dex))],
            ))
            .unwrap();

        let (_, loaded) = store.catalog().unwrap();
        assert_eq!(loaded.len(), 3);
        let persisted = store.keywords().unwrap();
        assert!(persisted.get("Keen").unwrap().variable);
        assert_eq!(persisted.get("finesse").unwrap().desc, "Light and quick.");
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CHARACTERS_FILE), "{ not json").unwrap();
        let store = Store::new(dir.path());
        assert!(store.characters().unwrap_err().contains("invalid"));
    }
}
