//! The keyword catalog: descriptions for item tags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parse::{parse_level_suffix, substitute_level};

/// Description given to keywords registered automatically from catalog tags.
pub const DEFAULT_DESCRIPTION: &str = "Description TBD";

/// A keyword definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// Description text; may contain `{#}` and stat modifier placeholders.
    pub desc: String,
    /// Whether tags for this keyword carry a numeric level, as in `Name(3)`.
    #[serde(default)]
    pub variable: bool,
}

impl Keyword {
    /// Create a keyword definition.
    pub fn new(desc: impl Into<String>, variable: bool) -> Self {
        Self {
            desc: desc.into(),
            variable,
        }
    }
}

/// Mapping from keyword name to its definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordCatalog {
    entries: BTreeMap<String, Keyword>,
}

impl KeywordCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a keyword.
    pub fn insert(&mut self, name: impl Into<String>, keyword: Keyword) {
        self.entries.insert(name.into(), keyword);
    }

    /// Look up a keyword by exact name.
    pub fn get(&self, name: &str) -> Option<&Keyword> {
        self.entries.get(name)
    }

    /// Returns true if a keyword with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate keywords in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Keyword)> {
        self.entries.iter()
    }

    /// Look up the keyword a tag refers to, returning it with the tag's level.
    pub fn lookup_tag(&self, tag: &str) -> Option<(&str, &Keyword, Option<i32>)> {
        let (base, level) = parse_level_suffix(tag);
        let (name, keyword) = self.entries.get_key_value(base)?;
        Some((name.as_str(), keyword, level))
    }

    /// Register every tag's base name that is not yet in the catalog.
    ///
    /// New keywords get [`DEFAULT_DESCRIPTION`] and are marked variable when
    /// the tag carries a numeric suffix. Returns how many were added.
    pub fn register_tags<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) -> usize {
        let mut added = 0;
        for tag in tags {
            let (base, level) = parse_level_suffix(tag);
            if base.is_empty() || self.entries.contains_key(base) {
                continue;
            }
            self.entries
                .insert(base.to_string(), Keyword::new(DEFAULT_DESCRIPTION, level.is_some()));
            added += 1;
        }
        added
    }

    /// Render a tag for display: `Name(X)` for leveled variable keywords,
    /// the bare name otherwise. Unknown tags are returned trimmed.
    pub fn display_name(&self, tag: &str) -> String {
        match self.lookup_tag(tag) {
            Some((name, keyword, Some(level))) if keyword.variable => format!("{name}({level})"),
            Some((name, _, _)) => name.to_string(),
            None => tag.trim().to_string(),
        }
    }

    /// The description for a tag with its level substituted, if known.
    pub fn describe(&self, tag: &str) -> Option<String> {
        let (_, keyword, level) = self.lookup_tag(tag)?;
        Some(match level {
            Some(level) if keyword.variable => substitute_level(&keyword.desc, level),
            _ => keyword.desc.clone(),
        })
    }
}
