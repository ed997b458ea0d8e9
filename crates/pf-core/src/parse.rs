//! Tag and keyword-description parsing.
//!
//! Item tags may carry a numeric level suffix (`"Strong(3)"`). Keyword
//! descriptions may embed a `{#}` level placeholder and any number of stat
//! modifier placeholders such as `{STR(+2)}` or `{DEX(-1)}`. These helpers
//! are pure functions with no knowledge of catalogs or characters.

use std::sync::LazyLock;

use regex::Regex;

use crate::attribute::Attribute;

/// The placeholder replaced by a variable keyword's level.
pub const LEVEL_PLACEHOLDER: &str = "{#}";

static LEVEL_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\((-?\d+)\)\s*$").expect("valid regex"));
static STAT_MODIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Z]+)\(([+-]\d+)\)\}").expect("valid regex"));

/// Split a tag into its base name and optional trailing `(n)` level.
///
/// ```
/// use pf_core::parse::parse_level_suffix;
///
/// assert_eq!(parse_level_suffix("Strong(3)"), ("Strong", Some(3)));
/// assert_eq!(parse_level_suffix("heavy"), ("heavy", None));
/// ```
pub fn parse_level_suffix(tag: &str) -> (&str, Option<i32>) {
    let tag = tag.trim();
    let Some(caps) = LEVEL_SUFFIX_RE.captures(tag) else {
        return (tag, None);
    };
    let (Some(base), Some(level)) = (caps.get(1), caps.get(2)) else {
        return (tag, None);
    };
    match level.as_str().parse::<i32>() {
        Ok(n) => (base.as_str(), Some(n)),
        Err(_) => (tag, None),
    }
}

/// Replace every `{#}` placeholder with the given level.
pub fn substitute_level(desc: &str, level: i32) -> String {
    desc.replace(LEVEL_PLACEHOLDER, &level.to_string())
}

/// Find every `{STAT(+n)}` / `{STAT(-n)}` placeholder in a description.
///
/// Codes must be written in upper case; placeholders naming an unknown
/// stat code are skipped. Order follows the
/// description text, and repeated placeholders are all reported.
pub fn extract_stat_modifiers(desc: &str) -> Vec<(Attribute, i32)> {
    STAT_MODIFIER_RE
        .captures_iter(desc)
        .filter_map(|caps| {
            let attr = Attribute::from_exact_code(caps.get(1)?.as_str())?;
            let delta = caps.get(2)?.as_str().parse::<i32>().ok()?;
            Some((attr, delta))
        })
        .collect()
}

/// Split a comma-joined tag string into trimmed, non-empty tags.
pub fn split_tag_string(tags: &str) -> impl Iterator<Item = &str> {
    tags.split(',').map(str::trim).filter(|t| !t.is_empty())
}
