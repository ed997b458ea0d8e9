//! Stat modifiers granted by keyword-tagged items.
//!
//! Every tag on every equipped item is looked up in the keyword catalog.
//! Stat placeholders such as `{STR(+2)}` in the keyword description add to
//! the matching attribute. Each tag occurrence counts, so the same keyword
//! on two items (or twice on one item) contributes twice.

use pf_core::parse::extract_stat_modifiers;
use pf_core::{Armor, AttributeBlock, KeywordCatalog, Tagged, Weapon};

/// Sum the stat modifiers of a sequence of tags.
///
/// Unknown tags contribute nothing. For variable keywords with a parsed
/// level, `{#}` is substituted before scanning for modifiers.
pub fn resolve_tags<'a>(
    tags: impl IntoIterator<Item = &'a str>,
    catalog: &KeywordCatalog,
) -> AttributeBlock {
    let mut mods = AttributeBlock::default();
    for tag in tags {
        let Some(desc) = catalog.describe(tag) else {
            continue;
        };
        for (attr, delta) in extract_stat_modifiers(&desc) {
            mods.add(attr, delta);
        }
    }
    mods
}

/// Sum the stat modifiers of any tagged items.
pub fn resolve<T: Tagged>(items: &[T], catalog: &KeywordCatalog) -> AttributeBlock {
    resolve_tags(items.iter().flat_map(Tagged::tags), catalog)
}

/// Sum the stat modifiers of equipped armor and weapons together.
pub fn resolve_items(
    armor: &[Armor],
    weapons: &[Weapon],
    catalog: &KeywordCatalog,
) -> AttributeBlock {
    resolve(armor, catalog).plus(&resolve(weapons, catalog))
}
