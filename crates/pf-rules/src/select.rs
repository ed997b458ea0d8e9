//! Picking armor and weapons from a catalog by tag.

use serde::{Deserialize, Serialize};

use pf_core::Tagged;

use crate::rng::RandomSource;

/// Which items to pick from a catalog list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCriteria {
    /// Every one of these tags must be on a candidate item.
    #[serde(default)]
    pub tags: Vec<String>,
    /// How many distinct items to pick.
    #[serde(default)]
    pub count: usize,
}

impl SelectionCriteria {
    /// Pick `count` items carrying all of `tags`.
    pub fn new(tags: &[&str], count: usize) -> Self {
        Self {
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            count,
        }
    }
}

/// Indices of the pool items carrying every filter tag.
///
/// Falls back to the whole pool when nothing matches.
pub fn candidates<T: Tagged>(pool: &[T], filter: &[String]) -> Vec<usize> {
    let matching: Vec<usize> = pool
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.iter().all(|tag| item.has_tag(tag)))
        .map(|(i, _)| i)
        .collect();

    if matching.is_empty() && !pool.is_empty() {
        tracing::debug!(?filter, "no items match filter, using whole catalog");
        return (0..pool.len()).collect();
    }
    matching
}

/// Pick up to `criteria.count` distinct items uniformly at random.
pub fn select_items<T, R>(pool: &[T], criteria: &SelectionCriteria, rng: &mut R) -> Vec<T>
where
    T: Tagged + Clone,
    R: RandomSource + ?Sized,
{
    let mut remaining = candidates(pool, &criteria.tags);
    let mut picked = Vec::with_capacity(criteria.count.min(remaining.len()));
    while picked.len() < criteria.count && !remaining.is_empty() {
        let index = remaining.swap_remove(rng.pick(remaining.len()));
        picked.push(pool[index].clone());
    }
    picked
}
