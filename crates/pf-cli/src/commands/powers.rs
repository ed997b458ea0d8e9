use std::path::Path;

use colored::Colorize;

use pf_rules::regenerate_powers;

use crate::store::Store;

/// Re-roll a character's powers from raw parameter strings.
///
/// Malformed parameters leave the stored powers untouched; the command
/// still succeeds and only reports that nothing changed.
pub fn run(
    dir: &Path,
    name: &str,
    base: &str,
    extra: &str,
    rank: &str,
    seed: Option<u64>,
) -> Result<(), String> {
    let store = Store::new(dir);
    let mut characters = store.characters()?;
    let sheet = characters
        .get_mut(name)
        .ok_or_else(|| format!("character not found: \"{name}\""))?;

    let mut rng = super::config(seed).rng();
    if !regenerate_powers(&mut sheet.powers, base, extra, rank, &mut rng) {
        println!("  {}", "Parameters rejected; powers unchanged.".yellow());
        return Ok(());
    }

    for power in &sheet.powers {
        println!("  {power}");
    }
    println!();
    println!("  {} powers", sheet.powers.len());

    store.save_characters(&characters)
}
