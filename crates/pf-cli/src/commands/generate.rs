use std::path::Path;

use pf_rules::{GenerationParams, generate_character, resolve_sheet};

use crate::render;
use crate::store::Store;

/// Options for `pf generate`.
pub struct GenerateArgs<'a> {
    pub name: &'a str,
    pub preset: Option<&'a str>,
    pub base: Option<u32>,
    pub extra: Option<f64>,
    pub rank: Option<f64>,
    pub seed: Option<u64>,
    pub force: bool,
}

pub fn run(dir: &Path, args: &GenerateArgs<'_>) -> Result<(), String> {
    let store = Store::new(dir);

    if store.characters()?.contains_key(args.name) && !args.force {
        return Err(format!(
            "character \"{}\" already exists (use --force to replace it)",
            args.name
        ));
    }

    let config = super::config(args.seed);
    let preset = match args.preset {
        Some(preset) => Some(
            store
                .presets()?
                .remove(preset)
                .ok_or_else(|| format!("preset not found: \"{preset}\""))?,
        ),
        None => None,
    };

    // flags override the preset, which overrides the config defaults
    let defaults = preset.as_ref().map_or(config.params, |p| p.generation);
    let params = GenerationParams::new(
        args.base.unwrap_or(defaults.base_count),
        args.extra.unwrap_or(defaults.extra_chance),
        args.rank.unwrap_or(defaults.extra_rank_chance),
    )
    .map_err(|e| e.to_string())?;
    let config = config.with_params(params);
    let request = preset.unwrap_or_default().with_generation(config.params);

    let (catalog, keywords) = store.catalog()?;
    let mut rng = config.rng();
    let sheet = generate_character(&request, &catalog, &mut rng).map_err(|e| e.to_string())?;

    let resolved = resolve_sheet(&sheet, &keywords);
    store.put_character(args.name, sheet)?;

    print!("{}", render::sheet(args.name, &resolved, &keywords));
    Ok(())
}
