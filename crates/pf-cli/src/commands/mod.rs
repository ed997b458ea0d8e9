pub mod edit;
pub mod generate;
pub mod init;
pub mod keywords;
pub mod list;
pub mod powers;
pub mod show;

use pf_rules::GenerationConfig;

/// Build the generation config for a command, logging the seed in use.
fn config(seed: Option<u64>) -> GenerationConfig {
    let config = GenerationConfig::default();
    let seed = seed.unwrap_or_else(|| config.resolved_seed());
    tracing::info!(seed, "using seed");
    config.with_seed(seed)
}
