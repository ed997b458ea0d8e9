//! CLI frontend for the Powerforge character generator.

mod commands;
mod render;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::generate::GenerateArgs;

#[derive(Parser)]
#[command(
    name = "pf",
    about = "Powerforge — superhero character generator and sheet resolver",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter catalog, keyword list and presets
    Init {
        /// Data directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Generate a new character and store it
    Generate {
        /// Name to store the character under
        name: String,

        /// Preset supplying root stats, equipment filters and power parameters
        #[arg(short, long)]
        preset: Option<String>,

        /// Number of base power rolls
        #[arg(long)]
        base: Option<u32>,

        /// Starting percent chance of an extra roll after each base roll
        #[arg(long)]
        extra: Option<f64>,

        /// Percent chance per draw of an extra rank on each power
        #[arg(long)]
        rank: Option<f64>,

        /// RNG seed for reproducible generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Replace an existing character with the same name
        #[arg(short, long)]
        force: bool,

        /// Data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show a character's resolved sheet
    Show {
        /// Character name
        name: String,

        /// Print the resolved sheet as JSON
        #[arg(long)]
        json: bool,

        /// Data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List stored characters
    List {
        /// Data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Re-roll a character's powers (invalid parameters leave them unchanged)
    Powers {
        /// Character name
        name: String,

        /// Number of base power rolls
        #[arg(long, allow_hyphen_values = true)]
        base: String,

        /// Starting percent chance of an extra roll
        #[arg(long, allow_hyphen_values = true)]
        extra: String,

        /// Percent chance per draw of an extra rank
        #[arg(long, allow_hyphen_values = true)]
        rank: String,

        /// RNG seed for reproducible generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Set a root stat (an attribute code, or dodge/parry/fortitude/will/toughness)
    Edit {
        /// Character name
        name: String,

        /// Field to set
        field: String,

        /// New integer value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List the keyword catalog, registering any new catalog tags
    Keywords {
        /// Data directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(&dir),
        Commands::Generate {
            name,
            preset,
            base,
            extra,
            rank,
            seed,
            force,
            dir,
        } => commands::generate::run(
            &dir,
            &GenerateArgs {
                name: &name,
                preset: preset.as_deref(),
                base,
                extra,
                rank,
                seed,
                force,
            },
        ),
        Commands::Show { name, json, dir } => commands::show::run(&dir, &name, json),
        Commands::List { dir } => commands::list::run(&dir),
        Commands::Powers {
            name,
            base,
            extra,
            rank,
            seed,
            dir,
        } => commands::powers::run(&dir, &name, &base, &extra, &rank, seed),
        Commands::Edit {
            name,
            field,
            value,
            dir,
        } => commands::edit::run(&dir, &name, &field, &value),
        Commands::Keywords { dir } => commands::keywords::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
