//! tier_schema command-line interface
//!
//! Prints generated migration SQL to stdout, or writes it to a file with
//! `--out`. The registry comes from `--config` when given, otherwise the
//! compiled-in application tables are used.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use tier_schema::utils::logging;
use tier_schema::{Config, ScriptGenerator};

#[derive(Parser)]
#[command(name = "tier_schema", version, about = "Generate migration SQL from the schema registry")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Full script: tables, foreign keys, triggers, RLS policies
    Full,
    /// Table DDL and indexes only
    Tables,
    /// Inferred foreign-key constraints only
    ForeignKeys,
    /// Row-level-security policies only
    Rls,
    /// Dump the registry as JSON
    Describe,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => tier_schema::config::load_from_file(path)
            .with_context(|| format!("loading config from {}", path))?,
        None => Config::default(),
    };

    logging::init_logging(&config.logging)?;

    let registry = config.registry();
    let generator = ScriptGenerator::new(&registry);

    let output = match cli.command {
        Command::Full => generator.full_script(),
        Command::Tables => generator.tables_script(),
        Command::ForeignKeys => generator.foreign_keys_script(),
        Command::Rls => generator.rls_script(),
        Command::Describe => serde_json::to_string_pretty(registry.tables())
            .context("serializing registry")?,
    };

    match &cli.out {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("writing output to {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = output.len(), "wrote script");
        }
        None => print!("{}", output),
    }

    Ok(())
}
