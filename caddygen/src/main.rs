//! Caddygen - Caddyfile generator
//!
//! This is the main entry point for the Caddygen CLI.

use anyhow::Context;
use caddygen_config::{Document, DocumentLoader};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Caddygen - assemble Caddyfiles from JSON or TOML documents
#[derive(Parser)]
#[command(name = "caddygen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document as a Caddyfile
    Render {
        /// Path to the JSON or TOML document
        config: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a document loads
    Validate {
        /// Path to the JSON or TOML document
        config: PathBuf,
    },

    /// Print a document as JSON, in output order
    Export {
        /// Path to the JSON or TOML document
        config: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Render { config, output } => {
            let caddyfile = load(&config)?.render();
            match output {
                Some(path) => {
                    std::fs::write(&path, &caddyfile)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {} bytes to {}", caddyfile.len(), path.display());
                }
                None => print!("{}", caddyfile),
            }
        }

        Commands::Validate { config } => {
            let root = load(&config)?.build();
            println!(
                "✅ Document '{}' is valid ({} top-level directives)",
                config.display(),
                root.len()
            );
        }

        Commands::Export { config } => {
            let mut root = load(&config)?.build();
            root.sort_tree(0);
            let json = DocumentLoader::to_json(&Document::from_block(&root))?;
            println!("{}", json);
        }

        Commands::Version => {
            println!("Caddygen v{}", caddygen_core::VERSION);
        }
    }

    Ok(())
}

fn load(path: &Path) -> anyhow::Result<Document> {
    tracing::debug!("Loading document: {}", path.display());
    DocumentLoader::load(path).with_context(|| format!("Failed to load {}", path.display()))
}
