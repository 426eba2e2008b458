//! txopt command line
//!
//! Applies configured default options to a fresh builder and, optionally,
//! inherits settings from a finalized transaction read from JSON. The
//! resulting builder state is printed as JSON on stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use txopt::config::Config;
use txopt::observability::init_logging;
use txopt::{apply_options, inherit_tx_config, SignedTransaction, TransactionBuilder};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "txopt.toml", env = "TXOPT_CONFIG")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply the configured default options to an empty builder
    Apply,
    /// Apply defaults, then inherit settings from a finalized transaction
    Inherit {
        /// JSON file holding the finalized transaction
        #[arg(short, long)]
        source: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_found) = Config::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    init_logging(&config.logging, args.verbose)?;
    if !config_found {
        warn!("Config file '{}' not found, using defaults", args.config.display());
    }

    let options = config
        .default_options()
        .context("Invalid [tx] defaults in configuration")?;
    info!(count = options.len(), "Loaded default tx options");

    let mut builder = TransactionBuilder::new();
    apply_options(&mut builder, &options);

    if let Command::Inherit { source } = &args.command {
        let tx = load_source(source)?;
        info!(
            signers = tx.signers.len(),
            source = %source.display(),
            "Inheriting settings from finalized tx"
        );
        inherit_tx_config(&mut builder, &tx);
    }

    println!("{}", serde_json::to_string_pretty(&builder)?);
    Ok(())
}

fn load_source(path: &Path) -> Result<SignedTransaction> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let tx: SignedTransaction = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse transaction from {}", path.display()))?;
    if tx.signers.is_empty() {
        warn!("Source transaction has no signers; fee payer will not be inherited");
    }
    Ok(tx)
}
