//! Pricing adapter CLI
//!
//! Operational entry point for the type-dispatched pricing adapter.
//!
//! # Commands
//!
//! - `pricer-adapter demo` - Price one trade of each built-in kind
//! - `pricer-adapter price --portfolio <file> --market <file>` - Price a portfolio
//! - `pricer-adapter kinds` - List trade kinds with a registered handler
//!
//! # Configuration
//!
//! Settings are read from an optional TOML file (`--config`), then the
//! `PRICER_LOG_LEVEL` and `PRICER_OUTPUT_FORMAT` environment variables, then
//! command-line flags. `RUST_LOG`, when set, replaces the log filter.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use pricer_pricing::{PricerAdapter, TradeRegistry};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs, LogLevel, OutputFormat};
pub use error::{CliError, Result};

/// Pricing adapter CLI
#[derive(Parser)]
#[command(name = "pricer-adapter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "PRICER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one trade of each built-in kind against a demo market
    Demo,

    /// Price a portfolio of trades
    Price {
        /// Path to portfolio file (JSON)
        #[arg(short, long)]
        portfolio: PathBuf,

        /// Path to market snapshot (TOML or JSON)
        #[arg(short, long)]
        market: PathBuf,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List trade kinds with a registered handler
    Kinds,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let output_format = match &cli.command {
        Commands::Price { format, .. } => *format,
        _ => None,
    };
    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level,
        output_format,
    })?;

    init_tracing(config.log_level.as_filter_str());
    debug!(log_level = %config.log_level, output_format = %config.output_format, "Configuration loaded");

    let registry = Arc::new(TradeRegistry::with_builtins());
    let adapter = PricerAdapter::new(Arc::clone(&registry));

    match cli.command {
        Commands::Demo => commands::demo::run(&adapter)?,
        Commands::Price {
            portfolio, market, ..
        } => commands::price::run(&adapter, &portfolio, &market, config.output_format)?,
        Commands::Kinds => commands::kinds::run(&registry)?,
    }

    Ok(())
}
