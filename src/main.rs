//! # TravelConnect - Terminal preview
//!
//! Renders the home dashboard without a browser.
//!
//! ## Startup
//!
//! 1. **Parse arguments** - clap derive
//! 2. **Load configuration** - TOML, defaults when no file is given
//! 3. **Install tracing** - `RUST_LOG` wins, then the config's `log_filter`
//! 4. **Run the command** - output goes to stdout, logs to stderr

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use travelconnect::cli::{Cli, Commands};
use travelconnect::commands::{execute_command, load_config, report_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.command {
        Commands::Outline { config, .. } => config.as_deref(),
        Commands::Tap { .. } | Commands::Actions => None,
    };
    let config = load_config(config_path)?;

    init_tracing(&config.log_filter);
    report_config(config_path, &config);

    let output = execute_command(cli.command, &config).context("Command failed")?;
    println!("{output}");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so command output stays pipeable.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
