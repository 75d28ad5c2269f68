//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// TravelConnect - home dashboard preview
#[derive(Parser, Debug)]
#[command(name = "travelconnect")]
#[command(version)]
#[command(about = "Preview the TravelConnect home dashboard in a terminal")]
#[command(
    long_about = "Renders the home screen view tree as an outline, resolves what tapping an element does, and lists every interactive element."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the home screen as an indented outline
    Outline {
        /// Email of the signed-in user (signed out when omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Screen configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit the view tree as JSON instead of an outline
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show what tapping an element does
    Tap {
        /// Element id (see `travelconnect actions`)
        id: String,

        /// Email of the signed-in user
        #[arg(short, long)]
        email: Option<String>,
    },

    /// List every interactive element and its intent
    Actions,
}
