#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # TravelConnect
//!
//! Terminal preview of the TravelConnect home dashboard.
//!
//! This library re-exports the core view model and hosts the CLI.

pub use travelconnect_core;

pub mod cli;
pub mod commands;
