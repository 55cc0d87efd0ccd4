//! Library exports for incguard-cli.
//!
//! This module exports the CLI structure for use by integration tests and
//! documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for tooling
pub use cli::Cli;
