//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, FixCommand, GuardNameCommand, ListCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for normalizing C/C++ include guards.
#[derive(Parser)]
#[command(name = "incguard")]
#[command(version, about = "Normalize C/C++ include guards", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Header root directory (defaults to ./src)
    #[arg(long, value_name = "PATH", global = true)]
    pub root: Option<PathBuf>,

    /// Leading token of every guard name (defaults to "framework")
    #[arg(long, value_name = "NAME", global = true)]
    pub prefix: Option<String>,

    /// Header file extension; repeat for several (defaults to .hpp)
    #[arg(long = "extension", value_name = "EXT", global = true)]
    pub extensions: Vec<String>,

    /// Command to run (defaults to `fix`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Rewrite include guards to their canonical names
    Fix(FixCommand),

    /// Report headers whose include guard is not canonical
    Check(CheckCommand),

    /// List headers with their canonical guard and status
    List(ListCommand),

    /// Print the canonical guard name for files
    GuardName(GuardNameCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
