//! Main entry point for the incguard CLI.
//!
//! With no subcommand, `incguard` fixes every `.hpp` header under `./src`.
//! Commands:
//! - `fix`: Rewrite include guards to their canonical names
//! - `check`: Report headers whose guard is not canonical
//! - `list`: List headers with their canonical guard
//! - `guard-name`: Print the canonical guard for files
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use commands::FixCommand;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = incguard::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        quiet: cli.quiet,
        root: cli.root,
        prefix: cli.prefix,
        extensions: cli.extensions,
        logger,
    };

    // Execute the command (bare invocation means `fix`)
    let result = match cli.command.unwrap_or(Command::Fix(FixCommand::default())) {
        Command::Fix(cmd) => cmd.execute(&global),
        Command::Check(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::GuardName(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
