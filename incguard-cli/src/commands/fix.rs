//! Fix command implementation.
//!
//! This module implements the `fix` command (also what a bare `incguard`
//! runs): rewrite the first guard pair of every header to its canonical
//! name, printing each processed path as it completes.

use crate::error::CliError;
use crate::utils::{build_fixer, load_settings, GlobalOptions};
use clap::Args;

/// Rewrite include guards to their canonical names.
#[derive(Args, Default)]
pub struct FixCommand {
    /// Show what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Continue past headers that cannot be read or written
    #[arg(long)]
    pub keep_going: bool,
}

impl FixCommand {
    /// Execute the fix command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let settings = load_settings(global)?;

        // 2. Run the fixer, echoing each path once its header is done
        let fixer = build_fixer(&settings, self.keep_going, self.dry_run);
        let report = fixer.run(|outcome| {
            println!("{}", outcome.path.display());
            global
                .logger
                .info(&format!("{}: {}", outcome.identifier, outcome.status));
        })?;

        // 3. Surface per-file failures collected in keep-going mode
        for failure in &report.failures {
            global.logger.error(&failure.error.to_string());
        }

        // 4. Summary goes to stderr so stdout stays a plain path list
        if !global.quiet {
            if self.dry_run {
                eprintln!("(dry run) {}", report.summary());
            } else {
                eprintln!("{}", report.summary());
            }
        }

        report.ensure_success()?;
        Ok(())
    }
}
