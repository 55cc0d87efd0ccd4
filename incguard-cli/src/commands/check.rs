//! Check command implementation.
//!
//! This module implements the `check` command, a read-only pass that
//! reports headers whose guard would be rewritten and fails if there are
//! any. Useful as a CI gate.

use crate::error::CliError;
use crate::utils::{build_fixer, load_settings, GlobalOptions};
use clap::Args;
use incguard::GuardStatus;

/// Report headers whose include guard is not canonical.
#[derive(Args)]
pub struct CheckCommand {
    /// Also fail on headers that have no recognizable guard pair
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let fixer = build_fixer(&settings, false, true);

        let mut offending = 0usize;
        let report = fixer.run(|outcome| match &outcome.status {
            GuardStatus::Rewritten { previous } => {
                offending += 1;
                println!(
                    "{}: expected {}, found {}",
                    outcome.path.display(),
                    outcome.identifier,
                    previous
                );
            }
            GuardStatus::Missing if self.strict => {
                offending += 1;
                println!("{}: no include guard", outcome.path.display());
            }
            GuardStatus::Missing | GuardStatus::Canonical => {}
        })?;

        global.logger.info(&report.summary());

        if offending > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{offending} header(s) need fixing"
            )));
        }

        if !global.quiet {
            eprintln!("All {} header(s) have canonical guards", report.processed());
        }

        Ok(())
    }
}
