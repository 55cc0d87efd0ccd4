//! Plan execution engine.
//!
//! The executor applies a [`RewritePlan`] to the filesystem. Files whose
//! content would not change are never written, and a dry-run executor never
//! writes at all.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::guard::GuardStatus;

use super::plan::{PlanAction, RewritePlan};

/// What happened to one header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// The header that was processed.
    pub path: PathBuf,
    /// Canonical guard identifier for the header.
    pub identifier: String,
    /// Classification of the content before the run.
    pub status: GuardStatus,
    /// Whether the file was written.
    pub written: bool,
}

/// Executes rewrite plans.
///
/// # Examples
///
/// ```no_run
/// use incguard::guard::GuardNamer;
/// use incguard::operations::{RewriteExecutor, RewritePlan};
/// use std::path::Path;
///
/// let namer = GuardNamer::new("/proj/src");
/// let plan = RewritePlan::for_file(Path::new("/proj/src/a.hpp"), &namer).unwrap();
///
/// let outcome = RewriteExecutor::new().execute(&plan).unwrap();
/// println!("{} written={}", outcome.path.display(), outcome.written);
///
/// let preview = RewriteExecutor::new().dry_run().execute(&plan).unwrap();
/// assert!(!preview.written);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteExecutor {
    dry_run: bool,
}

impl RewriteExecutor {
    /// Creates an executor that writes changed files.
    #[must_use]
    pub const fn new() -> Self {
        Self { dry_run: false }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Returns true in dry-run mode.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be overwritten.
    pub fn execute(&self, plan: &RewritePlan) -> Result<FileOutcome> {
        let written = match &plan.action {
            PlanAction::WriteContent(content) if !self.dry_run => {
                fs::write(&plan.path, content).map_err(|source| Error::Write {
                    path: plan.path.clone(),
                    source,
                })?;
                log::debug!("{}", plan.description());
                true
            }
            PlanAction::WriteContent(_) => {
                log::debug!("(dry run) {}", plan.description());
                false
            }
            PlanAction::Skip => false,
        };

        Ok(FileOutcome {
            path: plan.path.clone(),
            identifier: plan.identifier.clone(),
            status: plan.status.clone(),
            written,
        })
    }
}
