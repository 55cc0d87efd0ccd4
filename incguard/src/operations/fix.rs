//! The per-file driver loop.
//!
//! [`GuardFixer`] ties the pieces together: locate headers, then for each
//! one read, plan, execute and report, strictly one file at a time. By
//! default the first error halts the run; with `keep_going` per-file read
//! and write failures are recorded and the loop moves on.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::guard::{GuardNamer, GuardStatus};
use crate::locate::HeaderLocator;

use super::executor::{FileOutcome, RewriteExecutor};
use super::plan::RewritePlan;

/// A header that could not be processed in keep-going mode.
#[derive(Debug)]
pub struct FileFailure {
    /// The header that failed.
    pub path: PathBuf,
    /// Why it failed.
    pub error: Error,
}

/// Summary of a run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Outcomes in processing order.
    pub outcomes: Vec<FileOutcome>,
    /// Per-file failures (only populated in keep-going mode).
    pub failures: Vec<FileFailure>,
}

impl RunReport {
    /// Number of headers processed successfully.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of headers whose guard was (or would be) rewritten.
    #[must_use]
    pub fn rewritten(&self) -> usize {
        self.count(|status| status.changes_content())
    }

    /// Number of headers already carrying the canonical guard.
    #[must_use]
    pub fn canonical(&self) -> usize {
        self.count(|status| *status == GuardStatus::Canonical)
    }

    /// Number of headers with no recognizable guard pair.
    #[must_use]
    pub fn missing(&self) -> usize {
        self.count(|status| *status == GuardStatus::Missing)
    }

    /// Number of files actually written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.written).count()
    }

    /// Outcomes whose guard is not canonical.
    pub fn stale(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.status.changes_content())
    }

    /// One-line summary for the end of a run.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} header(s): {} rewritten, {} canonical, {} without guard",
            self.processed() + self.failures.len(),
            self.rewritten(),
            self.canonical(),
            self.missing()
        );
        if !self.failures.is_empty() {
            line.push_str(&format!(", {} failed", self.failures.len()));
        }
        line
    }

    /// Fails with [`Error::FilesFailed`] if any header failed.
    ///
    /// # Errors
    ///
    /// Returns an error when `failures` is non-empty.
    pub fn ensure_success(&self) -> Result<()> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(Error::FilesFailed {
                count: self.failures.len(),
            })
        }
    }

    fn count(&self, pred: impl Fn(&GuardStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Normalizes the include guards of every header under a root.
///
/// # Examples
///
/// ```no_run
/// use incguard::config::ConfigBuilder;
/// use incguard::operations::GuardFixer;
///
/// let settings = ConfigBuilder::new().resolve().unwrap();
/// let report = GuardFixer::new(&settings)
///     .run(|outcome| println!("{}", outcome.path.display()))
///     .unwrap();
/// eprintln!("{}", report.summary());
/// ```
#[derive(Debug, Clone)]
pub struct GuardFixer {
    locator: HeaderLocator,
    namer: GuardNamer,
    executor: RewriteExecutor,
    keep_going: bool,
}

impl GuardFixer {
    /// Creates a fixer from resolved settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            locator: HeaderLocator::new(&settings.root)
                .with_extensions(settings.extensions.clone()),
            namer: GuardNamer::for_root(&settings.root).with_prefix(settings.prefix.clone()),
            executor: RewriteExecutor::new(),
            keep_going: settings.keep_going,
        }
    }

    /// Plans and reports without writing anything.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.executor = self.executor.dry_run();
        self
    }

    /// Overrides the keep-going policy from the settings.
    #[must_use]
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// The namer used for every header.
    #[must_use]
    pub fn namer(&self) -> &GuardNamer {
        &self.namer
    }

    /// Processes one header: read, plan, execute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] or [`Error::Write`] on I/O failure.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        let plan = RewritePlan::for_file(path, &self.namer)?;
        self.executor.execute(&plan)
    }

    /// Runs the whole tree, calling `on_file` after each header completes.
    ///
    /// # Errors
    ///
    /// Locator errors always halt the run. Per-file errors halt it too
    /// unless keep-going is enabled, in which case they end up in
    /// [`RunReport::failures`].
    pub fn run<F>(&self, mut on_file: F) -> Result<RunReport>
    where
        F: FnMut(&FileOutcome),
    {
        let headers = self.locator.locate()?;
        let mut report = RunReport::default();

        for path in headers {
            match self.process_file(&path) {
                Ok(outcome) => {
                    on_file(&outcome);
                    report.outcomes.push(outcome);
                }
                Err(error) if self.keep_going => {
                    log::debug!("continuing past {}: {error}", path.display());
                    report.failures.push(FileFailure { path, error });
                }
                Err(error) => return Err(error),
            }
        }

        Ok(report)
    }
}
