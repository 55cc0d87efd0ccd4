//! Guard-fixing operations using the plan-execute pattern.
//!
//! Fixing a header is split into two phases:
//! 1. **Planning** ([`RewritePlan`]): read the header, derive its identifier,
//!    classify the current guard and build the new content.
//! 2. **Execution** ([`RewriteExecutor`]): write the new content, unless
//!    nothing changed or the executor is in dry-run mode.
//!
//! [`GuardFixer`] drives both phases over every header under a root, one
//! file at a time.
//!
//! # Examples
//!
//! ```no_run
//! use incguard::config::ConfigBuilder;
//! use incguard::operations::GuardFixer;
//!
//! let settings = ConfigBuilder::new().resolve().unwrap();
//! let report = GuardFixer::new(&settings).dry_run().run(|_| {}).unwrap();
//! for stale in report.stale() {
//!     println!("{} -> {}", stale.path.display(), stale.identifier);
//! }
//! ```

pub mod executor;
pub mod fix;
pub mod plan;

pub use executor::{FileOutcome, RewriteExecutor};
pub use fix::{FileFailure, GuardFixer, RunReport};
pub use plan::{PlanAction, RewritePlan};
