//! Per-header rewrite plans.
//!
//! A plan describes what fixing one header would do, without touching the
//! file. Planning is pure once the content has been read, which keeps the
//! naming and substitution rules testable without a filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::guard::{classify, rewrite_guard, GuardNamer, GuardStatus};

/// The single action a plan may carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Replace the whole file with this content.
    WriteContent(String),
    /// Leave the file as it is.
    Skip,
}

/// What fixing one header would do.
///
/// # Examples
///
/// ```
/// use incguard::guard::{GuardNamer, GuardStatus};
/// use incguard::operations::RewritePlan;
///
/// let namer = GuardNamer::new("/proj/src");
/// let plan = RewritePlan::from_content(
///     "/proj/src/net/socket.hpp",
///     "#ifndef OLD_GUARD\n#define OLD_GUARD\n#endif\n",
///     &namer,
/// );
///
/// assert_eq!(plan.identifier, "FRAMEWORK_NET_SOCKET_HPP");
/// assert_eq!(plan.status, GuardStatus::Rewritten { previous: "OLD_GUARD".to_string() });
/// assert!(plan.needs_write());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewritePlan {
    /// The header being fixed.
    pub path: PathBuf,
    /// Canonical guard identifier for the header.
    pub identifier: String,
    /// Classification of the current content.
    pub status: GuardStatus,
    /// What the executor should do.
    pub action: PlanAction,
}

impl RewritePlan {
    /// Reads `path` and plans its rewrite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be read as UTF-8 text.
    pub fn for_file(path: &Path, namer: &GuardNamer) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_content(path, &content, namer))
    }

    /// Plans the rewrite of already-read content.
    #[must_use]
    pub fn from_content(path: impl Into<PathBuf>, content: &str, namer: &GuardNamer) -> Self {
        let path = path.into();
        let identifier = namer.derive_path(&path);
        let status = classify(content, &identifier);

        let action = if status.changes_content() {
            PlanAction::WriteContent(rewrite_guard(content, &identifier))
        } else {
            PlanAction::Skip
        };

        Self {
            path,
            identifier,
            status,
            action,
        }
    }

    /// Returns true when executing the plan writes the file.
    #[must_use]
    pub fn needs_write(&self) -> bool {
        matches!(self.action, PlanAction::WriteContent(_))
    }

    /// Returns a human-readable description of this plan.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.status {
            GuardStatus::Rewritten { previous } => format!(
                "Rewrite guard {previous} -> {} in {}",
                self.identifier,
                self.path.display()
            ),
            GuardStatus::Canonical => {
                format!("Keep guard {} in {}", self.identifier, self.path.display())
            }
            GuardStatus::Missing => format!("No guard pair in {}", self.path.display()),
        }
    }
}
