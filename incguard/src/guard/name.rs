//! Guard identifier derivation.
//!
//! A guard identifier is a pure function of the header path with the root
//! string removed. Content never influences the name.

use std::path::Path;

/// Leading token placed in front of every derived guard.
pub const DEFAULT_PREFIX: &str = "framework";

/// Derives the canonical guard identifier for `file_path` under `root`,
/// using [`DEFAULT_PREFIX`].
///
/// Every occurrence of `root` inside `file_path` is removed (not only a
/// leading one). The remainder is split on `.`, `/`, `\` and `_`, empty
/// tokens are dropped, the prefix is prepended and everything is uppercased
/// and joined with `_`.
///
/// # Examples
///
/// ```
/// use incguard::guard::derive_guard;
///
/// assert_eq!(
///     derive_guard("/proj/src", "/proj/src/foo/bar.hpp"),
///     "FRAMEWORK_FOO_BAR_HPP"
/// );
/// // Consecutive separators collapse.
/// assert_eq!(derive_guard("/r", "/r/a//b..hpp"), "FRAMEWORK_A_B_HPP");
/// ```
#[must_use]
pub fn derive_guard(root: &str, file_path: &str) -> String {
    GuardNamer::new(root).derive(file_path)
}

/// Derives guard identifiers for headers under one root.
///
/// # Examples
///
/// ```
/// use incguard::guard::GuardNamer;
///
/// let namer = GuardNamer::new("/proj/src").with_prefix("engine");
/// assert_eq!(namer.derive("/proj/src/log/log.hpp"), "ENGINE_LOG_LOG_HPP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardNamer {
    root: String,
    prefix: String,
}

impl GuardNamer {
    /// Creates a namer for `root` with the default prefix.
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Creates a namer from a filesystem root.
    ///
    /// Non-UTF-8 components are replaced lossily, the same way
    /// [`GuardNamer::derive_path`] treats header paths, so both sides of the
    /// substring removal agree.
    #[must_use]
    pub fn for_root(root: &Path) -> Self {
        Self::new(root.to_string_lossy().into_owned())
    }

    /// Replaces the leading token. An empty prefix adds no token.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The root string removed from every path.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The leading token.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Derives the guard identifier for `file_path`.
    #[must_use]
    pub fn derive(&self, file_path: &str) -> String {
        let relative = if self.root.is_empty() {
            file_path.to_string()
        } else {
            file_path.replace(self.root.as_str(), "")
        };

        let tokens = relative
            .split(|c: char| matches!(c, '.' | '/' | '\\' | '_'))
            .filter(|token| !token.is_empty());

        std::iter::once(self.prefix.as_str())
            .filter(|prefix| !prefix.is_empty())
            .chain(tokens)
            .map(str::to_uppercase)
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Derives the guard identifier for a filesystem path.
    #[must_use]
    pub fn derive_path(&self, path: &Path) -> String {
        self.derive(&path.to_string_lossy())
    }
}
