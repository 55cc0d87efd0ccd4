//! Configuration schema definitions.
//!
//! [`Config`] is the raw, all-optional shape shared by every source (YAML
//! file, environment, programmatic overrides). [`Settings`] is the resolved
//! form that the rest of the library consumes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::guard::DEFAULT_PREFIX;
use crate::locate::DEFAULT_EXTENSION;

/// Name of the directory under the working directory scanned by default.
pub const DEFAULT_ROOT_DIR: &str = "src";

/// Configuration as read from a single source.
///
/// # Examples
///
/// ```
/// use incguard::config::Config;
///
/// let config: Config = serde_yaml::from_str("prefix: engine\nextensions: [.hpp, .h]\n").unwrap();
/// assert_eq!(config.prefix.as_deref(), Some("engine"));
/// assert_eq!(config.extensions.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the headers. Relative paths are resolved against the
    /// working directory.
    pub root: Option<PathBuf>,

    /// Leading token of every guard name.
    pub prefix: Option<String>,

    /// File name suffixes treated as headers.
    pub extensions: Option<Vec<String>>,

    /// Continue past per-file I/O failures.
    pub keep_going: Option<bool>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absolute (or working-directory relative) header root.
    pub root: PathBuf,
    /// Leading guard token.
    pub prefix: String,
    /// Header file name suffixes.
    pub extensions: Vec<String>,
    /// Continue past per-file I/O failures.
    pub keep_going: bool,
}

impl Settings {
    /// Default settings rooted at `<working_dir>/src`.
    ///
    /// # Examples
    ///
    /// ```
    /// use incguard::config::Settings;
    /// use std::path::Path;
    ///
    /// let settings = Settings::defaults_for(Path::new("/proj"));
    /// assert_eq!(settings.root, Path::new("/proj/src"));
    /// assert_eq!(settings.prefix, "framework");
    /// assert_eq!(settings.extensions, vec![".hpp".to_string()]);
    /// ```
    #[must_use]
    pub fn defaults_for(working_dir: &std::path::Path) -> Self {
        Self {
            root: working_dir.join(DEFAULT_ROOT_DIR),
            prefix: DEFAULT_PREFIX.to_string(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            keep_going: false,
        }
    }
}
