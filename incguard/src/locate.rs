//! Header discovery.
//!
//! The locator walks a root directory recursively and yields every regular
//! file whose name ends with one of the configured header extensions. Entries
//! are sorted by file name inside each directory, so the order is stable from
//! run to run. Symlinks are not followed.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extension matched when nothing else is configured.
pub const DEFAULT_EXTENSION: &str = ".hpp";

/// Lists header files under `root`.
///
/// # Errors
///
/// - [`Error::RootNotFound`] if `root` does not exist.
/// - [`Error::InvalidPath`] if `root` is not a directory.
/// - [`Error::Traversal`] if a directory cannot be read during the walk.
///
/// The walk halts on the first error; no partial list is returned.
///
/// # Examples
///
/// ```no_run
/// use incguard::locate::list_headers;
/// use std::path::Path;
///
/// let headers = list_headers(Path::new("src"), &[".hpp".to_string()]).unwrap();
/// for header in headers {
///     println!("{}", header.display());
/// }
/// ```
pub fn list_headers(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    HeaderLocator::new(root)
        .with_extensions(extensions.to_vec())
        .locate()
}

/// Configurable header locator.
#[derive(Debug, Clone)]
pub struct HeaderLocator {
    root: PathBuf,
    extensions: Vec<String>,
}

impl HeaderLocator {
    /// Creates a locator for `root` matching [`DEFAULT_EXTENSION`].
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }

    /// Replaces the list of matched name suffixes.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// The directory being walked.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true when `path`'s file name ends with a header extension.
    #[must_use]
    pub fn is_header(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| self.extensions.iter().any(|ext| name.ends_with(ext.as_str())))
    }

    /// Walks the root and collects header paths.
    ///
    /// # Errors
    ///
    /// See [`list_headers`].
    pub fn locate(&self) -> Result<Vec<PathBuf>> {
        self.check_root()?;

        let mut headers = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|source| Error::Traversal {
                path: source
                    .path()
                    .map_or_else(|| self.root.clone(), Path::to_path_buf),
                source,
            })?;

            if entry.file_type().is_file() && self.is_header(entry.path()) {
                headers.push(entry.into_path());
            }
        }

        log::debug!(
            "found {} header(s) under {}",
            headers.len(),
            self.root.display()
        );
        Ok(headers)
    }

    fn check_root(&self) -> Result<()> {
        let metadata = std::fs::metadata(&self.root).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::RootNotFound {
                    path: self.root.clone(),
                }
            } else {
                Error::InvalidPath {
                    path: self.root.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        if !metadata.is_dir() {
            return Err(Error::InvalidPath {
                path: self.root.clone(),
                reason: "not a directory".to_string(),
            });
        }
        Ok(())
    }
}
