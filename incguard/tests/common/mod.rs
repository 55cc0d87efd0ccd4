//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for header trees on disk.

use std::fs;
use std::path::{Path, PathBuf};

use incguard::Settings;
use tempfile::TempDir;

/// A stale header as found in an unmaintained tree.
#[allow(dead_code)]
pub const STALE_SOCKET: &str = "#ifndef OLD_GUARD\n#define OLD_GUARD\n... body ...\n#endif\n";

/// A temporary project with a `src` directory.
///
/// The temporary directory is removed when the fixture is dropped.
pub struct HeaderTree {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl HeaderTree {
    /// Creates an empty project with `src/`.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("src")).expect("Failed to create src");
        Self { temp_dir }
    }

    /// The project directory (the "working directory").
    pub fn project(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The header root, `<project>/src`.
    pub fn root(&self) -> PathBuf {
        self.project().join("src")
    }

    /// Writes a file relative to the header root and returns its path.
    pub fn with_file(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Writes a header guarded by `guard`.
    pub fn with_guarded(&self, relative: &str, guard: &str) -> PathBuf {
        self.with_file(relative, guarded(guard, "struct S {};\n"))
    }

    /// Reads a file relative to the header root.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).expect("Failed to read fixture file")
    }

    /// Default settings for this project, ignoring env and config files.
    pub fn settings(&self) -> Settings {
        Settings::defaults_for(self.project())
    }
}

/// Builds header content with the given guard around `body`.
#[allow(dead_code)]
pub fn guarded(guard: &str, body: &str) -> String {
    format!("#ifndef {guard}\n#define {guard}\n{body}#endif\n")
}
