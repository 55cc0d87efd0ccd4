//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - A temporary project directory with a `src/` header root
//! - A command builder that runs `incguard` inside that project
//! - Fixture helpers for writing and reading headers

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would otherwise leak the developer's settings into tests.
const ISOLATED_VARS: [&str; 6] = [
    "INCGUARD_ROOT",
    "INCGUARD_PREFIX",
    "INCGUARD_EXTENSIONS",
    "INCGUARD_KEEP_GOING",
    "INCGUARD_LOG_MODE",
    "INCGUARD_OUTPUT_FORMAT",
];

/// Stale header used across command tests.
#[allow(dead_code)]
pub const STALE_SOCKET: &str = "#ifndef OLD_GUARD\n#define OLD_GUARD\n... body ...\n#endif\n";

/// Canonical content for `src/net/socket.hpp` with the body above.
#[allow(dead_code)]
pub const FIXED_SOCKET: &str =
    "#ifndef FRAMEWORK_NET_SOCKET_HPP\n#define FRAMEWORK_NET_SOCKET_HPP\n... body ...\n#endif\n";

/// Test environment with an isolated project directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the project directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a project with an empty `src/` directory.
    pub fn new() -> Self {
        let env = Self::without_src();
        env.create_dir("src");
        env
    }

    /// Create a project with no header root at all.
    pub fn without_src() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the project directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("incguard").expect("Failed to find incguard binary");
        cmd.current_dir(&self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the project path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory of the project.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the project directory.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write a header guarded by `guard` relative to the project directory.
    pub fn write_guarded(&self, relative: &str, guard: &str) -> PathBuf {
        self.write(relative, guarded(guard, "struct S {};\n"))
    }

    /// Read a file relative to the project directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.temp_path.join(relative)).expect("Failed to read test file")
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run incguard");
        assert!(
            output.status.success(),
            "incguard {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

/// Builds header content with the given guard around `body`.
#[allow(dead_code)]
pub fn guarded(guard: &str, body: &str) -> String {
    format!("#ifndef {guard}\n#define {guard}\n{body}#endif\n")
}
