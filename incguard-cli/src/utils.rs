//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and the
//! glue that turns them into resolved library [`Settings`].

use crate::error::CliError;
use incguard::config::normalize_extension;
use incguard::{Config, ConfigBuilder, GuardFixer, Logger, Settings};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the header root directory.
    pub root: Option<PathBuf>,

    /// Override the guard prefix.
    pub prefix: Option<String>,

    /// Override the header extensions (empty means "not given").
    pub extensions: Vec<String>,

    /// Logger configured from `--verbose` / `--quiet`.
    pub logger: Logger,
}

impl GlobalOptions {
    /// The configuration layer contributed by command-line flags.
    pub fn overrides(&self) -> Config {
        Config {
            root: self.root.clone(),
            prefix: self.prefix.clone(),
            extensions: if self.extensions.is_empty() {
                None
            } else {
                Some(
                    self.extensions
                        .iter()
                        .map(|ext| normalize_extension(ext))
                        .collect(),
                )
            },
            keep_going: None,
        }
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `incguard.yaml` found from the current directory upwards
/// 4. Built-in defaults (lowest priority)
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let settings = ConfigBuilder::new()
        .with_config(global.overrides())
        .resolve()?;

    global
        .logger
        .debug(&format!("header root: {}", settings.root.display()));

    Ok(settings)
}

/// Build a fixer for the resolved settings.
pub fn build_fixer(settings: &Settings, keep_going: bool, dry_run: bool) -> GuardFixer {
    let fixer = GuardFixer::new(settings).keep_going(settings.keep_going || keep_going);
    if dry_run {
        fixer.dry_run()
    } else {
        fixer
    }
}

/// Make a user-supplied path absolute against the current directory.
///
/// The path is not canonicalized, so it may name a file that does not
/// exist and symlinks are kept as written.
pub fn absolutize(path: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
