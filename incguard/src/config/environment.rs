//! Environment variable handling for configuration overrides.
//!
//! `INCGUARD_*` variables override values from `incguard.yaml`.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the header root.
pub const ROOT_ENV: &str = "INCGUARD_ROOT";
/// Overrides the guard prefix.
pub const PREFIX_ENV: &str = "INCGUARD_PREFIX";
/// Comma-separated header extensions.
pub const EXTENSIONS_ENV: &str = "INCGUARD_EXTENSIONS";
/// Boolean; continue past per-file failures.
pub const KEEP_GOING_ENV: &str = "INCGUARD_KEEP_GOING";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use incguard::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value (for example a
    /// non-boolean `INCGUARD_KEEP_GOING`).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(root) = non_empty_var(ROOT_ENV) {
            config.root = Some(PathBuf::from(root));
        }

        if let Ok(prefix) = env::var(PREFIX_ENV) {
            config.prefix = Some(prefix);
        }

        if let Some(extensions) = non_empty_var(EXTENSIONS_ENV) {
            config.extensions = Some(Self::parse_extensions(&extensions));
        }

        if let Some(val) = non_empty_var(KEEP_GOING_ENV) {
            config.keep_going = Some(Self::parse_bool(KEEP_GOING_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated extension list, dropping blanks.
    ///
    /// A missing leading dot is added, so `hpp,h` means `.hpp,.h`.
    fn parse_extensions(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(normalize_extension)
            .collect()
    }
}

/// Adds a leading `.` to a bare extension.
///
/// # Examples
///
/// ```
/// use incguard::config::environment::normalize_extension;
///
/// assert_eq!(normalize_extension("hpp"), ".hpp");
/// assert_eq!(normalize_extension(".h"), ".h");
/// ```
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
