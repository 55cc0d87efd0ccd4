//! Logging infrastructure for the incguard library.
//!
//! User-facing diagnostics go through [`Logger`], a small stderr logger with
//! three verbosity levels. Fine-grained tracing inside the library uses the
//! `log` facade (`log::debug!`) so embedders can route it to their own
//! backend.

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`] when no CLI flag is set.
pub const LOG_MODE_ENV: &str = "INCGUARD_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use incguard::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Only the per-file record on stdout; nothing on stderr.
    Quiet,
    /// Errors, warnings and the run summary.
    #[default]
    Normal,
    /// Everything, including skipped and unchanged headers.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of `quiet`, `normal`,
    /// `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use incguard::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger filtered by [`LogLevel`].
///
/// # Examples
///
/// ```
/// use incguard::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("src/legacy.hpp has no include guard");
/// logger.debug("not printed at Normal");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns true when messages at `level` would be printed.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Quiet && self.level >= level
    }

    /// Logs an error message (Normal and above).
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Logs a warning message (Normal and above).
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational message (Verbose only).
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug message (Verbose only).
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }

    fn emit(&self, level: LogLevel, tag: &str, message: &str) {
        if self.enabled(level) {
            eprintln!("{tag}: {message}");
        }
    }
}

/// Initializes a logger from CLI flags, then `INCGUARD_LOG_MODE`, then the
/// default (Normal).
///
/// If both `verbose` and `quiet` are set, `verbose` wins.
///
/// # Examples
///
/// ```
/// use incguard::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let level = env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or_default();
    Logger::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_log_mode<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    #[test]
    fn test_log_level_display_round_trips_through_parse() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(LogLevel::parse(&level.to_string()).unwrap(), level);
        }
    }

    #[test]
    fn test_log_level_parse_rejects_unknown() {
        assert!(LogLevel::parse("").is_err());
        assert!(LogLevel::parse("debug").is_err());
        assert_eq!(LogLevel::parse(" Quiet ").unwrap(), LogLevel::Quiet);
    }

    #[test]
    fn test_logger_enabled_levels() {
        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.enabled(LogLevel::Normal));
        assert!(!quiet.enabled(LogLevel::Quiet));

        let normal = Logger::default();
        assert!(normal.enabled(LogLevel::Normal));
        assert!(!normal.enabled(LogLevel::Verbose));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.enabled(LogLevel::Normal));
        assert!(verbose.enabled(LogLevel::Verbose));
    }

    #[test]
    fn test_init_logger_flags() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    #[test]
    #[serial]
    fn test_init_logger_defaults_to_normal() {
        with_log_mode(None, || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        with_log_mode(Some("verbose"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);
        });
        with_log_mode(Some("quiet"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Quiet);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_env_invalid_falls_back() {
        with_log_mode(Some("chatty"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_cli_overrides_env() {
        with_log_mode(Some("quiet"), || {
            assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        });
    }
}
