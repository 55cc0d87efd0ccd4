//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values before they are resolved.
///
/// # Examples
///
/// ```
/// use incguard::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { prefix: Some("my-lib".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref prefix) = config.prefix {
            Self::validate_prefix(prefix)?;
        }

        if let Some(ref extensions) = config.extensions {
            Self::validate_extensions(extensions)?;
        }

        if let Some(ref root) = config.root {
            if root.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "root".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    /// The prefix becomes part of a preprocessor identifier, so only word
    /// characters are allowed. An empty prefix is valid and adds no token.
    fn validate_prefix(prefix: &str) -> Result<()> {
        if let Some(bad) = prefix.chars().find(|c| !(c.is_alphanumeric() || *c == '_')) {
            return Err(Error::Validation {
                field: "prefix".into(),
                message: format!("Invalid character '{bad}' (only letters, digits and '_')"),
            });
        }

        if prefix.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(Error::Validation {
                field: "prefix".into(),
                message: "Cannot start with a digit".into(),
            });
        }

        Ok(())
    }

    fn validate_extensions(extensions: &[String]) -> Result<()> {
        if extensions.is_empty() {
            return Err(Error::Validation {
                field: "extensions".into(),
                message: "At least one extension is required".into(),
            });
        }

        for ext in extensions {
            if ext.trim().is_empty() || ext == "." {
                return Err(Error::Validation {
                    field: "extensions".into(),
                    message: "Extensions cannot be empty".into(),
                });
            }
            if ext.contains(['/', '\\']) {
                return Err(Error::Validation {
                    field: "extensions".into(),
                    message: format!("Extension '{ext}' cannot contain a path separator"),
                });
            }
        }

        Ok(())
    }
}
