//! Layered configuration builder.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, Settings};
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds [`Settings`] from defaults, `incguard.yaml`, `INCGUARD_*`
/// variables and programmatic overrides, in that order of precedence.
///
/// # Examples
///
/// ```
/// use incguard::config::{Config, ConfigBuilder};
/// use std::path::Path;
///
/// let settings = ConfigBuilder::new()
///     .with_working_dir(Path::new("/proj"))
///     .skip_files()
///     .skip_env()
///     .with_config(Config { prefix: Some("engine".to_string()), ..Default::default() })
///     .resolve()
///     .unwrap();
///
/// assert_eq!(settings.root, Path::new("/proj/src"));
/// assert_eq!(settings.prefix, "engine");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and environment relative to the
    /// current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory used to discover `incguard.yaml` and to resolve
    /// relative roots.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not look for `incguard.yaml`.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `INCGUARD_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Highest-precedence layer, typically built from CLI flags.
    #[must_use]
    pub fn with_config(mut self, overrides: Config) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Merges and validates all layers.
    ///
    /// A `root` given in `incguard.yaml` is made relative to that file's
    /// directory; any other relative root stays relative to the working
    /// directory until [`ConfigBuilder::resolve`].
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be parsed, an environment
    /// variable is malformed, or the merged config fails validation.
    pub fn build(&self) -> Result<Config> {
        let working_dir = self.working_dir()?;
        let mut merged = Config::default();

        if !self.skip_files {
            if let Some(source) = ConfigLoader::discover(&working_dir)? {
                let mut file_config = source.config.clone();
                if let Some(root) = file_config.root.take() {
                    file_config.root = Some(source.base_dir().join(root));
                }
                ConfigValidator::validate(&file_config)?;
                ConfigMerger::merge_into(&mut merged, &file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut merged)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut merged, overrides);
        }

        ConfigValidator::validate(&merged)?;
        Ok(merged)
    }

    /// Builds the config and fills in defaults.
    ///
    /// # Errors
    ///
    /// See [`ConfigBuilder::build`].
    pub fn resolve(&self) -> Result<Settings> {
        let working_dir = self.working_dir()?;
        let config = self.build()?;
        let defaults = Settings::defaults_for(&working_dir);

        let settings = Settings {
            root: config
                .root
                .map_or(defaults.root, |root| working_dir.join(root)),
            prefix: config.prefix.unwrap_or(defaults.prefix),
            extensions: config.extensions.unwrap_or(defaults.extensions),
            keep_going: config.keep_going.unwrap_or(defaults.keep_going),
        };

        log::debug!(
            "resolved root={} prefix={} extensions={:?}",
            settings.root.display(),
            settings.prefix,
            settings.extensions
        );
        Ok(settings)
    }

    fn working_dir(&self) -> Result<PathBuf> {
        match self.working_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(env::current_dir()?),
        }
    }
}
