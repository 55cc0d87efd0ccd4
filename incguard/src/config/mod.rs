//! Configuration system for incguard.
//!
//! Settings come from layered sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`, used for CLI flags)
//! 2. Environment variables (`INCGUARD_*`)
//! 3. The nearest `incguard.yaml`, searched upward from the working directory
//! 4. Built-in defaults: root `<working dir>/src`, prefix `framework`,
//!    extension `.hpp`
//!
//! With no file, no variables and no overrides the result is exactly the
//! built-in behavior.
//!
//! # Examples
//!
//! ```no_run
//! use incguard::config::ConfigBuilder;
//!
//! let settings = ConfigBuilder::new().resolve().unwrap();
//! println!("scanning {}", settings.root.display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::{normalize_extension, EnvironmentConfig};
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, Settings, DEFAULT_ROOT_DIR};
pub use validator::ConfigValidator;
