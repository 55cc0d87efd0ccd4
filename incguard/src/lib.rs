#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # incguard
//!
//! A library for normalizing C/C++ include guards across a header tree.
//!
//! Every header under a root directory gets a guard named after its path:
//! `src/net/socket.hpp` under `src` is guarded by `FRAMEWORK_NET_SOCKET_HPP`.
//! The first `#ifndef NAME` / `#define NAME` pair in each header is replaced
//! with the canonical pair; everything else in the file is left alone.
//!
//! ## Core Types
//!
//! - [`derive_guard`] and [`GuardNamer`]: path to guard identifier
//! - [`rewrite_guard`] and [`GuardStatus`]: guard pair substitution
//! - [`HeaderLocator`]: recursive header discovery
//! - [`GuardFixer`] and [`RunReport`]: the per-file driver loop
//! - [`ConfigBuilder`] and [`Settings`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use incguard::{derive_guard, rewrite_guard};
//!
//! let id = derive_guard("/proj/src", "/proj/src/net/socket.hpp");
//! assert_eq!(id, "FRAMEWORK_NET_SOCKET_HPP");
//!
//! let fixed = rewrite_guard("#ifndef OLD_GUARD\n#define OLD_GUARD\n#endif\n", &id);
//! assert!(fixed.starts_with("#ifndef FRAMEWORK_NET_SOCKET_HPP\n"));
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod locate;
pub mod logging;
pub mod operations;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, Settings};
pub use error::{Error, Result};
pub use guard::{derive_guard, rewrite_guard, GuardNamer, GuardStatus};
pub use locate::{list_headers, HeaderLocator};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{FileOutcome, GuardFixer, RewriteExecutor, RewritePlan, RunReport};
