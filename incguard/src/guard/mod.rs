//! Include guard naming and rewriting.
//!
//! This module holds the two pieces of real logic in incguard:
//!
//! - [`derive_guard`] / [`GuardNamer`]: turn a header path into its canonical
//!   guard identifier (`/proj/src/net/socket.hpp` under `/proj/src` becomes
//!   `FRAMEWORK_NET_SOCKET_HPP`).
//! - [`rewrite_guard`] / [`find_guard`]: locate the first
//!   `#ifndef NAME` / `#define NAME` pair in a header and replace it with the
//!   canonical pair.
//!
//! Both are pure string functions; nothing here touches the filesystem.
//!
//! # Examples
//!
//! ```
//! use incguard::guard::{derive_guard, rewrite_guard};
//!
//! let id = derive_guard("/proj/src", "/proj/src/net/socket.hpp");
//! assert_eq!(id, "FRAMEWORK_NET_SOCKET_HPP");
//!
//! let old = "#ifndef OLD_GUARD\n#define OLD_GUARD\nint x;\n#endif\n";
//! let new = rewrite_guard(old, &id);
//! assert_eq!(
//!     new,
//!     "#ifndef FRAMEWORK_NET_SOCKET_HPP\n#define FRAMEWORK_NET_SOCKET_HPP\nint x;\n#endif\n"
//! );
//! ```

pub mod name;
pub mod rewrite;

#[cfg(test)]
mod proptests;

pub use name::{derive_guard, GuardNamer, DEFAULT_PREFIX};
pub use rewrite::{canonical_header, classify, find_guard, rewrite_guard, GuardMatch, GuardStatus};
