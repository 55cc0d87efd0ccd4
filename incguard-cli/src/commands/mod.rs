//! CLI command implementations.
//!
//! - `fix`: Rewrite include guards to their canonical names
//! - `check`: Fail when any header carries a non-canonical guard
//! - `list`: List headers with their canonical guard and status
//! - `guard_name`: Print the canonical guard for files
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod fix;
pub mod guard_name;
pub mod list;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use fix::FixCommand;
pub use guard_name::GuardNameCommand;
pub use list::ListCommand;
