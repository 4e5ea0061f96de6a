//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`prereq check`, `prereq validate`)
//! - Shared manifest resolution
//! - Consistent global flag handling

pub mod check;
pub mod dispatcher;
pub mod validate;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use validate::ValidateCommand;
