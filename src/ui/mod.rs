//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal output
//! - [`MockUI`] capturing output for tests
//! - Theme and status icons shared with the checklist formatter
//!
//! # Example
//!
//! ```
//! use prereq::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Requirements");
//! ui.success("All requirements met");
//! assert_eq!(ui.successes(), ["All requirements met"]);
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}
