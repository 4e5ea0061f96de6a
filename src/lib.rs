//! prereq - Declarative prerequisite checks for installation wizards.
//!
//! An installer declares what the host must provide in a YAML manifest.
//! prereq evaluates each check, aggregates the results under all-of / any-of
//! rules with mandatory and optional requirements, and reports whether the
//! installation may proceed.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest loading, validation and evaluation
//! - [`report`] - Checklist model and formatters
//! - [`requirements`] - Requirements, conditions and requirement sets
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use prereq::requirements::{Condition, Mode, Requirement, RequirementSet};
//!
//! let mut set = RequirementSet::new(Mode::All);
//! set.add(Requirement::new(Condition::Command("php".into()), true))
//!     .add(Requirement::new(Condition::Command("convert".into()), false).with_optional(true));
//!
//! assert!(set.fulfilled());
//! ```

pub mod cli;
pub mod error;
pub mod manifest;
pub mod report;
pub mod requirements;
pub mod ui;

pub use error::{PrereqError, Result};
