//! Checklist reporting.
//!
//! A [`Checklist`] flattens an evaluated requirement tree into lines that an
//! installer can show; formatters render it for people or for tooling.

pub mod checklist;
pub mod human;
pub mod json;

use std::io::Write;

pub use checklist::{CheckStatus, Checklist, ChecklistItem, ChecklistSummary};
pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Trait for formatting checklists.
pub trait ChecklistFormatter {
    /// Format the checklist to the given writer.
    fn format<W: Write>(&self, checklist: &Checklist, writer: &mut W) -> std::io::Result<()>;
}
