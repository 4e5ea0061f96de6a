//! JSON checklist formatter.
//!
//! Emits the checklist as pretty-printed JSON for installers and CI tooling.

use std::io::Write;

use super::checklist::Checklist;
use super::ChecklistFormatter;

/// Formats a checklist as JSON.
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ChecklistFormatter for JsonFormatter {
    fn format<W: Write>(&self, checklist: &Checklist, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, checklist)?;
        writeln!(writer)
    }
}
