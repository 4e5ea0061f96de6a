//! Human-readable checklist formatter.

use std::io::Write;

use super::checklist::{CheckStatus, Checklist, ChecklistItem};
use super::ChecklistFormatter;
use crate::requirements::Mode;
use crate::ui::{StatusKind, Theme};

/// Formats a checklist as indented status lines.
pub struct HumanFormatter {
    theme: Theme,
    details: bool,
}

impl HumanFormatter {
    /// Create a formatter, optionally coloured and with descriptions.
    pub fn new(colors: bool, details: bool) -> Self {
        Self {
            theme: Theme::for_colors(colors),
            details,
        }
    }
}

impl ChecklistFormatter for HumanFormatter {
    fn format<W: Write>(&self, checklist: &Checklist, writer: &mut W) -> std::io::Result<()> {
        for item in &checklist.items {
            let indent = "  ".repeat(item.depth());
            match item {
                ChecklistItem::Requirement {
                    title,
                    status,
                    optional,
                    message,
                    descriptions,
                    ..
                } => {
                    let kind = match status {
                        CheckStatus::Passed => StatusKind::Success,
                        CheckStatus::Failed => StatusKind::Failed,
                        CheckStatus::Skipped => StatusKind::Warning,
                    };
                    let mut line = title.clone();
                    if *optional {
                        line.push_str(&format!(" {}", self.theme.dim.apply_to("(optional)")));
                    }
                    if let Some(message) = message {
                        line.push_str(&format!(": {}", message));
                    }
                    writeln!(writer, "{}{}", indent, kind.format(&self.theme, &line))?;

                    if self.details {
                        for description in descriptions {
                            writeln!(
                                writer,
                                "{}    {}",
                                indent,
                                self.theme.dim.apply_to(description)
                            )?;
                        }
                    }
                }
                ChecklistItem::Group {
                    mode,
                    fulfilled,
                    blocking,
                    ..
                } => {
                    let kind = if *fulfilled {
                        StatusKind::Success
                    } else if *blocking {
                        StatusKind::Failed
                    } else {
                        StatusKind::Warning
                    };
                    let label = match mode {
                        Mode::All => "All of:",
                        Mode::Any => "One of:",
                    };
                    let label = self.theme.group.apply_to(label).to_string();
                    writeln!(writer, "{}{}", indent, kind.format(&self.theme, &label))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::{Condition, Requirement, RequirementSet};

    fn render(checklist: &Checklist, details: bool) -> String {
        let mut out = Vec::new();
        HumanFormatter::new(false, details)
            .format(checklist, &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> Checklist {
        let mut drivers = RequirementSet::new(Mode::Any);
        drivers
            .add(Requirement::new(Condition::Command("psql".into()), false))
            .add(Requirement::new(Condition::Command("mysql".into()), false));

        let mut set = RequirementSet::new(Mode::All);
        set.add(
            Requirement::new(Condition::Command("git".into()), true)
                .with_title("Git")
                .with_description("Used to fetch modules")
                .with_state_texts(Some("installed".into()), None),
        )
        .merge(drivers);
        Checklist::from_set(&set, None)
    }

    #[test]
    fn renders_items_with_icons_and_indentation() {
        let text = render(&sample(), false);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "✓ Git: installed",
                "✗ One of:",
                "  ⚠ Command 'psql' (optional)",
                "  ⚠ Command 'mysql' (optional)",
            ]
        );
    }

    #[test]
    fn details_include_descriptions() {
        let text = render(&sample(), true);
        assert!(text.contains("    Used to fetch modules"));
        assert!(!render(&sample(), false).contains("Used to fetch modules"));
    }
}
