//! Flattened, serializable view of an evaluated requirement tree.

use serde::Serialize;

use crate::requirements::{Entry, Mode, Requirement, RequirementSet};

/// Outcome of a single requirement as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The check passed.
    Passed,
    /// The check failed and is mandatory.
    Failed,
    /// The check failed but is optional.
    Skipped,
}

impl CheckStatus {
    fn of(requirement: &Requirement) -> Self {
        if requirement.state() {
            CheckStatus::Passed
        } else if requirement.is_optional() {
            CheckStatus::Skipped
        } else {
            CheckStatus::Failed
        }
    }
}

/// One line of the checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChecklistItem {
    /// A leaf requirement.
    Requirement {
        depth: usize,
        title: String,
        status: CheckStatus,
        optional: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        descriptions: Vec<String>,
    },
    /// Header of a nested set; its members follow at `depth + 1`.
    Group {
        depth: usize,
        mode: Mode,
        fulfilled: bool,
        /// Whether the failure of this group fails its parent.
        blocking: bool,
    },
}

impl ChecklistItem {
    /// Nesting depth, zero for root entries.
    pub fn depth(&self) -> usize {
        match self {
            ChecklistItem::Requirement { depth, .. } | ChecklistItem::Group { depth, .. } => *depth,
        }
    }
}

/// Counts of requirement outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChecklistSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Failing groups that fail their parent.
    pub blocking_groups: usize,
}

/// Evaluated checklist for a requirement set.
#[derive(Debug, Clone, Serialize)]
pub struct Checklist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub mode: Mode,
    pub fulfilled: bool,
    pub items: Vec<ChecklistItem>,
    pub summary: ChecklistSummary,
}

impl Checklist {
    /// Evaluate `set` and flatten it into checklist items.
    pub fn from_set(set: &RequirementSet, title: Option<&str>) -> Self {
        let mut items = Vec::new();
        collect(set, 0, &mut items);

        let mut summary = ChecklistSummary::default();
        for item in &items {
            match item {
                ChecklistItem::Requirement { status, .. } => {
                    summary.total += 1;
                    match status {
                        CheckStatus::Passed => summary.passed += 1,
                        CheckStatus::Failed => summary.failed += 1,
                        CheckStatus::Skipped => summary.skipped += 1,
                    }
                }
                ChecklistItem::Group { blocking: true, .. } => summary.blocking_groups += 1,
                ChecklistItem::Group { .. } => {}
            }
        }

        Self {
            title: title.map(str::to_string),
            mode: set.mode(),
            fulfilled: set.fulfilled(),
            items,
            summary,
        }
    }
}

fn collect(set: &RequirementSet, depth: usize, items: &mut Vec<ChecklistItem>) {
    for entry in set {
        match entry {
            Entry::Requirement(requirement) => items.push(ChecklistItem::Requirement {
                depth,
                title: requirement.title().into_owned(),
                status: CheckStatus::of(requirement),
                optional: requirement.is_optional(),
                message: requirement.state_text().map(str::to_string),
                descriptions: requirement.descriptions().to_vec(),
            }),
            Entry::Set(nested) => {
                let fulfilled = nested.fulfilled();
                items.push(ChecklistItem::Group {
                    depth,
                    mode: nested.mode(),
                    fulfilled,
                    blocking: !fulfilled
                        && set.mode() == Mode::All
                        && nested.has_any_mandatory_requirement(),
                });
                collect(nested, depth + 1, items);
            }
        }
    }
}
