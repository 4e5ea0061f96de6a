//! Single pass/fail requirement.

use std::borrow::Cow;

use super::condition::Condition;
use super::probe::SystemProbe;

/// A single check with its outcome, optionality and user-facing wording.
///
/// Requirements are compared by [`Condition`] only: the same check
/// registered twice with different descriptions is still one requirement.
#[derive(Debug, Clone)]
pub struct Requirement {
    condition: Condition,
    title: Option<String>,
    state: bool,
    optional: bool,
    descriptions: Vec<String>,
    text_available: Option<String>,
    text_unavailable: Option<String>,
}

impl Requirement {
    /// Create a mandatory requirement with a known outcome.
    pub fn new(condition: Condition, state: bool) -> Self {
        Self {
            condition,
            title: None,
            state,
            optional: false,
            descriptions: Vec::new(),
            text_available: None,
            text_unavailable: None,
        }
    }

    /// Create a mandatory requirement by evaluating its condition.
    pub fn evaluate(condition: Condition, probe: &dyn SystemProbe) -> Self {
        let state = condition.evaluate(probe);
        tracing::debug!(
            "{}: {}",
            condition,
            if state { "available" } else { "unavailable" }
        );
        Self::new(condition, state)
    }

    /// Set the title shown in checklists.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set whether failing this requirement may be tolerated.
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Append a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.descriptions.push(description.into());
        self
    }

    /// Set the texts shown when the requirement passes or fails.
    pub fn with_state_texts(
        mut self,
        available: Option<String>,
        unavailable: Option<String>,
    ) -> Self {
        self.text_available = available;
        self.text_unavailable = unavailable;
        self
    }

    /// The condition this requirement checks.
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Title, falling back to a description of the condition.
    pub fn title(&self) -> Cow<'_, str> {
        match &self.title {
            Some(title) => Cow::Borrowed(title),
            None => Cow::Owned(self.condition.to_string()),
        }
    }

    /// Whether the check passed.
    pub fn state(&self) -> bool {
        self.state
    }

    /// Whether a failure of this requirement may be tolerated.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Mark the requirement optional or mandatory.
    pub fn set_optional(&mut self, optional: bool) -> &mut Self {
        self.optional = optional;
        self
    }

    /// Descriptions in the order they were added.
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// Append a description.
    pub fn add_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.descriptions.push(description.into());
        self
    }

    /// Text matching the current state, if one was configured.
    pub fn state_text(&self) -> Option<&str> {
        if self.state {
            self.text_available.as_deref()
        } else {
            self.text_unavailable.as_deref()
        }
    }

    /// Whether both requirements check the same thing.
    pub fn equals(&self, other: &Requirement) -> bool {
        self.condition == other.condition
    }
}
