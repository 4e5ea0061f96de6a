//! Manifest schema definitions.
//!
//! These structs map one-to-one onto the YAML requirements manifest.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::requirements::{Condition, Mode};

/// Root of a requirements manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Heading shown above the checklist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Mode of the root set: all (default) or any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Requirements and groups, in evaluation order
    pub requirements: Vec<EntrySpec>,
}

impl Manifest {
    /// The parsed root mode.
    pub fn mode(&self) -> Result<Mode> {
        parse_mode(self.mode.as_deref())
    }
}

/// A manifest entry: a nested group or a single requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntrySpec {
    Group(GroupSpec),
    Requirement(RequirementSpec),
}

/// A nested group of requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    /// Mode of the group: all (default) or any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Members of the group
    pub requirements: Vec<EntrySpec>,
}

impl GroupSpec {
    /// The parsed group mode.
    pub fn mode(&self) -> Result<Mode> {
        parse_mode(self.mode.as_deref())
    }
}

/// A single requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequirementSpec {
    /// Display title; defaults to a description of the check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// What to check
    pub check: Condition,

    /// Whether a failure may be tolerated
    #[serde(default)]
    pub optional: bool,

    /// Why the requirement exists
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<String>,

    /// Text shown when the check passes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<String>,

    /// Text shown when the check fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<String>,
}

fn parse_mode(mode: Option<&str>) -> Result<Mode> {
    match mode {
        Some(value) => value.parse(),
        None => Ok(Mode::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrereqError;

    #[test]
    fn empty_document_is_empty_all_manifest() {
        let manifest: Manifest = serde_yaml::from_str("{}").unwrap();
        assert!(manifest.requirements.is_empty());
        assert_eq!(manifest.mode().unwrap(), Mode::All);
    }

    #[test]
    fn parses_requirements_and_groups() {
        let yaml = r#"
title: Icinga Web 2
mode: all
requirements:
  - title: PHP
    check:
      command_version: { command: php, min: "7.3" }
    descriptions: ["Running Icinga Web 2 requires PHP 7.3 or newer."]
    available: "PHP found"
    unavailable: "PHP missing or too old"
  - mode: any
    requirements:
      - check: { command: psql }
      - check: { command: mysql }
        optional: true
"#;
        let manifest: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(manifest.title.as_deref(), Some("Icinga Web 2"));
        assert_eq!(manifest.requirements.len(), 2);

        let EntrySpec::Requirement(php) = &manifest.requirements[0] else {
            panic!("Expected requirement");
        };
        assert_eq!(php.title.as_deref(), Some("PHP"));
        assert!(!php.optional);
        assert_eq!(php.descriptions.len(), 1);

        let EntrySpec::Group(group) = &manifest.requirements[1] else {
            panic!("Expected group");
        };
        assert_eq!(group.mode().unwrap(), Mode::Any);
        assert_eq!(group.requirements.len(), 2);
    }

    #[test]
    fn unknown_mode_surfaces_invalid_mode() {
        let manifest: Manifest = serde_yaml::from_str("mode: xor").unwrap();
        assert!(matches!(
            manifest.mode(),
            Err(PrereqError::InvalidMode { .. })
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: std::result::Result<Manifest, _> =
            serde_yaml::from_str("requirements:\n  - check: { command: git }\n    colour: red\n");
        assert!(result.is_err());
    }

    #[test]
    fn requirement_without_check_is_rejected() {
        let result: std::result::Result<Manifest, _> =
            serde_yaml::from_str("requirements:\n  - title: Git\n");
        assert!(result.is_err());
    }
}
