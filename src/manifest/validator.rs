//! Manifest validation rules.
//!
//! This module validates a parsed manifest before any check runs:
//! - Modes must be `all` or `any`
//! - Command and environment variable names must not be empty
//! - Minimum versions must parse
//! - Titles must not be blank
//! - Groups must not be empty

use serde::Serialize;

use crate::error::{PrereqError, Result};
use crate::requirements::{Condition, Mode, Version};

use super::schema::{EntrySpec, Manifest, RequirementSpec};

/// Validation error with context.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Location in the manifest, e.g. `requirements[1].requirements[0]`
    pub location: String,
    /// Offending value for mode errors
    #[serde(skip)]
    pub value: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, location: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            location: location.to_string(),
            value: None,
        }
    }
}

/// Validate a manifest and return all errors.
///
/// All errors are collected so users can fix them in one pass.
pub fn validate_manifest(manifest: &Manifest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(mode) = &manifest.mode {
        check_mode(mode, "mode", &mut errors);
    }
    if let Some(title) = &manifest.title {
        if title.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-title",
                "title",
                "Manifest title must not be blank".to_string(),
            ));
        }
    }
    validate_entries(&manifest.requirements, "requirements", &mut errors);

    errors
}

/// Validate a manifest, failing on the first class of error found.
///
/// An invalid mode is reported as [`PrereqError::InvalidMode`]; every other
/// problem is folded into one [`PrereqError::ManifestValidationError`].
pub fn validate(manifest: &Manifest) -> Result<()> {
    let errors = validate_manifest(manifest);
    if errors.is_empty() {
        return Ok(());
    }

    if let Some(value) = errors.iter().find_map(|e| e.value.clone()) {
        return Err(PrereqError::InvalidMode { value });
    }

    let message = errors
        .iter()
        .map(|e| format!("{}: {}", e.location, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(PrereqError::ManifestValidationError { message })
}

fn check_mode(mode: &str, location: &str, errors: &mut Vec<ValidationError>) {
    if mode.parse::<Mode>().is_err() {
        let mut error = ValidationError::new(
            "invalid-mode",
            location,
            format!("Invalid mode '{}' (expected 'all' or 'any')", mode),
        );
        error.value = Some(mode.to_string());
        errors.push(error);
    }
}

fn validate_entries(entries: &[EntrySpec], location: &str, errors: &mut Vec<ValidationError>) {
    for (idx, entry) in entries.iter().enumerate() {
        let here = format!("{}[{}]", location, idx);
        match entry {
            EntrySpec::Group(group) => {
                if let Some(mode) = &group.mode {
                    check_mode(mode, &format!("{}.mode", here), errors);
                }
                if group.requirements.is_empty() {
                    errors.push(ValidationError::new(
                        "empty-group",
                        &here,
                        "Group has no requirements".to_string(),
                    ));
                }
                validate_entries(&group.requirements, &format!("{}.requirements", here), errors);
            }
            EntrySpec::Requirement(spec) => validate_requirement(spec, &here, errors),
        }
    }
}

fn validate_requirement(spec: &RequirementSpec, location: &str, errors: &mut Vec<ValidationError>) {
    if let Some(title) = &spec.title {
        if title.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-title",
                location,
                "Requirement title must not be blank".to_string(),
            ));
        }
    }

    match &spec.check {
        Condition::Command(command) if command.trim().is_empty() => {
            errors.push(ValidationError::new(
                "empty-name",
                location,
                "Command name must not be empty".to_string(),
            ));
        }
        Condition::CommandVersion { command, min, .. } => {
            if command.trim().is_empty() {
                errors.push(ValidationError::new(
                    "empty-name",
                    location,
                    "Command name must not be empty".to_string(),
                ));
            }
            if Version::parse(min).is_none() {
                errors.push(ValidationError::new(
                    "invalid-version",
                    location,
                    format!("Minimum version '{}' is not a version number", min),
                ));
            }
        }
        Condition::EnvVar(name) if name.trim().is_empty() => {
            errors.push(ValidationError::new(
                "empty-name",
                location,
                "Environment variable name must not be empty".to_string(),
            ));
        }
        _ => {}
    }
}
