//! Validate command implementation.
//!
//! The `prereq validate` command checks the manifest itself without probing
//! the host.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ValidateArgs;
use crate::error::{PrereqError, Result};
use crate::manifest::{load_manifest, validate_manifest, ValidationError};

use super::dispatcher::{Command, CommandResult};
use crate::ui::UserInterface;

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    manifest: Option<PathBuf>,
    args: ValidateArgs,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    errors: &'a [ValidationError],
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path, manifest: Option<&Path>, args: ValidateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest: manifest.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let loaded = match load_manifest(&self.project_root, self.manifest.as_deref()) {
            Ok(loaded) => loaded,
            Err(PrereqError::ManifestNotFound { path }) => {
                ui.error(&format!(
                    "No requirements manifest found at {}",
                    path.display()
                ));
                return Ok(CommandResult::failure(2));
            }
            Err(PrereqError::ManifestParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let mut errors = validate_manifest(&loaded.manifest);
        if let Some(local) = &loaded.local {
            errors.extend(validate_manifest(local).into_iter().map(|mut e| {
                e.location = format!("local:{}", e.location);
                e
            }));
        }

        if self.args.json {
            let report = JsonReport {
                valid: errors.is_empty(),
                errors: &errors,
            };
            let output = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.message(&output);
        } else if errors.is_empty() {
            ui.success(&format!("{} is valid", loaded.path.display()));
        } else {
            for error in &errors {
                ui.error(&format!(
                    "{} [{}] {}",
                    error.location, error.rule, error.message
                ));
            }
        }

        if errors.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
