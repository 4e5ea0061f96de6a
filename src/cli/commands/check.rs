//! Check command implementation.
//!
//! The `prereq check` command evaluates the manifest against the host and
//! exits non-zero when the requirements are not fulfilled.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::{PrereqError, Result};
use crate::manifest::load_manifest;
use crate::report::{Checklist, ChecklistFormatter, HumanFormatter, JsonFormatter};
use crate::requirements::{HostProbe, SystemProbe};
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    manifest: Option<PathBuf>,
    args: CheckArgs,
    probe: Box<dyn SystemProbe>,
}

impl CheckCommand {
    /// Create a check command probing the real host.
    pub fn new(project_root: &Path, manifest: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest: manifest.map(Path::to_path_buf),
            args,
            probe: Box::new(HostProbe::new()),
        }
    }

    /// Replace the probe used to evaluate conditions.
    pub fn with_probe(mut self, probe: Box<dyn SystemProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn render<F: ChecklistFormatter>(formatter: &F, checklist: &Checklist) -> Result<String> {
        let mut output = Vec::new();
        formatter.format(checklist, &mut output)?;
        String::from_utf8(output).map_err(|e| anyhow::Error::from(e).into())
    }
}

impl Command for CheckCommand {
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

        if let Err(e) = loaded.validate() {
            ui.error(&e.to_string());
            return Ok(CommandResult::failure(1));
        }

        let set = loaded.build(self.probe.as_ref())?;
        let checklist = Checklist::from_set(&set, loaded.manifest.title.as_deref());
        tracing::debug!(
            "Evaluated {} requirements from {}",
            checklist.summary.total,
            loaded.path.display()
        );

        if self.args.json {
            let output = Self::render(&JsonFormatter::new(), &checklist)?;
            ui.message(output.trim_end());
        } else {
            if let Some(title) = &checklist.title {
                ui.show_header(title);
            }
            if set.is_empty() {
                ui.warning("The manifest declares no requirements");
            }
            if ui.output_mode().shows_checklist() {
                let formatter =
                    HumanFormatter::new(should_use_colors(), ui.output_mode().shows_details());
                let output = Self::render(&formatter, &checklist)?;
                for line in output.lines() {
                    ui.message(line);
                }
            }

            let summary = checklist.summary;
            if checklist.fulfilled {
                ui.success(&format!(
                    "Requirements fulfilled ({} passed, {} skipped)",
                    summary.passed, summary.skipped
                ));
            } else {
                let mut counts = format!("{} failed", summary.failed);
                if summary.blocking_groups > 0 {
                    counts.push_str(&format!(", {} group(s) unmet", summary.blocking_groups));
                }
                ui.error(&format!(
                    "Requirements not fulfilled ({}, {} skipped)",
                    counts, summary.skipped
                ));
            }
        }

        if checklist.fulfilled {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
