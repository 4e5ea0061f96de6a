//! Conditions evaluated against the host.
//!
//! A condition is the identity of a requirement: two requirements that check
//! the same condition are the same requirement, whatever their wording.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::probe::{Platform, SystemProbe};
use super::version::{extract_version, Version};

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

/// What a requirement checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// A binary is available on PATH.
    Command(String),

    /// A binary reports a version at least `min`.
    CommandVersion {
        command: String,
        /// Arguments that make the command print its version.
        #[serde(default = "default_version_args")]
        args: Vec<String>,
        min: String,
    },

    /// A file or directory exists.
    PathExists(PathBuf),

    /// A file or directory exists and is writable.
    PathWritable(PathBuf),

    /// An environment variable is set to a non-empty value.
    EnvVar(String),

    /// The host runs the given platform.
    Platform(Platform),
}

impl Condition {
    /// Evaluate the condition, returning whether it holds.
    pub fn evaluate(&self, probe: &dyn SystemProbe) -> bool {
        match self {
            Condition::Command(command) => probe.find_command(command).is_some(),
            Condition::CommandVersion { command, args, min } => {
                let Some(min) = Version::parse(min) else {
                    tracing::warn!("Unparsable minimum version '{}' for {}", min, command);
                    return false;
                };
                let Some(output) = probe.command_output(command, args) else {
                    return false;
                };
                match extract_version(&output) {
                    Some(found) => {
                        tracing::debug!("{} reports version {} (need {})", command, found, min);
                        found >= min
                    }
                    None => {
                        tracing::debug!("No version in output of {}", command);
                        false
                    }
                }
            }
            Condition::PathExists(path) => probe.path_exists(path),
            Condition::PathWritable(path) => probe.path_writable(path),
            Condition::EnvVar(name) => probe.env_var(name).is_some_and(|v| !v.is_empty()),
            Condition::Platform(platform) => probe.platform() == *platform,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Command(command) => write!(f, "Command '{}'", command),
            Condition::CommandVersion { command, min, .. } => {
                write!(f, "Command '{}' >= {}", command, min)
            }
            Condition::PathExists(path) => write!(f, "Path {}", path.display()),
            Condition::PathWritable(path) => write!(f, "Writable path {}", path.display()),
            Condition::EnvVar(name) => write!(f, "Environment variable {}", name),
            Condition::Platform(platform) => write!(f, "Platform {}", platform.name()),
        }
    }
}
