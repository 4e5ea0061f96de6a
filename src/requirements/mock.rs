//! In-memory probe for testing.
//!
//! `MockProbe` implements [`SystemProbe`] from explicit fixtures so that
//! requirement trees can be evaluated without touching the host.
//!
//! # Example
//!
//! ```
//! use prereq::requirements::mock::MockProbe;
//! use prereq::requirements::{Condition, SystemProbe};
//!
//! let probe = MockProbe::new().with_command("git", "git version 2.43.0");
//! assert!(Condition::Command("git".to_string()).evaluate(&probe));
//! assert!(probe.find_command("hg").is_none());
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::probe::{Platform, SystemProbe};

/// Probe answering from fixtures instead of the host.
#[derive(Debug, Clone)]
pub struct MockProbe {
    commands: HashMap<String, String>,
    env: HashMap<String, String>,
    paths: HashMap<PathBuf, bool>,
    platform: Platform,
}

impl Default for MockProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProbe {
    /// Create an empty probe on the current platform.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            env: HashMap::new(),
            paths: HashMap::new(),
            platform: Platform::current(),
        }
    }

    /// Register a command and the output it prints.
    pub fn with_command(mut self, command: &str, output: &str) -> Self {
        self.commands
            .insert(command.to_string(), output.to_string());
        self
    }

    /// Register an environment variable.
    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    /// Register an existing path and whether it is writable.
    pub fn with_path(mut self, path: impl Into<PathBuf>, writable: bool) -> Self {
        self.paths.insert(path.into(), writable);
        self
    }

    /// Override the reported platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

impl SystemProbe for MockProbe {
    fn find_command(&self, command: &str) -> Option<PathBuf> {
        self.commands
            .contains_key(command)
            .then(|| PathBuf::from("/mock/bin").join(command))
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.paths.contains_key(path)
    }

    fn path_writable(&self, path: &Path) -> bool {
        self.paths.get(path).copied().unwrap_or(false)
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn command_output(&self, command: &str, _args: &[String]) -> Option<String> {
        self.commands.get(command).cloned()
    }
}
