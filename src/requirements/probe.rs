//! Host probing for requirement conditions.
//!
//! Conditions never touch the host directly. They ask a [`SystemProbe`],
//! which keeps evaluation testable: [`HostProbe`] inspects the real machine,
//! while tests substitute an in-memory probe.
//!
//! # Example
//!
//! ```no_run
//! use prereq::requirements::probe::{HostProbe, SystemProbe};
//!
//! let probe = HostProbe::new();
//! if let Some(git) = probe.find_command("git") {
//!     println!("git found at {}", git.display());
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};

/// Host platform a requirement can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    #[serde(alias = "darwin")]
    MacOS,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Display name used in requirement titles.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::MacOS => "macOS",
            Platform::Windows => "Windows",
        }
    }
}

/// Read-only view of the host used to evaluate conditions.
pub trait SystemProbe {
    /// Resolve a command name to an executable on PATH.
    fn find_command(&self, command: &str) -> Option<PathBuf>;

    /// Look up an environment variable.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Whether a file or directory exists.
    fn path_exists(&self, path: &Path) -> bool;

    /// Whether a path exists and can be written to.
    fn path_writable(&self, path: &Path) -> bool;

    /// Platform the probe describes.
    fn platform(&self) -> Platform;

    /// Run a command and return its combined stdout and stderr.
    ///
    /// Returns `None` when the command cannot be spawned.
    fn command_output(&self, command: &str, args: &[String]) -> Option<String>;
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(windows) {
            let candidate = dir.join(format!("{tool}.exe"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Probe backed by the real environment and filesystem.
#[derive(Debug, Clone)]
pub struct HostProbe {
    path_entries: Vec<PathBuf>,
}

impl HostProbe {
    /// Create a probe that searches the current PATH.
    pub fn new() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Create a probe that searches the given directories for commands.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe for HostProbe {
    fn find_command(&self, command: &str) -> Option<PathBuf> {
        let as_path = Path::new(command);
        if as_path.components().count() > 1 {
            return (as_path.is_file() && is_executable(as_path)).then(|| as_path.to_path_buf());
        }
        resolve_tool_path(command, &self.path_entries)
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn path_writable(&self, path: &Path) -> bool {
        path.metadata()
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false)
    }

    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn command_output(&self, command: &str, args: &[String]) -> Option<String> {
        let binary = self.find_command(command)?;
        match Command::new(&binary).args(args).output() {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                Some(text)
            }
            Err(e) => {
                tracing::debug!("Failed to run {}: {}", binary.display(), e);
                None
            }
        }
    }
}
