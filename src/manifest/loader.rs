//! Manifest discovery and loading.
//!
//! A project keeps its manifest at `.prereq/requirements.yml` (or `.yaml`).
//! An optional `.prereq/requirements.local.yml` is layered on top of it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrereqError, Result};
use crate::requirements::{RequirementSet, SystemProbe};

use super::schema::Manifest;
use super::validator::validate;

/// Directory holding a project's manifests.
pub const MANIFEST_DIR: &str = ".prereq";

/// Manifest file names, in lookup order.
const MANIFEST_NAMES: &[&str] = &["requirements.yml", "requirements.yaml"];

/// Local override file name.
const LOCAL_MANIFEST_NAME: &str = "requirements.local.yml";

/// Paths to manifest files for a project.
#[derive(Debug, Clone)]
pub struct ManifestPaths {
    /// Project manifest: .prereq/requirements.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .prereq/requirements.local.yml
    pub project_local: Option<PathBuf>,
}

impl ManifestPaths {
    /// Discover manifest files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(MANIFEST_DIR);
        let project = MANIFEST_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file());
        let local = dir.join(LOCAL_MANIFEST_NAME);

        Self {
            project,
            project_local: local.is_file().then_some(local),
        }
    }

    /// Where the project manifest is expected when none exists.
    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(MANIFEST_DIR).join(MANIFEST_NAMES[0])
    }
}

/// A project manifest together with its optional local overrides.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    /// File the main manifest was read from
    pub path: PathBuf,
    /// Main manifest
    pub manifest: Manifest,
    /// Local overrides, if present
    pub local: Option<Manifest>,
}

impl LoadedManifest {
    /// Validate the main manifest and the local overrides.
    pub fn validate(&self) -> Result<()> {
        validate(&self.manifest)?;
        if let Some(local) = &self.local {
            validate(local)?;
        }
        Ok(())
    }

    /// Evaluate all checks and build the combined requirement tree.
    pub fn build(&self, probe: &dyn SystemProbe) -> Result<RequirementSet> {
        let mut set = self.manifest.build(probe)?;
        if let Some(local) = &self.local {
            tracing::debug!("Applying local manifest overrides");
            local.apply_to(&mut set, probe)?;
        }
        Ok(set)
    }
}

/// Load a project's manifest.
///
/// An explicit path (relative paths resolve against `project_root`) wins over
/// discovery and disables local overrides.
///
/// # Errors
///
/// Returns `ManifestNotFound` if no manifest exists.
/// Returns `ManifestParseError` if a manifest is invalid YAML.
pub fn load_manifest(project_root: &Path, explicit: Option<&Path>) -> Result<LoadedManifest> {
    if let Some(path) = explicit {
        let path = project_root.join(path);
        let manifest = load_manifest_file(&path)?;
        return Ok(LoadedManifest {
            path,
            manifest,
            local: None,
        });
    }

    let paths = ManifestPaths::discover(project_root);
    let Some(path) = paths.project else {
        return Err(PrereqError::ManifestNotFound {
            path: ManifestPaths::default_path(project_root),
        });
    };

    tracing::debug!("Loading manifest from {}", path.display());
    let manifest = load_manifest_file(&path)?;
    let local = paths
        .project_local
        .as_deref()
        .map(load_manifest_file)
        .transpose()?;

    Ok(LoadedManifest {
        path,
        manifest,
        local,
    })
}

/// Load a single manifest file.
///
/// # Errors
///
/// Returns `ManifestNotFound` if the file doesn't exist.
/// Returns `ManifestParseError` if the YAML is invalid.
pub fn load_manifest_file(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PrereqError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PrereqError::Io(e)
        }
    })?;

    parse_manifest(&content, path)
}

/// Parse YAML content into a manifest.
///
/// An empty document is an empty manifest.
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    if content.trim().is_empty() {
        return Ok(Manifest::default());
    }
    serde_yaml::from_str(content).map_err(|e| PrereqError::ManifestParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
