//! Requirements manifests.
//!
//! A manifest declares the requirement tree of an installation in YAML:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//! - Evaluation into a [`RequirementSet`](crate::requirements::RequirementSet) in [`build`]
//!
//! # Example
//!
//! ```
//! use prereq::manifest::{load_manifest, MANIFEST_DIR};
//! use prereq::requirements::mock::MockProbe;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(MANIFEST_DIR);
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("requirements.yml"),
//!     "requirements:\n  - check: { command: git }\n",
//! )
//! .unwrap();
//!
//! let loaded = load_manifest(temp.path(), None).unwrap();
//! loaded.validate().unwrap();
//! let probe = MockProbe::new().with_command("git", "git version 2.43.0");
//! assert!(loaded.build(&probe).unwrap().fulfilled());
//! ```

pub mod build;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    load_manifest, load_manifest_file, parse_manifest, LoadedManifest, ManifestPaths,
    MANIFEST_DIR,
};
pub use schema::{EntrySpec, GroupSpec, Manifest, RequirementSpec};
pub use validator::{validate, validate_manifest, ValidationError};
