//! Requirement checks and their aggregation.
//!
//! A [`Requirement`] is one pass/fail check of the host, identified by its
//! [`Condition`]. A [`RequirementSet`] groups requirements and nested sets
//! under all-of or any-of semantics and decides whether an installation may
//! proceed.
//!
//! # Modules
//!
//! - [`condition`] - What a requirement checks and how it is evaluated
//! - [`mock`] - In-memory probe for tests
//! - [`mode`] - All-of / any-of evaluation modes
//! - [`probe`] - Host probing behind the [`SystemProbe`] trait
//! - [`requirement`] - Single pass/fail requirement
//! - [`set`] - Nestable requirement sets
//! - [`version`] - Version extraction for version conditions

pub mod condition;
pub mod mock;
pub mod mode;
pub mod probe;
pub mod requirement;
pub mod set;
pub mod version;

pub use condition::Condition;
pub use mode::Mode;
pub use probe::{HostProbe, Platform, SystemProbe};
pub use requirement::Requirement;
pub use set::{Entry, RequirementSet, Requirements};
pub use version::{extract_version, Version};
