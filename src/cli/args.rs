//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// prereq - Check installation prerequisites declared in a requirements manifest.
#[derive(Debug, Parser)]
#[command(name = "prereq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the manifest (overrides .prereq/requirements.yml)
    #[arg(short, long, global = true, env = "PREREQ_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show requirement descriptions
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final verdict
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate requirements (default if no command specified)
    Check(CheckArgs),

    /// Validate the manifest without checking the host
    Validate(ValidateArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
