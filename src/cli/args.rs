//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Sprout - Project scaffolding from remote template collections.
#[derive(Debug, Parser)]
#[command(name = "sprout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides ~/.sprout/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Template collection archive URL
    #[arg(long, global = true, env = "SPROUT_SOURCE", value_name = "URL")]
    pub source: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Fetch the collection even if it is already cached
    #[arg(long, global = true)]
    pub refresh: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available templates
    List(ListArgs),

    /// Show the files a template would create
    Files(FilesArgs),

    /// Copy a template's files into a directory
    Copy(CopyArgs),

    /// Create a new project directory from a template
    Create(CreateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `files` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FilesArgs {
    /// Template name
    pub template: String,

    /// Show at most this many files
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for the `copy` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CopyArgs {
    /// Template name
    pub template: String,

    /// Destination directory (created if missing)
    pub destination: PathBuf,
}

/// Arguments for the `create` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// New project directory (must not exist)
    pub project: PathBuf,

    /// Template name
    #[arg(short, long)]
    pub template: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
