//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Render command arguments.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Catalog file (overrides `catalog.path`)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output file (overrides `output.path`)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub out: Option<PathBuf>,

    /// Write the page to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

/// Check command arguments.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Catalog file (overrides `catalog.path`)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Tags command arguments.
#[derive(Debug, Args)]
pub struct TagsCommand {
    /// Catalog file (overrides `catalog.path`)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}
