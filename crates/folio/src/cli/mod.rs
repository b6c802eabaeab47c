//! Command-line interface for folio.
//!
//! This module provides the CLI structure for the `folio` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{CheckCommand, ConfigCommand, OutputFormat, RenderCommand, TagsCommand};

/// folio - Render a project catalog into a filterable portfolio page
///
/// Reads a catalog of projects and technology tags, and writes a static page
/// with expandable project cards, tag filters and a screenshot lightbox.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the catalog to an HTML page
    Render(RenderCommand),

    /// Load the catalog and report problems
    Check(CheckCommand),

    /// List the tags used by the catalog
    Tags(TagsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// The file `config validate` checks, or `None` for any other command.
    ///
    /// Resolved before any configuration is loaded so a broken default file
    /// cannot stop another file from being validated.
    #[must_use]
    pub fn validate_target(&self) -> Option<PathBuf> {
        match &self.command {
            Command::Config(ConfigCommand::Validate { file }) => Some(
                file.clone()
                    .or_else(|| self.config.clone())
                    .unwrap_or_else(crate::config::SiteConfig::default_config_path),
            ),
            _ => None,
        }
    }

    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Check(CheckCommand {
                catalog: None,
                json: false,
            }),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "folio");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(3, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["folio", "render", "--out", "site/index.html"]).unwrap();
        match cli.command {
            Command::Render(cmd) => {
                assert_eq!(cmd.out, Some(PathBuf::from("site/index.html")));
                assert!(!cmd.stdout);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_render_out_conflicts_with_stdout() {
        let result = Cli::try_parse_from(["folio", "render", "--out", "a.html", "--stdout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_check_with_catalog() {
        let cli =
            Cli::try_parse_from(["folio", "check", "--catalog", "data/catalog.toml", "--json"])
                .unwrap();
        match cli.command {
            Command::Check(cmd) => {
                assert_eq!(cmd.catalog, Some(PathBuf::from("data/catalog.toml")));
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_tags_json() {
        let cli = Cli::try_parse_from(["folio", "tags", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Tags(TagsCommand {
                format: OutputFormat::Json,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["folio", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["folio", "-c", "/custom/config.toml", "-vv", "tags"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_validate_target_prefers_file() {
        let cli = Cli::try_parse_from([
            "folio",
            "-c",
            "/broken/config.toml",
            "config",
            "validate",
            "--file",
            "/tmp/other.toml",
        ])
        .unwrap();
        assert_eq!(cli.validate_target(), Some(PathBuf::from("/tmp/other.toml")));
    }

    #[test]
    fn test_validate_target_falls_back() {
        let cli =
            Cli::try_parse_from(["folio", "-c", "/custom/config.toml", "config", "validate"])
                .unwrap();
        assert_eq!(cli.validate_target(), Some(PathBuf::from("/custom/config.toml")));

        let cli = Cli::try_parse_from(["folio", "config", "validate"]).unwrap();
        assert_eq!(
            cli.validate_target(),
            Some(crate::config::SiteConfig::default_config_path())
        );
    }

    #[test]
    fn test_validate_target_only_for_validate() {
        let cli = Cli::try_parse_from(["folio", "render"]).unwrap();
        assert!(cli.validate_target().is_none());
        let cli = Cli::try_parse_from(["folio", "config", "show"]).unwrap();
        assert!(cli.validate_target().is_none());
    }
}
