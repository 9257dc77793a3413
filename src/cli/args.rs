//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Gangway - dependency-gated launcher for demo app deployments.
#[derive(Debug, Parser)]
#[command(name = "gangway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the launch manifest (overrides .gangway/manifest.yml)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

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
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe dependencies and launch the application (default)
    Launch(LaunchArgs),

    /// Diagnose the project tree and runtime without launching
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `launch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LaunchArgs {
    /// Probe and report the bootstrap decision without launching
    #[arg(long)]
    pub dry_run: bool,

    /// Force the live backend instead of canned demo data
    #[arg(long)]
    pub live: bool,
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["gangway"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn launch_flags_parse() {
        let cli = Cli::parse_from(["gangway", "launch", "--dry-run", "--live"]);
        match cli.command {
            Some(Commands::Launch(args)) => {
                assert!(args.dry_run);
                assert!(args.live);
            }
            other => panic!("expected Launch, got {:?}", other),
        }
    }

    #[test]
    fn doctor_json_parses() {
        let cli = Cli::parse_from(["gangway", "doctor", "--json"]);
        match cli.command {
            Some(Commands::Doctor(args)) => assert!(args.json),
            other => panic!("expected Doctor, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["gangway", "doctor", "--project", "/tmp/x", "--quiet"]);
        assert_eq!(cli.project.as_deref(), Some(std::path::Path::new("/tmp/x")));
        assert!(cli.quiet);
    }
}
