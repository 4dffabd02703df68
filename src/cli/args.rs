//! CLI argument definitions using clap.
//!
//! Running `vsmap` without a subcommand generates the mapping report.
//!
//! ## Commands
//!
//! - (none): Scan unit definitions and write the mapping report
//! - `init`: Write a default `.vsmaprc.json`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        self.generate.verbose
    }
}

/// Options for report generation. All of them override the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Project root (defaults to the directory containing .vsmaprc.json, or the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Report file path (overrides config file)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .vsmaprc.json configuration file
    Init,
}
