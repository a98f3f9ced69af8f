//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::options::SUMMARY_ENV_VAR;

/// lintree - Tree-grouped terminal formatter for ESLint results.
#[derive(Debug, Parser)]
#[command(name = "lintree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// ESLint JSON results (`eslint -f json`); `-` reads stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Directory paths are shown relative to (defaults to the current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Summary toggle; any value other than `true` hides the summaries
    #[arg(long, env = SUMMARY_ENV_VAR, hide_env_values = true)]
    pub summary: Option<String>,

    /// Hide the Total and Fixable summaries
    #[arg(long)]
    pub no_summary: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Whether the input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}
