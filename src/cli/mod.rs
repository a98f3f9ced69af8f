//! Command-line interface for lintree.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Reads the results, formats them and reports an exit code

pub mod args;

pub use args::Cli;

use std::io::{Read, Write};

use tracing::{debug, info};

use crate::error::{LintreeError, Result};
use crate::formatter::Formatter;
use crate::input::{parse_results, LintResult};
use crate::options::{summary_enabled, FormatOptions};

/// Result of a CLI run.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the linted files were free of errors.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Read the raw JSON and a name for it to use in error messages.
fn read_input(cli: &Cli) -> Result<(String, String)> {
    if cli.reads_stdin() {
        let mut json = String::new();
        std::io::stdin().read_to_string(&mut json)?;
        return Ok((json, "<stdin>".to_string()));
    }

    let json =
        std::fs::read_to_string(&cli.input).map_err(|e| LintreeError::InputUnreadable {
            path: cli.input.clone(),
            message: e.to_string(),
        })?;
    Ok((json, cli.input.display().to_string()))
}

/// Build formatting options from the parsed arguments.
///
/// Starts from [`FormatOptions::from_env`]; a relative `--cwd` is resolved
/// against the process working directory.
pub fn options_from_cli(cli: &Cli) -> Result<FormatOptions> {
    let mut options = FormatOptions::from_env()?;
    if let Some(cwd) = &cli.cwd {
        options = options.with_cwd(cwd);
    }

    let show_summary = !cli.no_summary && summary_enabled(cli.summary.as_deref());
    let use_color = !cli.no_color && options.use_color;
    Ok(options.with_summary(show_summary).with_color(use_color))
}

/// Exit status for a run: failure when any file reported errors.
pub fn exit_status(results: &[LintResult]) -> CommandResult {
    if results.iter().any(|r| r.error_count > 0) {
        CommandResult::failure(1)
    } else {
        CommandResult::success()
    }
}

/// Format the results named by `cli` into `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<CommandResult> {
    let (json, source_name) = read_input(cli)?;
    let results = parse_results(&json, &source_name)?;
    info!("Loaded {} result records from {}", results.len(), source_name);

    let options = options_from_cli(cli)?;
    debug!("Format options: {:?}", options);

    let formatter = Formatter::new(options);
    formatter.write_to(&results, out)?;
    writeln!(out)?;

    Ok(exit_status(&results))
}
