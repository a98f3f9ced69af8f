//! lintree - Tree-grouped terminal formatter for ESLint results.
//!
//! lintree turns per-file lint results into a table of issues for every
//! offending file, followed by a summary of totals and fixable issues grouped
//! into a directory tree.
//!
//! # Modules
//!
//! - [`aggregate`] - Classification and tallying of raw results
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`formatter`] - The formatting entry point
//! - [`input`] - Result records and JSON decoding
//! - [`options`] - Explicit formatting options
//! - [`render`] - Per-file blocks and summary sections
//! - [`ui`] - Themes, tables and trees
//!
//! # Example
//!
//! ```
//! use lintree::{FormatOptions, Formatter, LintMessage, LintResult};
//!
//! let results = vec![LintResult::from_messages(
//!     "/repo/src/app.js",
//!     vec![LintMessage::error("semi", 4, 12, "Missing semicolon.").fixable()],
//! )];
//!
//! let formatter = Formatter::new(FormatOptions::new("/repo"));
//! let output = formatter.format(&results);
//! assert!(output.contains("[0:1]src/app.js"));
//! assert!(output.contains("Total: 1 issue (0 warnings, 1 error) in 1 file."));
//! ```

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod formatter;
pub mod input;
pub mod options;
pub mod render;
pub mod ui;

pub use error::{LintreeError, Result};
pub use formatter::{format, Formatter, NO_ISSUES_MESSAGE};
pub use input::{parse_results, LintMessage, LintResult};
pub use options::{summary_enabled, FormatOptions, SUMMARY_ENV_VAR};
