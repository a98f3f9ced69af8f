//! Aggregation of raw lint results into per-file and run-wide reports.
//!
//! [`aggregate`] walks the result records once. Each file's diagnostics are
//! split into warnings and errors (original order kept inside each class),
//! files without diagnostics are dropped, and run totals are accumulated
//! from the counts the linter already computed.

use crate::input::{LintMessage, LintResult};
use std::path::PathBuf;
use tracing::debug;

/// Rule label shown for fatal parse failures, which have no rule id.
pub const FATAL_RULE: &str = "fatal";

/// Issue severity after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One classified diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub line: u32,
    pub column: u32,
    /// Rule id, [`FATAL_RULE`] for fatal issues, empty when the linter gave none.
    pub rule: String,
    pub message: String,
    pub fixable: bool,
}

impl Issue {
    /// Classify a linter message.
    pub fn from_message(message: &LintMessage) -> Self {
        let severity = if message.is_error() {
            Severity::Error
        } else {
            Severity::Warning
        };
        let rule = if message.fatal {
            FATAL_RULE.to_string()
        } else {
            message.rule_id.clone().unwrap_or_default()
        };

        Self {
            severity,
            line: message.line,
            column: message.column,
            rule,
            message: message.message.clone(),
            fixable: message.is_fixable(),
        }
    }
}

/// Fixable issue counts of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixCounts {
    pub errors: usize,
    pub warnings: usize,
}

/// Classified issues of one file that has at least one issue.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub warnings: Vec<Issue>,
    pub errors: Vec<Issue>,
    /// `Some` only when the file has at least one fixable issue.
    pub fixable: Option<FixCounts>,
}

impl FileReport {
    /// All issues, warnings first.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.warnings.iter().chain(self.errors.iter())
    }

    pub fn issue_count(&self) -> usize {
        self.warnings.len() + self.errors.len()
    }

    pub fn is_fixable(&self) -> bool {
        self.fixable.is_some()
    }
}

/// A file's entry in a summary: `(path, warnings, errors)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTally {
    pub path: PathBuf,
    pub warnings: usize,
    pub errors: usize,
}

/// Totals restricted to files with at least one fixable issue.
#[derive(Debug, Clone, Default)]
pub struct FixableSubset {
    pub warnings: usize,
    pub errors: usize,
    pub files: Vec<FileTally>,
}

impl FixableSubset {
    pub fn issue_count(&self) -> usize {
        self.warnings + self.errors
    }
}

/// Run-wide totals.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub warnings: usize,
    pub errors: usize,
    /// Every file with at least one issue, in processing order.
    pub files: Vec<FileTally>,
    pub fixable: FixableSubset,
    /// Set once any file produced output; drives the leading blank line.
    pub has_issues: bool,
}

impl RunReport {
    pub fn issue_count(&self) -> usize {
        self.warnings + self.errors
    }
}

/// Output of [`aggregate`].
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub report: RunReport,
    /// One report per file with issues, in processing order.
    pub files: Vec<FileReport>,
}

/// Classify and tally a run's results.
///
/// Totals come from the records' precomputed counts rather than from the
/// message lists. Fixable counts are clamped to the matching plain counts so
/// a fixable total can never exceed its total.
pub fn aggregate(results: &[LintResult]) -> Aggregate {
    let mut out = Aggregate::default();

    for result in results {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();
        for message in &result.messages {
            let issue = Issue::from_message(message);
            match issue.severity {
                Severity::Warning => warnings.push(issue),
                Severity::Error => errors.push(issue),
            }
        }

        if warnings.is_empty() && errors.is_empty() {
            debug!("No issues in {}", result.file_path.display());
            continue;
        }

        let report = &mut out.report;
        report.errors += result.error_count;
        report.warnings += result.warning_count;
        report.files.push(FileTally {
            path: result.file_path.clone(),
            warnings: result.warning_count,
            errors: result.error_count,
        });

        let fix = FixCounts {
            errors: result.fixable_error_count.min(result.error_count),
            warnings: result.fixable_warning_count.min(result.warning_count),
        };
        report.fixable.errors += fix.errors;
        report.fixable.warnings += fix.warnings;

        let fixable = if fix.errors > 0 || fix.warnings > 0 {
            report.fixable.files.push(FileTally {
                path: result.file_path.clone(),
                warnings: fix.warnings,
                errors: fix.errors,
            });
            Some(fix)
        } else {
            None
        };

        report.has_issues = true;

        out.files.push(FileReport {
            path: result.file_path.clone(),
            warnings,
            errors,
            fixable,
        });
    }

    debug!(
        "Aggregated {} files: {} errors, {} warnings ({} fixable)",
        out.files.len(),
        out.report.errors,
        out.report.warnings,
        out.report.fixable.issue_count()
    );

    out
}
