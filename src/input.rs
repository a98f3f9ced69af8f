//! Lint result records as produced by the linting engine.
//!
//! The shapes here follow ESLint's `--format json` output, so a results file
//! can be decoded directly with [`parse_results`]. Every field except the
//! file path is optional on the wire and falls back to the most conservative
//! value: zero counts, not fatal, not fixable.

use crate::error::{LintreeError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Numeric severity code the linter uses for errors.
pub const SEVERITY_ERROR: u8 = 2;

/// Numeric severity code the linter uses for warnings.
pub const SEVERITY_WARNING: u8 = 1;

/// Diagnostics reported for a single file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// Absolute path of the linted file.
    pub file_path: PathBuf,
    /// Diagnostics in the order the linter reported them.
    #[serde(default)]
    pub messages: Vec<LintMessage>,
    #[serde(default)]
    pub error_count: usize,
    #[serde(default)]
    pub warning_count: usize,
    #[serde(default)]
    pub fixable_error_count: usize,
    #[serde(default)]
    pub fixable_warning_count: usize,
}

/// A single diagnostic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    /// Rule that produced the message; absent for fatal parse failures.
    #[serde(default)]
    pub rule_id: Option<String>,
    /// 1 for warnings, 2 for errors.
    #[serde(default)]
    pub severity: u8,
    #[serde(default)]
    pub fatal: bool,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
    #[serde(default)]
    pub message: String,
    /// Autofix payload. Only its presence matters here.
    #[serde(default)]
    pub fix: Option<serde_json::Value>,
}

impl LintMessage {
    fn new(severity: u8, rule_id: &str, line: u32, column: u32, message: &str) -> Self {
        Self {
            rule_id: Some(rule_id.to_string()),
            severity,
            fatal: false,
            line,
            column,
            message: message.to_string(),
            fix: None,
        }
    }

    /// Create a warning-level message.
    pub fn warning(rule_id: &str, line: u32, column: u32, message: &str) -> Self {
        Self::new(SEVERITY_WARNING, rule_id, line, column, message)
    }

    /// Create an error-level message.
    pub fn error(rule_id: &str, line: u32, column: u32, message: &str) -> Self {
        Self::new(SEVERITY_ERROR, rule_id, line, column, message)
    }

    /// Create a fatal parse failure. These carry no rule id.
    pub fn fatal(line: u32, column: u32, message: &str) -> Self {
        Self {
            rule_id: None,
            fatal: true,
            ..Self::new(SEVERITY_ERROR, "", line, column, message)
        }
    }

    /// Mark the message as autofixable.
    pub fn fixable(mut self) -> Self {
        self.fix = Some(serde_json::json!({ "range": [0, 0], "text": "" }));
        self
    }

    /// Whether the message counts as an error.
    pub fn is_error(&self) -> bool {
        self.severity == SEVERITY_ERROR || self.fatal
    }

    /// Whether the linter offered an autofix.
    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

impl LintResult {
    /// Build a record whose counts are derived from `messages`, the same
    /// way the linter fills them in.
    pub fn from_messages(file_path: impl Into<PathBuf>, messages: Vec<LintMessage>) -> Self {
        let mut result = Self {
            file_path: file_path.into(),
            messages: Vec::new(),
            error_count: 0,
            warning_count: 0,
            fixable_error_count: 0,
            fixable_warning_count: 0,
        };
        for message in &messages {
            match (message.is_error(), message.is_fixable()) {
                (true, true) => {
                    result.error_count += 1;
                    result.fixable_error_count += 1;
                }
                (true, false) => result.error_count += 1,
                (false, true) => {
                    result.warning_count += 1;
                    result.fixable_warning_count += 1;
                }
                (false, false) => result.warning_count += 1,
            }
        }
        result.messages = messages;
        result
    }
}

/// Decode a JSON array of result records.
///
/// `source_name` only shows up in the error message.
pub fn parse_results(json: &str, source_name: &str) -> Result<Vec<LintResult>> {
    serde_json::from_str(json).map_err(|e| LintreeError::Decode {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}
