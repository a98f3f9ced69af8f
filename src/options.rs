//! Formatting options.
//!
//! Everything the formatter would otherwise pick up from the process (the
//! working directory, the summary toggle, color support) is passed in
//! explicitly through [`FormatOptions`]. [`FormatOptions::from_env`] is the
//! one place that reads the environment.

use crate::error::{LintreeError, Result};
use crate::ui::should_use_colors;
use std::path::{Component, Path, PathBuf};

/// Environment variable that toggles the summary sections.
pub const SUMMARY_ENV_VAR: &str = "ESLINT_CFS_VERBOSE";

/// Options for a single formatting call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Directory paths are shown relative to.
    pub cwd: PathBuf,
    /// Whether to append the Total/Fixable summaries.
    pub show_summary: bool,
    /// Whether to emit ANSI styling.
    pub use_color: bool,
}

impl FormatOptions {
    /// Options with summaries on and colors off.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            show_summary: true,
            use_color: false,
        }
    }

    /// Show paths relative to `cwd`. A relative `cwd` is resolved against
    /// the current one.
    pub fn with_cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = resolve_path(&self.cwd, cwd.as_ref());
        self
    }

    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Options from the current process: working directory,
    /// [`SUMMARY_ENV_VAR`], `NO_COLOR` and whether stdout is a terminal.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| LintreeError::WorkingDirectory {
            message: e.to_string(),
        })?;
        let toggle = std::env::var(SUMMARY_ENV_VAR).ok();

        Ok(Self::new(cwd)
            .with_summary(summary_enabled(toggle.as_deref()))
            .with_color(should_use_colors()))
    }
}

/// Join `path` onto `base`, folding `.` and `..` without touching the
/// filesystem. An absolute `path` replaces `base`.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Interpret the summary toggle.
///
/// Unset, empty or `"true"` shows the summaries; any other value hides them.
pub fn summary_enabled(value: Option<&str>) -> bool {
    matches!(value, None | Some("") | Some("true"))
}
