//! Text rendering of aggregated lint results.
//!
//! - [`file`] renders one block per file with issues
//! - [`summary`] renders the Total and Fixable directory trees

pub mod file;
pub mod summary;

pub use file::render_file;
pub use summary::{build_tree, render_summaries, render_summary, SummaryKind};

use crate::ui::Theme;
use std::path::{Component, Path, PathBuf};

/// Shared inputs of every render call.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub cwd: &'a Path,
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    pub fn new(cwd: &'a Path, theme: &'a Theme) -> Self {
        Self { cwd, theme }
    }
}

/// `word` for a count of one, `words` otherwise.
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// `path` relative to `cwd`, `../` included. Paths that cannot be related
/// (e.g. a relative path against an absolute cwd) are returned unchanged.
pub fn relative_path(cwd: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, cwd).unwrap_or_else(|| path.to_path_buf())
}

/// Join path components with `/` regardless of platform.
pub fn display_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_boundaries() {
        assert_eq!(pluralize("issue", 0), "issues");
        assert_eq!(pluralize("issue", 1), "issue");
        assert_eq!(pluralize("warning", 2), "warnings");
        assert_eq!(pluralize("error", 1), "error");
        assert_eq!(pluralize("file", 11), "files");
    }

    #[test]
    fn relative_path_inside_cwd() {
        let rel = relative_path(Path::new("/repo"), Path::new("/repo/src/a.js"));
        assert_eq!(rel, PathBuf::from("src/a.js"));
    }

    #[test]
    fn relative_path_outside_cwd() {
        let rel = relative_path(Path::new("/repo/app"), Path::new("/repo/lib/a.js"));
        assert_eq!(display_path(&rel), "../lib/a.js");
    }

    #[test]
    fn relative_path_of_cwd_is_empty() {
        let rel = relative_path(Path::new("/repo"), Path::new("/repo"));
        assert_eq!(display_path(&rel), "");
    }

    #[test]
    fn display_path_uses_forward_slashes() {
        assert_eq!(display_path(Path::new("a/b/c.js")), "a/b/c.js");
    }

    #[test]
    fn display_path_keeps_single_root_slash() {
        assert_eq!(display_path(Path::new("/repo/a.js")), "/repo/a.js");
        assert_eq!(display_path(Path::new("/")), "/");
    }

    #[test]
    fn unrelatable_path_is_returned_as_is() {
        let rel = relative_path(Path::new("/repo"), Path::new("src/a.js"));
        assert_eq!(rel, PathBuf::from("src/a.js"));
    }
}
