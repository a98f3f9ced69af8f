//! Run summaries grouped into a directory tree.
//!
//! Files are grouped by their directory relative to the working directory.
//! Grouping is flat: `sub/` and `sub/deeper/` become sibling nodes under the
//! root, each holding only the files that live directly in it.

use super::{display_path, pluralize, relative_path, RenderContext};
use crate::aggregate::{FileTally, RunReport};
use crate::ui::{DirectoryNode, Segment, Tone};
use std::path::Path;
use tracing::debug;

/// Which summary is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    /// All issues of the run.
    Total,
    /// Only issues the linter can fix.
    Fixable,
}

impl SummaryKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Fixable => "Fixable",
        }
    }

    fn count_tone(self) -> Tone {
        match self {
            Self::Total => Tone::Total,
            Self::Fixable => Tone::Fixable,
        }
    }

    fn file_tone(self) -> Tone {
        match self {
            Self::Total => Tone::Strong,
            Self::Fixable => Tone::Fixable,
        }
    }
}

/// Group `files` into a tree rooted at `.`.
///
/// Files directly in `cwd` are root leaves. Every other file becomes a leaf
/// of a child node labelled with its relative directory, ending in `/`.
pub fn build_tree(kind: SummaryKind, files: &[FileTally], cwd: &Path) -> DirectoryNode {
    let mut root = DirectoryNode::root();

    for tally in files {
        let rel = relative_path(cwd, &tally.path);
        let name = rel
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display_path(&rel));
        let dir = rel.parent().map(display_path).unwrap_or_default();

        let leaf = vec![
            Segment::plain(format!("[{}:{}]", tally.warnings, tally.errors)),
            Segment::new(name, kind.file_tone()),
        ];

        let dir = dir.trim_start_matches('/');
        if dir.is_empty() {
            root.add_leaf(leaf);
        } else {
            let label = if dir.ends_with('/') {
                dir.to_string()
            } else {
                format!("{dir}/")
            };
            root.child(Segment::new(label, Tone::Directory)).add_leaf(leaf);
        }
    }

    root
}

/// Render one summary section: a header line and the directory tree.
///
/// Returns an empty string when `issue_total` is zero.
pub fn render_summary(
    kind: SummaryKind,
    errors: usize,
    warnings: usize,
    files: &[FileTally],
    file_count: usize,
    issue_total: usize,
    ctx: &RenderContext<'_>,
) -> String {
    if issue_total == 0 {
        return String::new();
    }

    let theme = ctx.theme;
    let issues = Segment::new(
        format!("{issue_total} {}", pluralize("issue", issue_total)),
        kind.count_tone(),
    );
    let file_total = Segment::new(
        format!("{file_count} {}", pluralize("file", file_count)),
        Tone::Strong,
    );
    let hint = match kind {
        SummaryKind::Total => String::new(),
        SummaryKind::Fixable => format!(
            " (use {} option)",
            theme.paint(&Segment::new("--fix", Tone::Fixable))
        ),
    };

    let header = format!(
        "  {}: {} ({} {}, {} {}) in {}.{}",
        kind.label(),
        theme.paint(&issues),
        warnings,
        pluralize("warning", warnings),
        errors,
        pluralize("error", errors),
        theme.paint(&file_total),
        hint
    );
    let tree = build_tree(kind, files, ctx.cwd).render(theme, "   ");

    format!("{header}\n{tree}\n")
}

/// Render the `Summary` heading followed by the Total section and, after a
/// blank line, the Fixable section. Empty when the run has no issues.
pub fn render_summaries(report: &RunReport, ctx: &RenderContext<'_>) -> String {
    let total = report.issue_count();
    let fixable = report.fixable.issue_count();
    if total == 0 && fixable == 0 {
        return String::new();
    }

    debug!("Rendering summaries: {total} total, {fixable} fixable");

    let mut out = ctx.theme.paint(&Segment::new("Summary", Tone::Heading));
    out.push('\n');
    out.push_str(&render_summary(
        SummaryKind::Total,
        report.errors,
        report.warnings,
        &report.files,
        report.files.len(),
        total,
        ctx,
    ));

    let fixable_section = render_summary(
        SummaryKind::Fixable,
        report.fixable.errors,
        report.fixable.warnings,
        &report.fixable.files,
        report.fixable.files.len(),
        fixable,
        ctx,
    );
    if !fixable_section.is_empty() {
        out.push('\n');
        out.push_str(&fixable_section);
    }

    out
}
