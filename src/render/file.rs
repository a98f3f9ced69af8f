//! Per-file issue blocks.
//!
//! ```text
//! [1:2]src/app.js
//!
//!   ⚠   3:7   no-unused-vars  'x' is assigned a value but never used.
//!   ❌  4:12  semi            Missing semicolon.
//! ```

use super::{display_path, relative_path, RenderContext};
use crate::aggregate::{FileReport, Issue, Severity};
use crate::ui::{Segment, Table, Tone};

fn glyph(severity: Severity) -> Segment {
    match severity {
        Severity::Warning => Segment::new("⚠", Tone::Warning),
        Severity::Error => Segment::new("❌", Tone::Error),
    }
}

fn issue_row(issue: &Issue) -> Vec<Segment> {
    let rule_tone = if issue.fixable {
        Tone::Fixable
    } else {
        Tone::Plain
    };

    vec![
        Segment::plain(""),
        glyph(issue.severity),
        Segment::new(format!("{}:{}", issue.line, issue.column), Tone::Position),
        Segment::new(issue.rule.clone(), rule_tone),
        Segment::plain(issue.message.clone()),
    ]
}

/// Render one file: a `[warnings:errors]path` header, a blank line, then the
/// issue table (warnings first). Ends with a newline.
pub fn render_file(report: &FileReport, ctx: &RenderContext<'_>) -> String {
    let path = display_path(&relative_path(ctx.cwd, &report.path));
    let path_tone = if report.is_fixable() {
        Tone::FixablePath
    } else {
        Tone::Path
    };

    let mut table = Table::new();
    for issue in report.issues() {
        table.add_row(issue_row(issue));
    }

    format!(
        "[{}:{}]{}\n\n{}\n",
        report.warnings.len(),
        report.errors.len(),
        ctx.theme.paint(&Segment::new(path, path_tone)),
        table.render(ctx.theme)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::FixCounts;
    use crate::ui::Theme;
    use std::path::{Path, PathBuf};

    fn issue(severity: Severity, line: u32, column: u32, rule: &str, fixable: bool) -> Issue {
        Issue {
            severity,
            line,
            column,
            rule: rule.to_string(),
            message: format!("{rule} message"),
            fixable,
        }
    }

    fn report() -> FileReport {
        FileReport {
            path: PathBuf::from("/repo/src/app.js"),
            warnings: vec![issue(Severity::Warning, 3, 7, "no-unused-vars", false)],
            errors: vec![
                issue(Severity::Error, 4, 12, "semi", true),
                issue(Severity::Error, 10, 1, "fatal", false),
            ],
            fixable: Some(FixCounts {
                errors: 1,
                warnings: 0,
            }),
        }
    }

    #[test]
    fn renders_header_and_aligned_rows() {
        let theme = Theme::plain();
        let ctx = RenderContext::new(Path::new("/repo"), &theme);

        let expected = "\
[1:2]src/app.js

  ⚠   3:7   no-unused-vars  no-unused-vars message
  ❌  4:12  semi            semi message
  ❌  10:1  fatal           fatal message
";
        assert_eq!(render_file(&report(), &ctx), expected);
    }

    #[test]
    fn warnings_come_before_errors() {
        let theme = Theme::plain();
        let ctx = RenderContext::new(Path::new("/repo"), &theme);
        let out = render_file(&report(), &ctx);

        let warn = out.find("no-unused-vars").unwrap();
        let err = out.find("semi").unwrap();
        assert!(warn < err);
    }

    #[test]
    fn fixable_file_path_is_highlighted() {
        let theme = Theme::new();
        let ctx = RenderContext::new(Path::new("/repo"), &theme);

        let fixable = render_file(&report(), &ctx);
        let mut plain_report = report();
        plain_report.fixable = None;
        let not_fixable = render_file(&plain_report, &ctx);

        let header = |s: &str| s.lines().next().unwrap().to_string();
        assert_ne!(header(&fixable), header(&not_fixable));
        assert_eq!(
            console::strip_ansi_codes(&header(&fixable)),
            console::strip_ansi_codes(&header(&not_fixable))
        );
    }

    #[test]
    fn fixable_rule_is_highlighted() {
        let theme = Theme::new();
        let ctx = RenderContext::new(Path::new("/repo"), &theme);
        let out = render_file(&report(), &ctx);

        let fixable_rule = theme.paint(&Segment::new("semi", Tone::Fixable));
        assert_ne!(fixable_rule, "semi");
        assert!(out.contains(&fixable_rule));

        let styled_plain_rule = theme.paint(&Segment::new("no-unused-vars", Tone::Fixable));
        assert!(!out.contains(&styled_plain_rule));
        assert!(out.contains("  no-unused-vars  "));
        assert!(out.contains("  fatal  "));
    }

    #[test]
    fn colored_output_keeps_plain_alignment() {
        let plain = Theme::plain();
        let colored = Theme::new();
        let cwd = Path::new("/repo");

        let a = render_file(&report(), &RenderContext::new(cwd, &plain));
        let b = render_file(&report(), &RenderContext::new(cwd, &colored));
        assert_eq!(console::strip_ansi_codes(&b), a);
    }

    #[test]
    fn path_outside_cwd_is_relative() {
        let theme = Theme::plain();
        let ctx = RenderContext::new(Path::new("/repo/packages/web"), &theme);
        let out = render_file(&report(), &ctx);
        assert!(out.starts_with("[1:2]../../src/app.js\n"));
    }
}
