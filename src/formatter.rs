//! The formatting entry point.
//!
//! [`Formatter::format`] aggregates the results, renders one block per file
//! with issues, then the summaries, and falls back to a fixed message when
//! there is nothing to show.

use crate::aggregate::aggregate;
use crate::input::LintResult;
use crate::options::FormatOptions;
use crate::render::{render_file, render_summaries, RenderContext};
use crate::ui::{Segment, Theme, Tone};
use std::io::Write;
use tracing::debug;

/// Message printed when no file has issues.
pub const NO_ISSUES_MESSAGE: &str = "ESLint found no issues!";

/// Formats lint results for terminal display.
#[derive(Debug, Clone)]
pub struct Formatter {
    options: FormatOptions,
    theme: Theme,
}

impl Formatter {
    /// Create a formatter. The theme follows `options.use_color`.
    pub fn new(options: FormatOptions) -> Self {
        let theme = Theme::for_color(options.use_color);
        Self { options, theme }
    }

    /// Format a run's results.
    ///
    /// Layout: a leading blank line when any file has issues, the per-file
    /// blocks separated by blank lines, then the summaries unless disabled.
    pub fn format(&self, results: &[LintResult]) -> String {
        let aggregate = aggregate(results);
        let ctx = RenderContext::new(&self.options.cwd, &self.theme);

        let blocks: Vec<String> = aggregate
            .files
            .iter()
            .map(|file| render_file(file, &ctx))
            .collect();

        let mut parts = Vec::with_capacity(3);
        if aggregate.report.has_issues {
            parts.push(String::new());
        }
        parts.push(blocks.join("\n"));
        if self.options.show_summary {
            parts.push(render_summaries(&aggregate.report, &ctx));
        } else {
            debug!("Summary sections disabled");
        }

        let output = parts.join("\n");
        if output.trim().is_empty() {
            let message = Segment::new(NO_ISSUES_MESSAGE, Tone::Success);
            return format!("\n{}\n", self.theme.paint(&message));
        }
        output
    }

    /// Format a run's results into `writer`.
    pub fn write_to<W: Write>(
        &self,
        results: &[LintResult],
        writer: &mut W,
    ) -> std::io::Result<()> {
        writer.write_all(self.format(results).as_bytes())
    }
}

/// Format `results` with `options`.
pub fn format(results: &[LintResult], options: &FormatOptions) -> String {
    Formatter::new(options.clone()).format(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LintMessage;

    fn options() -> FormatOptions {
        FormatOptions::new("/repo")
    }

    fn results() -> Vec<LintResult> {
        vec![
            LintResult::from_messages(
                "/repo/a.js",
                vec![LintMessage::warning("no-console", 1, 1, "Unexpected console statement.")],
            ),
            LintResult::from_messages(
                "/repo/sub/b.js",
                vec![LintMessage::error("semi", 2, 3, "Missing semicolon.").fixable()],
            ),
        ]
    }

    #[test]
    fn no_results_gives_success_message() {
        let out = format(&[], &options());
        assert_eq!(out, format!("\n{NO_ISSUES_MESSAGE}\n"));
    }

    #[test]
    fn clean_files_give_success_message() {
        let clean = vec![LintResult::from_messages("/repo/a.js", vec![])];
        assert_eq!(format(&clean, &options()), format!("\n{NO_ISSUES_MESSAGE}\n"));
        assert_eq!(
            format(&clean, &options().with_summary(false)),
            format!("\n{NO_ISSUES_MESSAGE}\n")
        );
    }

    #[test]
    fn output_starts_with_blank_line() {
        let out = format(&results(), &options());
        assert!(out.starts_with("\n[1:0]a.js\n"));
    }

    #[test]
    fn blocks_then_total_then_fixable() {
        let out = format(&results(), &options());

        let a = out.find("[1:0]a.js").unwrap();
        let b = out.find("[0:1]sub/b.js").unwrap();
        let total = out.find("  Total:").unwrap();
        let fixable = out.find("  Fixable:").unwrap();
        assert!(a < b && b < total && total < fixable);
    }

    #[test]
    fn disabled_summary_keeps_file_blocks() {
        let out = format(&results(), &options().with_summary(false));

        assert!(out.contains("[1:0]a.js"));
        assert!(out.contains("[0:1]sub/b.js"));
        assert!(!out.contains("Total:"));
        assert!(!out.contains("Fixable:"));
        assert!(!out.contains("Summary"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let formatter = Formatter::new(options().with_color(true));
        assert_eq!(formatter.format(&results()), formatter.format(&results()));
    }

    #[test]
    fn write_to_matches_format() {
        let formatter = Formatter::new(options());
        let mut buf = Vec::new();
        formatter.write_to(&results(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), formatter.format(&results()));
    }

    #[test]
    fn color_option_selects_theme() {
        let plain = format(&results(), &options());
        let colored = format(&results(), &options().with_color(true));

        assert!(!plain.contains("\u{1b}["));
        assert!(colored.contains("\u{1b}["));
        assert_eq!(console::strip_ansi_codes(&colored), plain);
    }
}
