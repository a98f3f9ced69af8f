//! Visual theme and styling.
//!
//! Text is carried around as [`Segment`]s: plain text plus a [`Tone`] tag.
//! Layout code measures the plain text; the [`Theme`] turns tones into
//! terminal styles only when the final string is assembled.

use console::Style;

/// What a piece of text means, independent of how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Unstyled text.
    Plain,
    /// Warning glyph.
    Warning,
    /// Error glyph.
    Error,
    /// `line:column` positions.
    Position,
    /// Something the linter can fix: rule ids, fixable file names and counts.
    Fixable,
    /// File path in a per-file header.
    Path,
    /// File path in a per-file header when the file has fixable issues.
    FixablePath,
    /// Emphasised text such as file names and file counts.
    Strong,
    /// Directory labels in summary trees.
    Directory,
    /// Issue count of the totals summary.
    Total,
    /// Section headings.
    Heading,
    /// The "no issues" message.
    Success,
}

/// A run of text with a single tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

impl Segment {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    /// Display width of the unstyled text.
    pub fn width(&self) -> usize {
        console::measure_text_width(&self.text)
    }
}

/// lintree's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for warning glyphs (yellow).
    pub warning: Style,
    /// Style for error glyphs (red).
    pub error: Style,
    /// Style for positions (gray).
    pub position: Style,
    /// Style for fixable items (green bold).
    pub fixable: Style,
    /// Style for file paths (underlined bold).
    pub path: Style,
    /// Style for fixable file paths (green underlined bold).
    pub fixable_path: Style,
    /// Style for emphasised text (bold).
    pub strong: Style,
    /// Style for directory labels (dim).
    pub directory: Style,
    /// Style for the total issue count (magenta bold).
    pub total: Style,
    /// Style for headings (underlined bold).
    pub heading: Style,
    /// Style for success messages (green bold).
    pub success: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    ///
    /// Styling is forced on: whether colors are wanted is decided by the
    /// caller, not by probing the terminal here.
    pub fn new() -> Self {
        Self {
            warning: Style::new().yellow().force_styling(true),
            error: Style::new().red().force_styling(true),
            position: Style::new().black().bright().force_styling(true),
            fixable: Style::new().green().bold().force_styling(true),
            path: Style::new().underlined().bold().force_styling(true),
            fixable_path: Style::new().green().underlined().bold().force_styling(true),
            strong: Style::new().bold().force_styling(true),
            directory: Style::new().dim().force_styling(true),
            total: Style::new().magenta().bold().force_styling(true),
            heading: Style::new().underlined().bold().force_styling(true),
            success: Style::new().green().bold().force_styling(true),
        }
    }

    /// Create a theme without colors.
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            position: Style::new(),
            fixable: Style::new(),
            path: Style::new(),
            fixable_path: Style::new(),
            strong: Style::new(),
            directory: Style::new(),
            total: Style::new(),
            heading: Style::new(),
            success: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    fn style(&self, tone: Tone) -> Option<&Style> {
        Some(match tone {
            Tone::Plain => return None,
            Tone::Warning => &self.warning,
            Tone::Error => &self.error,
            Tone::Position => &self.position,
            Tone::Fixable => &self.fixable,
            Tone::Path => &self.path,
            Tone::FixablePath => &self.fixable_path,
            Tone::Strong => &self.strong,
            Tone::Directory => &self.directory,
            Tone::Total => &self.total,
            Tone::Heading => &self.heading,
            Tone::Success => &self.success,
        })
    }

    /// Render one segment.
    pub fn paint(&self, segment: &Segment) -> String {
        match self.style(segment.tone) {
            Some(style) if !segment.text.is_empty() => {
                style.apply_to(&segment.text).to_string()
            }
            _ => segment.text.clone(),
        }
    }

    /// Render a sequence of segments back to back.
    pub fn paint_all(&self, segments: &[Segment]) -> String {
        segments.iter().map(|s| self.paint(s)).collect()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
