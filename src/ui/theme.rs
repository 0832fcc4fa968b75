//! Visual theme and styling.

use console::Style;

/// Colours used for check results and station information.
#[derive(Debug, Clone)]
pub struct MssTheme {
    /// Passed checks (green).
    pub success: Style,
    /// Warnings (orange).
    pub warning: Style,
    /// Failed checks and errors (red bold).
    pub error: Style,
    /// Spinner and informational elements (cyan).
    pub info: Style,
    /// Raw station output (dim).
    pub dim: Style,
    /// Highlighted text (bold).
    pub highlight: Style,
    /// Headers (cyan bold).
    pub header: Style,
    /// Key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for MssTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MssTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
        }
    }

    /// Pick [`MssTheme::new`] or [`MssTheme::plain`] for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◉"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a `key: value` row.
    pub fn format_field(&self, key: &str, value: &str) -> String {
        format!("{} {}", self.key.apply_to(format!("{}:", key)), value)
    }

    /// Format an indented line of raw output.
    pub fn format_detail(&self, line: &str) -> String {
        format!("    {}", self.dim.apply_to(line))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
