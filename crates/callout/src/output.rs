//! Terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Diagnostics go to stderr; rendered HTML and listings go to stdout.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Write raw text to stdout.
    pub(crate) fn write(&self, text: &str) -> std::io::Result<()> {
        self.out.write_str(text)?;
        self.out.flush()
    }

    /// Write a line to stdout with the first column highlighted (cyan bold).
    pub(crate) fn row(&self, key: &str, rest: &str) -> std::io::Result<()> {
        self.out
            .write_line(&format!("{} {rest}", self.cyan_bold.apply_to(key)))
    }

    /// Print an error message (red) to stderr.
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }
}
