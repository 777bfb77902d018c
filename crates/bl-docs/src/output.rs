//! Terminal output.
//!
//! Status lines go to stderr so that `sample download` can stream the sample
//! itself to stdout. Report lines (the `routes` table) go to stdout.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    status: Term,
    report: Term,
    green: Style,
    yellow: Style,
    red: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            report: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            heading: Style::new().cyan().bold(),
        }
    }

    fn status_line(&self, style: Option<&Style>, msg: &str) {
        let line = style.map_or_else(|| msg.to_owned(), |s| s.apply_to(msg).to_string());
        let _ = self.status.write_line(&line);
    }

    pub(crate) fn info(&self, msg: &str) {
        self.status_line(None, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.status_line(Some(&self.green), msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.status_line(Some(&self.yellow), msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.status_line(Some(&self.red), msg);
    }

    /// Report line on stdout.
    pub(crate) fn line(&self, msg: &str) {
        let _ = self.report.write_line(msg);
    }

    /// Report heading on stdout.
    pub(crate) fn heading(&self, msg: &str) {
        self.line(&self.heading.apply_to(msg).to_string());
    }

    /// Marker for a navigation link that reaches its page.
    pub(crate) fn reachable(&self) -> String {
        self.green.apply_to("✓").to_string()
    }

    /// Marker for a navigation link that shows the not-found page.
    pub(crate) fn unreachable(&self) -> String {
        self.red.apply_to("✗").to_string()
    }
}
