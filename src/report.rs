use std::fmt::Display;
use std::io::{self, Write};

const ANSI_GREEN: &str = "\x1b[92m";
const ANSI_RED: &str = "\x1b[91m";
const ANSI_YELLOW: &str = "\x1b[93m";
const ANSI_BLUE: &str = "\x1b[94m";

const ANSI_RESET: &str = "\x1b[0m";

/// Colour-coded, human-readable console report.
pub struct Report<W> {
    out: W,
    color: bool,
}

impl Report<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Report::new(io::stdout(), color)
    }
}

impl<W: Write> Report<W> {
    pub fn new(out: W, color: bool) -> Self {
        Report { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, text: impl Display) {
        self.colored(ANSI_BLUE, text);
    }

    pub fn success(&mut self, text: impl Display) {
        self.colored(ANSI_GREEN, format_args!("✓ {text}"));
    }

    pub fn failure(&mut self, text: impl Display) {
        self.colored(ANSI_RED, format_args!("✗ {text}"));
    }

    pub fn warning(&mut self, text: impl Display) {
        self.colored(ANSI_YELLOW, format_args!("⚠ {text}"));
    }

    /// An indented, uncoloured detail line under the previous status.
    pub fn detail(&mut self, label: &str, value: impl Display) {
        self.line(format_args!("  {label}: {value}"));
    }

    pub fn line(&mut self, text: impl Display) {
        // a closed stdout is not worth failing a health check over
        _ = writeln!(self.out, "{text}");
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    /// Final line of a successful run, preceded by a blank line.
    pub fn passed(&mut self) {
        self.blank();
        self.colored(ANSI_GREEN, "All checks passed!");
    }

    fn colored(&mut self, code: &str, text: impl Display) {
        if self.color {
            self.line(format_args!("{code}{text}{ANSI_RESET}"));
        } else {
            self.line(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(color: bool, f: impl FnOnce(&mut Report<Vec<u8>>)) -> String {
        let mut report = Report::new(Vec::new(), color);
        f(&mut report);
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let out = render(false, |r| {
            r.success("Server is healthy");
            r.detail("Timestamp", "2024-01-01T00:00:00Z");
        });
        assert_eq!(out, "✓ Server is healthy\n  Timestamp: 2024-01-01T00:00:00Z\n");
    }

    #[test]
    fn colored_output_wraps_line() {
        let out = render(true, |r| r.failure("Connection error"));
        assert_eq!(out, "\x1b[91m✗ Connection error\x1b[0m\n");
    }

    #[test]
    fn passed_is_preceded_by_blank_line() {
        let out = render(false, |r| r.passed());
        assert_eq!(out, "\nAll checks passed!\n");
    }
}
