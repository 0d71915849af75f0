//! Progress reporting for long scans.
//!
//! The pipeline talks to a [`Reporter`] handle instead of printing directly,
//! so `--quiet` is just a different handle.

use std::io::{self, Write};
use std::time::Duration;

/// Width of the in-place status line.
const STATUS_WIDTH: usize = 76;

pub trait Reporter {
    /// A line that stays on screen.
    fn message(&mut self, text: &str);
    /// A transient line, overwritten by the next status or message.
    fn status(&mut self, text: &str);
}

/// Writes to stdout, redrawing the status line in place with `\r`.
pub struct TerminalReporter<W: Write = io::Stdout> {
    out: W,
    status_shown: bool,
}

impl TerminalReporter {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            status_shown: false,
        }
    }

    fn clear_status(&mut self) {
        if self.status_shown {
            let _ = write!(self.out, "\r{}\r", " ".repeat(STATUS_WIDTH));
            self.status_shown = false;
        }
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn message(&mut self, text: &str) {
        self.clear_status();
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }

    fn status(&mut self, text: &str) {
        self.clear_status();
        let _ = write!(self.out, "{}\r", fit_status(text));
        let _ = self.out.flush();
        self.status_shown = true;
    }
}

/// Swallows everything.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn message(&mut self, _text: &str) {}
    fn status(&mut self, _text: &str) {}
}

/// Cut `text` so it fits the status line, marking the cut with `...`.
pub fn fit_status(text: &str) -> String {
    if text.chars().count() < STATUS_WIDTH {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(STATUS_WIDTH - 3).collect();
    cut.push_str("...");
    cut
}

/// `mm:ss`, both parts zero-padded; minutes keep growing past 59.
pub fn clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Time left for `total - done` items at the average pace so far.
pub fn estimate_remaining(elapsed: Duration, done: usize, total: usize) -> Duration {
    if done == 0 {
        return Duration::ZERO;
    }
    let remaining = total.saturating_sub(done) as u32;
    elapsed / done as u32 * remaining
}

/// `[ 42 %] [etr: 01:05] file.mp3`
pub fn file_status(done: usize, total: usize, eta: Duration, name: &str) -> String {
    let percent = if total == 0 { 100 } else { done * 100 / total };
    format!("[ {percent} %] [etr: {}] {name}", clock(eta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_both_parts() {
        assert_eq!(clock(Duration::from_secs(0)), "00:00");
        assert_eq!(clock(Duration::from_secs(65)), "01:05");
        assert_eq!(clock(Duration::from_secs(6001)), "100:01");
    }

    #[test]
    fn estimate_remaining_uses_average_pace() {
        assert_eq!(
            estimate_remaining(Duration::from_secs(10), 5, 20),
            Duration::from_secs(30)
        );
        assert_eq!(estimate_remaining(Duration::from_secs(10), 0, 20), Duration::ZERO);
        assert_eq!(estimate_remaining(Duration::from_secs(10), 20, 20), Duration::ZERO);
    }

    #[test]
    fn file_status_matches_the_classic_layout() {
        assert_eq!(
            file_status(21, 50, Duration::from_secs(65), "song.mp3"),
            "[ 42 %] [etr: 01:05] song.mp3"
        );
    }

    #[test]
    fn fit_status_truncates_long_lines() {
        let long = "x".repeat(100);
        let fitted = fit_status(&long);
        assert_eq!(fitted.chars().count(), STATUS_WIDTH);
        assert!(fitted.ends_with("..."));
        assert_eq!(fit_status("short"), "short");
    }

    #[test]
    fn terminal_reporter_clears_status_before_messages() {
        let mut reporter = TerminalReporter::new(Vec::new());
        reporter.status("working");
        reporter.message("done");

        let out = String::from_utf8(reporter.out).unwrap();
        let blank = " ".repeat(STATUS_WIDTH);
        assert_eq!(out, format!("working\r\r{blank}\rdone\n"));
    }
}
