//! Scan progress reporting.
//!
//! Purely cosmetic: reporters are told once per file how far along the
//! scan is, and nothing about a reporter can affect the records.

use owo_colors::OwoColorize;
use std::io::Write;

const BAR_WIDTH: usize = 40;

/// Notified once per processed file with (done, total).
pub trait ProgressReporter {
    fn file_done(&mut self, done: usize, total: usize);

    /// Called after a successful run so terminal reporters can end the
    /// redraw line.
    fn finish(&mut self) {}
}

/// Reporter that swallows everything. Used by tests and `--quiet`.
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn file_done(&mut self, _done: usize, _total: usize) {}
}

/// Terminal reporter: percentage bar redrawn in place on stderr.
pub struct TerminalProgress {
    out: std::io::Stderr,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self {
            out: std::io::stderr(),
        }
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TerminalProgress {
    fn file_done(&mut self, done: usize, total: usize) {
        let line = render_bar(done, total);
        // Cosmetic output: a write failure here must not abort the scan.
        let _ = write!(self.out, "\r{}", line.green());
        let _ = self.out.flush();
    }

    fn finish(&mut self) {
        let _ = writeln!(self.out);
    }
}

/// Render the textual progress line for (done, total).
fn render_bar(done: usize, total: usize) -> String {
    let percent = if total == 0 {
        100
    } else {
        done * 100 / total
    };
    let filled = if total == 0 {
        BAR_WIDTH
    } else {
        BAR_WIDTH * done / total
    };
    format!(
        "Processing files [{}{}] {}/{} ({}%)",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        done,
        total,
        percent
    )
}
