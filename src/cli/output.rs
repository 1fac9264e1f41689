//! CLI output: user-facing error and summary rendering.

use crate::error::FixityError;
use crate::scan::ScanSummary;
use owo_colors::OwoColorize;
use std::path::Path;

/// Map an error to the diagnostic the operator sees.
///
/// Descriptive, names the offending path where one applies, and exposes no
/// internal diagnostics or stack traces.
pub fn map_error(err: &FixityError) -> String {
    match err {
        FixityError::InvalidRoot(path) => format!(
            "Error: {} is not an accessible directory. Check the path and try again.",
            path.display()
        ),
        FixityError::Io { path, source } => {
            format!("Error reading {}: {}", path.display(), source)
        }
        FixityError::SizeChanged { path, .. } => format!(
            "Error: {} changed while it was being hashed. Re-run once the directory is quiescent.",
            path.display()
        ),
        FixityError::Output { path, source } => {
            format!("Error writing manifest {}: {}", path.display(), source)
        }
        FixityError::Config(msg) => format!("Error: {}", msg),
    }
}

/// Completion message after a successful run.
pub fn format_summary(summary: &ScanSummary, manifest_path: &Path) -> String {
    format!(
        "{} {} file(s), {} byte(s) inventoried.\nManifest written to {}",
        "Done:".green().bold(),
        summary.files,
        summary.bytes,
        manifest_path.display()
    )
}
