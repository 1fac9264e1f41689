//! Directory inventory pipeline
//!
//! Enumerates every regular file under a root, fingerprints each one with
//! the digest engine, and merges the fingerprints with filesystem metadata
//! into one immutable record per file.

pub mod record;
pub mod scanner;
pub mod walker;

pub use record::FileRecord;
pub use scanner::{process_file, ScanSummary, Scanner};
pub use walker::{Walker, WalkerConfig};
