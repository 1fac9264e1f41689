//! Scan orchestration: walk, digest, build, emit.

use crate::config::ScanConfig;
use crate::digest;
use crate::error::FixityError;
use crate::manifest::RecordSink;
use crate::progress::ProgressReporter;
use crate::scan::record::FileRecord;
use crate::scan::walker::{Walker, WalkerConfig};
use std::path::Path;
use tracing::{debug, info};

/// Summary of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of records emitted.
    pub files: usize,
    /// Total bytes digested across all files.
    pub bytes: u64,
}

/// Digest one file and assemble its manifest record.
///
/// Both digest passes run first; metadata is fetched afterwards and
/// independently. The record's size comes from the digest passes, so it is
/// exactly the byte count the fingerprints cover.
pub fn process_file(path: &Path) -> Result<FileRecord, FixityError> {
    let digests = digest::compute_digests(path)?;
    FileRecord::build(path, digests)
}

/// Drives one scan: enumerates files under the configured root and feeds
/// one finished [`FileRecord`] per file to a caller-supplied sink.
///
/// Files are processed strictly one at a time; the first error aborts the
/// run with nothing further emitted.
pub struct Scanner {
    walker: Walker,
}

impl Scanner {
    /// Build a scanner from an explicit configuration.
    pub fn new(config: &ScanConfig) -> Self {
        // Exclude both the finished manifest (a stale copy from a previous
        // run) and the in-progress temporary file from the walk.
        let walker_config = WalkerConfig {
            follow_symlinks: config.follow_symlinks,
            exclude_root_names: vec![
                config.manifest_name.clone().into(),
                crate::manifest::temp_name(&config.manifest_name).into(),
            ],
        };
        Self {
            walker: Walker::with_config(config.root.clone(), walker_config),
        }
    }

    /// Enumerate the file paths this scan will cover, in traversal order.
    pub fn file_paths(&self) -> Result<Vec<std::path::PathBuf>, FixityError> {
        self.walker.file_paths()
    }

    /// Run the scan, handing each record to `sink` as it is built.
    ///
    /// `progress` is notified once per file with (done, total); it is
    /// cosmetic and never affects the records.
    pub fn run(
        &self,
        sink: &mut dyn RecordSink,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ScanSummary, FixityError> {
        let paths = self.walker.file_paths()?;
        let total = paths.len();
        info!(root = %self.walker.root().display(), files = total, "scan started");

        let mut bytes = 0u64;
        for (done, path) in paths.iter().enumerate() {
            let record = process_file(path)?;
            debug!(path = %record.path, sha1 = %record.digest_primary, "file digested");
            bytes += record.size;
            sink.write_record(&record)?;
            progress.file_done(done + 1, total);
        }

        info!(files = total, bytes, "scan completed");
        Ok(ScanSummary {
            files: total,
            bytes,
        })
    }
}
