//! Manifest sink: CSV output for scan records.
//!
//! The CSV schema is a fixed wire contract. Header labels and column order
//! come from [`FileRecord`]'s serde names and must match what downstream
//! consumers of `checksumsha1.csv` already parse.

use crate::error::FixityError;
use crate::scan::FileRecord;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default manifest file name, written inside the scanned root.
pub const DEFAULT_MANIFEST_NAME: &str = "checksumsha1.csv";

/// Name of the in-progress manifest before it is renamed into place.
///
/// The walker must exclude this name too: the temporary file exists (and
/// grows) inside the root for the whole duration of the walk.
pub fn temp_name(manifest_name: &str) -> String {
    format!("{}.tmp", manifest_name)
}

/// Abstract destination consuming one record at a time.
pub trait RecordSink {
    fn write_record(&mut self, record: &FileRecord) -> Result<(), FixityError>;
}

/// CSV manifest writer.
///
/// Writes to a temporary file next to the final destination and renames it
/// into place on [`finish`](CsvManifest::finish). An aborted run therefore
/// never leaves a plausible-looking manifest behind, and the growing output
/// file can never be swept up by its own scan.
#[derive(Debug)]
pub struct CsvManifest {
    writer: csv::Writer<File>,
    temp_path: PathBuf,
    final_path: PathBuf,
    rows: usize,
}

impl CsvManifest {
    /// Create the manifest for `root`, named `name` inside it.
    pub fn create(root: &Path, name: &str) -> Result<Self, FixityError> {
        let final_path = root.join(name);
        let temp_path = root.join(temp_name(name));

        let file =
            File::create(&temp_path).map_err(|e| FixityError::output(final_path.clone(), e))?;
        let writer = csv::WriterBuilder::new().has_headers(true).from_writer(file);

        Ok(Self {
            writer,
            temp_path,
            final_path,
            rows: 0,
        })
    }

    /// Rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The path the finished manifest will live at.
    pub fn path(&self) -> &Path {
        &self.final_path
    }

    /// Flush and move the manifest into its final location.
    pub fn finish(mut self) -> Result<PathBuf, FixityError> {
        self.writer
            .flush()
            .map_err(|e| FixityError::output(self.final_path.clone(), e))?;
        drop(self.writer);

        std::fs::rename(&self.temp_path, &self.final_path)
            .map_err(|e| FixityError::output(self.final_path.clone(), e))?;

        info!(path = %self.final_path.display(), rows = self.rows, "manifest written");
        Ok(self.final_path)
    }
}

impl RecordSink for CsvManifest {
    fn write_record(&mut self, record: &FileRecord) -> Result<(), FixityError> {
        self.writer.serialize(record).map_err(|e| {
            let source = match e.into_kind() {
                csv::ErrorKind::Io(io) => io,
                other => std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", other)),
            };
            FixityError::output(self.final_path.clone(), source)
        })?;
        self.rows += 1;
        Ok(())
    }
}

/// In-memory sink for tests and library callers that post-process records.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<FileRecord>,
}

impl RecordSink for MemorySink {
    fn write_record(&mut self, record: &FileRecord) -> Result<(), FixityError> {
        self.records.push(record.clone());
        Ok(())
    }
}
