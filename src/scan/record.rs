//! Per-file manifest records.

use crate::digest::DigestPair;
use crate::error::FixityError;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::Path;

/// One row of the manifest: identity, fingerprints, and metadata for a
/// single regular file.
///
/// Records are immutable once built. The serde field names are the wire
/// contract for the CSV header and must not change: downstream consumers
/// match on the "SHA1 Hash" / "MD5 Hash" labels verbatim.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileRecord {
    /// Base name of the file.
    #[serde(rename = "Filename")]
    pub name: String,

    /// The path used to open the file, exactly as produced by traversal.
    #[serde(rename = "File Path")]
    pub path: String,

    /// SHA-1 content digest, 40 lowercase hex characters.
    #[serde(rename = "SHA1 Hash")]
    pub digest_primary: String,

    /// MD5 content digest, 32 lowercase hex characters.
    #[serde(rename = "MD5 Hash")]
    pub digest_secondary: String,

    /// Byte count consumed by the digest passes.
    #[serde(rename = "File Size")]
    pub size: u64,

    /// Extension of `name` including the leading dot, or empty.
    #[serde(rename = "File Extension")]
    pub extension: String,

    /// Modification time, `YYYY-MM-DD HH:MM:SS` in local time.
    #[serde(rename = "Created Date")]
    pub modified_at: String,
}

impl FileRecord {
    /// Build a record for `path` from an already computed digest pair.
    ///
    /// Metadata is fetched here, independently of the digest passes; the
    /// size still comes from the digest pair so it reflects the bytes the
    /// fingerprints actually cover.
    pub fn build(path: &Path, digests: DigestPair) -> Result<Self, FixityError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let metadata = std::fs::metadata(path).map_err(|e| FixityError::io(path, e))?;
        let modified = metadata.modified().map_err(|e| FixityError::io(path, e))?;
        let modified_at = DateTime::<Local>::from(modified)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        Ok(FileRecord {
            extension: extension_of(&name),
            name,
            path: path.to_string_lossy().into_owned(),
            digest_primary: digests.primary,
            digest_secondary: digests.secondary,
            size: digests.bytes_read,
            modified_at,
        })
    }
}

/// Extension of a file name, including the leading dot.
///
/// A name with no dot, or a dotfile like `.gitignore`, has no extension.
fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_string(),
        _ => String::new(),
    }
}
