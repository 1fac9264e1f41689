//! Error types for the fixity manifest tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the scan pipeline and manifest writer.
///
/// Every kind is fatal: the first error aborts the run. A partially written
/// manifest left behind by an aborted run is non-authoritative.
#[derive(Debug, Error)]
pub enum FixityError {
    /// The root path is missing, unreadable, or not a directory.
    #[error("Root path is not an accessible directory: {0}")]
    InvalidRoot(PathBuf),

    /// A file could not be opened, read, or rewound while digesting,
    /// or traversal failed midway.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The two digest passes consumed different byte counts, meaning the
    /// file changed while it was being read.
    #[error("File changed while hashing {path}: first pass read {first} bytes, second read {second}")]
    SizeChanged {
        path: PathBuf,
        first: u64,
        second: u64,
    },

    /// The manifest file could not be created, written, or moved into place.
    #[error("Failed to write manifest {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FixityError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixityError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a manifest-write failure with the manifest path.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixityError::Output {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            FixityError::InvalidRoot(_) => 2,
            FixityError::Io { .. } | FixityError::SizeChanged { .. } => 3,
            FixityError::Output { .. } => 4,
            FixityError::Config(_) => 5,
        }
    }
}
