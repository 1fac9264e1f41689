//! Fixity: directory inventory and checksum manifests
//!
//! Walks a directory tree, streams every regular file through SHA-1 and
//! MD5, and emits one record per file (fingerprints plus filesystem
//! metadata) to a caller-supplied sink. The bundled sink writes the
//! `checksumsha1.csv` manifest.

pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod progress;
pub mod scan;
