//! Streaming digest engine: SHA-1 and MD5 fingerprints of file content.
//!
//! Files are read with a fixed-size buffer and never loaded into memory
//! whole. The two algorithms run as two sequential passes over the same
//! open file handle, with an explicit rewind between them.

use crate::error::FixityError;
use md5::Md5;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Read buffer size for both digest passes.
const BUFFER_SIZE: usize = 8192;

/// Both content fingerprints of one file, plus the byte count consumed.
///
/// `bytes_read` is the authoritative file size for the record built from
/// this pair: it reflects what the digests actually covered, not a stat
/// taken at some other time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestPair {
    /// SHA-1 digest, 40 lowercase hex characters.
    pub primary: String,
    /// MD5 digest, 32 lowercase hex characters.
    pub secondary: String,
    /// Bytes consumed by each digest pass.
    pub bytes_read: u64,
}

/// Compute SHA-1 and MD5 digests of the file at `path`.
///
/// The file is opened once. Pass one streams it through SHA-1; the handle
/// is then rewound to offset zero and pass two streams it through MD5.
/// The rewind is load-bearing: without it the second digest would cover an
/// empty tail instead of the file. If the two passes consume different
/// byte counts the file was modified mid-read and the result is discarded.
pub fn compute_digests(path: &Path) -> Result<DigestPair, FixityError> {
    let file = File::open(path).map_err(|e| FixityError::io(path, e))?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);

    let mut sha1 = Sha1::new();
    let first = stream_into(&mut reader, &mut sha1).map_err(|e| FixityError::io(path, e))?;

    reader
        .seek(SeekFrom::Start(0))
        .map_err(|e| FixityError::io(path, e))?;

    let mut md5 = Md5::new();
    let second = stream_into(&mut reader, &mut md5).map_err(|e| FixityError::io(path, e))?;

    if first != second {
        return Err(FixityError::SizeChanged {
            path: path.to_path_buf(),
            first,
            second,
        });
    }

    Ok(DigestPair {
        primary: hex::encode(sha1.finalize()),
        secondary: hex::encode(md5.finalize()),
        bytes_read: first,
    })
}

/// Feed a reader through a digest accumulator, returning the byte count.
fn stream_into<R: Read, D: Digest>(reader: &mut R, digest: &mut D) -> std::io::Result<u64> {
    let mut buffer = [0u8; BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        digest.update(&buffer[..n]);
        total += n as u64;
    }
    Ok(total)
}
