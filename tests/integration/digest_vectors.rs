//! Digest engine verification against published test vectors

use fixity::digest::compute_digests;
use std::fs;
use tempfile::TempDir;

/// Empty input must produce the well-known empty-input digests.
#[test]
fn test_empty_input_vectors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    let pair = compute_digests(&path).unwrap();

    assert_eq!(pair.primary, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(pair.secondary, "d41d8cd98f00b204e9800998ecf8427e");
}

/// "The quick brown fox" vectors, both algorithms.
#[test]
fn test_quick_brown_fox_vectors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fox.txt");
    fs::write(&path, b"The quick brown fox jumps over the lazy dog").unwrap();

    let pair = compute_digests(&path).unwrap();

    assert_eq!(pair.primary, "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
    assert_eq!(pair.secondary, "9e107d9d372bb6826bd81d3542a419d6");
}

/// The second (MD5) pass must cover the whole file, not the empty tail
/// left behind by the first pass. A multi-buffer file catches a missing
/// or partial rewind.
#[test]
fn test_second_pass_covers_whole_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("large.bin");
    let content = vec![0x42u8; 1024 * 1024];
    fs::write(&path, &content).unwrap();

    let pair = compute_digests(&path).unwrap();

    // MD5 of an empty input would betray a missing rewind.
    assert_ne!(pair.secondary, "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(pair.bytes_read, content.len() as u64);

    // Same content through a single in-memory pass agrees with the
    // streaming result.
    use md5::{Digest, Md5};
    let mut md5 = Md5::new();
    md5.update(&content);
    assert_eq!(pair.secondary, hex::encode(md5.finalize()));
}

/// Both digests must change when one byte changes.
#[test]
fn test_both_digests_avalanche() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.bin");

    let mut content = vec![0u8; 4096 * 3];
    fs::write(&path, &content).unwrap();
    let before = compute_digests(&path).unwrap();

    content[4096 * 2] ^= 0x01;
    fs::write(&path, &content).unwrap();
    let after = compute_digests(&path).unwrap();

    assert_ne!(before.primary, after.primary);
    assert_ne!(before.secondary, after.secondary);
    assert_eq!(before.bytes_read, after.bytes_read);
}
