//! Integration tests for the fixity manifest tool

mod digest_vectors;
mod manifest_roundtrip;
