//! Test fixtures and helpers.
//!
//! Temp-file fixtures for exercising the streaming hasher against on-disk
//! content of controlled sizes.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

/// A temp directory holding one content file.
pub struct FileFixture {
    // Held for its Drop: the directory is removed with the fixture.
    _dir: TempDir,
    /// Path of the content file.
    pub path: PathBuf,
    /// The bytes written to the file.
    pub content: Vec<u8>,
}

impl FileFixture {
    /// Write `content` to a fresh temp file.
    pub fn with_content(content: Vec<u8>) -> io::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("content.bin");
        fs::write(&path, &content)?;
        Ok(Self {
            _dir: dir,
            path,
            content,
        })
    }

    /// A fixture of `len` deterministic, non-repeating-period bytes.
    pub fn patterned(len: usize) -> io::Result<Self> {
        Self::with_content(patterned_bytes(len))
    }
}

/// Deterministic filler bytes; period 251 keeps chunk boundaries from
/// aligning with the pattern.
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
