//! Streaming blake3 hashing for content addressing.
//!
//! Every content identifier starts here: a file or byte buffer is absorbed in
//! fixed 1 MiB chunks and reduced to a 32-byte [`Blake3Hash`]. Chunk
//! boundaries never affect the digest, so a streamed hash always equals the
//! single-shot hash of the concatenated input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use crate::error::CidError;

/// Chunk size used when feeding large inputs to the hasher (1 MiB).
pub const HASH_CHUNK_SIZE: usize = 1024 * 1024;

/// A 32-byte blake3 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blake3Hash(pub [u8; 32]);

impl Blake3Hash {
    /// Digest width in bytes.
    pub const LEN: usize = 32;

    /// The zero hash (sentinel value).
    pub const ZERO: Self = Self([0u8; 32]);

    /// Compute the blake3 hash of the given data in one shot.
    pub fn hash(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, validating the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CidError> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CidError::InvalidDigestLength {
                expected: Self::LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != Self::LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Blake3Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blake3({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Blake3Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Blake3Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// An incremental blake3 hasher.
///
/// Chunks must be absorbed in input order. [`HashEngine::finalize`] consumes
/// the engine, so a finalized hasher cannot be updated again.
pub struct HashEngine {
    inner: blake3::Hasher,
}

impl HashEngine {
    /// Create a fresh hasher with empty state.
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Absorb a chunk. Zero-length chunks are valid and change nothing.
    pub fn update(&mut self, chunk: &[u8]) {
        self.inner.update(chunk);
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> Blake3Hash {
        Blake3Hash(*self.inner.finalize().as_bytes())
    }
}

impl Default for HashEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HashEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashEngine(..)")
    }
}

/// Hash an in-memory buffer, feeding it to the engine in 1 MiB chunks.
///
/// A zero-length buffer yields blake3's empty-input digest.
pub fn hash_bytes(buf: &[u8]) -> Blake3Hash {
    let mut engine = HashEngine::new();
    for chunk in buf.chunks(HASH_CHUNK_SIZE) {
        engine.update(chunk);
    }
    engine.finalize()
}

/// Hash everything a reader produces, in sequential 1 MiB reads.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<Blake3Hash> {
    let mut engine = HashEngine::new();
    let mut buf = vec![0u8; HASH_CHUNK_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => engine.update(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(engine.finalize())
}

/// Hash a file's contents in 1 MiB chunks, in file order.
pub fn hash_file<P: AsRef<Path>>(path: P) -> io::Result<Blake3Hash> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "hashing file");
    let file = File::open(path)?;
    hash_reader(file)
}
