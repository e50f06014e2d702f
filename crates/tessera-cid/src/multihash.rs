//! Multihash: a digest prefixed with the code of the hash function that
//! produced it.
//!
//! Decoding reads the function code first; the code declares its digest
//! width. Only blake3-256 is accepted today, so the wire form is always
//! 33 bytes, and that fixed width is a format contract other implementations
//! rely on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CidError;
use crate::hash::Blake3Hash;

/// Wire length of a multihash: 1 function byte + 32 digest bytes.
pub const MULTIHASH_LEN: usize = 1 + Blake3Hash::LEN;

/// Hash functions supported by the multihash format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HashFunction {
    /// blake3 with the default 256-bit output.
    Blake3 = 0x1f,
}

impl HashFunction {
    /// The wire code of this function.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Digest width in bytes for this function.
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Blake3 => Blake3Hash::LEN,
        }
    }

    /// Look up a function by its wire code.
    pub fn from_code(code: u8) -> Result<Self, CidError> {
        match code {
            0x1f => Ok(Self::Blake3),
            other => Err(CidError::UnsupportedHashFunction(other)),
        }
    }
}

/// A hash digest tagged with its function code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multihash {
    function: HashFunction,
    digest: Blake3Hash,
}

impl Multihash {
    /// Wrap a raw digest with the blake3 function tag.
    pub const fn wrap(digest: Blake3Hash) -> Self {
        Self {
            function: HashFunction::Blake3,
            digest,
        }
    }

    /// The hash function that produced the digest.
    pub const fn function(&self) -> HashFunction {
        self.function
    }

    /// The raw digest.
    pub const fn digest(&self) -> Blake3Hash {
        self.digest
    }

    /// Serialize to the fixed 33-byte wire form.
    pub fn to_bytes(&self) -> [u8; MULTIHASH_LEN] {
        let mut out = [0u8; MULTIHASH_LEN];
        out[0] = self.function.code();
        out[1..].copy_from_slice(self.digest.as_bytes());
        out
    }

    /// Validated decode: reads the function code first and requires the rest
    /// of the buffer to be exactly that function's digest width.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CidError> {
        let (&code, rest) = bytes.split_first().ok_or(CidError::TooShort(0))?;
        let function = HashFunction::from_code(code)?;
        if rest.len() != function.digest_len() {
            return Err(CidError::InvalidDigestLength {
                expected: function.digest_len(),
                actual: rest.len(),
            });
        }
        Ok(Self {
            function,
            digest: Blake3Hash::from_slice(rest)?,
        })
    }

    /// Permissive unwrap kept for compatibility: strips the function byte
    /// without checking it and returns the remainder.
    pub fn split_digest(bytes: &[u8]) -> Result<&[u8], CidError> {
        if bytes.is_empty() {
            return Err(CidError::TooShort(0));
        }
        Ok(&bytes[1..])
    }

    /// Convert to hex string (wire form).
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Multihash({:#04x}, {})",
            self.function.code(),
            &self.digest.to_hex()[..16]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_unwrap_roundtrip() {
        let digest = Blake3Hash::hash(b"some content");
        let mhash = Multihash::wrap(digest);

        let bytes = mhash.to_bytes();
        assert_eq!(bytes.len(), MULTIHASH_LEN);
        assert_eq!(bytes[0], 0x1f);
        assert_eq!(&bytes[1..], digest.as_bytes());

        let parsed = Multihash::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, mhash);
        assert_eq!(parsed.digest(), digest);
    }

    #[test]
    fn test_from_bytes_rejects_unknown_function() {
        let mut bytes = Multihash::wrap(Blake3Hash::ZERO).to_bytes();
        bytes[0] = 0x12;
        assert!(matches!(
            Multihash::from_bytes(&bytes),
            Err(CidError::UnsupportedHashFunction(0x12))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_wrong_width() {
        let bytes = [0x1fu8; 20];
        assert!(matches!(
            Multihash::from_bytes(&bytes),
            Err(CidError::InvalidDigestLength { expected: 32, actual: 19 })
        ));
        assert!(matches!(
            Multihash::from_bytes(&[]),
            Err(CidError::TooShort(0))
        ));
    }

    #[test]
    fn test_split_digest_ignores_function_byte() {
        let digest = Blake3Hash::hash(b"legacy");
        let mut bytes = Multihash::wrap(digest).to_bytes().to_vec();
        bytes[0] = 0xff; // unknown tag passes through the permissive path
        let raw = Multihash::split_digest(&bytes).unwrap();
        assert_eq!(raw, digest.as_bytes());
        assert!(Multihash::split_digest(&[]).is_err());
    }
}
