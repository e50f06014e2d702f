//! Error types for the Tessera CID codec.

use thiserror::Error;

/// Errors that can occur while encoding or decoding content identifiers.
///
/// Decode and parse operations fail atomically: no partial results are
/// returned, and nothing is retried internally.
#[derive(Debug, Error)]
pub enum CidError {
    /// Generic decode failure: an unrecognized multibase prefix, or a payload
    /// that is not valid in the prefixed alphabet.
    #[error("invalid CID input address")]
    InvalidAddress,

    #[error("CID too short: {0} bytes")]
    TooShort(usize),

    #[error("unsupported multihash function code: {0:#04x}")]
    UnsupportedHashFunction(u8),

    #[error("unknown CID type byte: {0:#04x}")]
    UnknownCidType(u8),

    #[error("digest must be {expected} bytes, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },

    #[error("size field is {0} bytes, wider than a u64")]
    SizeOverflow(usize),

    #[error("revision {0} exceeds the maximum allowed value")]
    RevisionOverflow(u64),
}
