//! The three multibase text encodings of CID byte buffers.
//!
//! Each form is the raw bytes rendered in one alphabet behind a single
//! identifying prefix character: `z` for base58btc, `u` for unpadded
//! base64url, `b` for unpadded lowercase base32 (RFC 4648). The prefix
//! selects the alphabet for decoding; it is not validated against the
//! payload's semantic type.
//!
//! Alphabets come from the encoding crates' immutable tables. Malformed or
//! wrong-prefix input decodes to the one generic [`CidError::InvalidAddress`]
//! error; the three bases do not report distinguishable failures.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};

use crate::error::CidError;

/// The text alphabets a CID can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multibase {
    /// Bitcoin base58, prefix `z`.
    Base58Btc,
    /// RFC 4648 URL-safe base64 without padding, prefix `u`.
    Base64Url,
    /// RFC 4648 base32 without padding, lowercase, prefix `b`.
    Base32Rfc,
}

impl Multibase {
    /// The identifying prefix character.
    pub const fn prefix(self) -> char {
        match self {
            Self::Base58Btc => 'z',
            Self::Base64Url => 'u',
            Self::Base32Rfc => 'b',
        }
    }

    /// Identify the base from the leading character of a CID string.
    ///
    /// `B` is accepted for base32: older clients emitted uppercase forms.
    pub fn detect(cid: &str) -> Result<Self, CidError> {
        match cid.chars().next() {
            Some('z') => Ok(Self::Base58Btc),
            Some('u') => Ok(Self::Base64Url),
            Some('b') | Some('B') => Ok(Self::Base32Rfc),
            _ => Err(CidError::InvalidAddress),
        }
    }

    /// Encode bytes in this base, prefix included.
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Base58Btc => encode_base58btc(bytes),
            Self::Base64Url => encode_base64url(bytes),
            Self::Base32Rfc => encode_base32rfc(bytes),
        }
    }

    /// Decode a prefixed string in this base.
    pub fn decode(self, cid: &str) -> Result<Vec<u8>, CidError> {
        match self {
            Self::Base58Btc => decode_base58btc(cid),
            Self::Base64Url => decode_base64url(cid),
            Self::Base32Rfc => decode_base32rfc(cid),
        }
    }
}

/// Encode bytes as base58btc with a `z` prefix.
pub fn encode_base58btc(bytes: &[u8]) -> String {
    format!("z{}", bs58::encode(bytes).into_string())
}

/// Decode a `z`-prefixed base58btc string.
pub fn decode_base58btc(cid: &str) -> Result<Vec<u8>, CidError> {
    let payload = cid.strip_prefix('z').ok_or(CidError::InvalidAddress)?;
    bs58::decode(payload)
        .into_vec()
        .map_err(|_| CidError::InvalidAddress)
}

/// Encode bytes as unpadded base64url with a `u` prefix.
pub fn encode_base64url(bytes: &[u8]) -> String {
    format!("u{}", URL_SAFE_NO_PAD.encode(bytes))
}

/// Decode a `u`-prefixed base64url string.
pub fn decode_base64url(cid: &str) -> Result<Vec<u8>, CidError> {
    let payload = cid.strip_prefix('u').ok_or(CidError::InvalidAddress)?;
    URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| CidError::InvalidAddress)
}

/// Encode bytes as unpadded lowercase base32 with a `b` prefix.
pub fn encode_base32rfc(bytes: &[u8]) -> String {
    format!("b{}", BASE32_NOPAD.encode(bytes).to_ascii_lowercase())
}

/// Decode a `b`-prefixed base32 string.
///
/// Legacy compatibility shim, preserved exactly: an uppercase `B` prefix
/// lowercases the whole string before the prefix is stripped, and whatever
/// case mixture remains in the payload is normalized to the uppercase
/// alphabet before decoding. Canonical lowercase input passes through
/// untouched.
pub fn decode_base32rfc(cid: &str) -> Result<Vec<u8>, CidError> {
    let payload = if cid.starts_with('B') {
        let lowered = cid.to_ascii_lowercase();
        lowered[1..].to_string()
    } else if cid.starts_with('b') {
        cid[1..].to_string()
    } else {
        return Err(CidError::InvalidAddress);
    };
    BASE32_NOPAD
        .decode(payload.to_ascii_uppercase().as_bytes())
        .map_err(|_| CidError::InvalidAddress)
}
