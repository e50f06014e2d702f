//! Cross-base CID conversion and inspection.
//!
//! Conversions always decode in the source base and re-encode in the target
//! base; there is no direct radix arithmetic between alphabets. Round trips
//! within one base are the identity, and any A→B conversion followed by B→A
//! reproduces the original text.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Serialize;
use std::fmt;

use crate::cid::Cid;
use crate::error::CidError;
use crate::multibase::{self, Multibase};
use crate::multihash::Multihash;

/// Convert a `z` base58btc CID to its `b` base32 form.
pub fn base58btc_to_base32rfc(cid: &str) -> Result<String, CidError> {
    Ok(multibase::encode_base32rfc(&multibase::decode_base58btc(
        cid,
    )?))
}

/// Convert a `b` base32 CID to its `z` base58btc form.
pub fn base32rfc_to_base58btc(cid: &str) -> Result<String, CidError> {
    Ok(multibase::encode_base58btc(&multibase::decode_base32rfc(
        cid,
    )?))
}

/// Convert a `u` base64url CID to its `z` base58btc form.
pub fn base64url_to_base58btc(cid: &str) -> Result<String, CidError> {
    Ok(multibase::encode_base58btc(&multibase::decode_base64url(
        cid,
    )?))
}

/// Convert a `z` base58btc CID to its `u` base64url form.
pub fn base58btc_to_base64url(cid: &str) -> Result<String, CidError> {
    Ok(multibase::encode_base64url(&multibase::decode_base58btc(
        cid,
    )?))
}

/// Convert a `u` base64url CID to its `b` base32 form.
pub fn base64url_to_base32rfc(cid: &str) -> Result<String, CidError> {
    Ok(multibase::encode_base32rfc(&multibase::decode_base64url(
        cid,
    )?))
}

/// Convert a `b` base32 CID to its `u` base64url form.
pub fn base32rfc_to_base64url(cid: &str) -> Result<String, CidError> {
    Ok(multibase::encode_base64url(&multibase::decode_base32rfc(
        cid,
    )?))
}

/// Decode any of the three text forms to CID bytes, dispatching on the
/// prefix character.
pub fn decode_any(cid: &str) -> Result<Vec<u8>, CidError> {
    Multibase::detect(cid)?.decode(cid)
}

/// Normalize any CID text form to the canonical `z` form used for directory
/// lookups. A trailing `/`-delimited path suffix is stripped first.
pub fn canonicalize(cid: &str) -> Result<String, CidError> {
    let bare = cid.split('/').next().unwrap_or(cid);
    Ok(multibase::encode_base58btc(&decode_any(bare)?))
}

/// The unprefixed URL-safe base64 form of a multihash, used for registry
/// lookups.
pub fn mhash_base64url(multihash: &Multihash) -> String {
    URL_SAFE_NO_PAD.encode(multihash.to_bytes())
}

impl Cid {
    /// Parse a CID from any of its three text forms.
    pub fn from_text(cid: &str) -> Result<Self, CidError> {
        Self::from_bytes(&decode_any(cid)?)
    }

    /// Render this CID in the given base, prefix included.
    pub fn to_text(&self, base: Multibase) -> String {
        base.encode(&self.to_bytes())
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(Multibase::Base58Btc))
    }
}

/// Every representation of a single CID, gathered in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CidInfo {
    /// Canonical `z` base58btc form.
    pub z: String,
    /// `u` base64url form.
    pub u: String,
    /// `b` base32 form.
    pub b: String,
    /// Multihash as unprefixed base64url; `None` when the CID carries no
    /// raw size.
    pub mhash_b64url: Option<String>,
    /// Content digest as hex; `None` when the CID carries no raw size.
    pub digest_hex: Option<String>,
    /// Raw content size, 0 when absent.
    pub size: u64,
}

/// Decode a CID in any text form and report all of its representations.
pub fn inspect(cid: &str) -> Result<CidInfo, CidError> {
    let parsed = Cid::from_text(cid)?;
    let (mhash_b64url, digest_hex) = if parsed.size() != 0 {
        (
            Some(mhash_base64url(&parsed.multihash())),
            Some(parsed.digest_hex()),
        )
    } else {
        (None, None)
    };
    Ok(CidInfo {
        z: parsed.to_text(Multibase::Base58Btc),
        u: parsed.to_text(Multibase::Base64Url),
        b: parsed.to_text(Multibase::Base32Rfc),
        mhash_b64url,
        digest_hex,
        size: parsed.size(),
    })
}
