//! Binary CID encoding and parsing.
//!
//! Wire layout, bit-exact:
//!
//! ```text
//! type (1 byte) | multihash (33 bytes) | size (0..8 bytes, little-endian, minimal width)
//! ```
//!
//! The multihash always occupies bytes 1..34; everything past offset 34 is
//! the size field, which only raw CIDs carry. A 34-byte buffer parses with
//! size 0.

use serde::{Deserialize, Serialize};

use crate::error::CidError;
use crate::hash::Blake3Hash;
use crate::multihash::{Multihash, MULTIHASH_LEN};

/// Minimum CID length: 1 type byte + 33 multihash bytes. Also the offset of
/// the size field.
pub const CID_MIN_LEN: usize = 1 + MULTIHASH_LEN;

/// CID type tags.
///
/// The byte values are chosen so the base58 and base32 renderings of
/// different types are easy to tell apart, and so they avoid collisions with
/// the multicodec table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CidType {
    /// Plain file content. The only type that carries a size field.
    Raw = 0x26,
    /// Media metadata object.
    MetadataMedia = 0xc5,
    /// Web app metadata object.
    MetadataWebApp = 0x59,
    /// Resolver entry that points at another CID.
    Resolver = 0x25,
    /// User identity object.
    UserIdentity = 0x77,
    /// Bridge object.
    Bridge = 0x3a,
    /// Encrypted blob.
    Encrypted = 0xae,
}

impl CidType {
    /// The wire byte of this type.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a type by its wire byte.
    pub fn from_code(code: u8) -> Result<Self, CidError> {
        match code {
            0x26 => Ok(Self::Raw),
            0xc5 => Ok(Self::MetadataMedia),
            0x59 => Ok(Self::MetadataWebApp),
            0x25 => Ok(Self::Resolver),
            0x77 => Ok(Self::UserIdentity),
            0x3a => Ok(Self::Bridge),
            0xae => Ok(Self::Encrypted),
            other => Err(CidError::UnknownCidType(other)),
        }
    }

    /// All assigned type tags.
    pub const ALL: [CidType; 7] = [
        Self::Raw,
        Self::MetadataMedia,
        Self::MetadataWebApp,
        Self::Resolver,
        Self::UserIdentity,
        Self::Bridge,
        Self::Encrypted,
    ];
}

/// A parsed content identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cid {
    kind: CidType,
    multihash: Multihash,
    size: u64,
}

impl Cid {
    /// A raw content CID with the content size in bytes.
    pub const fn new_raw(multihash: Multihash, size: u64) -> Self {
        Self {
            kind: CidType::Raw,
            multihash,
            size,
        }
    }

    /// A CID of the given type. Non-raw CIDs carry no size on the wire.
    pub const fn new(kind: CidType, multihash: Multihash) -> Self {
        Self {
            kind,
            multihash,
            size: 0,
        }
    }

    /// The type tag.
    pub const fn kind(&self) -> CidType {
        self.kind
    }

    /// The tagged multihash.
    pub const fn multihash(&self) -> Multihash {
        self.multihash
    }

    /// The raw content digest inside the multihash.
    pub const fn digest(&self) -> Blake3Hash {
        self.multihash.digest()
    }

    /// Digest as a hex string.
    pub fn digest_hex(&self) -> String {
        self.digest().to_hex()
    }

    /// The raw content size, 0 when absent.
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Serialize to the binary wire form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(CID_MIN_LEN + 8);
        out.push(self.kind.code());
        out.extend_from_slice(&self.multihash.to_bytes());
        if matches!(self.kind, CidType::Raw) {
            out.extend_from_slice(&encode_size(self.size));
        }
        out
    }

    /// Parse the binary wire form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CidError> {
        if bytes.len() < CID_MIN_LEN {
            return Err(CidError::TooShort(bytes.len()));
        }
        let kind = CidType::from_code(bytes[0])?;
        let multihash = Multihash::from_bytes(&bytes[1..CID_MIN_LEN])?;
        let size = decode_size(&bytes[CID_MIN_LEN..])?;
        Ok(Self {
            kind,
            multihash,
            size,
        })
    }
}

/// Encode a size as little-endian bytes with high-order zero bytes trimmed.
///
/// 0 encodes to the empty buffer, so a size-0 raw CID is exactly
/// [`CID_MIN_LEN`] bytes.
pub fn encode_size(size: u64) -> Vec<u8> {
    let bytes = size.to_le_bytes();
    let width = 8 - bytes.iter().rev().take_while(|&&b| b == 0).count();
    bytes[..width].to_vec()
}

/// Decode a trimmed little-endian size field. The empty buffer is 0.
pub fn decode_size(bytes: &[u8]) -> Result<u64, CidError> {
    if bytes.len() > 8 {
        return Err(CidError::SizeOverflow(bytes.len()));
    }
    let mut out = [0u8; 8];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(u64::from_le_bytes(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_multihash() -> Multihash {
        Multihash::wrap(Blake3Hash::hash(b"sample content"))
    }

    #[test]
    fn test_size_encoding_is_minimal_little_endian() {
        assert_eq!(encode_size(0), Vec::<u8>::new());
        assert_eq!(encode_size(1), vec![0x01]);
        assert_eq!(encode_size(0x100), vec![0x00, 0x01]);
        assert_eq!(encode_size(1_000_000), vec![0x40, 0x42, 0x0f]);
        assert_eq!(encode_size(u64::MAX), vec![0xff; 8]);
    }

    #[test]
    fn test_size_decoding() {
        assert_eq!(decode_size(&[]).unwrap(), 0);
        assert_eq!(decode_size(&[0x40, 0x42, 0x0f]).unwrap(), 1_000_000);
        assert_eq!(decode_size(&[0xff; 8]).unwrap(), u64::MAX);
        assert!(matches!(
            decode_size(&[0x01; 9]),
            Err(CidError::SizeOverflow(9))
        ));
    }

    #[test]
    fn test_raw_cid_roundtrip() {
        for size in [0u64, 1, 1_000_000] {
            let cid = Cid::new_raw(sample_multihash(), size);
            let bytes = cid.to_bytes();
            if size == 0 {
                assert_eq!(bytes.len(), CID_MIN_LEN);
            } else {
                assert!(bytes.len() > CID_MIN_LEN);
            }
            let parsed = Cid::from_bytes(&bytes).unwrap();
            assert_eq!(parsed, cid);
            assert_eq!(parsed.size(), size);
        }
    }

    #[test]
    fn test_non_raw_cids_carry_no_size() {
        for kind in CidType::ALL {
            if kind == CidType::Raw {
                continue;
            }
            let cid = Cid::new(kind, sample_multihash());
            let bytes = cid.to_bytes();
            assert_eq!(bytes.len(), CID_MIN_LEN);
            assert_eq!(bytes[0], kind.code());
            let parsed = Cid::from_bytes(&bytes).unwrap();
            assert_eq!(parsed.kind(), kind);
            assert_eq!(parsed.size(), 0);
        }
    }

    #[test]
    fn test_fixed_offset_framing() {
        let mhash = sample_multihash();
        let cid = Cid::new_raw(mhash, 7);
        let bytes = cid.to_bytes();
        assert_eq!(bytes[0], 0x26);
        assert_eq!(&bytes[1..CID_MIN_LEN], &mhash.to_bytes());
        assert_eq!(&bytes[CID_MIN_LEN..], &[0x07]);
    }

    #[test]
    fn test_parse_rejects_short_buffers() {
        assert!(matches!(Cid::from_bytes(&[]), Err(CidError::TooShort(0))));
        let short = vec![0x26; CID_MIN_LEN - 1];
        assert!(matches!(
            Cid::from_bytes(&short),
            Err(CidError::TooShort(33))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_type_byte() {
        let mut bytes = Cid::new_raw(sample_multihash(), 0).to_bytes();
        bytes[0] = 0xc6; // unassigned
        assert!(matches!(
            Cid::from_bytes(&bytes),
            Err(CidError::UnknownCidType(0xc6))
        ));
    }
}
