//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tessera_cid::{Blake3Hash, Cid, CidType, Multibase, Multihash};

/// Generate a random Blake3Hash.
pub fn blake3_hash() -> impl Strategy<Value = Blake3Hash> {
    any::<[u8; 32]>().prop_map(Blake3Hash::from_bytes)
}

/// Generate a random Multihash.
pub fn multihash() -> impl Strategy<Value = Multihash> {
    blake3_hash().prop_map(Multihash::wrap)
}

/// Generate a CID type tag.
pub fn cid_type() -> impl Strategy<Value = CidType> {
    prop_oneof![
        Just(CidType::Raw),
        Just(CidType::MetadataMedia),
        Just(CidType::MetadataWebApp),
        Just(CidType::Resolver),
        Just(CidType::UserIdentity),
        Just(CidType::Bridge),
        Just(CidType::Encrypted),
    ]
}

/// Generate a raw content size, weighted toward the small sizes and field
/// widths that show up in practice.
pub fn raw_size() -> impl Strategy<Value = u64> {
    prop_oneof![
        Just(0u64),
        1u64..=255,
        256u64..=u32::MAX as u64,
        any::<u64>(),
    ]
}

/// Generate a CID of any type; only raw CIDs carry a size.
pub fn cid() -> impl Strategy<Value = Cid> {
    (cid_type(), multihash(), raw_size()).prop_map(|(kind, mhash, size)| match kind {
        CidType::Raw => Cid::new_raw(mhash, size),
        other => Cid::new(other, mhash),
    })
}

/// Generate one of the three multibase alphabets.
pub fn multibase() -> impl Strategy<Value = Multibase> {
    prop_oneof![
        Just(Multibase::Base58Btc),
        Just(Multibase::Base64Url),
        Just(Multibase::Base32Rfc),
    ]
}

/// Generate an arbitrary byte buffer of at most `max_len` bytes.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_cid::{canonicalize, decode_any, inspect};

    proptest! {
        #[test]
        fn multibase_roundtrips_any_buffer(base in multibase(), buf in payload(256)) {
            let text = base.encode(&buf);
            prop_assert!(text.starts_with(base.prefix()));
            prop_assert_eq!(base.decode(&text).unwrap(), buf);
        }

        #[test]
        fn cid_binary_roundtrips(cid in cid()) {
            let bytes = cid.to_bytes();
            prop_assert_eq!(Cid::from_bytes(&bytes).unwrap(), cid);
        }

        #[test]
        fn cid_text_roundtrips_in_every_base(cid in cid(), base in multibase()) {
            let text = cid.to_text(base);
            prop_assert_eq!(Cid::from_text(&text).unwrap(), cid);
        }

        #[test]
        fn multihash_wrap_unwrap_is_identity(digest in blake3_hash()) {
            let mhash = Multihash::wrap(digest);
            let bytes = mhash.to_bytes();
            prop_assert_eq!(Multihash::from_bytes(&bytes).unwrap().digest(), digest);
            prop_assert_eq!(Multihash::split_digest(&bytes).unwrap(), digest.as_bytes());
        }

        #[test]
        fn conversion_between_any_two_bases_preserves_bytes(
            cid in cid(),
            from in multibase(),
            to in multibase(),
        ) {
            let source = cid.to_text(from);
            let converted = to.encode(&decode_any(&source).unwrap());
            prop_assert_eq!(decode_any(&converted).unwrap(), cid.to_bytes());
            // Converting back reproduces the source text.
            let back = from.encode(&decode_any(&converted).unwrap());
            prop_assert_eq!(back, source);
        }

        #[test]
        fn canonicalize_is_prefix_stable(cid in cid(), base in multibase()) {
            let z = cid.to_text(Multibase::Base58Btc);
            prop_assert_eq!(canonicalize(&cid.to_text(base)).unwrap(), z.clone());
            let with_path = format!("{}/some/path", cid.to_text(base));
            prop_assert_eq!(canonicalize(&with_path).unwrap(), z);
        }

        #[test]
        fn inspect_agrees_with_direct_rendering(cid in cid()) {
            let info = inspect(&cid.to_text(Multibase::Base32Rfc)).unwrap();
            prop_assert_eq!(info.z, cid.to_text(Multibase::Base58Btc));
            prop_assert_eq!(info.u, cid.to_text(Multibase::Base64Url));
            prop_assert_eq!(info.b, cid.to_text(Multibase::Base32Rfc));
            prop_assert_eq!(info.size, cid.size());
            prop_assert_eq!(info.mhash_b64url.is_some(), cid.size() != 0);
        }
    }
}
