//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the text forms of known CID byte buffers so that every
//! implementation of the format produces identical strings. The expected
//! values are derived by hand from the wire layout and the RFC 4648 /
//! base58btc alphabets, not generated by this codec.

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct CidVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Binary CID, hex encoded.
    pub cid_hex: String,
    /// Expected `z` form; empty when the vector only pins u/b.
    pub z: String,
    /// Expected `u` form.
    pub u: String,
    /// Expected `b` form.
    pub b: String,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<CidVector> {
    let zero_digest = "1f".to_string() + &"00".repeat(32);
    vec![
        CidVector {
            name: "raw CID, zero digest, no size field",
            cid_hex: format!("26{}", zero_digest),
            // base58 of a 272-bit number has no hand-checkable short form;
            // the z form is pinned by round-trip only.
            z: String::new(),
            u: format!("uJh8A{}", "A".repeat(42)),
            b: format!("beypq{}", "a".repeat(51)),
        },
        CidVector {
            name: "raw CID, zero digest, size 1",
            cid_hex: format!("26{}01", zero_digest),
            z: String::new(),
            u: format!("uJh8A{}Q", "A".repeat(42)),
            b: format!("beypq{}b", "a".repeat(51)),
        },
        CidVector {
            name: "resolver CID, zero digest",
            cid_hex: format!("25{}", zero_digest),
            z: String::new(),
            // 0x25 0x1f 0x00 packs to the sextets 9, 17, 60, 0.
            u: format!("uJR8A{}", "A".repeat(42)),
            // 0x25 0x1f 0x00.. packs to the quintets 4, 20, 15, 16, 0...
            b: format!("beupq{}", "a".repeat(51)),
        },
    ]
}

/// Decode a vector's binary form.
pub fn vector_bytes(vector: &CidVector) -> Vec<u8> {
    hex::decode(&vector.cid_hex).expect("vector hex is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_cid::{decode_any, Cid, Multibase};

    #[test]
    fn test_vectors_parse_and_reencode() {
        for vector in all_vectors() {
            let bytes = vector_bytes(&vector);
            let cid = Cid::from_bytes(&bytes).expect(vector.name);
            assert_eq!(cid.to_bytes(), bytes, "{}", vector.name);
        }
    }

    #[test]
    fn test_vectors_match_expected_text_forms() {
        for vector in all_vectors() {
            let cid = Cid::from_bytes(&vector_bytes(&vector)).unwrap();
            if !vector.z.is_empty() {
                assert_eq!(cid.to_text(Multibase::Base58Btc), vector.z, "{}", vector.name);
            }
            assert_eq!(cid.to_text(Multibase::Base64Url), vector.u, "{}", vector.name);
            assert_eq!(cid.to_text(Multibase::Base32Rfc), vector.b, "{}", vector.name);
        }
    }

    #[test]
    fn test_vectors_decode_back_to_bytes() {
        for vector in all_vectors() {
            let bytes = vector_bytes(&vector);
            assert_eq!(decode_any(&vector.u).unwrap(), bytes, "{}", vector.name);
            assert_eq!(decode_any(&vector.b).unwrap(), bytes, "{}", vector.name);

            let z = Cid::from_bytes(&bytes).unwrap().to_text(Multibase::Base58Btc);
            assert_eq!(decode_any(&z).unwrap(), bytes, "{}", vector.name);
        }
    }
}
