//! # Tessera CID
//!
//! Content identifiers for the Tessera content-addressed storage network.
//!
//! This crate is pure computation over byte buffers: no networking, no
//! storage, and no I/O beyond the file-hashing convenience functions.
//!
//! ## Key Types
//!
//! - [`Blake3Hash`] - 32-byte content digest
//! - [`Multihash`] - digest tagged with its hash function code
//! - [`Cid`] - typed content identifier with an optional raw size
//! - [`Multibase`] - the three text alphabets (`z`, `u`, `b`)
//!
//! ## Wire Format
//!
//! ```text
//! type (1 byte) | multihash (33 bytes: 0x1f + 32-byte digest) | size (0..8 bytes, LE, minimal, raw only)
//! ```
//!
//! A CID renders to text as the wire bytes in any of the three multibase
//! alphabets, and the forms convert freely:
//!
//! ```rust
//! use tessera_cid::{hash_bytes, Cid, Multibase, Multihash};
//!
//! let content = b"hello tessera";
//! let cid = Cid::new_raw(Multihash::wrap(hash_bytes(content)), content.len() as u64);
//!
//! let z = cid.to_text(Multibase::Base58Btc);
//! assert!(z.starts_with('z'));
//! assert_eq!(Cid::from_text(&z).unwrap(), cid);
//! ```

pub mod cid;
pub mod convert;
pub mod error;
pub mod hash;
pub mod multibase;
pub mod multihash;
pub mod revision;

pub use cid::{decode_size, encode_size, Cid, CidType, CID_MIN_LEN};
pub use convert::{canonicalize, decode_any, inspect, mhash_base64url, CidInfo};
pub use error::CidError;
pub use hash::{hash_bytes, hash_file, hash_reader, Blake3Hash, HashEngine, HASH_CHUNK_SIZE};
pub use multibase::Multibase;
pub use multihash::{HashFunction, Multihash, MULTIHASH_LEN};
