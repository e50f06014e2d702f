//! # Tessera CID Testkit
//!
//! Testing utilities for the Tessera CID codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known CID byte buffers with expected text forms,
//!   for cross-implementation verification
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: temp-file helpers for exercising the streaming hasher
//!
//! ## Golden Vectors
//!
//! ```rust
//! use tessera_cid_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     println!("{}: {}", vector.name, vector.z);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tessera_cid_testkit::generators;
//!
//! proptest! {
//!     #[test]
//!     fn cid_roundtrips(cid in generators::cid()) {
//!         let bytes = cid.to_bytes();
//!         prop_assert_eq!(tessera_cid::Cid::from_bytes(&bytes).unwrap(), cid);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;
