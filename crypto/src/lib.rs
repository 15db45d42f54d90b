//! Cryptographic utilities for the castellan custody suite.
//!
//! Authorization in castellan is hash-registry based: a grant is the
//! Blake2b-256 digest of (operation selector, authorized caller, target),
//! stored in a frozen set. This crate owns that derivation so the vault and
//! any off-line grant tooling agree on it byte for byte.

pub mod hash;

pub use hash::{blake2b_256, blake2b_256_multi, permission_digest};
