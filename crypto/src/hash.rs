//! Blake2b hashing and authorization-key derivation.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use castellan_types::{Address, PermissionHash, Selector};

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Derive the authorization key for (selector, caller, target).
///
/// The digest covers the three components in this exact order; a grant for
/// one triple says nothing about any other caller, operation, or target.
pub fn permission_digest(selector: Selector, caller: Address, target: Address) -> PermissionHash {
    PermissionHash::new(blake2b_256_multi(&[
        selector.as_bytes(),
        caller.as_bytes(),
        target.as_bytes(),
    ]))
}
