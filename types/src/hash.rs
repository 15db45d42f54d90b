//! Authorization digests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte authorization digest binding (selector, caller, target).
///
/// Produced by `castellan-crypto::permission_digest` and looked up in a
/// frozen permission set. The digest is opaque here; only equality and
/// hashing matter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionHash([u8; 32]);

impl PermissionHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for PermissionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PermissionHash({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for PermissionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_zero() {
        assert!(PermissionHash::ZERO.is_zero());
        assert!(!PermissionHash::new([7; 32]).is_zero());
    }
}
