//! The frozen permission registry.

use std::collections::HashSet;

use castellan_types::PermissionHash;
use serde::{Deserialize, Serialize};

/// A construct-once set of authorization digests.
///
/// Built exactly once via [`PermissionSet::freeze`]; the type offers no
/// insertion or removal API afterwards, so the freeze invariant holds at the
/// type level rather than behind a runtime flag. Duplicate digests collapse.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PermissionSet {
    grants: HashSet<PermissionHash>,
}

impl PermissionSet {
    /// Build the frozen set from the full list of authorized digests.
    pub fn freeze(grants: impl IntoIterator<Item = PermissionHash>) -> Self {
        Self {
            grants: grants.into_iter().collect(),
        }
    }

    /// Whether `digest` was granted. Pure lookup; never fails.
    pub fn contains(&self, digest: &PermissionHash) -> bool {
        self.grants.contains(digest)
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_only_granted_digests() {
        let granted = PermissionHash::new([1; 32]);
        let other = PermissionHash::new([2; 32]);
        let set = PermissionSet::freeze([granted]);
        assert!(set.contains(&granted));
        assert!(!set.contains(&other));
    }

    #[test]
    fn duplicates_collapse() {
        let digest = PermissionHash::new([7; 32]);
        let set = PermissionSet::freeze([digest, digest, digest]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_set_contains_nothing() {
        let set = PermissionSet::freeze([]);
        assert!(set.is_empty());
        assert!(!set.contains(&PermissionHash::ZERO));
    }
}
