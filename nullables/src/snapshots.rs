//! Programmable snapshot oracle.

use castellan_governance::{BalanceSnapshot, SnapshotOracle};
use castellan_types::Timestamp;

/// An oracle fed snapshots by the test itself.
///
/// Snapshots are kept ordered by capture time whatever order they are
/// pushed in, so lookups behave like a real history.
#[derive(Default)]
pub struct MemorySnapshotOracle {
    snapshots: Vec<BalanceSnapshot>,
}

impl MemorySnapshotOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: BalanceSnapshot) {
        self.snapshots.push(snapshot);
        self.snapshots.sort_by_key(|snap| snap.taken_at());
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}

impl SnapshotOracle for MemorySnapshotOracle {
    fn snapshot_at_or_before(&self, cutoff: Timestamp) -> Option<&BalanceSnapshot> {
        self.snapshots
            .iter()
            .rev()
            .find(|snap| snap.taken_at() <= cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn snap(id: u64, taken_at: u64) -> BalanceSnapshot {
        BalanceSnapshot::new(id, Timestamp::new(taken_at), HashMap::new())
    }

    #[test]
    fn empty_oracle_has_nothing() {
        let oracle = MemorySnapshotOracle::new();
        assert!(oracle.snapshot_at_or_before(Timestamp::new(u64::MAX)).is_none());
    }

    #[test]
    fn picks_most_recent_at_or_before_cutoff() {
        let mut oracle = MemorySnapshotOracle::new();
        oracle.push(snap(1, 100));
        oracle.push(snap(2, 200));
        oracle.push(snap(3, 300));

        assert_eq!(oracle.snapshot_at_or_before(Timestamp::new(250)).unwrap().id(), 2);
        assert_eq!(oracle.snapshot_at_or_before(Timestamp::new(200)).unwrap().id(), 2);
        assert!(oracle.snapshot_at_or_before(Timestamp::new(99)).is_none());
    }

    #[test]
    fn push_order_does_not_matter() {
        let mut oracle = MemorySnapshotOracle::new();
        oracle.push(snap(2, 200));
        oracle.push(snap(1, 100));
        assert_eq!(oracle.snapshot_at_or_before(Timestamp::new(150)).unwrap().id(), 1);
    }
}
