//! Balance snapshots — the quorum anchor for the action queue.
//!
//! A snapshot is an immutable point-in-time capture of holder balances and
//! total supply. Snapshots are produced by an external oracle (typically the
//! token ledger on a trusted cadence); the queue only consumes them.

use std::collections::HashMap;

use castellan_types::{Address, Timestamp};
use serde::{Deserialize, Serialize};

/// An immutable capture of balances and total supply at one point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    id: u64,
    taken_at: Timestamp,
    total_supply: u128,
    balances: HashMap<Address, u128>,
}

impl BalanceSnapshot {
    /// Capture a snapshot. Total supply is the sum of all balances.
    pub fn new(id: u64, taken_at: Timestamp, balances: HashMap<Address, u128>) -> Self {
        let total_supply = balances
            .values()
            .fold(0u128, |acc, amount| acc.saturating_add(*amount));
        Self {
            id,
            taken_at,
            total_supply,
            balances,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn taken_at(&self) -> Timestamp {
        self.taken_at
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Balance of `holder` at snapshot time, zero when unknown.
    pub fn balance_of(&self, holder: Address) -> u128 {
        self.balances.get(&holder).copied().unwrap_or(0)
    }

    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }
}

/// Supplies the snapshot quorum is computed against.
///
/// Implementations must return the most recent snapshot whose `taken_at`
/// does not exceed `cutoff`. The queue always passes a cutoff one full
/// delay period in the past, so weight manufactured just before a proposal
/// can never anchor its quorum.
pub trait SnapshotOracle {
    fn snapshot_at_or_before(&self, cutoff: Timestamp) -> Option<&BalanceSnapshot>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn total_supply_is_sum_of_balances() {
        let balances = HashMap::from([(addr(1), 600), (addr(2), 400)]);
        let snap = BalanceSnapshot::new(1, Timestamp::new(100), balances);
        assert_eq!(snap.total_supply(), 1_000);
        assert_eq!(snap.holder_count(), 2);
    }

    #[test]
    fn unknown_holder_has_zero_balance() {
        let snap = BalanceSnapshot::new(1, Timestamp::new(100), HashMap::new());
        assert_eq!(snap.balance_of(addr(9)), 0);
        assert_eq!(snap.total_supply(), 0);
    }

    #[test]
    fn balances_read_back_exactly() {
        let balances = HashMap::from([(addr(1), 123)]);
        let snap = BalanceSnapshot::new(7, Timestamp::new(50), balances);
        assert_eq!(snap.id(), 7);
        assert_eq!(snap.taken_at(), Timestamp::new(50));
        assert_eq!(snap.balance_of(addr(1)), 123);
    }
}
