//! In-memory asset ledger.

use std::collections::HashMap;

use castellan_types::Address;
use castellan_vault::{AssetError, AssetLedger};

/// A programmable in-memory balance book.
///
/// Mint whatever a scenario needs, then hand it to the vault; balances stay
/// readable through `AssetLedger::balance_of` afterwards.
#[derive(Default)]
pub struct MemoryAssetLedger {
    balances: HashMap<(Address, Address), u128>,
}

impl MemoryAssetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `holder` with `amount` of `asset` out of thin air.
    pub fn mint(&mut self, asset: Address, holder: Address, amount: u128) {
        *self.balances.entry((asset, holder)).or_default() += amount;
    }
}

impl AssetLedger for MemoryAssetLedger {
    fn balance_of(&self, asset: Address, holder: Address) -> u128 {
        self.balances.get(&(asset, holder)).copied().unwrap_or(0)
    }

    fn transfer(
        &mut self,
        asset: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), AssetError> {
        let available = self.balance_of(asset, from);
        if available < amount {
            return Err(AssetError::InsufficientBalance {
                asset,
                needed: amount,
                available,
            });
        }
        *self.balances.entry((asset, from)).or_default() -= amount;
        *self.balances.entry((asset, to)).or_default() += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    #[test]
    fn mint_and_transfer() {
        let mut ledger = MemoryAssetLedger::new();
        ledger.mint(addr(1), addr(10), 1_000);
        ledger.transfer(addr(1), addr(10), addr(11), 300).unwrap();
        assert_eq!(ledger.balance_of(addr(1), addr(10)), 700);
        assert_eq!(ledger.balance_of(addr(1), addr(11)), 300);
    }

    #[test]
    fn overdraft_rejected_and_balances_untouched() {
        let mut ledger = MemoryAssetLedger::new();
        ledger.mint(addr(1), addr(10), 100);
        let err = ledger.transfer(addr(1), addr(10), addr(11), 200);
        assert!(matches!(
            err,
            Err(AssetError::InsufficientBalance { needed: 200, available: 100, .. })
        ));
        assert_eq!(ledger.balance_of(addr(1), addr(10)), 100);
        assert_eq!(ledger.balance_of(addr(1), addr(11)), 0);
    }
}
