//! The token-accounting collaborator the vault moves assets through.
//!
//! Balance bookkeeping is not part of the custody core; the vault only
//! needs to read its own balance and order transfers out of custody. Hosts
//! supply the real ledger, tests use the in-memory one from
//! `castellan-nullables`.

use castellan_types::Address;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AssetError {
    #[error("insufficient balance of {asset}: need {needed}, have {available}")]
    InsufficientBalance {
        asset: Address,
        needed: u128,
        available: u128,
    },
}

/// Fungible balance bookkeeping, keyed by (asset, holder).
///
/// Implementations must be atomic per call: a failed transfer leaves every
/// balance unchanged.
pub trait AssetLedger {
    /// Current balance of `holder` in `asset`, zero when unknown.
    fn balance_of(&self, asset: Address, holder: Address) -> u128;

    /// Move `amount` of `asset` from `from` to `to`.
    fn transfer(
        &mut self,
        asset: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<(), AssetError>;
}
