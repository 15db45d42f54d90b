//! The self-authorized custody vault.
//!
//! Every privileged operation is gated by a frozen registry of
//! (selector, caller, target) digests. Raw call frames arrive through
//! [`Vault::dispatch`]; the generic gateway operation forwards a nested
//! payload back into the same dispatcher, deriving its authorization from
//! the exact bytes it forwards.

use castellan_codec::{payload_selector, uint_word, Frame};
use castellan_crypto::permission_digest;
use castellan_types::{
    Address, CallError, CallTarget, CustodyEvent, CustodyParams, EventBus, PermissionHash,
    Selector, Timestamp,
};

use crate::assets::AssetLedger;
use crate::error::VaultError;
use crate::ops;
use crate::permissions::PermissionSet;

/// An asset-custody vault with a one-shot permission registry, a
/// rate-limited withdrawal, a sweep, and a generic execution gateway.
pub struct Vault {
    address: Address,
    owner: Address,
    params: CustodyParams,
    permissions: Option<PermissionSet>,
    last_withdrawal_at: Timestamp,
    in_flight: bool,
    assets: Box<dyn AssetLedger>,
    events: EventBus,
}

impl Vault {
    /// Create a vault. The withdrawal cooldown is armed from construction:
    /// the first withdrawal only becomes possible one full cooldown after
    /// `now`.
    pub fn new(
        address: Address,
        owner: Address,
        params: CustodyParams,
        assets: Box<dyn AssetLedger>,
        now: Timestamp,
    ) -> Self {
        Self {
            address,
            owner,
            params,
            permissions: None,
            last_withdrawal_at: now,
            in_flight: false,
            assets,
            events: EventBus::new(),
        }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn is_initialized(&self) -> bool {
        self.permissions.is_some()
    }

    pub fn last_withdrawal_at(&self) -> Timestamp {
        self.last_withdrawal_at
    }

    /// Read access to the asset ledger the vault custodies through.
    pub fn assets(&self) -> &dyn AssetLedger {
        self.assets.as_ref()
    }

    /// The observer bus; subscribe before driving entry points.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Initialize the permission registry. Callable exactly once, by the
    /// owner fixed at construction; the set is frozen afterwards.
    pub fn grant(
        &mut self,
        caller: Address,
        grants: &[PermissionHash],
    ) -> Result<(), VaultError> {
        if self.permissions.is_some() {
            return Err(VaultError::AlreadyInitialized);
        }
        if caller != self.owner {
            return Err(VaultError::CallerNotAllowed);
        }
        let set = PermissionSet::freeze(grants.iter().copied());
        let count = set.len();
        self.permissions = Some(set);
        tracing::info!(vault = %self.address, grants = count, "permission set frozen");
        self.events.emit(&CustodyEvent::PermissionsFrozen {
            vault: self.address,
            grants: count,
        });
        Ok(())
    }

    /// Whether `caller` holds a grant for `selector` on `target`.
    ///
    /// Pure lookup; false before initialization; never fails.
    pub fn is_authorized(&self, selector: Selector, caller: Address, target: Address) -> bool {
        let digest = permission_digest(selector, caller, target);
        self.permissions
            .as_ref()
            .is_some_and(|set| set.contains(&digest))
    }

    /// Dispatch a raw call frame on behalf of `caller`.
    pub fn dispatch(
        &mut self,
        caller: Address,
        now: Timestamp,
        raw: &[u8],
    ) -> Result<Vec<u8>, VaultError> {
        let frame = Frame::parse(raw)?;
        match frame.selector() {
            ops::WITHDRAW => {
                let asset = frame.address_at(0)?;
                let recipient = frame.address_at(1)?;
                let amount = frame.uint_at(2)?;
                self.withdraw(caller, asset, recipient, amount, now)?;
                Ok(Vec::new())
            }
            ops::SWEEP => {
                let recipient = frame.address_at(0)?;
                let asset = frame.address_at(1)?;
                let amount = self.sweep(caller, recipient, asset)?;
                Ok(uint_word(amount).to_vec())
            }
            ops::EXECUTE => {
                let target = frame.address_at(0)?;
                let payload = frame.bytes_at(1)?;
                self.execute(caller, now, target, payload)
            }
            other => Err(VaultError::UnknownSelector(other)),
        }
    }

    /// The rate-limited privileged operation: move up to the per-call limit
    /// out of custody, at most once per cooldown period.
    pub fn withdraw(
        &mut self,
        caller: Address,
        asset: Address,
        recipient: Address,
        amount: u128,
        now: Timestamp,
    ) -> Result<(), VaultError> {
        if !self.is_authorized(ops::WITHDRAW, caller, self.address) {
            tracing::debug!(caller = %caller, "withdraw rejected: no grant");
            return Err(VaultError::CallerNotAllowed);
        }
        if amount > self.params.withdrawal_limit {
            return Err(VaultError::WithdrawalLimitExceeded {
                requested: amount,
                limit: self.params.withdrawal_limit,
            });
        }
        let cooldown = self.params.withdrawal_cooldown_secs;
        if !self.last_withdrawal_at.has_expired(cooldown, now) {
            return Err(VaultError::CooldownActive {
                remaining_secs: self.last_withdrawal_at.remaining(cooldown, now),
            });
        }

        // Effects before the asset movement; rolled back if the ledger
        // refuses so a failed withdrawal does not burn the cooldown.
        let previous = self.last_withdrawal_at;
        self.last_withdrawal_at = now;
        if let Err(err) = self.assets.transfer(asset, self.address, recipient, amount) {
            self.last_withdrawal_at = previous;
            return Err(err.into());
        }

        tracing::info!(
            vault = %self.address,
            asset = %asset,
            recipient = %recipient,
            amount,
            "withdrawal performed"
        );
        self.events.emit(&CustodyEvent::WithdrawalPerformed {
            vault: self.address,
            asset,
            recipient,
            amount,
            at: now,
        });
        Ok(())
    }

    /// Move the vault's entire balance of `asset` to `recipient`. Not rate
    /// limited; returns the swept amount.
    pub fn sweep(
        &mut self,
        caller: Address,
        recipient: Address,
        asset: Address,
    ) -> Result<u128, VaultError> {
        if !self.is_authorized(ops::SWEEP, caller, self.address) {
            tracing::debug!(caller = %caller, "sweep rejected: no grant");
            return Err(VaultError::CallerNotAllowed);
        }
        let amount = self.assets.balance_of(asset, self.address);
        self.assets
            .transfer(asset, self.address, recipient, amount)?;

        tracing::info!(
            vault = %self.address,
            asset = %asset,
            recipient = %recipient,
            amount,
            "funds swept"
        );
        self.events.emit(&CustodyEvent::FundsSwept {
            vault: self.address,
            asset,
            recipient,
            amount,
        });
        Ok(amount)
    }

    /// The generic gateway: forward `payload` as a raw self-call, provided
    /// `caller` holds a grant for the operation those exact bytes invoke.
    ///
    /// The selector is read from the decoded payload slice itself (the same
    /// slice that is forwarded), never from a fixed window of the outer
    /// frame. On any failure no call is made.
    pub fn execute(
        &mut self,
        caller: Address,
        now: Timestamp,
        target: Address,
        payload: &[u8],
    ) -> Result<Vec<u8>, VaultError> {
        let selector = payload_selector(payload)?;
        if !self.is_authorized(selector, caller, target) {
            tracing::debug!(caller = %caller, selector = %selector, "execute rejected: no grant");
            return Err(VaultError::CallerNotAllowed);
        }
        if target != self.address {
            return Err(VaultError::TargetNotSelf { target });
        }
        if self.in_flight {
            return Err(VaultError::ReentrantCall);
        }

        // Invariant: the bytes forwarded below are the bytes authorization
        // was derived from.
        assert_eq!(
            payload_selector(payload)?,
            selector,
            "forwarded selector diverged from authorized selector"
        );

        self.in_flight = true;
        let result = self.dispatch(caller, now, payload);
        self.in_flight = false;
        let output = result?;

        tracing::info!(
            vault = %self.address,
            target = %target,
            selector = %selector,
            "gateway payload executed"
        );
        self.events.emit(&CustodyEvent::PayloadExecuted {
            vault: self.address,
            target,
            selector,
        });
        Ok(output)
    }
}

impl CallTarget for Vault {
    fn address(&self) -> Address {
        self.address
    }

    fn call(
        &mut self,
        caller: Address,
        now: Timestamp,
        data: &[u8],
    ) -> Result<Vec<u8>, CallError> {
        self.dispatch(caller, now, data)
            .map_err(|err| CallError::Rejected {
                target: self.address,
                reason: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal in-crate ledger so unit tests stay free of dev-dependencies.
    #[derive(Default)]
    struct FlatLedger {
        balances: HashMap<(Address, Address), u128>,
    }

    impl AssetLedger for FlatLedger {
        fn balance_of(&self, asset: Address, holder: Address) -> u128 {
            self.balances.get(&(asset, holder)).copied().unwrap_or(0)
        }

        fn transfer(
            &mut self,
            asset: Address,
            from: Address,
            to: Address,
            amount: u128,
        ) -> Result<(), crate::assets::AssetError> {
            let available = self.balance_of(asset, from);
            if available < amount {
                return Err(crate::assets::AssetError::InsufficientBalance {
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

    const VAULT: Address = Address::new([0xAA; 20]);
    const OWNER: Address = Address::new([0x01; 20]);

    fn new_vault() -> Vault {
        Vault::new(
            VAULT,
            OWNER,
            CustodyParams::default(),
            Box::new(FlatLedger::default()),
            Timestamp::new(1_000),
        )
    }

    #[test]
    fn grant_is_one_shot() {
        let mut vault = new_vault();
        assert!(!vault.is_initialized());
        vault.grant(OWNER, &[PermissionHash::new([1; 32])]).unwrap();
        assert!(vault.is_initialized());

        // Any further call fails, whatever the input.
        assert!(matches!(
            vault.grant(OWNER, &[PermissionHash::new([2; 32])]),
            Err(VaultError::AlreadyInitialized)
        ));
        assert!(matches!(
            vault.grant(OWNER, &[]),
            Err(VaultError::AlreadyInitialized)
        ));
    }

    #[test]
    fn grant_rejects_non_owner() {
        let mut vault = new_vault();
        let stranger = Address::new([0x99; 20]);
        assert!(matches!(
            vault.grant(stranger, &[]),
            Err(VaultError::CallerNotAllowed)
        ));
        // A failed grant does not initialize.
        assert!(!vault.is_initialized());
        vault.grant(OWNER, &[]).unwrap();
    }

    #[test]
    fn is_authorized_false_before_initialization() {
        let vault = new_vault();
        assert!(!vault.is_authorized(ops::WITHDRAW, OWNER, VAULT));
    }

    #[test]
    fn cooldown_is_armed_from_construction() {
        let vault = new_vault();
        assert_eq!(vault.last_withdrawal_at(), Timestamp::new(1_000));
    }
}
