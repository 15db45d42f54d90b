//! Events emitted by custody components for external observers.

use crate::{Address, Selector, Timestamp};

/// Custody-level events observers can subscribe to via the [`EventBus`].
#[derive(Clone, Debug)]
pub enum CustodyEvent {
    /// A vault's permission set was initialized and frozen.
    PermissionsFrozen {
        vault: Address,
        grants: usize,
    },
    /// A rate-limited withdrawal moved custodied assets.
    WithdrawalPerformed {
        vault: Address,
        asset: Address,
        recipient: Address,
        amount: u128,
        at: Timestamp,
    },
    /// A sweep moved a vault's entire balance of one asset.
    FundsSwept {
        vault: Address,
        asset: Address,
        recipient: Address,
        amount: u128,
    },
    /// The gateway forwarded an authorized payload.
    PayloadExecuted {
        vault: Address,
        target: Address,
        selector: Selector,
    },
    /// A new action entered the timelocked queue.
    ActionProposed {
        id: u64,
        proposer: Address,
        target: Address,
    },
    /// A queued action was executed after its delay.
    ActionExecuted {
        id: u64,
        target: Address,
    },
}

/// Synchronous fan-out event bus.
///
/// Listeners are invoked inline on the emitting call; keep handlers fast so
/// they do not stall the entry point that emitted the event.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&CustodyEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&CustodyEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &CustodyEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
