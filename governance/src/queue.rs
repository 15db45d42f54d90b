//! The timelocked action queue.
//!
//! Anyone with enough snapshot weight may queue an action; after the delay
//! elapses anyone may trigger execution. Each action executes at most once;
//! there is no cancellation and no other transition.

use std::collections::BTreeMap;

use castellan_types::{
    Address, CallTarget, CustodyEvent, CustodyParams, EventBus, Timestamp,
};
use serde::{Deserialize, Serialize};

use crate::error::QueueError;
use crate::snapshot::SnapshotOracle;

/// A queued privileged operation.
///
/// The only mutation an action ever sees is `executed_at` going from `None`
/// to `Some`; everything else is fixed at proposal time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Action {
    pub id: u64,
    pub proposer: Address,
    pub target: Address,
    pub payload: Vec<u8>,
    pub proposed_at: Timestamp,
    pub executed_at: Option<Timestamp>,
}

impl Action {
    pub fn is_executed(&self) -> bool {
        self.executed_at.is_some()
    }
}

/// Minimum weight needed to meet quorum: ⌈total · bps / 10000⌉.
///
/// Split arithmetic keeps the product inside u128 for any total supply.
pub fn quorum_threshold(total_supply: u128, quorum_bps: u32) -> u128 {
    let bps = quorum_bps as u128;
    let whole = total_supply / 10_000;
    let rem = total_supply % 10_000;
    whole.saturating_mul(bps) + (rem * bps).div_ceil(10_000)
}

/// The sequential, timelocked proposal/execution log.
pub struct ActionQueue {
    address: Address,
    params: CustodyParams,
    next_id: u64,
    actions: BTreeMap<u64, Action>,
    in_flight: bool,
    events: EventBus,
}

impl ActionQueue {
    pub fn new(address: Address, params: CustodyParams) -> Self {
        Self {
            address,
            params,
            next_id: 1,
            actions: BTreeMap::new(),
            in_flight: false,
            events: EventBus::new(),
        }
    }

    /// The address forwarded calls are attributed to.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Id the next successful proposal will receive.
    pub fn next_action_id(&self) -> u64 {
        self.next_id
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn action(&self, id: u64) -> Option<&Action> {
        self.actions.get(&id)
    }

    /// The observer bus; subscribe before driving entry points.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Queue an action, provided the proposer's weight in an eligible
    /// snapshot meets quorum.
    ///
    /// Only a snapshot taken at least one full delay period before `now`
    /// is eligible, so weight borrowed and snapshotted inside the proposing
    /// transaction can never count.
    pub fn propose(
        &mut self,
        proposer: Address,
        target: Address,
        payload: Vec<u8>,
        oracle: &dyn SnapshotOracle,
        now: Timestamp,
    ) -> Result<u64, QueueError> {
        let cutoff = now.rewound(self.params.action_delay_secs);
        let snapshot = oracle
            .snapshot_at_or_before(cutoff)
            .ok_or(QueueError::NoEligibleSnapshot)?;
        let weight = snapshot.balance_of(proposer);
        let needed = quorum_threshold(snapshot.total_supply(), self.params.quorum_bps);
        if weight < needed {
            tracing::debug!(proposer = %proposer, weight, needed, "proposal rejected: quorum");
            return Err(QueueError::QuorumNotMet { weight, needed });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.actions.insert(
            id,
            Action {
                id,
                proposer,
                target,
                payload,
                proposed_at: now,
                executed_at: None,
            },
        );

        tracing::info!(
            id,
            proposer = %proposer,
            target = %target,
            snapshot = snapshot.id(),
            "action proposed"
        );
        self.events.emit(&CustodyEvent::ActionProposed {
            id,
            proposer,
            target,
        });
        Ok(id)
    }

    /// Execute a queued action once its delay has elapsed, forwarding the
    /// stored payload to `target` with the queue as caller.
    ///
    /// The action is marked executed before the forwarded call and unmarked
    /// if that call fails, so a failed execution leaves the queue exactly as
    /// it was and the action can be retried.
    pub fn execute_action(
        &mut self,
        id: u64,
        target: &mut dyn CallTarget,
        now: Timestamp,
    ) -> Result<Vec<u8>, QueueError> {
        if self.in_flight {
            return Err(QueueError::ReentrantCall);
        }
        let action = self
            .actions
            .get_mut(&id)
            .ok_or(QueueError::InvalidActionId(id))?;
        if action.executed_at.is_some() {
            return Err(QueueError::AlreadyExecuted(id));
        }
        let delay = self.params.action_delay_secs;
        if !action.proposed_at.has_expired(delay, now) {
            return Err(QueueError::DelayNotElapsed {
                remaining_secs: action.proposed_at.remaining(delay, now),
            });
        }
        if target.address() != action.target {
            return Err(QueueError::TargetMismatch {
                expected: action.target,
                got: target.address(),
            });
        }

        // Effects before the interaction.
        action.executed_at = Some(now);
        let stored_target = action.target;
        let payload = action.payload.clone();

        self.in_flight = true;
        let result = target.call(self.address, now, &payload);
        self.in_flight = false;

        match result {
            Ok(output) => {
                tracing::info!(id, target = %stored_target, "action executed");
                self.events.emit(&CustodyEvent::ActionExecuted {
                    id,
                    target: stored_target,
                });
                Ok(output)
            }
            Err(err) => {
                // Forwarded failure must leave the queue untouched.
                if let Some(action) = self.actions.get_mut(&id) {
                    action.executed_at = None;
                }
                tracing::debug!(id, error = %err, "action execution failed");
                Err(QueueError::Call(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quorum_threshold_half() {
        assert_eq!(quorum_threshold(1_000, 5_000), 500);
        assert_eq!(quorum_threshold(1_001, 5_000), 501); // rounds up
        assert_eq!(quorum_threshold(0, 5_000), 0);
    }

    #[test]
    fn quorum_threshold_full_supply() {
        assert_eq!(quorum_threshold(1_000, 10_000), 1_000);
    }

    #[test]
    fn quorum_threshold_does_not_overflow_near_max() {
        // total near u128::MAX must not overflow the split arithmetic.
        let total = u128::MAX - 5;
        let threshold = quorum_threshold(total, 10_000);
        assert!(threshold >= total - 5);
    }

    #[test]
    fn ids_start_at_one() {
        let queue = ActionQueue::new(Address::new([1; 20]), CustodyParams::default());
        assert_eq!(queue.next_action_id(), 1);
        assert_eq!(queue.action_count(), 0);
    }
}
