use castellan_types::{Address, CallError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("no snapshot old enough to anchor quorum exists")]
    NoEligibleSnapshot,

    #[error("quorum not met: weight {weight} below required {needed}")]
    QuorumNotMet { weight: u128, needed: u128 },

    #[error("no action with id {0}")]
    InvalidActionId(u64),

    #[error("action {0} was already executed")]
    AlreadyExecuted(u64),

    #[error("timelock delay not elapsed, {remaining_secs}s remaining")]
    DelayNotElapsed { remaining_secs: u64 },

    #[error("supplied target {got} does not match stored target {expected}")]
    TargetMismatch { expected: Address, got: Address },

    #[error("reentrant call rejected")]
    ReentrantCall,

    #[error("forwarded call failed: {0}")]
    Call(#[from] CallError),
}
