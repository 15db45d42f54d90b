//! Timelocked collective authorization.
//!
//! Operations that no single caller should trigger immediately are queued
//! as actions: proposing takes snapshot-anchored stake weight meeting a
//! quorum fraction, and execution waits out a mandatory delay before the
//! stored payload is forwarded as a raw call. The queue and the vault are
//! independent trust domains; they compose only through the `CallTarget`
//! seam and whatever grants name the queue's address.

pub mod error;
pub mod queue;
pub mod snapshot;

pub use error::QueueError;
pub use queue::{quorum_threshold, Action, ActionQueue};
pub use snapshot::{BalanceSnapshot, SnapshotOracle};
