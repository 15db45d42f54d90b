//! The raw-call boundary between custody components.

use crate::{Address, Timestamp};
use thiserror::Error;

/// Failure of a forwarded raw call, as seen from outside the target.
///
/// Targets keep their own typed error enums; crossing the call boundary
/// erases them into a reason string so callers stay decoupled from every
/// target's error type.
#[derive(Clone, Debug, Error)]
pub enum CallError {
    #[error("call rejected by {target}: {reason}")]
    Rejected { target: Address, reason: String },
}

/// A component that accepts raw call frames at an address.
///
/// This is the seam through which the action queue forwards stored payloads
/// and through which the hosting platform routes calls between components.
/// Implementations dispatch on the frame's leading selector and must leave
/// their state untouched when they fail (atomic failure).
pub trait CallTarget {
    /// The address this component answers at.
    fn address(&self) -> Address;

    /// Dispatch a raw call frame on behalf of `caller`.
    fn call(&mut self, caller: Address, now: Timestamp, data: &[u8])
        -> Result<Vec<u8>, CallError>;
}
