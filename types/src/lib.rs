//! Fundamental types for the castellan custody suite.
//!
//! Everything here is shared by at least two member crates: fixed-width
//! identifiers, timestamps, the custody parameters, the raw-call seam, and
//! the observer event bus. Domain logic lives in the `vault` and
//! `governance` crates.

pub mod address;
pub mod call;
pub mod events;
pub mod hash;
pub mod params;
pub mod selector;
pub mod time;

pub use address::Address;
pub use call::{CallError, CallTarget};
pub use events::{CustodyEvent, EventBus};
pub use hash::PermissionHash;
pub use params::{CustodyParams, ParamsError, ONE_TOKEN};
pub use selector::Selector;
pub use time::Timestamp;
