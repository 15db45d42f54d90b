//! Nullable infrastructure for deterministic testing.
//!
//! Every collaborator the custody core consumes — clock, asset ledger,
//! snapshot oracle, call targets — is abstracted behind a trait or an
//! explicit parameter. This crate provides implementations that return
//! deterministic values, can be controlled programmatically, and never
//! touch the filesystem or network. Swap them in wherever a test needs to
//! hold the world still.

pub mod assets;
pub mod clock;
pub mod snapshots;
pub mod targets;

pub use assets::MemoryAssetLedger;
pub use clock::ManualClock;
pub use snapshots::MemorySnapshotOracle;
pub use targets::{RecordedCall, RecordingTarget};
