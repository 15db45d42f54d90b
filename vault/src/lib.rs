//! Self-authorized custody vault.
//!
//! The vault executes privileged operations only for pre-approved
//! (selector, caller, target) triples, frozen into a one-shot permission
//! registry at initialization. Three operations are dispatchable from raw
//! call frames: a rate-limited `withdraw`, a `sweep` of one asset's whole
//! balance, and the generic `execute` gateway that forwards a nested
//! payload back into the vault under the authorization of the exact bytes
//! it forwards.

pub mod assets;
pub mod error;
pub mod ops;
pub mod permissions;
pub mod vault;

pub use assets::{AssetError, AssetLedger};
pub use error::VaultError;
pub use permissions::PermissionSet;
pub use vault::Vault;
