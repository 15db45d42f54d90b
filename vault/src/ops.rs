//! Operation selectors the vault dispatches on.

use castellan_types::Selector;

/// Rate-limited withdrawal. Frame arguments: (asset, recipient, amount).
pub const WITHDRAW: Selector = Selector::new([0xd9, 0xca, 0xed, 0x12]);

/// Sweep the vault's entire balance of one asset. Frame arguments:
/// (recipient, asset).
pub const SWEEP: Selector = Selector::new([0x85, 0xfb, 0x70, 0x9d]);

/// Generic self-call gateway. Frame arguments: (target, payload bytes).
pub const EXECUTE: Selector = Selector::new([0x1c, 0xff, 0x79, 0xcd]);
