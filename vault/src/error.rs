use castellan_codec::CodecError;
use castellan_types::{Address, Selector};
use thiserror::Error;

use crate::assets::AssetError;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("caller is not allowed to perform this action")]
    CallerNotAllowed,

    #[error("permission set is already initialized")]
    AlreadyInitialized,

    #[error("withdrawal of {requested} exceeds the per-call limit of {limit}")]
    WithdrawalLimitExceeded { requested: u128, limit: u128 },

    #[error("withdrawal cooldown active for another {remaining_secs}s")]
    CooldownActive { remaining_secs: u64 },

    #[error("execute may only forward to the vault itself, not {target}")]
    TargetNotSelf { target: Address },

    #[error("reentrant call rejected")]
    ReentrantCall,

    #[error("unknown operation selector {0}")]
    UnknownSelector(Selector),

    #[error("malformed call frame: {0}")]
    Codec(#[from] CodecError),

    #[error("asset ledger refused the transfer: {0}")]
    Assets(#[from] AssetError),
}
