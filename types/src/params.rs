//! Custody parameters shared by the vault and the action queue.
//!
//! Parameters are fixed at construction of each component; there is no
//! runtime re-configuration surface. Can be loaded from TOML via
//! [`CustodyParams::from_toml_str`] or built programmatically (e.g. for
//! tests).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One whole token in raw units (18 decimal places).
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Parameters governing the rate limits and thresholds of the custody suite.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustodyParams {
    /// Maximum raw amount a single rate-limited withdrawal may move.
    #[serde(default = "default_withdrawal_limit")]
    pub withdrawal_limit: u128,

    /// Minimum seconds between successive rate-limited withdrawals.
    #[serde(default = "default_withdrawal_cooldown")]
    pub withdrawal_cooldown_secs: u64,

    /// Seconds a queued action must wait between proposal and execution.
    #[serde(default = "default_action_delay")]
    pub action_delay_secs: u64,

    /// Minimum proposer weight as basis points of snapshot total supply.
    #[serde(default = "default_quorum_bps")]
    pub quorum_bps: u32,
}

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to parse params TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid params: {reason}")]
    Invalid { reason: String },
}

impl CustodyParams {
    /// Load parameters from a TOML document, applying defaults for missing
    /// fields and validating the result.
    pub fn from_toml_str(raw: &str) -> Result<Self, ParamsError> {
        let params: CustodyParams = toml::from_str(raw)?;
        params.validate()?;
        Ok(params)
    }

    /// Reject parameter combinations that cannot gate anything sensibly.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.quorum_bps == 0 || self.quorum_bps > 10_000 {
            return Err(ParamsError::Invalid {
                reason: format!("quorum_bps must be in 1..=10000, got {}", self.quorum_bps),
            });
        }
        if self.withdrawal_limit == 0 {
            return Err(ParamsError::Invalid {
                reason: "withdrawal_limit must be nonzero".into(),
            });
        }
        Ok(())
    }
}

impl Default for CustodyParams {
    fn default() -> Self {
        Self {
            withdrawal_limit: default_withdrawal_limit(),
            withdrawal_cooldown_secs: default_withdrawal_cooldown(),
            action_delay_secs: default_action_delay(),
            quorum_bps: default_quorum_bps(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_withdrawal_limit() -> u128 {
    ONE_TOKEN
}

fn default_withdrawal_cooldown() -> u64 {
    15 * 24 * 60 * 60 // 15 days
}

fn default_action_delay() -> u64 {
    2 * 24 * 60 * 60 // 2 days
}

fn default_quorum_bps() -> u32 {
    5_000 // half of snapshot total supply
}
