//! Error types for the contracts crate.

use alloy_primitives::Address;
use tarot_rs_planner::PlannerError;
use thiserror::Error;

/// Errors that can occur when using contract clients.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// View call failed.
    #[error("Call to {target} failed: {message}")]
    Call { target: Address, message: String },

    /// Transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool state could not be turned into an observation.
    #[error("Invalid pool state: {0}")]
    Observation(#[from] PlannerError),

    /// Invalid private key.
    #[error("Invalid private key")]
    InvalidPrivateKey,
}

impl ContractError {
    pub(crate) fn call(target: Address, what: &str, err: impl std::fmt::Display) -> Self {
        Self::Call {
            target,
            message: format!("Failed to get {}: {}", what, err),
        }
    }
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
