//! Error types for the safe handler contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Access denied: msg.sender must be a bridge")]
    AccessDenied,

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Token type mismatch: {reason}")]
    TokenTypeMismatch { reason: String },

    #[error("Insufficient locked balance: requested {requested}, locked {locked}")]
    InsufficientLockedBalance { requested: Uint128, locked: Uint128 },

    // ========================================================================
    // Representative Token Deployment
    // ========================================================================

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Representative token deployment failed: {reason}")]
    DeploymentFailed { reason: String },
}
