//! Error types for the bridge contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Access Errors
    // ========================================================================

    #[error("Access denied: caller is not {role}")]
    AccessDenied { role: String },

    // ========================================================================
    // Call Errors
    // ========================================================================

    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Unsupported operation: {reason}")]
    UnsupportedOperation { reason: String },

    #[error("Reentrancy violation: reentrant call")]
    ReentrancyViolation,

    // ========================================================================
    // Settlement Errors
    // ========================================================================

    #[error("No call in flight to settle")]
    NoCallInFlight,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
