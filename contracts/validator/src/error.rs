use common::SignatureError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Authorization error: only bridge can verify request")]
    Unauthorized,

    #[error("Authorization error: signature does not match request")]
    SignatureMismatch,

    #[error("Authorization error: invalid nonce: expected {expected}, got {got}")]
    NonceMismatch { expected: u64, got: u64 },

    #[error("Authorization error: {0}")]
    InvalidSignature(#[from] SignatureError),
}
