use common::SignatureError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Base(#[from] cw20_base::ContractError),

    #[error("Access denied: only the token owner can {action}")]
    AccessDenied { action: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Unsupported operation: permit is not supported")]
    PermitNotSupported,

    // ========================================================================
    // Permit Authorization
    // ========================================================================

    #[error("Authorization error: permit expired at {deadline}")]
    PermitExpired { deadline: u64 },

    #[error("Authorization error: no permit signer registered for {owner}")]
    PermitSignerNotRegistered { owner: String },

    #[error("Authorization error: permit signature does not match owner")]
    PermitSignatureMismatch,

    #[error("Authorization error: {0}")]
    InvalidSignature(#[from] SignatureError),
}
