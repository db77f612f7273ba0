//! Validator - Signed Request Authorizer
//!
//! Accepts a withdrawal or release request only when it carries a
//! signature by the configured attester key over the request's typed-data
//! digest, and its nonce equals the subject's current nonce.
//!
//! # Security
//! - Only the bridge may submit requests; direct calls are rejected
//! - The digest domain binds signatures to this contract and chain id
//! - Each successful verification advances the subject's nonce, so a
//!   signature verifies at most once

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
