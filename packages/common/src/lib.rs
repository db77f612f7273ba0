//! Common - Shared Types and Utilities for the Lock-Mint Bridge Contracts
//!
//! This package provides what the four bridge contracts share:
//! - `hash` / `eip712` - typed-data digests of signed requests and permits
//! - `signature` - secp256k1 signer recovery to key addresses
//! - `token` - token classification and capability types
//! - `bridge`, `safe_handler`, `validator`, `wrapped_token` - the message
//!   interface of each contract, so contracts can call each other without
//!   depending on each other's code

pub mod bridge;
pub mod eip712;
pub mod hash;
pub mod safe_handler;
pub mod signature;
pub mod token;
pub mod validator;
pub mod wrapped_token;

pub use eip712::{Domain, Permit, WithdrawalRequest};
pub use hash::{bytes32_to_hex, keccak256};
pub use signature::{recover_signer, SignatureError};
pub use token::{TokenCapability, TokenRecord, TokenType};
