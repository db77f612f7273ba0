//! Bridge - Lock-Mint / Burn-Release Orchestrator
//!
//! The single user entry point of a chain's bridge deployment. It wires
//! the custody ledger (safe handler) and the request authorizer
//! (validator) together.
//!
//! # Source chain
//! - `Deposit` / `DepositWithPermit` lock native tokens in the ledger
//! - `Release` returns them against a validator-signed request
//!
//! # Target chain
//! - `Withdraw` mints representative tokens against a signed request
//! - `Burn` / `BurnWithPermit` destroy them
//!
//! # Security
//! - Every balance-mutating call holds an execution lock from entry until
//!   its final ledger sub-message has completed; a nested call fails with
//!   a reentrancy violation and reverts the whole transaction
//! - Configuration is restricted to managers, roles to the admin

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
