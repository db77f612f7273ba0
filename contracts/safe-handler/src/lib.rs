//! Safe Handler - Asset Custody Ledger
//!
//! The only component that moves locked balances or mints and burns
//! representative tokens. Every execute message is accepted from the
//! bridge alone.
//!
//! # Native tokens (source chain)
//! - `Deposit` pulls tokens into custody and credits the depositor
//! - `Release` debits the depositor and returns tokens
//!
//! # Representative tokens (target chain)
//! - `Withdraw` mints, deploying the representative token on first use
//! - `Burn` destroys tokens from the holder's allowance to this ledger

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
