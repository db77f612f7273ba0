//! Execute handlers for the bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `lock` - Execution lock, configured-contract lookups and settlement
//! - `outgoing` - Deposit and burn handlers (no signature required)
//! - `incoming` - Withdraw and release handlers (validator-signed)
//! - `config` - Safe handler and validator configuration (managers)
//! - `admin` - Manager role administration (admin)

mod admin;
mod config;
mod incoming;
mod lock;
mod outgoing;

pub use admin::*;
pub use config::*;
pub use incoming::*;
pub use lock::settle;
pub use outgoing::*;
