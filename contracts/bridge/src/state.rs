//! State definitions for the bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:bridge-orchestrator";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the final ledger sub-message of a locked call
pub const REPLY_SETTLE: u64 = 1;

#[cw_serde]
pub struct Config {
    /// Holder of the admin role
    pub admin: Addr,
    /// Custody ledger
    pub safe_handler: Option<Addr>,
    /// Request authorizer
    pub validator: Option<Addr>,
}

/// The balance-mutating call currently holding the execution lock
#[cw_serde]
pub enum InFlightCall {
    Deposit {
        depositor: Addr,
        token: String,
        amount: Uint128,
    },
    Withdraw {
        recipient: Addr,
        source_token: String,
        amount: Uint128,
        /// Ledger asked for the representative token at settlement
        safe_handler: Addr,
    },
    Burn {
        holder: Addr,
        token: String,
        amount: Uint128,
    },
    Release {
        recipient: Addr,
        token: String,
        amount: Uint128,
    },
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Accounts holding the manager role
pub const MANAGERS: Map<&Addr, bool> = Map::new("managers");

/// Present exactly while a balance-mutating call executes
pub const EXECUTION_LOCK: Item<InFlightCall> = Item::new("execution_lock");
