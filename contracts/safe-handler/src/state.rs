//! State definitions for the safe handler contract

use common::TokenRecord;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:bridge-safe-handler";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the representative token instantiation
pub const REPLY_DEPLOY_WRAPPED: u64 = 1;

/// Decimals of every representative token
pub const WRAPPED_TOKEN_DECIMALS: u8 = 18;

#[cw_serde]
pub struct Config {
    /// Only accepted caller
    pub bridge: Addr,
    /// Code id instantiated for new representative tokens
    pub wrapped_token_code_id: u64,
}

/// Withdrawal waiting for its representative token to be instantiated
#[cw_serde]
pub struct PendingDeployment {
    pub source_token: String,
    pub recipient: Addr,
    pub amount: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// local token address => classification
pub const TOKEN_RECORDS: Map<&str, TokenRecord> = Map::new("token_records");

/// (depositor, token) => locked amount
pub const LOCKED_BALANCES: Map<(&Addr, &str), Uint128> = Map::new("locked_balances");

/// source token (other chain) => representative token; written once per key
pub const WRAPPED_TOKENS: Map<&str, Addr> = Map::new("wrapped_tokens");

/// Set between dispatching an instantiation and handling its reply
pub const PENDING_DEPLOYMENT: Item<PendingDeployment> = Item::new("pending_deployment");
