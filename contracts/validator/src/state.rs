use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:bridge-validator";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Only caller allowed to submit requests
    pub bridge: Addr,
    /// Lowercase key address of the attester
    pub signer: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// subject => next expected nonce (absent means 0)
pub const NONCES: Map<&Addr, u64> = Map::new("nonces");
