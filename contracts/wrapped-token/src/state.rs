//! State of the representative token beyond what `cw20-base` stores

use common::TokenCapability;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:bridge-wrapped-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const MAX_DECIMALS: u8 = 18;

/// Sole minter and burner
pub const OWNER: Item<Addr> = Item::new("owner");

pub const CAPABILITY: Item<TokenCapability> = Item::new("capability");

/// holder => next permit nonce
pub const PERMIT_NONCES: Map<&Addr, u64> = Map::new("permit_nonces");

/// holder => key address allowed to sign permits for it
pub const PERMIT_SIGNERS: Map<&Addr, String> = Map::new("permit_signers");
