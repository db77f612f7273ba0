//! Message interface of the representative token contract
//!
//! The token is a CW20; the standard messages serialize exactly like
//! `cw20::Cw20ExecuteMsg` / `cw20::Cw20QueryMsg` so any CW20 client can
//! drive it.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Expiration, MinterResponse};

use crate::token::TokenCapability;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Sole minter and the only account allowed to `BurnFrom`
    pub owner: String,
    pub capability: TokenCapability,
    #[serde(default)]
    pub initial_balances: Vec<Cw20Coin>,
}

#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Owner only
    Mint {
        recipient: String,
        amount: Uint128,
    },
    /// Owner only; consumes `owner`'s allowance to the caller
    BurnFrom {
        owner: String,
        amount: Uint128,
    },
    /// Bind the caller's account to a permit signing key (`0x` + 40 hex chars)
    RegisterPermitSigner {
        signer: String,
    },
    /// Set `spender`'s allowance over `owner`'s balance from a signed
    /// permit. Only available on `Permit` capability tokens.
    ///
    /// The signature must come from the key `owner` bound with
    /// `RegisterPermitSigner`; until that message has been sent every permit
    /// for `owner` is rejected with `PermitSignerNotRegistered`.
    Permit {
        owner: String,
        spender: String,
        amount: Uint128,
        deadline: u64,
        v: u8,
        r: Binary,
        s: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(Option<MinterResponse>)]
    Minter {},

    #[returns(OwnerResponse)]
    Owner {},

    #[returns(CapabilityResponse)]
    Capability {},

    /// Next permit nonce of `owner`
    #[returns(PermitNonceResponse)]
    PermitNonce { owner: String },

    #[returns(PermitSignerResponse)]
    PermitSigner { owner: String },
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct CapabilityResponse {
    pub capability: TokenCapability,
}

#[cw_serde]
pub struct PermitNonceResponse {
    pub owner: Addr,
    pub nonce: u64,
}

#[cw_serde]
pub struct PermitSignerResponse {
    pub owner: Addr,
    pub signer: Option<String>,
}
