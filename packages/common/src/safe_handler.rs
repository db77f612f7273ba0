//! Message interface of the asset custody ledger contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::token::TokenRecord;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Bridge contract, the only caller accepted by every execute message
    pub bridge: String,
    /// Code id used to instantiate representative tokens
    pub wrapped_token_code_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Lock `amount` of a native token pulled from `depositor`
    Deposit {
        depositor: String,
        token: String,
        amount: Uint128,
    },
    /// Unlock `amount` of a native token back to `depositor`
    Release {
        depositor: String,
        token: String,
        amount: Uint128,
    },
    /// Mint the representative of `source_token` to `recipient`, deploying
    /// the representative token on first use
    Withdraw {
        recipient: String,
        source_token: String,
        symbol: String,
        name: String,
        is_permit: bool,
        amount: Uint128,
    },
    /// Destroy `amount` of a representative token held by `holder`
    Burn {
        holder: String,
        token: String,
        amount: Uint128,
    },
    /// Submit a signed permit granting this ledger an allowance of `amount`
    /// over `owner`'s balance of `token`
    Permit {
        token: String,
        owner: String,
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
    #[returns(ConfigResponse)]
    Config {},

    /// Classification of a local token
    #[returns(TokenInfoResponse)]
    TokenInfo { token: String },

    /// Amount of `token` locked on behalf of `depositor`
    #[returns(DepositedAmountResponse)]
    DepositedAmount { depositor: String, token: String },

    /// Representative token registered for `source_token`
    #[returns(WrappedTokenResponse)]
    WrappedToken { source_token: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub bridge: Addr,
    pub wrapped_token_code_id: u64,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub token: String,
    /// `None` while the token has never been seen by the ledger
    pub record: Option<TokenRecord>,
}

#[cw_serde]
pub struct DepositedAmountResponse {
    pub depositor: Addr,
    pub token: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct WrappedTokenResponse {
    pub source_token: String,
    pub wrapped_token: Option<Addr>,
}
