//! Message interface of the bridge orchestrator contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Holder of the admin role; also the first manager
    pub admin: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // User Operations
    // ========================================================================
    /// Lock `amount` of a native token. The caller must have granted the
    /// custody ledger an allowance beforehand.
    Deposit { token: String, amount: Uint128 },

    /// Lock `amount` of a native permit token, granting the allowance with
    /// a signed permit in the same call
    DepositWithPermit {
        token: String,
        amount: Uint128,
        deadline: u64,
        v: u8,
        r: Binary,
        s: Binary,
    },

    /// Mint the representative of `source_token` to the caller against a
    /// signed request
    Withdraw {
        source_token: String,
        symbol: String,
        name: String,
        is_permit: bool,
        amount: Uint128,
        signature: Binary,
    },

    /// Destroy `amount` of a representative token held by the caller
    Burn { token: String, amount: Uint128 },

    BurnWithPermit {
        token: String,
        amount: Uint128,
        deadline: u64,
        v: u8,
        r: Binary,
        s: Binary,
    },

    /// Unlock `amount` of a native token to the caller against a signed
    /// request
    Release {
        token: String,
        amount: Uint128,
        signature: Binary,
    },

    // ========================================================================
    // Configuration (managers)
    // ========================================================================
    /// `None` unsets the custody ledger
    SetSafeHandler { address: Option<String> },

    /// `None` unsets the request authorizer
    SetValidator { address: Option<String> },

    // ========================================================================
    // Roles (admin)
    // ========================================================================
    GrantManager { address: String },

    RevokeManager { address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(IsManagerResponse)]
    IsManager { address: String },

    /// Whether a balance-mutating call is in flight
    #[returns(IsLockedResponse)]
    IsLocked {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub safe_handler: Option<Addr>,
    pub validator: Option<Addr>,
}

#[cw_serde]
pub struct IsManagerResponse {
    pub address: Addr,
    pub is_manager: bool,
}

#[cw_serde]
pub struct IsLockedResponse {
    pub locked: bool,
}
