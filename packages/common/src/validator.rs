//! Message interface of the request authorizer contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

use crate::eip712::WithdrawalRequest;

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Bridge contract allowed to submit requests for verification
    pub bridge: String,
    /// Key address of the attester (`0x` + 40 hex chars)
    pub signer: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Check `signature` over `request` and consume the nonce of
    /// `request.from`. Bridge only.
    Verify {
        request: WithdrawalRequest,
        /// 65-byte `r ‖ s ‖ v` signature
        signature: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Next nonce expected from `subject`
    #[returns(NonceResponse)]
    Nonce { subject: String },

    /// Digest the attester must sign for `request` on this deployment
    #[returns(DigestResponse)]
    Digest { request: WithdrawalRequest },
}

#[cw_serde]
pub struct ConfigResponse {
    pub bridge: Addr,
    pub signer: String,
}

#[cw_serde]
pub struct NonceResponse {
    pub subject: Addr,
    pub nonce: u64,
}

#[cw_serde]
pub struct DigestResponse {
    pub digest: Binary,
}
