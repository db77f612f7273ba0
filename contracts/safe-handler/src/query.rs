//! Query handlers for the safe handler contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    ConfigResponse, DepositedAmountResponse, TokenInfoResponse, WrappedTokenResponse,
};
use crate::state::{CONFIG, LOCKED_BALANCES, TOKEN_RECORDS, WRAPPED_TOKENS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        bridge: config.bridge,
        wrapped_token_code_id: config.wrapped_token_code_id,
    })
}

/// Stored classification, returned as is (including corrupted records).
pub fn query_token_info(deps: Deps, token: String) -> StdResult<TokenInfoResponse> {
    let record = TOKEN_RECORDS.may_load(deps.storage, &token)?;
    Ok(TokenInfoResponse { token, record })
}

pub fn query_deposited_amount(
    deps: Deps,
    depositor: String,
    token: String,
) -> StdResult<DepositedAmountResponse> {
    let depositor = deps.api.addr_validate(&depositor)?;
    let amount = LOCKED_BALANCES
        .may_load(deps.storage, (&depositor, &token))?
        .unwrap_or_default();
    Ok(DepositedAmountResponse {
        depositor,
        token,
        amount,
    })
}

pub fn query_wrapped_token(deps: Deps, source_token: String) -> StdResult<WrappedTokenResponse> {
    let wrapped_token = WRAPPED_TOKENS.may_load(deps.storage, &source_token)?;
    Ok(WrappedTokenResponse {
        source_token,
        wrapped_token,
    })
}
