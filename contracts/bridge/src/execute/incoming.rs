//! Incoming handlers: value arrives from the other chain.
//!
//! - `Withdraw` - mint representative tokens (target chain)
//! - `Release` - unlock native tokens (source chain)
//!
//! Both assert a fact about the other chain, so both carry a validator
//! signature. The bridge rebuilds the request from its own view of the
//! world (caller, current nonce, registered pair) and has the validator
//! verify it before the ledger is called. A signature over any other
//! request fails verification.

use common::eip712::WithdrawalRequest;
use common::safe_handler::ExecuteMsg as HandlerExecuteMsg;
use common::validator::{
    ConfigResponse as ValidatorConfigResponse, ExecuteMsg as ValidatorExecuteMsg, NonceResponse,
    QueryMsg as ValidatorQueryMsg,
};
use common::TokenType;
use cosmwasm_std::{Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::error::ContractError;
use crate::execute::lock::{
    acquire, configured_safe_handler, configured_validator, ensure_unlocked, query_wrapped_token,
    settling, wasm_execute,
};
use crate::state::InFlightCall;

/// Token metadata carried by a withdraw request
pub struct SourceTokenMeta {
    pub symbol: String,
    pub name: String,
    pub is_permit: bool,
}

/// Attester key address and the subject's current nonce
fn signer_and_nonce(
    deps: Deps,
    validator: &Addr,
    subject: &Addr,
) -> Result<(String, u64), ContractError> {
    let config: ValidatorConfigResponse = deps
        .querier
        .query_wasm_smart(validator, &ValidatorQueryMsg::Config {})?;
    let nonce: NonceResponse = deps.querier.query_wasm_smart(
        validator,
        &ValidatorQueryMsg::Nonce {
            subject: subject.to_string(),
        },
    )?;
    Ok((config.signer, nonce.nonce))
}

// ============================================================================
// Withdraw
// ============================================================================

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    source_token: String,
    meta: SourceTokenMeta,
    amount: Uint128,
    signature: Binary,
) -> Result<Response, ContractError> {
    ensure_unlocked(deps.storage)?;
    let safe_handler = configured_safe_handler(deps.storage)?;
    let validator = configured_validator(deps.storage)?;

    let (signer, nonce) = signer_and_nonce(deps.as_ref(), &validator, &info.sender)?;
    let wrapped_token = query_wrapped_token(deps.as_ref(), &safe_handler, &source_token)?
        .map(|addr| addr.to_string())
        .unwrap_or_default();

    let request = WithdrawalRequest {
        validator: signer,
        bridge: env.contract.address.to_string(),
        from: info.sender.to_string(),
        amount,
        source_token: source_token.clone(),
        source_token_symbol: meta.symbol.clone(),
        source_token_name: meta.name.clone(),
        is_source_token_permit: meta.is_permit,
        wrapped_token,
        token_type: TokenType::Wrapped,
        nonce,
    };

    acquire(
        deps.storage,
        &InFlightCall::Withdraw {
            recipient: info.sender.clone(),
            source_token: source_token.clone(),
            amount,
            safe_handler: safe_handler.clone(),
        },
    )?;

    Ok(Response::new()
        .add_message(wasm_execute(
            &validator,
            &ValidatorExecuteMsg::Verify { request, signature },
        )?)
        .add_submessage(settling(
            &safe_handler,
            &HandlerExecuteMsg::Withdraw {
                recipient: info.sender.to_string(),
                source_token: source_token.clone(),
                symbol: meta.symbol,
                name: meta.name,
                is_permit: meta.is_permit,
                amount,
            },
        )?)
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", info.sender)
        .add_attribute("source_token", source_token)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string()))
}

// ============================================================================
// Release
// ============================================================================

pub fn execute_release(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    signature: Binary,
) -> Result<Response, ContractError> {
    ensure_unlocked(deps.storage)?;
    let safe_handler = configured_safe_handler(deps.storage)?;
    let validator = configured_validator(deps.storage)?;

    let (signer, nonce) = signer_and_nonce(deps.as_ref(), &validator, &info.sender)?;
    let token_info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(token.as_str(), &Cw20QueryMsg::TokenInfo {})?;

    let request = WithdrawalRequest {
        validator: signer,
        bridge: env.contract.address.to_string(),
        from: info.sender.to_string(),
        amount,
        source_token: token.clone(),
        source_token_symbol: token_info.symbol,
        source_token_name: token_info.name,
        is_source_token_permit: false,
        wrapped_token: String::new(),
        token_type: TokenType::Native,
        nonce,
    };

    acquire(
        deps.storage,
        &InFlightCall::Release {
            recipient: info.sender.clone(),
            token: token.clone(),
            amount,
        },
    )?;

    Ok(Response::new()
        .add_message(wasm_execute(
            &validator,
            &ValidatorExecuteMsg::Verify { request, signature },
        )?)
        .add_submessage(settling(
            &safe_handler,
            &HandlerExecuteMsg::Release {
                depositor: info.sender.to_string(),
                token: token.clone(),
                amount,
            },
        )?)
        .add_attribute("action", "release")
        .add_attribute("recipient", info.sender)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string()))
}
