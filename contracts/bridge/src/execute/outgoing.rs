//! Outgoing handlers: value leaves this chain.
//!
//! - `Deposit` / `DepositWithPermit` - lock native tokens in the ledger
//! - `Burn` / `BurnWithPermit` - destroy representative tokens
//!
//! These are locally observable facts, so no signature is required.

use common::safe_handler::ExecuteMsg as HandlerExecuteMsg;
use common::wrapped_token::{CapabilityResponse, QueryMsg as TokenQueryMsg};
use cosmwasm_std::{Addr, Binary, CosmosMsg, Deps, DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::lock::{
    acquire, configured_safe_handler, ensure_unlocked, settling, wasm_execute,
};
use crate::state::InFlightCall;

/// Signed permit parameters
pub struct PermitParams {
    pub deadline: u64,
    pub v: u8,
    pub r: Binary,
    pub s: Binary,
}

/// Fail unless `token` reports the permit capability. Tokens that do not
/// answer the capability query are treated as plain.
fn ensure_permit_supported(deps: Deps, token: &str) -> Result<(), ContractError> {
    let unsupported = || ContractError::UnsupportedOperation {
        reason: "permit is not supported".to_string(),
    };
    let res: CapabilityResponse = deps
        .querier
        .query_wasm_smart(token, &TokenQueryMsg::Capability {})
        .map_err(|_| unsupported())?;
    if !res.capability.supports_permit() {
        return Err(unsupported());
    }
    Ok(())
}

fn permit_message(
    safe_handler: &Addr,
    token: &str,
    owner: &Addr,
    amount: Uint128,
    permit: PermitParams,
) -> Result<CosmosMsg, ContractError> {
    wasm_execute(
        safe_handler,
        &HandlerExecuteMsg::Permit {
            token: token.to_string(),
            owner: owner.to_string(),
            amount,
            deadline: permit.deadline,
            v: permit.v,
            r: permit.r,
            s: permit.s,
        },
    )
}

// ============================================================================
// Deposit
// ============================================================================

pub fn execute_deposit(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    permit: Option<PermitParams>,
) -> Result<Response, ContractError> {
    ensure_unlocked(deps.storage)?;
    let safe_handler = configured_safe_handler(deps.storage)?;
    if permit.is_some() {
        ensure_permit_supported(deps.as_ref(), &token)?;
    }

    acquire(
        deps.storage,
        &InFlightCall::Deposit {
            depositor: info.sender.clone(),
            token: token.clone(),
            amount,
        },
    )?;

    let mut response = Response::new();
    if let Some(permit) = permit {
        response = response.add_message(permit_message(
            &safe_handler,
            &token,
            &info.sender,
            amount,
            permit,
        )?);
    }

    Ok(response
        .add_submessage(settling(
            &safe_handler,
            &HandlerExecuteMsg::Deposit {
                depositor: info.sender.to_string(),
                token: token.clone(),
                amount,
            },
        )?)
        .add_attribute("action", "deposit")
        .add_attribute("depositor", info.sender)
        .add_attribute("token", token)
        .add_attribute("amount", amount))
}

// ============================================================================
// Burn
// ============================================================================

pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    permit: Option<PermitParams>,
) -> Result<Response, ContractError> {
    ensure_unlocked(deps.storage)?;
    let safe_handler = configured_safe_handler(deps.storage)?;
    if permit.is_some() {
        ensure_permit_supported(deps.as_ref(), &token)?;
    }

    acquire(
        deps.storage,
        &InFlightCall::Burn {
            holder: info.sender.clone(),
            token: token.clone(),
            amount,
        },
    )?;

    let mut response = Response::new();
    if let Some(permit) = permit {
        response = response.add_message(permit_message(
            &safe_handler,
            &token,
            &info.sender,
            amount,
            permit,
        )?);
    }

    Ok(response
        .add_submessage(settling(
            &safe_handler,
            &HandlerExecuteMsg::Burn {
                holder: info.sender.to_string(),
                token: token.clone(),
                amount,
            },
        )?)
        .add_attribute("action", "burn")
        .add_attribute("holder", info.sender)
        .add_attribute("token", token)
        .add_attribute("amount", amount))
}
