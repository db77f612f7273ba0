//! Execution lock and settlement.
//!
//! `Idle -> Locked -> (delegate) -> Idle`: a balance-mutating handler
//! checks the lock first, records its call, and routes its final ledger
//! message through `REPLY_SETTLE`. The reply runs after the ledger and
//! every token callback it triggered have finished, clears the lock and
//! emits the protocol event.

use common::safe_handler::{QueryMsg as HandlerQueryMsg, WrappedTokenResponse};
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, Deps, DepsMut, Event, Response, Storage, SubMsg, WasmMsg,
};
use serde::Serialize;

use crate::error::ContractError;
use crate::state::{InFlightCall, CONFIG, EXECUTION_LOCK, REPLY_SETTLE};

/// Fail with a reentrancy violation if a call is already in flight.
pub(crate) fn ensure_unlocked(storage: &dyn Storage) -> Result<(), ContractError> {
    if EXECUTION_LOCK.may_load(storage)?.is_some() {
        return Err(ContractError::ReentrancyViolation);
    }
    Ok(())
}

pub(crate) fn acquire(storage: &mut dyn Storage, call: &InFlightCall) -> Result<(), ContractError> {
    ensure_unlocked(storage)?;
    EXECUTION_LOCK.save(storage, call)?;
    Ok(())
}

pub(crate) fn configured_safe_handler(storage: &dyn Storage) -> Result<Addr, ContractError> {
    CONFIG
        .load(storage)?
        .safe_handler
        .ok_or(ContractError::ConfigurationError {
            reason: "safe handler is not set yet".to_string(),
        })
}

pub(crate) fn configured_validator(storage: &dyn Storage) -> Result<Addr, ContractError> {
    CONFIG
        .load(storage)?
        .validator
        .ok_or(ContractError::ConfigurationError {
            reason: "validator is not set yet".to_string(),
        })
}

pub(crate) fn wasm_execute<T: Serialize>(
    contract: &Addr,
    msg: &T,
) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: contract.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

/// Final ledger message of a locked call
pub(crate) fn settling<T: Serialize>(contract: &Addr, msg: &T) -> Result<SubMsg, ContractError> {
    Ok(SubMsg::reply_on_success(
        wasm_execute(contract, msg)?,
        REPLY_SETTLE,
    ))
}

pub(crate) fn query_wrapped_token(
    deps: Deps,
    safe_handler: &Addr,
    source_token: &str,
) -> Result<Option<Addr>, ContractError> {
    let res: WrappedTokenResponse = deps.querier.query_wasm_smart(
        safe_handler,
        &HandlerQueryMsg::WrappedToken {
            source_token: source_token.to_string(),
        },
    )?;
    Ok(res.wrapped_token)
}

/// Release the lock and emit the event of the settled call.
pub fn settle(deps: DepsMut) -> Result<Response, ContractError> {
    let call = EXECUTION_LOCK
        .may_load(deps.storage)?
        .ok_or(ContractError::NoCallInFlight)?;
    EXECUTION_LOCK.remove(deps.storage);

    let event = match call {
        InFlightCall::Deposit {
            depositor,
            token,
            amount,
        } => Event::new("deposit")
            .add_attribute("depositor", depositor)
            .add_attribute("token", token)
            .add_attribute("amount", amount),
        InFlightCall::Withdraw {
            recipient,
            source_token,
            amount,
            safe_handler,
        } => {
            let wrapped_token = query_wrapped_token(deps.as_ref(), &safe_handler, &source_token)?
                .ok_or(ContractError::ConfigurationError {
                    reason: "no representative token registered after withdraw".to_string(),
                })?;
            Event::new("withdraw")
                .add_attribute("recipient", recipient)
                .add_attribute("wrapped_token", wrapped_token)
                .add_attribute("source_token", source_token)
                .add_attribute("amount", amount)
        }
        InFlightCall::Burn {
            holder,
            token,
            amount,
        } => Event::new("burn")
            .add_attribute("holder", holder)
            .add_attribute("token", token)
            .add_attribute("amount", amount),
        InFlightCall::Release {
            recipient,
            token,
            amount,
        } => Event::new("release")
            .add_attribute("recipient", recipient)
            .add_attribute("token", token)
            .add_attribute("amount", amount),
    };

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "settle"))
}
