//! Safe Handler - Entry Points
//!
//! The implementation is modularized into:
//! - `execute` - Execute message handlers and the deployment reply
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_burn, execute_deposit, execute_permit, execute_release, execute_withdraw,
    handle_wrapped_deployed,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_deposited_amount, query_token_info, query_wrapped_token};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REPLY_DEPLOY_WRAPPED};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.bridge.is_empty() {
        return Err(ContractError::InvalidInput {
            reason: "bridge address is empty".to_string(),
        });
    }
    let bridge = deps.api.addr_validate(&msg.bridge)?;

    CONFIG.save(
        deps.storage,
        &Config {
            bridge: bridge.clone(),
            wrapped_token_code_id: msg.wrapped_token_code_id,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("bridge", bridge)
        .add_attribute(
            "wrapped_token_code_id",
            msg.wrapped_token_code_id.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {
            depositor,
            token,
            amount,
        } => execute_deposit(deps, env, info, depositor, token, amount),
        ExecuteMsg::Release {
            depositor,
            token,
            amount,
        } => execute_release(deps, info, depositor, token, amount),
        ExecuteMsg::Withdraw {
            recipient,
            source_token,
            symbol,
            name,
            is_permit,
            amount,
        } => execute_withdraw(
            deps,
            env,
            info,
            recipient,
            source_token,
            symbol,
            name,
            is_permit,
            amount,
        ),
        ExecuteMsg::Burn {
            holder,
            token,
            amount,
        } => execute_burn(deps, info, holder, token, amount),
        ExecuteMsg::Permit {
            token,
            owner,
            amount,
            deadline,
            v,
            r,
            s,
        } => execute_permit(deps, env, info, token, owner, amount, deadline, v, r, s),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_DEPLOY_WRAPPED => handle_wrapped_deployed(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TokenInfo { token } => to_json_binary(&query_token_info(deps, token)?),
        QueryMsg::DepositedAmount { depositor, token } => {
            to_json_binary(&query_deposited_amount(deps, depositor, token)?)
        }
        QueryMsg::WrappedToken { source_token } => {
            to_json_binary(&query_wrapped_token(deps, source_token)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
