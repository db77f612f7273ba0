//! Bridge - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers and settlement
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_burn, execute_deposit, execute_grant_manager, execute_release,
    execute_revoke_manager, execute_set_safe_handler, execute_set_validator, execute_withdraw,
    settle, PermitParams, SourceTokenMeta,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_is_locked, query_is_manager};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, MANAGERS, REPLY_SETTLE};

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

    let admin = deps.api.addr_validate(&msg.admin)?;
    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
            safe_handler: None,
            validator: None,
        },
    )?;
    MANAGERS.save(deps.storage, &admin, &true)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin))
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
        // Outgoing
        ExecuteMsg::Deposit { token, amount } => execute_deposit(deps, info, token, amount, None),
        ExecuteMsg::DepositWithPermit {
            token,
            amount,
            deadline,
            v,
            r,
            s,
        } => execute_deposit(
            deps,
            info,
            token,
            amount,
            Some(PermitParams { deadline, v, r, s }),
        ),
        ExecuteMsg::Burn { token, amount } => execute_burn(deps, info, token, amount, None),
        ExecuteMsg::BurnWithPermit {
            token,
            amount,
            deadline,
            v,
            r,
            s,
        } => execute_burn(
            deps,
            info,
            token,
            amount,
            Some(PermitParams { deadline, v, r, s }),
        ),

        // Incoming
        ExecuteMsg::Withdraw {
            source_token,
            symbol,
            name,
            is_permit,
            amount,
            signature,
        } => execute_withdraw(
            deps,
            env,
            info,
            source_token,
            SourceTokenMeta {
                symbol,
                name,
                is_permit,
            },
            amount,
            signature,
        ),
        ExecuteMsg::Release {
            token,
            amount,
            signature,
        } => execute_release(deps, env, info, token, amount, signature),

        // Configuration
        ExecuteMsg::SetSafeHandler { address } => execute_set_safe_handler(deps, info, address),
        ExecuteMsg::SetValidator { address } => execute_set_validator(deps, info, address),

        // Roles
        ExecuteMsg::GrantManager { address } => execute_grant_manager(deps, info, address),
        ExecuteMsg::RevokeManager { address } => execute_revoke_manager(deps, info, address),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_SETTLE => settle(deps),
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
        QueryMsg::IsManager { address } => to_json_binary(&query_is_manager(deps, address)?),
        QueryMsg::IsLocked {} => to_json_binary(&query_is_locked(deps)?),
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
