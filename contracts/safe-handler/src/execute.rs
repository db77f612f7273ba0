//! Execute handlers for the safe handler contract.
//!
//! Every handler starts with the bridge check. Accounting is written before
//! the token message is dispatched; a failing token call reverts both.

use common::wrapped_token::{ExecuteMsg as TokenExecuteMsg, InstantiateMsg as TokenInstantiateMsg};
use common::{TokenCapability, TokenRecord, TokenType};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, Storage, SubMsg, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{
    PendingDeployment, CONFIG, LOCKED_BALANCES, PENDING_DEPLOYMENT, REPLY_DEPLOY_WRAPPED,
    TOKEN_RECORDS, WRAPPED_TOKENS, WRAPPED_TOKEN_DECIMALS,
};

// ============================================================================
// Guards
// ============================================================================

fn ensure_bridge(storage: &dyn Storage, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.bridge {
        return Err(ContractError::AccessDenied);
    }
    Ok(())
}

fn ensure_address(value: &str, what: &str) -> Result<(), ContractError> {
    if value.is_empty() {
        return Err(ContractError::InvalidInput {
            reason: format!("{} is the zero address", what),
        });
    }
    Ok(())
}

fn ensure_amount(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidInput {
            reason: "token amount has to be greater than 0".to_string(),
        });
    }
    Ok(())
}

/// Load a token record, failing if the stored record breaks the
/// native/source-token invariant.
pub(crate) fn load_record(
    storage: &dyn Storage,
    token: &str,
) -> Result<Option<TokenRecord>, ContractError> {
    let record = TOKEN_RECORDS.may_load(storage, token)?;
    if let Some(record) = &record {
        if !record.is_consistent() {
            return Err(ContractError::TokenTypeMismatch {
                reason: "token can not be native and has a source token at the same time"
                    .to_string(),
            });
        }
    }
    Ok(record)
}

fn wasm_execute(contract: &Addr, msg: Binary) -> CosmosMsg {
    CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: contract.to_string(),
        msg,
        funds: vec![],
    })
}

// ============================================================================
// Native Tokens
// ============================================================================

/// Lock `amount` of `token` for `depositor`, classifying the token as
/// native on first sight.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    depositor: String,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_bridge(deps.storage, &info)?;
    ensure_address(&token, "token")?;
    ensure_amount(amount)?;

    let depositor = deps.api.addr_validate(&depositor)?;
    let token_addr = deps.api.addr_validate(&token)?;

    match load_record(deps.storage, token_addr.as_str())? {
        Some(record) if record.token_type == TokenType::Wrapped => {
            return Err(ContractError::TokenTypeMismatch {
                reason: "only native tokens can be deposited".to_string(),
            });
        }
        Some(_) => {}
        None => TOKEN_RECORDS.save(deps.storage, token_addr.as_str(), &TokenRecord::native())?,
    }

    let locked = LOCKED_BALANCES
        .may_load(deps.storage, (&depositor, token_addr.as_str()))?
        .unwrap_or_default();
    let locked = locked.checked_add(amount).map_err(StdError::from)?;
    LOCKED_BALANCES.save(deps.storage, (&depositor, token_addr.as_str()), &locked)?;

    let pull = wasm_execute(
        &token_addr,
        to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: depositor.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
    );

    Ok(Response::new()
        .add_message(pull)
        .add_attribute("action", "deposit")
        .add_attribute("depositor", depositor)
        .add_attribute("token", token_addr)
        .add_attribute("amount", amount)
        .add_attribute("locked", locked))
}

/// Return `amount` of locked `token` to `depositor`.
pub fn execute_release(
    deps: DepsMut,
    info: MessageInfo,
    depositor: String,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_bridge(deps.storage, &info)?;
    ensure_address(&token, "token")?;
    ensure_amount(amount)?;

    let depositor = deps.api.addr_validate(&depositor)?;
    let token_addr = deps.api.addr_validate(&token)?;

    if let Some(record) = load_record(deps.storage, token_addr.as_str())? {
        if record.token_type == TokenType::Wrapped {
            return Err(ContractError::TokenTypeMismatch {
                reason: "only native tokens can be released".to_string(),
            });
        }
    }

    let locked = LOCKED_BALANCES
        .may_load(deps.storage, (&depositor, token_addr.as_str()))?
        .unwrap_or_default();
    if amount > locked {
        return Err(ContractError::InsufficientLockedBalance {
            requested: amount,
            locked,
        });
    }
    let remaining = locked - amount;
    LOCKED_BALANCES.save(deps.storage, (&depositor, token_addr.as_str()), &remaining)?;

    let payout = wasm_execute(
        &token_addr,
        to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: depositor.to_string(),
            amount,
        })?,
    );

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("action", "release")
        .add_attribute("depositor", depositor)
        .add_attribute("token", token_addr)
        .add_attribute("amount", amount)
        .add_attribute("locked", remaining))
}

// ============================================================================
// Representative Tokens
// ============================================================================

/// Mint the representative of `source_token` to `recipient`.
///
/// The first withdrawal of a source token instantiates its representative
/// token; the pair is registered and the mint dispatched from the reply.
#[allow(clippy::too_many_arguments)]
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    source_token: String,
    symbol: String,
    name: String,
    is_permit: bool,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_bridge(deps.storage, &info)?;
    ensure_address(&recipient, "recipient")?;
    ensure_address(&source_token, "source token")?;
    ensure_amount(amount)?;

    let recipient = deps.api.addr_validate(&recipient)?;

    if let Some(record) = load_record(deps.storage, &source_token)? {
        if record.token_type == TokenType::Wrapped {
            return Err(ContractError::TokenTypeMismatch {
                reason: "wrapped tokens can not be bridged again".to_string(),
            });
        }
    }

    if let Some(wrapped) = WRAPPED_TOKENS.may_load(deps.storage, &source_token)? {
        let paired = load_record(deps.storage, wrapped.as_str())?;
        let matches = paired
            .map(|r| {
                r.token_type == TokenType::Wrapped
                    && r.source_token.as_deref() == Some(source_token.as_str())
            })
            .unwrap_or(false);
        if !matches {
            return Err(ContractError::TokenTypeMismatch {
                reason: "source token doesn't match provided token from opposite chain"
                    .to_string(),
            });
        }

        return Ok(Response::new()
            .add_message(mint_message(&wrapped, &recipient, amount)?)
            .add_attribute("action", "withdraw")
            .add_attribute("recipient", recipient)
            .add_attribute("source_token", source_token)
            .add_attribute("wrapped_token", wrapped)
            .add_attribute("amount", amount));
    }

    let config = CONFIG.load(deps.storage)?;
    let capability = TokenCapability::from_permit_flag(is_permit);
    PENDING_DEPLOYMENT.save(
        deps.storage,
        &PendingDeployment {
            source_token: source_token.clone(),
            recipient: recipient.clone(),
            amount,
        },
    )?;

    let deploy = WasmMsg::Instantiate {
        admin: None,
        code_id: config.wrapped_token_code_id,
        msg: to_json_binary(&TokenInstantiateMsg {
            name,
            symbol,
            decimals: WRAPPED_TOKEN_DECIMALS,
            owner: env.contract.address.to_string(),
            capability,
            initial_balances: vec![],
        })?,
        funds: vec![],
        label: format!("wrapped {}", source_token),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(deploy, REPLY_DEPLOY_WRAPPED))
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", recipient)
        .add_attribute("source_token", source_token)
        .add_attribute("deploy_wrapped_token", "true")
        .add_attribute("amount", amount))
}

/// Register the freshly instantiated representative token and mint the
/// pending withdrawal.
pub fn handle_wrapped_deployed(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let response = msg
        .result
        .into_result()
        .map_err(|reason| ContractError::DeploymentFailed { reason })?;

    let address = response
        .events
        .iter()
        .filter(|e| e.ty == "instantiate")
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == "_contract_address")
        .map(|a| a.value.clone())
        .ok_or(ContractError::DeploymentFailed {
            reason: "missing contract address".to_string(),
        })?;
    let wrapped = deps.api.addr_validate(&address)?;

    let pending = PENDING_DEPLOYMENT.load(deps.storage)?;
    PENDING_DEPLOYMENT.remove(deps.storage);

    WRAPPED_TOKENS.save(deps.storage, &pending.source_token, &wrapped)?;
    TOKEN_RECORDS.save(
        deps.storage,
        wrapped.as_str(),
        &TokenRecord::wrapped(pending.source_token.clone()),
    )?;

    Ok(Response::new()
        .add_message(mint_message(&wrapped, &pending.recipient, pending.amount)?)
        .add_attribute("action", "register_wrapped_token")
        .add_attribute("source_token", pending.source_token)
        .add_attribute("wrapped_token", wrapped)
        .add_attribute("recipient", pending.recipient)
        .add_attribute("amount", pending.amount))
}

fn mint_message(
    wrapped: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    Ok(wasm_execute(
        wrapped,
        to_json_binary(&TokenExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
    ))
}

/// Burn `amount` of a representative token from `holder`'s allowance to
/// this ledger.
pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    holder: String,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_bridge(deps.storage, &info)?;
    ensure_address(&token, "token")?;
    ensure_amount(amount)?;

    let holder = deps.api.addr_validate(&holder)?;
    let token_addr = deps.api.addr_validate(&token)?;

    let is_wrapped = load_record(deps.storage, token_addr.as_str())?
        .map(|r| r.token_type == TokenType::Wrapped)
        .unwrap_or(false);
    if !is_wrapped {
        return Err(ContractError::TokenTypeMismatch {
            reason: "only wrapped tokens can be burned".to_string(),
        });
    }

    let burn = wasm_execute(
        &token_addr,
        to_json_binary(&TokenExecuteMsg::BurnFrom {
            owner: holder.to_string(),
            amount,
        })?,
    );

    Ok(Response::new()
        .add_message(burn)
        .add_attribute("action", "burn")
        .add_attribute("holder", holder)
        .add_attribute("token", token_addr)
        .add_attribute("amount", amount))
}

/// Forward a signed permit granting this ledger an allowance over
/// `owner`'s balance.
#[allow(clippy::too_many_arguments)]
pub fn execute_permit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    owner: String,
    amount: Uint128,
    deadline: u64,
    v: u8,
    r: Binary,
    s: Binary,
) -> Result<Response, ContractError> {
    ensure_bridge(deps.storage, &info)?;
    ensure_address(&token, "token")?;

    let token_addr = deps.api.addr_validate(&token)?;
    let owner = deps.api.addr_validate(&owner)?;

    let permit = wasm_execute(
        &token_addr,
        to_json_binary(&TokenExecuteMsg::Permit {
            owner: owner.to_string(),
            spender: env.contract.address.to_string(),
            amount,
            deadline,
            v,
            r,
            s,
        })?,
    );

    Ok(Response::new()
        .add_message(permit)
        .add_attribute("action", "permit")
        .add_attribute("token", token_addr)
        .add_attribute("owner", owner)
        .add_attribute("amount", amount))
}
