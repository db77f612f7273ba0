//! Configuration handlers (manager role).

use cosmwasm_std::{Addr, Deps, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, MANAGERS};

pub(crate) fn ensure_manager(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if !MANAGERS.may_load(deps.storage, sender)?.unwrap_or(false) {
        return Err(ContractError::AccessDenied {
            role: "a bridge manager".to_string(),
        });
    }
    Ok(())
}

fn validate_optional(deps: Deps, address: Option<String>) -> Result<Option<Addr>, ContractError> {
    Ok(address
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?)
}

fn display(address: &Option<Addr>) -> String {
    address
        .as_ref()
        .map(|a| a.to_string())
        .unwrap_or_else(|| "none".to_string())
}

/// Set or unset the custody ledger.
pub fn execute_set_safe_handler(
    deps: DepsMut,
    info: MessageInfo,
    address: Option<String>,
) -> Result<Response, ContractError> {
    ensure_manager(deps.as_ref(), &info.sender)?;
    let safe_handler = validate_optional(deps.as_ref(), address)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.safe_handler = safe_handler;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_safe_handler")
        .add_attribute("safe_handler", display(&config.safe_handler)))
}

/// Set or unset the request authorizer.
pub fn execute_set_validator(
    deps: DepsMut,
    info: MessageInfo,
    address: Option<String>,
) -> Result<Response, ContractError> {
    ensure_manager(deps.as_ref(), &info.sender)?;
    let validator = validate_optional(deps.as_ref(), address)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.validator = validator;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_validator")
        .add_attribute("validator", display(&config.validator)))
}
