//! Role administration (admin only).

use cosmwasm_std::{Deps, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, MANAGERS};

fn ensure_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::AccessDenied {
            role: "the admin".to_string(),
        });
    }
    Ok(())
}

pub fn execute_grant_manager(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;
    let manager = deps.api.addr_validate(&address)?;
    MANAGERS.save(deps.storage, &manager, &true)?;

    Ok(Response::new()
        .add_attribute("action", "grant_manager")
        .add_attribute("manager", manager))
}

pub fn execute_revoke_manager(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;
    let manager = deps.api.addr_validate(&address)?;
    MANAGERS.remove(deps.storage, &manager);

    Ok(Response::new()
        .add_attribute("action", "revoke_manager")
        .add_attribute("manager", manager))
}
