//! Query handlers for the bridge contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{ConfigResponse, IsLockedResponse, IsManagerResponse};
use crate::state::{CONFIG, EXECUTION_LOCK, MANAGERS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        safe_handler: config.safe_handler,
        validator: config.validator,
    })
}

pub fn query_is_manager(deps: Deps, address: String) -> StdResult<IsManagerResponse> {
    let address = deps.api.addr_validate(&address)?;
    let is_manager = MANAGERS
        .may_load(deps.storage, &address)?
        .unwrap_or(false);
    Ok(IsManagerResponse {
        address,
        is_manager,
    })
}

pub fn query_is_locked(deps: Deps) -> StdResult<IsLockedResponse> {
    Ok(IsLockedResponse {
        locked: EXECUTION_LOCK.may_load(deps.storage)?.is_some(),
    })
}
