use common::eip712::{Domain, WithdrawalRequest};
use common::signature::{normalize_key_address, recover_signer};
use common::bytes32_to_hex;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, DigestResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, NonceResponse,
    QueryMsg,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NONCES};

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
    let signer = normalize_key_address(&msg.signer).map_err(|e| ContractError::InvalidInput {
        reason: e.to_string(),
    })?;

    CONFIG.save(
        deps.storage,
        &Config {
            bridge: bridge.clone(),
            signer: signer.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("bridge", bridge)
        .add_attribute("signer", signer))
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
        ExecuteMsg::Verify { request, signature } => {
            execute_verify(deps, env, info, request, signature)
        }
    }
}

/// Signing domain of this deployment
fn domain(env: &Env) -> Domain {
    Domain::validator(env.block.chain_id.clone(), env.contract.address.to_string())
}

fn execute_verify(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request: WithdrawalRequest,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.bridge {
        return Err(ContractError::Unauthorized);
    }

    let digest = request.digest(&domain(&env));
    let recovered = recover_signer(deps.api, &digest, signature.as_slice())?;
    if recovered != config.signer || request.validator.to_lowercase() != config.signer {
        return Err(ContractError::SignatureMismatch);
    }

    let subject = deps.api.addr_validate(&request.from)?;
    let expected = NONCES
        .may_load(deps.storage, &subject)?
        .unwrap_or_default();
    if request.nonce != expected {
        return Err(ContractError::NonceMismatch {
            expected,
            got: request.nonce,
        });
    }
    NONCES.save(deps.storage, &subject, &(expected + 1))?;

    Ok(Response::new()
        .add_attribute("action", "verify")
        .add_attribute("subject", subject)
        .add_attribute("nonce", expected.to_string())
        .add_attribute("token_type", request.token_type.as_str())
        .add_attribute("digest", bytes32_to_hex(&digest)))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Nonce { subject } => to_json_binary(&query_nonce(deps, subject)?),
        QueryMsg::Digest { request } => to_json_binary(&DigestResponse {
            digest: Binary::from(request.digest(&domain(&env)).to_vec()),
        }),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        bridge: config.bridge,
        signer: config.signer,
    })
}

fn query_nonce(deps: Deps, subject: String) -> StdResult<NonceResponse> {
    let subject = deps.api.addr_validate(&subject)?;
    let nonce = NONCES
        .may_load(deps.storage, &subject)?
        .unwrap_or_default();
    Ok(NonceResponse { subject, nonce })
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
