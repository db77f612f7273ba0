//! Wrapped Token - Entry Points
//!
//! Standard CW20 messages delegate to `cw20-base`; ownership checks and
//! the permit extension live here.

use common::eip712::{Domain, Permit};
use common::signature::{normalize_key_address, recover_signer, signature_from_parts};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20::{AllowanceResponse, Expiration};
use cw20_base::allowances::{
    execute_burn_from, execute_decrease_allowance, execute_increase_allowance,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{
    execute_mint, execute_send, execute_transfer, query_balance, query_minter, query_token_info,
};
use cw20_base::state::{
    MinterData, TokenInfo, ALLOWANCES, ALLOWANCES_SPENDER, BALANCES, TOKEN_INFO,
};

use crate::error::ContractError;
use crate::msg::{
    CapabilityResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, OwnerResponse,
    PermitNonceResponse, PermitSignerResponse, QueryMsg,
};
use crate::state::{
    CAPABILITY, CONTRACT_NAME, CONTRACT_VERSION, MAX_DECIMALS, OWNER, PERMIT_NONCES,
    PERMIT_SIGNERS,
};

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
    let owner = deps.api.addr_validate(&msg.owner)?;
    if msg.decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidInput {
            reason: format!("decimals must not exceed {}", MAX_DECIMALS),
        });
    }

    // Name and symbol mirror a token on another chain and are stored as
    // given; cw20-base's ticker format does not apply to them.
    let mut total_supply = Uint128::zero();
    for coin in &msg.initial_balances {
        let address = deps.api.addr_validate(&coin.address)?;
        if BALANCES.has(deps.storage, &address) {
            return Err(ContractError::InvalidInput {
                reason: format!("duplicate initial balance for {}", address),
            });
        }
        BALANCES.save(deps.storage, &address, &coin.amount)?;
        total_supply = total_supply.checked_add(coin.amount).map_err(StdError::from)?;
    }

    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply,
            mint: Some(MinterData {
                minter: owner.clone(),
                cap: None,
            }),
        },
    )?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    OWNER.save(deps.storage, &owner)?;
    CAPABILITY.save(deps.storage, &msg.capability)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("owner", owner)
        .add_attribute(
            "capability",
            if msg.capability.supports_permit() {
                "permit"
            } else {
                "plain"
            },
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
        // Standard CW20
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),

        // Owner only
        ExecuteMsg::Mint { recipient, amount } => {
            ensure_owner(deps.as_ref(), &info, "mint")?;
            Ok(execute_mint(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::BurnFrom { owner, amount } => {
            ensure_owner(deps.as_ref(), &info, "burn")?;
            Ok(execute_burn_from(deps, env, info, owner, amount)?)
        }

        // Permit extension
        ExecuteMsg::RegisterPermitSigner { signer } => {
            execute_register_permit_signer(deps, info, signer)
        }
        ExecuteMsg::Permit {
            owner,
            spender,
            amount,
            deadline,
            v,
            r,
            s,
        } => execute_permit(deps, env, owner, spender, amount, deadline, v, r, s),
    }
}

fn ensure_owner(deps: Deps, info: &MessageInfo, action: &str) -> Result<(), ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::AccessDenied {
            action: action.to_string(),
        });
    }
    Ok(())
}

fn execute_register_permit_signer(
    deps: DepsMut,
    info: MessageInfo,
    signer: String,
) -> Result<Response, ContractError> {
    let signer = normalize_key_address(&signer).map_err(|e| ContractError::InvalidInput {
        reason: e.to_string(),
    })?;
    PERMIT_SIGNERS.save(deps.storage, &info.sender, &signer)?;

    Ok(Response::new()
        .add_attribute("action", "register_permit_signer")
        .add_attribute("owner", info.sender)
        .add_attribute("signer", signer))
}

/// Set `spender`'s allowance over `owner`'s balance to `amount`.
///
/// The permit must be signed by the key `owner` registered, over the
/// owner's current permit nonce, and be submitted no later than `deadline`.
#[allow(clippy::too_many_arguments)]
fn execute_permit(
    deps: DepsMut,
    env: Env,
    owner: String,
    spender: String,
    amount: Uint128,
    deadline: u64,
    v: u8,
    r: Binary,
    s: Binary,
) -> Result<Response, ContractError> {
    if !CAPABILITY.load(deps.storage)?.supports_permit() {
        return Err(ContractError::PermitNotSupported);
    }
    if env.block.time.seconds() > deadline {
        return Err(ContractError::PermitExpired { deadline });
    }

    let owner_addr = deps.api.addr_validate(&owner)?;
    let spender_addr = deps.api.addr_validate(&spender)?;
    if owner_addr == spender_addr {
        return Err(ContractError::InvalidInput {
            reason: "owner cannot grant an allowance to itself".to_string(),
        });
    }

    let registered = PERMIT_SIGNERS
        .may_load(deps.storage, &owner_addr)?
        .ok_or(ContractError::PermitSignerNotRegistered {
            owner: owner_addr.to_string(),
        })?;
    let nonce = PERMIT_NONCES
        .may_load(deps.storage, &owner_addr)?
        .unwrap_or_default();

    let token_name = query_token_info(deps.as_ref())?.name;
    let domain = Domain::permit(
        token_name,
        env.block.chain_id.clone(),
        env.contract.address.to_string(),
    );
    let permit = Permit {
        owner: owner_addr.to_string(),
        spender: spender_addr.to_string(),
        value: amount,
        nonce,
        deadline,
    };
    let signature = signature_from_parts(v, &r, &s)?;
    let recovered = recover_signer(deps.api, &permit.digest(&domain), &signature)?;
    if recovered != registered {
        return Err(ContractError::PermitSignatureMismatch);
    }

    PERMIT_NONCES.save(deps.storage, &owner_addr, &(nonce + 1))?;

    let allowance = AllowanceResponse {
        allowance: amount,
        expires: Expiration::Never {},
    };
    ALLOWANCES.save(deps.storage, (&owner_addr, &spender_addr), &allowance)?;
    ALLOWANCES_SPENDER.save(deps.storage, (&spender_addr, &owner_addr), &allowance)?;

    Ok(Response::new()
        .add_attribute("action", "permit")
        .add_attribute("owner", owner_addr)
        .add_attribute("spender", spender_addr)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string()))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
        QueryMsg::Owner {} => to_json_binary(&OwnerResponse {
            owner: OWNER.load(deps.storage)?,
        }),
        QueryMsg::Capability {} => to_json_binary(&CapabilityResponse {
            capability: CAPABILITY.load(deps.storage)?,
        }),
        QueryMsg::PermitNonce { owner } => to_json_binary(&query_permit_nonce(deps, owner)?),
        QueryMsg::PermitSigner { owner } => to_json_binary(&query_permit_signer(deps, owner)?),
    }
}

fn query_permit_nonce(deps: Deps, owner: String) -> StdResult<PermitNonceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let nonce = PERMIT_NONCES
        .may_load(deps.storage, &owner)?
        .unwrap_or_default();
    Ok(PermitNonceResponse { owner, nonce })
}

fn query_permit_signer(deps: Deps, owner: String) -> StdResult<PermitSignerResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let signer = PERMIT_SIGNERS.may_load(deps.storage, &owner)?;
    Ok(PermitSignerResponse { owner, signer })
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
