//! Two-chain test harness.
//!
//! Each chain is an independent `App` with its own chain id and its own
//! bridge, safe handler and validator. Native tokens are deployed before
//! the bridge contracts so that the addresses of source-chain tokens never
//! coincide with representative tokens later deployed on the target chain.

#![allow(dead_code)]

use bridge::msg::{ExecuteMsg, InstantiateMsg, IsLockedResponse, QueryMsg};
use common::eip712::{Domain, Permit, WithdrawalRequest};
use common::safe_handler::{
    ConfigResponse as HandlerConfigResponse, DepositedAmountResponse,
    InstantiateMsg as HandlerInstantiateMsg, QueryMsg as HandlerQueryMsg, TokenInfoResponse,
    WrappedTokenResponse,
};
use common::signature::key_address;
use common::validator::{
    DigestResponse, InstantiateMsg as ValidatorInstantiateMsg, NonceResponse,
    QueryMsg as ValidatorQueryMsg,
};
use common::wrapped_token::{
    CapabilityResponse, ExecuteMsg as TokenExecuteMsg, InstantiateMsg as TokenInstantiateMsg,
    PermitNonceResponse, QueryMsg as TokenQueryMsg,
};
use common::{TokenCapability, TokenRecord, TokenType};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, DepsMut, Empty, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20Coin};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;

pub type AnyResult<T> = anyhow::Result<T>;

pub const ADMIN: &str = "terra1admin";
pub const ALICE: &str = "terra1alice";
pub const BOB: &str = "terra1bob";
pub const MINTER: &str = "terra1minter";

pub const SOURCE_CHAIN: &str = "source-chain-1";
pub const TARGET_CHAIN: &str = "target-chain-2";

pub const INITIAL_BALANCE: u128 = 1_000_000;

// ============================================================================
// Keys & Signatures
// ============================================================================

pub fn attester() -> SigningKey {
    SigningKey::from_slice(&[0x11; 32]).unwrap()
}

pub fn alice_key() -> SigningKey {
    SigningKey::from_slice(&[0x22; 32]).unwrap()
}

pub fn key_address_of(key: &SigningKey) -> String {
    key_address(key.verifying_key().to_encoded_point(false).as_bytes()).unwrap()
}

/// 65-byte `r ‖ s ‖ v` signature with `v` in {27, 28}
pub fn sign_digest(key: &SigningKey, digest: &[u8]) -> Binary {
    let (signature, recid) = key.sign_prehash_recoverable(digest).unwrap();
    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(recid.to_byte() + 27);
    Binary::from(bytes)
}

// ============================================================================
// Token Contracts (standard and hostile)
// ============================================================================

/// Token message after which a hostile token calls back into the bridge
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hook {
    None,
    TransferFrom,
    Transfer,
    Mint,
    BurnFrom,
}

impl Hook {
    fn triggered_by(&self, msg: &TokenExecuteMsg) -> bool {
        matches!(
            (self, msg),
            (Hook::TransferFrom, TokenExecuteMsg::TransferFrom { .. })
                | (Hook::Transfer, TokenExecuteMsg::Transfer { .. })
                | (Hook::Mint, TokenExecuteMsg::Mint { .. })
                | (Hook::BurnFrom, TokenExecuteMsg::BurnFrom { .. })
        )
    }

    /// The nested bridge call attempted from inside the hook
    fn reentry(&self, token: String) -> ExecuteMsg {
        let amount = Uint128::new(1);
        match self {
            Hook::TransferFrom | Hook::None => ExecuteMsg::Deposit { token, amount },
            Hook::Transfer => ExecuteMsg::Release {
                token,
                amount,
                signature: Binary::from(vec![0u8; 65]),
            },
            Hook::Mint => ExecuteMsg::Withdraw {
                source_token: token,
                symbol: "EVIL".to_string(),
                name: "Evil Token".to_string(),
                is_permit: false,
                amount,
                signature: Binary::from(vec![0u8; 65]),
            },
            Hook::BurnFrom => ExecuteMsg::Burn { token, amount },
        }
    }
}

/// Runs the representative token logic, then calls back into the bridge
/// when the hooked message was sent by a safe handler.
fn reentrant_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: TokenExecuteMsg,
    hook: Hook,
) -> Result<Response, wrapped_token::ContractError> {
    let ledger: Option<HandlerConfigResponse> = if hook.triggered_by(&msg) {
        deps.querier
            .query_wasm_smart(info.sender.to_string(), &HandlerQueryMsg::Config {})
            .ok()
    } else {
        None
    };
    let token = env.contract.address.to_string();

    let response = wrapped_token::contract::execute(deps, env, info, msg)?;
    match ledger {
        Some(config) => Ok(response.add_message(WasmMsg::Execute {
            contract_addr: config.bridge.to_string(),
            msg: to_json_binary(&hook.reentry(token))?,
            funds: vec![],
        })),
        None => Ok(response),
    }
}

fn reenter_on_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: TokenExecuteMsg,
) -> Result<Response, wrapped_token::ContractError> {
    reentrant_execute(deps, env, info, msg, Hook::TransferFrom)
}

fn reenter_on_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: TokenExecuteMsg,
) -> Result<Response, wrapped_token::ContractError> {
    reentrant_execute(deps, env, info, msg, Hook::Transfer)
}

fn reenter_on_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: TokenExecuteMsg,
) -> Result<Response, wrapped_token::ContractError> {
    reentrant_execute(deps, env, info, msg, Hook::Mint)
}

fn reenter_on_burn_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: TokenExecuteMsg,
) -> Result<Response, wrapped_token::ContractError> {
    reentrant_execute(deps, env, info, msg, Hook::BurnFrom)
}

fn contract_token(hook: Hook) -> Box<dyn Contract<Empty>> {
    type ExecuteFn = fn(
        DepsMut,
        Env,
        MessageInfo,
        TokenExecuteMsg,
    ) -> Result<Response, wrapped_token::ContractError>;
    let execute: ExecuteFn = match hook {
        Hook::None => wrapped_token::contract::execute,
        Hook::TransferFrom => reenter_on_transfer_from,
        Hook::Transfer => reenter_on_transfer,
        Hook::Mint => reenter_on_mint,
        Hook::BurnFrom => reenter_on_burn_from,
    };
    Box::new(ContractWrapper::new(
        execute,
        wrapped_token::contract::instantiate,
        wrapped_token::contract::query,
    ))
}

/// Plain cw20-base token that knows nothing about capabilities
fn contract_cw20_base() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

// ============================================================================
// Bridge Contracts
// ============================================================================

fn contract_bridge() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            bridge::contract::execute,
            bridge::contract::instantiate,
            bridge::contract::query,
        )
        .with_reply(bridge::contract::reply),
    )
}

fn contract_safe_handler() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            safe_handler::contract::execute,
            safe_handler::contract::instantiate,
            safe_handler::contract::query,
        )
        .with_reply(safe_handler::contract::reply),
    )
}

fn contract_validator() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        validator::contract::execute,
        validator::contract::instantiate,
        validator::contract::query,
    ))
}

// ============================================================================
// Chain
// ============================================================================

/// A token native to a chain, funded for ALICE and BOB
#[derive(Clone, Debug)]
pub struct TokenSpec {
    pub name: &'static str,
    pub symbol: &'static str,
    pub capability: TokenCapability,
    pub hook: Hook,
    /// Deploy plain cw20-base instead of the bridge token code
    pub cw20_base: bool,
}

impl TokenSpec {
    pub fn plain(name: &'static str, symbol: &'static str) -> Self {
        Self {
            name,
            symbol,
            capability: TokenCapability::Plain,
            hook: Hook::None,
            cw20_base: false,
        }
    }

    pub fn permit(name: &'static str, symbol: &'static str) -> Self {
        Self {
            capability: TokenCapability::Permit,
            ..Self::plain(name, symbol)
        }
    }

    pub fn hostile(mut self, hook: Hook) -> Self {
        self.hook = hook;
        self
    }

    pub fn cw20_base(name: &'static str, symbol: &'static str) -> Self {
        Self {
            cw20_base: true,
            ..Self::plain(name, symbol)
        }
    }
}

/// What the target chain is told about a source-chain token
#[derive(Clone, Debug)]
pub struct SourceToken {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub is_permit: bool,
}

pub struct Chain {
    pub app: App,
    pub bridge: Addr,
    pub safe_handler: Addr,
    pub validator: Addr,
    pub tokens: Vec<Addr>,
}

impl Chain {
    /// Deploy `tokens`, then the bridge contracts. Representative tokens are
    /// instantiated from the token code with `wrapped_hook`.
    pub fn new(chain_id: &str, tokens: &[TokenSpec], wrapped_hook: Hook) -> Self {
        let mut app = App::default();
        app.update_block(|block| block.chain_id = chain_id.to_string());
        let admin = Addr::unchecked(ADMIN);

        let token_addrs = tokens
            .iter()
            .map(|spec| {
                let balances = vec![
                    Cw20Coin {
                        address: ALICE.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                    Cw20Coin {
                        address: BOB.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                ];
                if spec.cw20_base {
                    let code_id = app.store_code(contract_cw20_base());
                    app.instantiate_contract(
                        code_id,
                        admin.clone(),
                        &cw20_base::msg::InstantiateMsg {
                            name: spec.name.to_string(),
                            symbol: spec.symbol.to_string(),
                            decimals: 6,
                            initial_balances: balances,
                            mint: None,
                            marketing: None,
                        },
                        &[],
                        spec.symbol,
                        None,
                    )
                    .unwrap()
                } else {
                    let code_id = app.store_code(contract_token(spec.hook));
                    app.instantiate_contract(
                        code_id,
                        admin.clone(),
                        &TokenInstantiateMsg {
                            name: spec.name.to_string(),
                            symbol: spec.symbol.to_string(),
                            decimals: 6,
                            owner: MINTER.to_string(),
                            capability: spec.capability,
                            initial_balances: balances,
                        },
                        &[],
                        spec.symbol,
                        None,
                    )
                    .unwrap()
                }
            })
            .collect::<Vec<_>>();

        let bridge_code = app.store_code(contract_bridge());
        let handler_code = app.store_code(contract_safe_handler());
        let validator_code = app.store_code(contract_validator());
        let wrapped_code = app.store_code(contract_token(wrapped_hook));

        let bridge = app
            .instantiate_contract(
                bridge_code,
                admin.clone(),
                &InstantiateMsg {
                    admin: ADMIN.to_string(),
                },
                &[],
                "bridge",
                Some(ADMIN.to_string()),
            )
            .unwrap();
        let safe_handler = app
            .instantiate_contract(
                handler_code,
                admin.clone(),
                &HandlerInstantiateMsg {
                    bridge: bridge.to_string(),
                    wrapped_token_code_id: wrapped_code,
                },
                &[],
                "safe-handler",
                Some(ADMIN.to_string()),
            )
            .unwrap();
        let validator = app
            .instantiate_contract(
                validator_code,
                admin.clone(),
                &ValidatorInstantiateMsg {
                    bridge: bridge.to_string(),
                    signer: key_address_of(&attester()),
                },
                &[],
                "validator",
                Some(ADMIN.to_string()),
            )
            .unwrap();

        app.execute_contract(
            admin.clone(),
            bridge.clone(),
            &ExecuteMsg::SetSafeHandler {
                address: Some(safe_handler.to_string()),
            },
            &[],
        )
        .unwrap();
        app.execute_contract(
            admin,
            bridge.clone(),
            &ExecuteMsg::SetValidator {
                address: Some(validator.to_string()),
            },
            &[],
        )
        .unwrap();

        Chain {
            app,
            bridge,
            safe_handler,
            validator,
            tokens: token_addrs,
        }
    }

    pub fn chain_id(&self) -> String {
        self.app.block_info().chain_id
    }

    pub fn now(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    // ------------------------------------------------------------------------
    // Calls
    // ------------------------------------------------------------------------

    pub fn execute_bridge(&mut self, sender: &str, msg: &ExecuteMsg) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(Addr::unchecked(sender), self.bridge.clone(), msg, &[])
    }

    pub fn execute_token(
        &mut self,
        sender: &str,
        token: &Addr,
        msg: &TokenExecuteMsg,
    ) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(Addr::unchecked(sender), token.clone(), msg, &[])
    }

    /// Allow the safe handler to move `amount` of `owner`'s `token`
    pub fn approve(&mut self, owner: &str, token: &Addr, amount: u128) {
        let spender = self.safe_handler.to_string();
        self.execute_token(
            owner,
            token,
            &TokenExecuteMsg::IncreaseAllowance {
                spender,
                amount: Uint128::new(amount),
                expires: None,
            },
        )
        .unwrap();
    }

    pub fn deposit(
        &mut self,
        depositor: &str,
        token: &Addr,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.execute_bridge(
            depositor,
            &ExecuteMsg::Deposit {
                token: token.to_string(),
                amount: Uint128::new(amount),
            },
        )
    }

    pub fn burn(&mut self, holder: &str, token: &Addr, amount: u128) -> AnyResult<AppResponse> {
        self.execute_bridge(
            holder,
            &ExecuteMsg::Burn {
                token: token.to_string(),
                amount: Uint128::new(amount),
            },
        )
    }

    /// Withdraw with a request signed by the attester for the caller's
    /// current nonce
    pub fn withdraw(
        &mut self,
        recipient: &str,
        source: &SourceToken,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        let nonce = self.nonce(recipient);
        let signature = self.sign_withdraw(&attester(), recipient, source, amount, nonce);
        self.withdraw_with(recipient, source, amount, signature)
    }

    pub fn withdraw_with(
        &mut self,
        recipient: &str,
        source: &SourceToken,
        amount: u128,
        signature: Binary,
    ) -> AnyResult<AppResponse> {
        self.execute_bridge(
            recipient,
            &ExecuteMsg::Withdraw {
                source_token: source.address.clone(),
                symbol: source.symbol.clone(),
                name: source.name.clone(),
                is_permit: source.is_permit,
                amount: Uint128::new(amount),
                signature,
            },
        )
    }

    /// Release with a request signed by the attester for the caller's
    /// current nonce
    pub fn release(
        &mut self,
        recipient: &str,
        token: &Addr,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        let nonce = self.nonce(recipient);
        let signature = self.sign_release(&attester(), recipient, token, amount, nonce);
        self.release_with(recipient, token, amount, signature)
    }

    pub fn release_with(
        &mut self,
        recipient: &str,
        token: &Addr,
        amount: u128,
        signature: Binary,
    ) -> AnyResult<AppResponse> {
        self.execute_bridge(
            recipient,
            &ExecuteMsg::Release {
                token: token.to_string(),
                amount: Uint128::new(amount),
                signature,
            },
        )
    }

    // ------------------------------------------------------------------------
    // Signing
    // ------------------------------------------------------------------------

    /// Digest of `request` as computed by this chain's validator
    pub fn request_digest(&self, request: &WithdrawalRequest) -> Vec<u8> {
        let res: DigestResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.validator.clone(),
                &ValidatorQueryMsg::Digest {
                    request: request.clone(),
                },
            )
            .unwrap();
        res.digest.to_vec()
    }

    pub fn withdraw_request(
        &self,
        from: &str,
        source: &SourceToken,
        amount: u128,
        nonce: u64,
    ) -> WithdrawalRequest {
        WithdrawalRequest {
            validator: key_address_of(&attester()),
            bridge: self.bridge.to_string(),
            from: from.to_string(),
            amount: Uint128::new(amount),
            source_token: source.address.clone(),
            source_token_symbol: source.symbol.clone(),
            source_token_name: source.name.clone(),
            is_source_token_permit: source.is_permit,
            wrapped_token: self
                .wrapped_token(&source.address)
                .map(|a| a.to_string())
                .unwrap_or_default(),
            token_type: TokenType::Wrapped,
            nonce,
        }
    }

    pub fn release_request(
        &self,
        from: &str,
        token: &Addr,
        amount: u128,
        nonce: u64,
    ) -> WithdrawalRequest {
        let info: cw20::TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(token.clone(), &TokenQueryMsg::TokenInfo {})
            .unwrap();
        WithdrawalRequest {
            validator: key_address_of(&attester()),
            bridge: self.bridge.to_string(),
            from: from.to_string(),
            amount: Uint128::new(amount),
            source_token: token.to_string(),
            source_token_symbol: info.symbol,
            source_token_name: info.name,
            is_source_token_permit: false,
            wrapped_token: String::new(),
            token_type: TokenType::Native,
            nonce,
        }
    }

    pub fn sign_withdraw(
        &self,
        key: &SigningKey,
        from: &str,
        source: &SourceToken,
        amount: u128,
        nonce: u64,
    ) -> Binary {
        let request = self.withdraw_request(from, source, amount, nonce);
        sign_digest(key, &self.request_digest(&request))
    }

    pub fn sign_release(
        &self,
        key: &SigningKey,
        from: &str,
        token: &Addr,
        amount: u128,
        nonce: u64,
    ) -> Binary {
        let request = self.release_request(from, token, amount, nonce);
        sign_digest(key, &self.request_digest(&request))
    }

    /// Bind `owner`'s account on `token` to `key` for permits
    pub fn register_permit_signer(&mut self, owner: &str, token: &Addr, key: &SigningKey) {
        self.execute_token(
            owner,
            token,
            &TokenExecuteMsg::RegisterPermitSigner {
                signer: key_address_of(key),
            },
        )
        .unwrap();
    }

    /// Permit granting the safe handler `amount` of `owner`'s `token`,
    /// split into `(v, r, s)`
    pub fn sign_permit(
        &self,
        key: &SigningKey,
        owner: &str,
        token: &Addr,
        amount: u128,
        deadline: u64,
    ) -> (u8, Binary, Binary) {
        let info: cw20::TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(token.clone(), &TokenQueryMsg::TokenInfo {})
            .unwrap();
        let nonce: PermitNonceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token.clone(),
                &TokenQueryMsg::PermitNonce {
                    owner: owner.to_string(),
                },
            )
            .unwrap();
        let permit = Permit {
            owner: owner.to_string(),
            spender: self.safe_handler.to_string(),
            value: Uint128::new(amount),
            nonce: nonce.nonce,
            deadline,
        };
        let domain = Domain::permit(info.name, self.chain_id(), token.to_string());
        let signature = sign_digest(key, &permit.digest(&domain));
        (
            signature[64],
            Binary::from(signature[..32].to_vec()),
            Binary::from(signature[32..64].to_vec()),
        )
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn balance(&self, token: &Addr, address: &str) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token.clone(),
                &TokenQueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn locked(&self, depositor: &str, token: &Addr) -> u128 {
        let res: DepositedAmountResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.safe_handler.clone(),
                &HandlerQueryMsg::DepositedAmount {
                    depositor: depositor.to_string(),
                    token: token.to_string(),
                },
            )
            .unwrap();
        res.amount.u128()
    }

    pub fn nonce(&self, subject: &str) -> u64 {
        let res: NonceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.validator.clone(),
                &ValidatorQueryMsg::Nonce {
                    subject: subject.to_string(),
                },
            )
            .unwrap();
        res.nonce
    }

    pub fn wrapped_token(&self, source_token: &str) -> Option<Addr> {
        let res: WrappedTokenResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.safe_handler.clone(),
                &HandlerQueryMsg::WrappedToken {
                    source_token: source_token.to_string(),
                },
            )
            .unwrap();
        res.wrapped_token
    }

    pub fn token_record(&self, token: &Addr) -> Option<TokenRecord> {
        let res: TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.safe_handler.clone(),
                &HandlerQueryMsg::TokenInfo {
                    token: token.to_string(),
                },
            )
            .unwrap();
        res.record
    }

    pub fn capability(&self, token: &Addr) -> TokenCapability {
        let res: CapabilityResponse = self
            .app
            .wrap()
            .query_wasm_smart(token.clone(), &TokenQueryMsg::Capability {})
            .unwrap();
        res.capability
    }

    pub fn is_locked(&self) -> bool {
        let res: IsLockedResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.bridge.clone(), &QueryMsg::IsLocked {})
            .unwrap();
        res.locked
    }

    /// How the target chain refers to this chain's `token`
    pub fn source_token(&self, token: &Addr) -> SourceToken {
        let info: cw20::TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(token.clone(), &TokenQueryMsg::TokenInfo {})
            .unwrap();
        SourceToken {
            address: token.to_string(),
            symbol: info.symbol,
            name: info.name,
            is_permit: self.capability(token).supports_permit(),
        }
    }
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_error_contains(res: AnyResult<AppResponse>, expected: &str) {
    let err = res.unwrap_err();
    let root = err.root_cause().to_string();
    assert!(
        root.contains(expected),
        "expected error containing {:?}, got {:?}",
        expected,
        root
    );
}

/// Protocol events (`wasm-deposit`, `wasm-withdraw`, ...) of a response
pub fn protocol_events(res: &AppResponse) -> Vec<&cosmwasm_std::Event> {
    res.events
        .iter()
        .filter(|e| {
            matches!(
                e.ty.as_str(),
                "wasm-deposit" | "wasm-withdraw" | "wasm-burn" | "wasm-release"
            )
        })
        .collect()
}

pub fn event_attr<'a>(event: &'a cosmwasm_std::Event, key: &str) -> &'a str {
    event
        .attributes
        .iter()
        .find(|a| a.key == key)
        .map(|a| a.value.as_str())
        .unwrap_or_else(|| panic!("event {} has no attribute {}", event.ty, key))
}
