//! Typed-data digests for signed bridge requests
//!
//! Digests follow the EIP-712 construction so that attesters can reuse
//! standard typed-data signers:
//!
//! ```text
//! digest = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)
//! ```
//!
//! Chain ids and addresses are strings on CosmWasm chains, so every
//! address-like member and the chain id are `string` members (hashed).
//! The domain binds a digest to one contract on one chain; a signature
//! produced for one deployment never verifies on another.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::hash::{
    encode_bool, encode_string, encode_u128, encode_u64, encode_u8, hash_words, keccak256,
};
use crate::token::TokenType;

/// Domain name used by the request authorizer
pub const VALIDATOR_DOMAIN_NAME: &str = "Validator";

/// Domain version used by the request authorizer
pub const VALIDATOR_DOMAIN_VERSION: &str = "0.1";

/// Domain version used by permit-capable tokens
pub const PERMIT_DOMAIN_VERSION: &str = "1";

pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,string chainId,string verifyingContract)";

/// The one supported request schema. Older layouts (without symbol, name,
/// permit flag or wrapped-token hint) hash to a different type and are
/// therefore never accepted.
pub const WITHDRAWAL_REQUEST_TYPE: &str = concat!(
    "WithdrawalRequest(string validator,string bridge,string from,uint256 amount,",
    "string sourceToken,string sourceTokenSymbol,string sourceTokenName,",
    "bool isSourceTokenPermit,string wrappedToken,uint8 tokenType,uint256 nonce)"
);

pub const PERMIT_TYPE: &str =
    "Permit(string owner,string spender,uint256 value,uint256 nonce,uint256 deadline)";

/// Signing domain of a contract deployment
#[cw_serde]
pub struct Domain {
    pub name: String,
    pub version: String,
    pub chain_id: String,
    pub verifying_contract: String,
}

impl Domain {
    /// Domain of a request authorizer deployed at `verifying_contract`
    pub fn validator(chain_id: impl Into<String>, verifying_contract: impl Into<String>) -> Self {
        Self {
            name: VALIDATOR_DOMAIN_NAME.to_string(),
            version: VALIDATOR_DOMAIN_VERSION.to_string(),
            chain_id: chain_id.into(),
            verifying_contract: verifying_contract.into(),
        }
    }

    /// Domain of a permit-capable token named `token_name`
    pub fn permit(
        token_name: impl Into<String>,
        chain_id: impl Into<String>,
        verifying_contract: impl Into<String>,
    ) -> Self {
        Self {
            name: token_name.into(),
            version: PERMIT_DOMAIN_VERSION.to_string(),
            chain_id: chain_id.into(),
            verifying_contract: verifying_contract.into(),
        }
    }

    pub fn separator(&self) -> [u8; 32] {
        hash_words(&[
            keccak256(DOMAIN_TYPE.as_bytes()),
            encode_string(&self.name),
            encode_string(&self.version),
            encode_string(&self.chain_id),
            encode_string(&self.verifying_contract),
        ])
    }
}

/// Request attested by the validator key authorizing a withdraw (mint on
/// the target chain) or a release (unlock on the source chain).
#[cw_serde]
pub struct WithdrawalRequest {
    /// Key address of the attester (`0x` + 40 lowercase hex chars)
    pub validator: String,
    /// Bridge contract that will execute the request
    pub bridge: String,
    /// Subject of the request; its nonce is consumed
    pub from: String,
    pub amount: Uint128,
    /// Token on the chain where the asset is native
    pub source_token: String,
    pub source_token_symbol: String,
    pub source_token_name: String,
    pub is_source_token_permit: bool,
    /// Registered representative token, empty before the first withdrawal
    pub wrapped_token: String,
    pub token_type: TokenType,
    pub nonce: u64,
}

impl WithdrawalRequest {
    pub fn struct_hash(&self) -> [u8; 32] {
        hash_words(&[
            keccak256(WITHDRAWAL_REQUEST_TYPE.as_bytes()),
            encode_string(&self.validator),
            encode_string(&self.bridge),
            encode_string(&self.from),
            encode_u128(self.amount.u128()),
            encode_string(&self.source_token),
            encode_string(&self.source_token_symbol),
            encode_string(&self.source_token_name),
            encode_bool(self.is_source_token_permit),
            encode_string(&self.wrapped_token),
            encode_u8(self.token_type.as_u8()),
            encode_u64(self.nonce),
        ])
    }

    /// Digest the validator key signs for this request under `domain`
    pub fn digest(&self, domain: &Domain) -> [u8; 32] {
        typed_data_digest(&domain.separator(), &self.struct_hash())
    }
}

/// Signed allowance grant for permit-capable tokens
#[cw_serde]
pub struct Permit {
    pub owner: String,
    pub spender: String,
    pub value: Uint128,
    pub nonce: u64,
    /// Unix timestamp (seconds) after which the permit is void
    pub deadline: u64,
}

impl Permit {
    pub fn struct_hash(&self) -> [u8; 32] {
        hash_words(&[
            keccak256(PERMIT_TYPE.as_bytes()),
            encode_string(&self.owner),
            encode_string(&self.spender),
            encode_u128(self.value.u128()),
            encode_u64(self.nonce),
            encode_u64(self.deadline),
        ])
    }

    pub fn digest(&self, domain: &Domain) -> [u8; 32] {
        typed_data_digest(&domain.separator(), &self.struct_hash())
    }
}

/// `keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)`
pub fn typed_data_digest(domain_separator: &[u8; 32], struct_hash: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 66];
    data[0] = 0x19;
    data[1] = 0x01;
    data[2..34].copy_from_slice(domain_separator);
    data[34..66].copy_from_slice(struct_hash);
    keccak256(&data)
}
