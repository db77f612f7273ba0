//! secp256k1 signer recovery
//!
//! Signers are identified by the 20-byte key address used on EVM chains:
//! the last 20 bytes of keccak256 over the uncompressed public key (without
//! its `0x04` prefix), rendered as `0x` + 40 lowercase hex characters.

use cosmwasm_std::{Api, Binary};
use thiserror::Error;

use crate::hash::keccak256;

pub const SIGNATURE_LENGTH: usize = 65;

#[derive(Error, Debug, PartialEq)]
pub enum SignatureError {
    #[error("signature must be 65 bytes, got {got}")]
    InvalidLength { got: usize },

    #[error("invalid recovery id: {v}")]
    InvalidRecoveryId { v: u8 },

    #[error("signer recovery failed: {reason}")]
    RecoveryFailed { reason: String },

    #[error("invalid key address: {address}")]
    InvalidKeyAddress { address: String },
}

/// Normalize `v` to a recovery id. Accepts both raw (0/1) and
/// Ethereum-style (27/28) values.
pub fn recovery_id(v: u8) -> Result<u8, SignatureError> {
    match v {
        0 | 1 => Ok(v),
        27 | 28 => Ok(v - 27),
        _ => Err(SignatureError::InvalidRecoveryId { v }),
    }
}

/// Assemble a `r ‖ s ‖ v` signature from its parts
pub fn signature_from_parts(v: u8, r: &Binary, s: &Binary) -> Result<Binary, SignatureError> {
    if r.len() != 32 || s.len() != 32 {
        return Err(SignatureError::InvalidLength {
            got: r.len() + s.len() + 1,
        });
    }
    let mut signature = Vec::with_capacity(SIGNATURE_LENGTH);
    signature.extend_from_slice(r.as_slice());
    signature.extend_from_slice(s.as_slice());
    signature.push(v);
    Ok(Binary::from(signature))
}

/// Key address of an uncompressed (65-byte) or raw (64-byte) public key
pub fn key_address(pubkey: &[u8]) -> Result<String, SignatureError> {
    let raw = match pubkey.len() {
        65 if pubkey[0] == 0x04 => &pubkey[1..],
        64 => pubkey,
        len => {
            return Err(SignatureError::RecoveryFailed {
                reason: format!("unexpected public key length {}", len),
            })
        }
    };
    let hash = keccak256(raw);
    Ok(format!("0x{}", hex::encode(&hash[12..])))
}

/// Recover the key address that produced `signature` over `digest`.
pub fn recover_signer(
    api: &dyn Api,
    digest: &[u8; 32],
    signature: &[u8],
) -> Result<String, SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength {
            got: signature.len(),
        });
    }
    let recovery_param = recovery_id(signature[64])?;
    let pubkey = api
        .secp256k1_recover_pubkey(digest, &signature[..64], recovery_param)
        .map_err(|e| SignatureError::RecoveryFailed {
            reason: e.to_string(),
        })?;
    key_address(&pubkey)
}

/// Validate a `0x`-prefixed 20-byte hex key address and return it lowercased
pub fn normalize_key_address(address: &str) -> Result<String, SignatureError> {
    let invalid = || SignatureError::InvalidKeyAddress {
        address: address.to_string(),
    };
    let body = address.strip_prefix("0x").ok_or_else(invalid)?;
    let bytes = hex::decode(body).map_err(|_| invalid())?;
    if bytes.len() != 20 {
        return Err(invalid());
    }
    Ok(format!("0x{}", hex::encode(bytes)))
}
