//! Hashing and ABI word encoding primitives
//!
//! Typed-data hashing works on 32-byte words. These helpers produce the
//! same words the EVM's `abi.encode` would for the handful of types the
//! bridge signs over.
//!
//! # Word layout
//! - `uint256` / `uint8`: big-endian, left-padded with zeros
//! - `bool`: `0x…00` or `0x…01`
//! - `string`: keccak256 of the UTF-8 bytes (dynamic types are hashed)

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode a u128 as a uint256 word (left-padded, big-endian)
pub fn encode_u128(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    // u128 (16 bytes) goes into bytes 16-31
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a u64 as a uint256 word (left-padded, big-endian)
pub fn encode_u64(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a u8 as a uint8 word
pub fn encode_u8(value: u8) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[31] = value;
    word
}

/// Encode a bool as a word
pub fn encode_bool(value: bool) -> [u8; 32] {
    encode_u8(value as u8)
}

/// Encode a dynamic string member: keccak256 of its bytes
pub fn encode_string(value: &str) -> [u8; 32] {
    keccak256(value.as_bytes())
}

/// keccak256 over the concatenation of 32-byte words
pub fn hash_words(words: &[[u8; 32]]) -> [u8; 32] {
    let mut data = Vec::with_capacity(words.len() * 32);
    for word in words {
        data.extend_from_slice(word);
    }
    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
