//! Token classification types shared by the custody ledger, the bridge and
//! the representative token.

use cosmwasm_schema::cw_serde;

/// Whether a token is the original asset on this chain or a 1:1
/// representative of an asset locked on the other chain.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum TokenType {
    Native,
    Wrapped,
}

impl TokenType {
    /// Value used for the `uint8 tokenType` member of signed requests
    pub fn as_u8(&self) -> u8 {
        match self {
            TokenType::Native => 0,
            TokenType::Wrapped => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Native => "native",
            TokenType::Wrapped => "wrapped",
        }
    }
}

/// Capability tag of a representative token.
///
/// Selected once, when the token is deployed, from the request's
/// `is_source_token_permit` flag.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum TokenCapability {
    /// Allowances are granted with `IncreaseAllowance` only
    Plain,
    /// Allowances can also be granted by a signed permit
    Permit,
}

impl TokenCapability {
    pub fn from_permit_flag(is_permit: bool) -> Self {
        if is_permit {
            TokenCapability::Permit
        } else {
            TokenCapability::Plain
        }
    }

    pub fn supports_permit(&self) -> bool {
        matches!(self, TokenCapability::Permit)
    }
}

/// Custody ledger classification of a token address.
#[cw_serde]
pub struct TokenRecord {
    /// Token on the other chain this one represents (`None` for native tokens)
    pub source_token: Option<String>,
    pub token_type: TokenType,
}

impl TokenRecord {
    pub fn native() -> Self {
        Self {
            source_token: None,
            token_type: TokenType::Native,
        }
    }

    pub fn wrapped(source_token: impl Into<String>) -> Self {
        Self {
            source_token: Some(source_token.into()),
            token_type: TokenType::Wrapped,
        }
    }

    /// A native token never has a source token and a wrapped token always
    /// has one. Any other combination means the stored record is corrupted.
    pub fn is_consistent(&self) -> bool {
        match self.token_type {
            TokenType::Native => self.source_token.is_none(),
            TokenType::Wrapped => self
                .source_token
                .as_deref()
                .map(|s| !s.is_empty())
                .unwrap_or(false),
        }
    }
}
