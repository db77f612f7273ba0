//! Wrapped Token - 1:1 Representative of an Asset Locked on the Other Chain
//!
//! A CW20 whose balance and allowance logic comes from `cw20-base`. The
//! custody ledger that instantiates it is its owner: the only account that
//! can mint, and the only account that can burn (via `BurnFrom`, which
//! consumes the holder's allowance to the ledger).
//!
//! # Capabilities
//! - `Plain` - allowances are granted with `IncreaseAllowance`
//! - `Permit` - allowances can also be granted by a signed permit whose
//!   signer the holder registered with `RegisterPermitSigner`

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
