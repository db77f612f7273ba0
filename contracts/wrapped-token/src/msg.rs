//! Message types for the representative token
//!
//! Defined in `common` so the custody ledger and the bridge can build them
//! without depending on this crate.

pub use common::wrapped_token::*;
