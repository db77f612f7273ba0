//! Message types for the validator contract (shared through `common`)

pub use common::validator::*;
