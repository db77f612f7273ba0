//! Message types for the bridge contract (shared through `common`)

pub use common::bridge::*;
