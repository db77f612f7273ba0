//! Message types for the safe handler (shared through `common`)

pub use common::safe_handler::*;
