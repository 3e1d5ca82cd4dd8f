//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under stable module names so downstream
//! code and the integration tests can use `blockfall::{core,term,types}`.

pub use blockfall_core as core;
pub use blockfall_term as term;
pub use blockfall_types as types;
