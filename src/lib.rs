//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `blockfall::{core,input,term,types}`
//! and hosts the pieces only the binary needs: runtime configuration and the
//! event journal.

pub mod config;
pub mod journal;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
