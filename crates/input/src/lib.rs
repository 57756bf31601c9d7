//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and batches
//! them per tick. Every press is one intent; there is no auto-repeat handling
//! beyond what the terminal itself sends.

pub mod intents;
pub mod map;

pub use blockfall_types as types;

pub use intents::{IntentBuffer, MAX_INTENTS_PER_TICK};
pub use map::{handle_key_event, is_confirm, is_restart, should_quit};
