//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else. It has no
//! dependency on the terminal, the clock, or the filesystem:
//!
//! - **Deterministic**: the same seed and the same tick sequence replay the same game
//! - **Headless**: drive it from a terminal loop, a test, or a bench
//! - **Allocation-free ticks**: boards, shapes and snapshots are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 locked-cell grid and row clearing
//! - [`pieces`]: the seven shapes and quarter-turn rotation
//! - [`tetromino`]: a placed piece (kind, rotation, anchor)
//! - [`collision`]: placement validity against walls, floor and locked cells
//! - [`scoring`]: line-clear points, levels and gravity speed
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: the session state machine
//! - [`snapshot`]: read-only per-tick view for renderers
//!
//! # Rules
//!
//! - Pieces spawn with their pivot at (5, 1) and may extend above the top edge.
//! - One clockwise rotation direction; a blocked rotation tries horizontal
//!   kicks of +1, -1, +2, -2 columns.
//! - No lock delay: a piece locks on the tick gravity fails to move it, or on
//!   the tick it is hard dropped. Intents later in that tick still move it.
//! - Locking any cell above the visible top ends the game. As an extension,
//!   so does a next piece that has no room at its spawn position.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! let snap = game.tick(16, &[GameAction::MoveRight, GameAction::HardDrop]);
//!
//! // The first piece is now part of the board.
//! assert_eq!(game.board().locked_count(), 4);
//! assert_eq!(snap.piece_id, 2);
//! ```
//!
//! # Timing
//!
//! Time is passed in as elapsed milliseconds. Gravity moves the piece one row
//! each time the accumulated time reaches the level's interval (600ms at
//! level 1, 50ms faster per level, never below 100ms).

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use collision::{fits_at, is_valid};
pub use game_state::GameState;
pub use pieces::{get_shape, PieceShape};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetromino::Tetromino;
