//! Terminal rendering for the game.
//!
//! A small, game-oriented layer: the view paints a snapshot into a plain
//! framebuffer, and the renderer flushes that framebuffer to the terminal,
//! re-emitting only what changed since the previous frame.
//!
//! Board cells are drawn 2 columns wide by default to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
