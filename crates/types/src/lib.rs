//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal frontend and the event journal alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (5, 1), the horizontal center one row below the top
//!
//! Rows above the visible area have negative `y`. Pieces may poke into that
//! area while falling or rotating, but never lock there.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frontend timestep (~60 FPS) |
//! | `BASE_FALL_MS` | 600 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval reduction per level |
//! | `MIN_FALL_MS` | 100 | Fastest gravity interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor column (horizontal center of the board)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;

/// Spawn anchor row
pub const SPAWN_Y: i8 = 1;

/// Default frontend timestep in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (600ms per row)
pub const BASE_FALL_MS: u32 = 600;

/// Gravity interval reduction per level above 1
pub const FALL_STEP_MS: u32 = 50;

/// Gravity interval floor
pub const MIN_FALL_MS: u32 = 100;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, multiplied by the current level.
///
/// Index is the number of rows cleared in one lock (4 or more use index 4).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Horizontal offsets tried, in order, when an in-place rotation is blocked.
pub const WALL_KICKS: [i8; 4] = [1, -1, 2, -2];


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **S**: Green
/// - **Z**: Red (mirror of S)
/// - **I**: Cyan, four in a row
/// - **O**: Yellow, 2x2 square
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
/// - **T**: Purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    S,
    Z,
    I,
    O,
    J,
    L,
    T,
}

impl PieceKind {
    /// Every piece kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::T => "t",
        }
    }

    /// Display color of the shape.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::S => Rgb::new(80, 220, 100),
            PieceKind::Z => Rgb::new(220, 80, 80),
            PieceKind::I => Rgb::new(80, 210, 220),
            PieceKind::O => Rgb::new(220, 220, 80),
            PieceKind::J => Rgb::new(80, 80, 220),
            PieceKind::L => Rgb::new(220, 140, 80),
            PieceKind::T => Rgb::new(160, 80, 220),
        }
    }
}

/// Rotation states
///
/// The rotation index counts how many times the quarter-turn transform
/// `(x, y) -> (-y, x)` has been applied to the base offsets. With `y`
/// growing downwards this is a clockwise turn on screen.
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in `0..4`
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build a rotation from any index (taken mod 4)
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Player intents that can be applied to a running game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, independent of gravity
    SoftDrop,
    /// Rotate piece a quarter turn, with wall kicks
    Rotate,
    /// Drop piece to its lowest valid position and lock it
    HardDrop,
}

/// Result of applying a single intent.
///
/// Rejected intents leave the game untouched; they are a normal outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted,
    Rejected,
}

impl From<bool> for MoveOutcome {
    fn from(accepted: bool) -> Self {
        if accepted {
            MoveOutcome::Accepted
        } else {
            MoveOutcome::Rejected
        }
    }
}

/// Session phase
///
/// - **Spawning**: a fresh piece is in place; the next tick starts its fall
/// - **Falling**: gravity and player intents move the piece
/// - **Locking**: the piece could not advance and commits this tick
/// - **GameOver**: terminal, no further mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    GameOver,
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Points awarded for the clear (0 when nothing cleared)
    pub points: u32,
    /// The lock ended the game (cell above the top, or no room for the next piece)
    pub topped_out: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by the given piece kind (its color)
pub type Cell = Option<PieceKind>;

/// Renderable grid: row-major, `grid[y][x]`, color or empty.
pub type ColorGrid = [[Option<Rgb>; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
