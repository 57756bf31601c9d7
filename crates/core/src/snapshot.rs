use crate::pieces::PieceShape;
use crate::tetromino::Tetromino;
use crate::types::{ColorGrid, PieceKind, Phase, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute cells, possibly above the visible top.
    pub cells: PieceShape,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.positions(None),
        }
    }
}

/// Read-only view of a session, produced every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells with the falling piece overlaid, `grid[y][x]`.
    pub grid: ColorGrid,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub fall_interval_ms: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub seed: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.next = PieceKind::I;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.fall_interval_ms = 0;
        self.phase = Phase::Spawning;
        self.game_over = false;
        self.seed = 0;
        self.piece_id = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            lines: 0,
            level: 1,
            fall_interval_ms: 0,
            phase: Phase::Spawning,
            game_over: false,
            seed: 0,
            piece_id: 0,
        };
        s.clear();
        s
    }
}
