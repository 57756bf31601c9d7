//! Game state module - the session state machine
//!
//! This module ties together the board, pieces, randomizer and scoring. A
//! session moves through `Spawning → Falling → Locking → Spawning ...` until a
//! lock reaches above the visible top (or a fresh piece has no room), which
//! ends it in `GameOver`.
//!
//! The caller drives the session with [`GameState::tick`], once per frame,
//! passing the elapsed time and the player intents collected for that frame.

use crate::board::Board;
use crate::collision::{fits_at, is_valid};
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::rng::PieceRandomizer;
use crate::tetromino::Tetromino;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Tetromino,
    next: Tetromino,
    randomizer: PieceRandomizer,
    phase: Phase,
    score: u32,
    lines: u32,
    /// Time accumulated towards the next gravity step.
    fall_timer_ms: u32,
    /// Monotonic id of the current piece (1 for the first piece).
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let current = Tetromino::new(randomizer.draw());
        let next = Tetromino::new(randomizer.draw());

        Self {
            board: Board::new(),
            current,
            next,
            randomizer,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
            fall_timer_ms: 0,
            piece_id: 1,
            last_event: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        level_for_lines(self.lines)
    }

    /// Current gravity interval based on level
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level())
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// The falling piece, or `None` once the game is over
    pub fn active(&self) -> Option<Tetromino> {
        if self.game_over() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn next(&self) -> Tetromino {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup (puzzles, tests, benches).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the falling piece, for scenario setup.
    pub fn replace_current(&mut self, piece: Tetromino) {
        self.current = piece;
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Locked cells with the falling piece's visible cells overlaid.
    ///
    /// Derived on every call; the board stays the only source of truth.
    pub fn renderable_grid(&self) -> ColorGrid {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.write_renderable_grid(&mut grid);
        grid
    }

    fn write_renderable_grid(&self, grid: &mut ColorGrid) {
        self.board.write_color_grid(grid);
        let Some(active) = self.active() else {
            return;
        };
        let color = active.color();
        for (x, y) in active.positions(None) {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                grid[y as usize][x as usize] = Some(color);
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.write_renderable_grid(&mut out.grid);

        out.active = self.active().map(ActiveSnapshot::from);
        out.next = self.next.kind;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level();
        out.fall_interval_ms = self.fall_interval_ms();
        out.phase = self.phase;
        out.game_over = self.game_over();
        out.seed = self.seed();
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the session by one frame.
    ///
    /// Order within a tick: gravity (at most one row), then `intents` in the
    /// order given, then the lock/clear/score cascade if the piece could not
    /// stay in play. Points for a clear use the level in effect when the tick
    /// started. A finished session is returned unchanged.
    pub fn tick(&mut self, elapsed_ms: u32, intents: &[GameAction]) -> GameSnapshot {
        match self.phase {
            Phase::GameOver => return self.snapshot(),
            Phase::Spawning => self.phase = Phase::Falling,
            Phase::Falling | Phase::Locking => {}
        }

        let level = self.level();

        if self.phase == Phase::Falling {
            self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
            if self.fall_timer_ms >= fall_interval_ms(level) {
                self.fall_timer_ms = 0;
                if !self.try_move(0, 1) {
                    self.phase = Phase::Locking;
                }
            }
        }

        for &action in intents {
            self.apply_action(action);
        }

        if self.phase == Phase::Locking {
            self.lock_piece(level);
        }

        self.snapshot()
    }

    /// Apply a single intent to the falling piece.
    ///
    /// Rejected when the move does not fit or the game is over. A pending
    /// lock does not stop intents: the piece still moves, and locks wherever
    /// it ends up at the end of the current (or next) tick. A hard drop is
    /// always accepted.
    pub fn apply_action(&mut self, action: GameAction) -> MoveOutcome {
        if self.phase == Phase::GameOver {
            return MoveOutcome::Rejected;
        }

        let accepted = match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        };
        accepted.into()
    }

    /// Try to move the falling piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if fits_at(&self.current, &self.board, dx, dy, None) {
            self.current.translate(dx, dy);
            return true;
        }
        false
    }

    /// Rotate a quarter turn, falling back to horizontal kicks.
    ///
    /// Each kick step re-tests the unshifted position before trying the
    /// shifted one. The first failure leaves the piece exactly as it was.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let rotation = self.current.rotation.rotate_cw();

        if is_valid(&self.current, &self.board, Some(rotation)) {
            self.current.rotation = rotation;
            return true;
        }

        for &dx in WALL_KICKS.iter() {
            if is_valid(&self.current, &self.board, Some(rotation)) {
                self.current.rotation = rotation;
                return true;
            }
            self.current.translate(dx, 0);
            if is_valid(&self.current, &self.board, Some(rotation)) {
                self.current.rotation = rotation;
                return true;
            }
            self.current.translate(-dx, 0);
        }

        false
    }

    /// Drop the falling piece as far as it goes and request a lock.
    pub(crate) fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.phase = Phase::Locking;
        distance
    }

    /// Commit the falling piece, clear rows, score, and bring in the next piece.
    fn lock_piece(&mut self, level: u32) {
        let piece = self.current;

        let mut topped_out = false;
        for (x, y) in piece.positions(None) {
            if y < 0 {
                topped_out = true;
                break;
            }
            self.board.set(x, y, Some(piece.kind));
        }

        self.current = self.next;
        self.next = Tetromino::new(self.randomizer.draw());
        self.piece_id = self.piece_id.wrapping_add(1);

        let cleared = self.board.clear_full_rows().len();
        let mut points = 0;
        if cleared > 0 {
            points = line_clear_score(cleared, level);
            self.lines = self.lines.saturating_add(cleared as u32);
            self.score = self.score.saturating_add(points);
        }

        // Block-out is an extra game-over trigger on top of the lock-above-top
        // rule: a next piece that overlaps locked cells ends the session
        // instead of being spawned over them.
        let blocked = !topped_out && !is_valid(&self.current, &self.board, None);
        self.phase = if topped_out || blocked {
            Phase::GameOver
        } else {
            Phase::Spawning
        };

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            points,
            topped_out: self.phase == Phase::GameOver,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
