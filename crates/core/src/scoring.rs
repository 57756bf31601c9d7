//! Scoring module - classic line-clear points and level progression
//!
//! - Level starts at 1 and rises every 10 cleared lines.
//! - A clear of 1/2/3/4+ rows is worth 100/300/500/800 points times the level
//!   that was in effect when the piece locked.
//! - Gravity starts at 600ms per row and speeds up by 50ms per level, never
//!   faster than 100ms per row.

use crate::types::{BASE_FALL_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS};

/// Level reached after clearing `lines` lines in total.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval (milliseconds per row) at `level`.
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(MIN_FALL_MS)
}

/// Points for clearing `rows` rows at once at `level`.
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    let idx = rows.min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx].saturating_mul(level)
}
