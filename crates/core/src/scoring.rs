//! Scoring module - line clear points and level progression
//!
//! Points for a lock are `LINE_SCORES[lines] * level`, with 4 or more lines paying the
//! Tetris rate. A level-up happens at most once per lock, when the running line total
//! reaches `level * lines_per_level`.

use crate::types::LINE_SCORES;

/// Score calculation result for one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points awarded for this lock
    pub points: u32,
    /// Line total after this lock
    pub total_lines: u32,
    /// Level after this lock
    pub level: u32,
    /// Whether this lock raised the level
    pub leveled_up: bool,
}

/// Base points for clearing `lines` lines, before the level multiplier
pub fn base_line_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Calculate line clear score
/// lines: number of lines cleared
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    base_line_score(lines).saturating_mul(level)
}

/// Whether the running total has reached the next level threshold
pub fn should_level_up(total_lines: u32, level: u32, lines_per_level: u32) -> bool {
    total_lines >= level.saturating_mul(lines_per_level)
}

/// Calculate the full outcome of a lock that cleared `lines` lines.
///
/// Points use the level in effect before any level-up.
pub fn calculate_score(
    lines: usize,
    level: u32,
    total_lines: u32,
    lines_per_level: u32,
) -> ScoreResult {
    let points = calculate_line_score(lines, level);
    let total_lines = total_lines.saturating_add(lines as u32);
    let leveled_up = should_level_up(total_lines, level, lines_per_level);

    ScoreResult {
        points,
        total_lines,
        level: if leveled_up { level + 1 } else { level },
        leveled_up,
    }
}
