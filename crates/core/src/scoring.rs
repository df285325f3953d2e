//! Scoring module
//!
//! Flat scoring: every cleared row is worth the same, and clearing several
//! rows at once earns no bonus.

use crate::types::LINE_CLEAR_SCORE;

/// Points for clearing `lines` rows in one pass
pub fn calculate_line_score(lines: usize) -> u32 {
    LINE_CLEAR_SCORE.saturating_mul(lines as u32)
}
