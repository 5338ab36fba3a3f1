//! Scoring module - flat per-row line clear points
//!
//! Every cleared row is worth [`LINE_CLEAR_POINTS`]; clearing several rows at
//! once earns no bonus over clearing them one at a time.

use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `lines` rows with a single lock.
pub fn line_clear_score(lines: usize) -> u32 {
    (lines as u32).saturating_mul(LINE_CLEAR_POINTS)
}
