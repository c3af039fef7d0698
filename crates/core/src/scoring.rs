//! Scoring module
//!
//! A lock that clears `n` lines scores `n² × 100`, so clearing lines together
//! beats clearing them one at a time (2 at once = 400, 1 + 1 = 200).

use crate::types::LINE_CLEAR_BASE;

/// Points for a single lock that cleared `lines` rows.
pub fn line_clear_score(lines: u32) -> u32 {
    lines
        .saturating_mul(lines)
        .saturating_mul(LINE_CLEAR_BASE)
}
