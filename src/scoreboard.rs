//! Seven-segment score encoding
//!
//! The HUD shows two digits plus a minus sign. Segments follow the usual
//! a..g order: a top, b upper right, c lower right, d bottom, e lower left,
//! f upper left, g middle.

use serde::{Deserialize, Serialize};

/// Lit state of segments a..g
pub type SegmentPattern = [bool; 7];

const SEGMENTS: [SegmentPattern; 10] = [
    [true, true, true, true, true, true, false],     // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],    // 2
    [true, true, true, true, false, false, true],    // 3
    [false, true, true, false, false, true, true],   // 4
    [true, false, true, true, false, true, true],    // 5
    [true, false, true, true, true, true, true],     // 6
    [true, true, true, false, false, false, false],  // 7
    [true, true, true, true, true, true, true],      // 8
    [true, true, true, false, false, true, true],    // 9
];

/// Segment pattern for a single decimal digit (taken mod 10)
#[inline]
pub fn digit_segments(digit: u8) -> SegmentPattern {
    SEGMENTS[(digit % 10) as usize]
}

/// What the HUD draws for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDisplay {
    pub tens: u8,
    pub ones: u8,
    pub tens_segments: SegmentPattern,
    pub ones_segments: SegmentPattern,
    /// Minus sign lit
    pub negative: bool,
}

/// Encode a score. Only the last two digits of the magnitude are shown.
pub fn encode_score(score: i64) -> ScoreDisplay {
    let magnitude = score.unsigned_abs();
    let tens = ((magnitude / 10) % 10) as u8;
    let ones = (magnitude % 10) as u8;
    ScoreDisplay {
        tens,
        ones,
        tens_segments: digit_segments(tens),
        ones_segments: digit_segments(ones),
        negative: score < 0,
    }
}
