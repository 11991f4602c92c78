//! Three-dot score indicator for the results breakdown.
//!
//! Two lighting policies are available:
//!
//! | Score | Legacy lit positions | Monotonic lit positions |
//! |-------|----------------------|-------------------------|
//! | 3     | 0                    | 0, 1, 2                 |
//! | 2     | 0, 1                 | 0, 1                    |
//! | 1     | 0, 1, 2              | 0                       |
//!
//! `Legacy` is what the shipped results screen draws: the worse the score,
//! the more dots light up (in red). `Monotonic` fills one dot per score
//! point. Lit dots take the score's color; unlit dots are gray.

use serde::{Deserialize, Serialize};

use crate::constants::DOTS_PER_CATEGORY;
use crate::footprint::Score;

/// Which dots light up for a given score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorPolicy {
    /// Score 3 lights one dot, score 1 lights all three.
    #[default]
    Legacy,
    /// Score `n` lights the first `n` dots.
    Monotonic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorLevel {
    Filled,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorColor {
    Green,
    Yellow,
    Red,
    Gray,
}

impl IndicatorColor {
    /// Color of a lit dot for this score.
    pub fn for_score(score: Score) -> Self {
        match score {
            Score::Good => Self::Green,
            Score::Fair => Self::Yellow,
            Score::Poor => Self::Red,
        }
    }
}

/// Number of lit dots for a score under a policy.
pub fn lit_count(score: Score, policy: IndicatorPolicy) -> usize {
    match policy {
        IndicatorPolicy::Legacy => DOTS_PER_CATEGORY + 1 - score.value() as usize,
        IndicatorPolicy::Monotonic => score.value() as usize,
    }
}

/// Whether the dot at `position` (0-based) is lit. Positions past the last
/// dot are always empty.
pub fn indicator_level(score: Score, position: usize, policy: IndicatorPolicy) -> IndicatorLevel {
    if position < DOTS_PER_CATEGORY && position < lit_count(score, policy) {
        IndicatorLevel::Filled
    } else {
        IndicatorLevel::Empty
    }
}

pub fn indicator_color(score: Score, position: usize, policy: IndicatorPolicy) -> IndicatorColor {
    match indicator_level(score, position, policy) {
        IndicatorLevel::Filled => IndicatorColor::for_score(score),
        IndicatorLevel::Empty => IndicatorColor::Gray,
    }
}

/// Colors for the whole row of dots, left to right.
pub fn indicator_row(score: Score, policy: IndicatorPolicy) -> [IndicatorColor; DOTS_PER_CATEGORY] {
    let mut row = [IndicatorColor::Gray; DOTS_PER_CATEGORY];
    for (position, color) in row.iter_mut().enumerate() {
        *color = indicator_color(score, position, policy);
    }
    row
}
