//! Tunable evaluation weights.
//!
//! Weights are integer percentages applied to terms that are each normalised
//! to roughly [-100, 100], so a weighted sum divided by 100 stays on the same
//! scale.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-term weights for one game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalWeights {
    pub disc: i32,
    pub mobility: i32,
    pub corner: i32,
    pub edge: i32,
    pub near_corner: i32,
}

impl EvalWeights {
    /// Opening and middle game: position over material.
    pub const EARLY: EvalWeights = EvalWeights {
        disc: 10,
        mobility: 10,
        corner: 40,
        edge: 20,
        near_corner: 20,
    };

    /// Near-full board: few moves remain and disc count dominates.
    pub const LATE: EvalWeights = EvalWeights {
        disc: 40,
        mobility: 0,
        corner: 30,
        edge: 10,
        near_corner: 20,
    };
}

/// Phase-dependent evaluation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvalParams {
    pub early: EvalWeights,
    pub late: EvalWeights,
    /// Positions with more discs than this use the late weights
    pub late_phase_threshold: u32,
    /// Combined mobility at or below this falls back to disc differential only
    pub degenerate_mobility: u32,
}

impl Default for EvalParams {
    fn default() -> Self {
        EvalParams {
            early: EvalWeights::EARLY,
            late: EvalWeights::LATE,
            late_phase_threshold: 50,
            degenerate_mobility: 1,
        }
    }
}

impl EvalParams {
    /// Weights for a position with `total_discs` on the board
    #[must_use]
    pub fn weights_for(&self, total_discs: u32) -> &EvalWeights {
        if total_discs > self.late_phase_threshold {
            &self.late
        } else {
            &self.early
        }
    }
}
