#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_ORDERING_DEPTH, MAX_DEPTH};
use crate::board::MoveGenMode;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Deepest iteration to run (clamped to `1..=MAX_DEPTH`)
    pub max_depth: u32,
    /// After this iteration completes, later iterations try root moves best-first
    pub ordering_depth: Option<u32>,
    /// Alpha-beta cutoffs; `false` runs the same search full-width
    pub pruning: bool,
    pub movegen: MoveGenMode,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            max_depth: MAX_DEPTH,
            ordering_depth: Some(DEFAULT_ORDERING_DEPTH),
            pruning: true,
            movegen: MoveGenMode::FullScan,
        }
    }
}

impl SearchParams {
    /// Effective iteration ceiling
    #[must_use]
    pub fn depth_ceiling(&self) -> u32 {
        self.max_depth.clamp(1, MAX_DEPTH)
    }
}
