use std::fmt;

use log::debug;

use super::SearchInfoCallback;
use crate::board::Move;

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub score: i32,
    pub best_move: Move,
    /// Nodes visited by this iteration alone
    pub nodes: u64,
    /// Time since the search started
    pub time_ms: u64,
}

impl fmt::Display for SearchIterationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth {} score {} nodes {} time {} best {}",
            self.depth, self.score, self.nodes, self.time_ms, self.best_move
        )
    }
}

/// Log a finished iteration and forward it to the caller's callback.
pub(crate) fn report(info: &SearchIterationInfo, callback: Option<&SearchInfoCallback>) {
    debug!("{info}");
    if let Some(cb) = callback {
        cb(info);
    }
}
