//! Search module implementing negamax alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening under a cooperative wall-clock deadline
//! - Fail-hard alpha-beta (switchable to full-width for verification)
//! - Root move ordering fed from a shallow iteration's ranking
//!
//! No transposition table and no parallel search: every node is searched
//! from a fresh clone of its parent position.

mod constants;
mod log;
mod move_order;
mod negamax;
mod params;

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::Move;

pub use constants::{DEFAULT_ORDERING_DEPTH, MAX_DEPTH, SCORE_INFINITY};
pub use self::log::SearchIterationInfo;
pub use move_order::order_root_moves;
pub use negamax::{search, search_depth, SearchContext};
pub use params::SearchParams;

/// A root move and the score one search pass gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMove {
    pub mv: Move,
    pub score: i32,
}

/// Outcome of one fixed-depth pass over the root moves.
#[derive(Debug, Clone)]
pub struct IterationResult {
    pub depth: u32,
    /// Best root move among those fully searched
    pub best: Option<RootMove>,
    /// Fully searched root moves in search order
    pub ranking: Vec<RootMove>,
    /// False if the pass was cancelled before every root move was scored
    pub completed: bool,
    pub nodes: u64,
}

/// Result of a search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// The move to play; `None` only when there is no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` from the searching side's perspective
    pub score: i32,
    /// Deepest completed iteration (0 if none completed or no search ran)
    pub depth: u32,
    pub nodes: u64,
    /// Root ranking from the deepest completed iteration
    pub ranking: Vec<RootMove>,
    /// True if the deadline cut an iteration short
    pub timed_out: bool,
    pub elapsed: Duration,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Configuration for a search operation.
#[derive(Clone, Default)]
pub struct SearchConfig {
    pub params: SearchParams,
    /// Wall-clock deadline (None = search until the depth ceiling)
    pub deadline: Option<Instant>,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            params: SearchParams {
                max_depth,
                ..SearchParams::default()
            },
            ..Default::default()
        }
    }

    /// Create a time-limited search config starting now
    #[must_use]
    pub fn time(time_limit_ms: u64) -> Self {
        SearchConfig::default().with_time_ms(time_limit_ms)
    }

    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the deadline `time_limit_ms` from now
    #[must_use]
    pub fn with_time_ms(self, time_limit_ms: u64) -> Self {
        self.with_deadline(Instant::now() + Duration::from_millis(time_limit_ms))
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}
