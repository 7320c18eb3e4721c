//! Turn controller: one side's view of a game in progress.

use std::time::{Duration, Instant};

use log::{debug, info};

use super::time::{TimeBudget, TimeConfig};
use crate::board::{
    generate_moves_with, search, Board, Evaluator, Move, MoveError, Position, SearchConfig,
    SearchInfoCallback, SearchParams, SearchResult, Side, WeightedEvaluator,
};

/// Plays one side of a game.
///
/// Owns the live board; the board changes only when a move is actually
/// played, never during search.
pub struct TurnController<E: Evaluator = WeightedEvaluator> {
    /// Current board position
    board: Board,
    side: Side,
    /// Every move actually played, both sides, in order (passes omitted)
    history: Vec<Move>,
    evaluator: E,
    params: SearchParams,
    time_config: TimeConfig,
    /// Optional callback for per-iteration search info
    info_callback: Option<SearchInfoCallback>,
    /// Result of the most recent search (None after a pass)
    last_report: Option<SearchResult>,
}

impl TurnController<WeightedEvaluator> {
    /// Controller for `side` from the standard starting position.
    #[must_use]
    pub fn new(side: Side) -> Self {
        TurnController::with_evaluator(side, WeightedEvaluator::default())
    }
}

impl<E: Evaluator> TurnController<E> {
    #[must_use]
    pub fn with_evaluator(side: Side, evaluator: E) -> Self {
        info!("Playing {side}");
        TurnController {
            board: Board::new(),
            side,
            history: Vec::new(),
            evaluator,
            params: SearchParams::default(),
            time_config: TimeConfig::default(),
            info_callback: None,
            last_report: None,
        }
    }

    /// Start from a custom position instead of the standard setup.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_time_config(mut self, time_config: TimeConfig) -> Self {
        self.time_config = time_config;
        self
    }

    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_report(&self) -> Option<&SearchResult> {
        self.last_report.as_ref()
    }

    /// Take one turn.
    ///
    /// `opponent_move` is the opponent's last move, or `None` if this is the
    /// first move or the opponent passed. Returns the move played, or `None`
    /// to pass when this side has no legal move. An illegal opponent move
    /// is rejected before anything else happens.
    pub fn do_move(
        &mut self,
        opponent_move: Option<Move>,
        budget: TimeBudget,
    ) -> Result<Option<Move>, MoveError> {
        let start = Instant::now();
        let opponent = self.side.opponent();

        if let Some(mv) = opponent_move {
            self.board.apply(Some(mv), opponent)?;
            self.history.push(mv);
            info!("{opponent}'s move: {mv}");
        } else if !self.history.is_empty() {
            info!("{opponent} passed");
        }

        let moves = generate_moves_with(&self.board, self.side, self.params.movegen);
        if moves.is_empty() {
            info!("{} has no legal moves, passing", self.side);
            self.last_report = None;
            return Ok(None);
        }

        let limits = self.time_config.turn_limits(budget, self.board.empties());
        let mut params = self.params.clone();
        if let Some(depth) = limits.max_depth {
            params.max_depth = params.max_depth.min(depth);
        }
        let mut config = SearchConfig::default().with_params(params);
        if let Some(ms) = limits.slice_ms {
            config = config.with_deadline(start + Duration::from_millis(ms));
        }
        config.info_callback = self.info_callback.clone();

        let report = search(&self.board, self.side, &self.evaluator, &config);
        debug!(
            "searched {} nodes to depth {} in {:?}{}",
            report.nodes,
            report.depth,
            report.elapsed,
            if report.timed_out { " (deadline)" } else { "" }
        );

        let Some(mv) = report.best_move else {
            self.last_report = Some(report);
            return Ok(None);
        };
        self.board.apply(Some(mv), self.side)?;
        self.history.push(mv);
        info!("{}'s move: {mv} (score {})", self.side, report.score);
        self.last_report = Some(report);
        Ok(Some(mv))
    }
}
