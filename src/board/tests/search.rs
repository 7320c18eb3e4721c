//! Search algorithm tests.
//!
//! Tests for negamax, root ranking, iterative deepening and cancellation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::{board, mv};
use crate::board::search::{SearchContext, SCORE_INFINITY};
use crate::board::{
    generate_moves, order_root_moves, search, search_depth, Board, DiscCountEvaluator, Move,
    MoveError, Position, SearchConfig, SearchIterationInfo, SearchParams, Side, WeightedEvaluator,
};
use crate::sync::CancelToken;

// ============================================================================
// Fixed-depth passes
// ============================================================================

#[test]
fn depth_one_ties_go_to_first_move() {
    // Every opening move flips exactly one disc.
    let start = Board::new();
    let root = generate_moves(&start, Side::Black).to_vec();
    let pass = search_depth(
        &start,
        Side::Black,
        &DiscCountEvaluator,
        &SearchParams::default(),
        1,
        &root,
    );
    assert!(pass.completed);
    let best = pass.best.expect("opening has moves");
    assert_eq!(best.mv, mv("d3"));
    assert_eq!(best.score, 3);
    assert_eq!(pass.ranking.len(), 4);
}

#[test]
fn unpruned_ranking_scores_every_move_exactly() {
    let start = Board::new();
    let root = generate_moves(&start, Side::Black).to_vec();
    let params = SearchParams {
        pruning: false,
        ..SearchParams::default()
    };
    let pass = search_depth(&start, Side::Black, &DiscCountEvaluator, &params, 2, &root);
    // The opening is symmetric: every reply leaves 3 vs 3.
    assert!(pass.ranking.iter().all(|r| r.score == 0));
}

/// White to move after f5 d6 c3 d3 c4: six replies with uneven scores.
fn lopsided_middlegame() -> Board {
    let mut b = Board::new();
    let mut side = Side::Black;
    for m in ["f5", "d6", "c3", "d3", "c4"] {
        b.apply(Some(mv(m)), side).unwrap();
        side = side.opponent();
    }
    b
}

#[test]
fn pruned_root_ranking_matches_full_width() {
    let b = lopsided_middlegame();
    let root = generate_moves(&b, Side::White).to_vec();
    let eval = WeightedEvaluator::default();
    let full = SearchParams {
        pruning: false,
        ..SearchParams::default()
    };
    for depth in 1..=3 {
        let pruned = search_depth(&b, Side::White, &eval, &SearchParams::default(), depth, &root);
        let exact = search_depth(&b, Side::White, &eval, &full, depth, &root);
        assert_eq!(pruned.ranking, exact.ranking, "depth {depth}");
        assert_eq!(pruned.best, exact.best, "depth {depth}");
    }

    let depth_two = search_depth(&b, Side::White, &eval, &full, 2, &root);
    let first = depth_two.ranking[0].score;
    assert!(depth_two.ranking.iter().any(|r| r.score != first));
}

#[test]
fn reordering_uses_exact_scores_for_every_move() {
    let b = lopsided_middlegame();
    let root = generate_moves(&b, Side::White).to_vec();
    let eval = WeightedEvaluator::default();
    let full = SearchParams {
        pruning: false,
        ..SearchParams::default()
    };
    let depth_two = search_depth(&b, Side::White, &eval, &full, 2, &root);
    let ordered = order_root_moves(&root, &depth_two.ranking);

    let result = search(&b, Side::White, &eval, &SearchConfig::depth(3));
    let searched: Vec<_> = result.ranking.iter().map(|r| r.mv).collect();
    assert_eq!(searched, ordered);
}

#[test]
fn negamax_at_depth_zero_is_static_eval() {
    let token = CancelToken::unbounded();
    let params = SearchParams::default();
    let mut ctx = SearchContext::new(&DiscCountEvaluator, &params, &token);
    let mut b = Board::new();
    b.apply(Some(mv("d3")), Side::Black).unwrap();
    let score = ctx.negamax(&b, Side::White, 0, -SCORE_INFINITY, SCORE_INFINITY);
    assert_eq!(score, -3);
    assert_eq!(ctx.nodes, 1);
}

#[test]
fn stuck_side_scores_the_position_as_is() {
    let b = board(
        "
        X X X . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . O
        ",
    );
    let token = CancelToken::unbounded();
    let params = SearchParams::default();
    let mut ctx = SearchContext::new(&DiscCountEvaluator, &params, &token);
    assert_eq!(
        ctx.negamax(&b, Side::White, 5, -SCORE_INFINITY, SCORE_INFINITY),
        -2
    );
}

#[test]
fn search_leaves_position_untouched() {
    let start = Board::new();
    let before = start.clone();
    let _ = search(
        &start,
        Side::Black,
        &WeightedEvaluator::default(),
        &SearchConfig::depth(3),
    );
    assert_eq!(start, before);
}

// ============================================================================
// Iterative deepening
// ============================================================================

#[test]
fn no_legal_moves_returns_none() {
    let b = board(
        "
        X X X . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . O
        ",
    );
    let result = search(
        &b,
        Side::White,
        &WeightedEvaluator::default(),
        &SearchConfig::default(),
    );
    assert_eq!(result.best_move, None);
    assert_eq!(result.nodes, 0);
}

#[test]
fn single_move_returned_without_search() {
    let b = board(
        "
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        X O . . . . . .
        ",
    );
    let result = search(
        &b,
        Side::Black,
        &WeightedEvaluator::default(),
        &SearchConfig::default(),
    );
    assert_eq!(result.best_move, Some(mv("c1")));
    assert_eq!(result.depth, 0);
    assert_eq!(result.nodes, 0);
}

#[test]
fn stops_when_every_square_is_covered() {
    // Two empties: depth 2 reaches the end of the game.
    let b = board(
        "
        X X X X X X X X
        X X X X X X X X
        X X X X X X X X
        X X X X X X X X
        X X X X X X X X
        X X X X X X X X
        X X X X X X X X
        . O X X X X O .
        ",
    );
    let result = search(&b, Side::Black, &DiscCountEvaluator, &SearchConfig::default());
    assert_eq!(result.depth, 2);
    assert_eq!(result.best_move, Some(mv("a1")));
    // 62 black, 1 white after either corner; white cannot reply.
    assert_eq!(result.score, 61);
    assert!(!result.timed_out);
}

#[test]
fn reports_each_completed_iteration() {
    let depths = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&depths);
    let config =
        SearchConfig::depth(3).with_info_callback(Arc::new(move |info: &SearchIterationInfo| {
            sink.lock().unwrap().push(info.depth);
        }));
    let result = search(
        &Board::new(),
        Side::Black,
        &WeightedEvaluator::default(),
        &config,
    );
    assert_eq!(result.depth, 3);
    assert_eq!(*depths.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(result.ranking.len(), 4);
}

#[test]
fn ranking_follows_ordering_after_depth_two() {
    let start = Board::new();
    let eval = WeightedEvaluator::default();
    let params = SearchParams::default();
    let root = generate_moves(&start, Side::Black).to_vec();
    let depth_two = search_depth(&start, Side::Black, &eval, &params, 2, &root);
    let ordered = order_root_moves(&root, &depth_two.ranking);

    let result = search(&start, Side::Black, &eval, &SearchConfig::depth(3));
    let searched: Vec<_> = result.ranking.iter().map(|r| r.mv).collect();
    assert_eq!(searched, ordered);
}

#[test]
fn disabled_ordering_keeps_index_order() {
    let start = Board::new();
    let params = SearchParams {
        max_depth: 3,
        ordering_depth: None,
        ..SearchParams::default()
    };
    let result = search(
        &start,
        Side::Black,
        &WeightedEvaluator::default(),
        &SearchConfig::default().with_params(params),
    );
    let searched: Vec<_> = result.ranking.iter().map(|r| r.mv).collect();
    assert_eq!(searched, generate_moves(&start, Side::Black).to_vec());
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn expired_deadline_falls_back_to_first_move() {
    let past = Instant::now()
        .checked_sub(Duration::from_millis(5))
        .expect("5ms ago should be valid");
    let config = SearchConfig::default().with_deadline(past);
    let result = search(
        &Board::new(),
        Side::Black,
        &WeightedEvaluator::default(),
        &config,
    );
    assert_eq!(result.best_move, Some(mv("d3")));
    assert_eq!(result.depth, 0);
    assert!(result.timed_out);
}

#[test]
fn cancelled_pass_is_incomplete() {
    let token = CancelToken::unbounded();
    token.cancel();
    let params = SearchParams::default();
    let mut ctx = SearchContext::new(&DiscCountEvaluator, &params, &token);
    let start = Board::new();
    let root = generate_moves(&start, Side::Black).to_vec();
    let pass = ctx.search_root(&start, Side::Black, 3, &root);
    assert!(!pass.completed);
    assert!(pass.best.is_none());
    assert_eq!(ctx.nodes, 0);
}

#[test]
fn deadline_is_respected_mid_game() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let config =
        SearchConfig::time(50).with_info_callback(Arc::new(move |_: &SearchIterationInfo| {
            counter.fetch_add(1, Ordering::Relaxed);
        }));
    let start = Instant::now();
    let result = search(
        &Board::new(),
        Side::Black,
        &WeightedEvaluator::default(),
        &config,
    );
    assert!(start.elapsed() < Duration::from_millis(500));
    assert!(result.best_move.is_some());
    assert_eq!(calls.load(Ordering::Relaxed), result.depth as usize);
}

// ============================================================================
// Rules-engine contract
// ============================================================================

/// Reports the real board's moves as legal but refuses to play any of them.
#[derive(Clone)]
struct RejectingBoard(Board);

impl Position for RejectingBoard {
    fn is_legal(&self, mv: Move, side: Side) -> bool {
        self.0.is_legal(mv, side)
    }

    fn apply(&mut self, mv: Option<Move>, side: Side) -> Result<u32, MoveError> {
        match mv {
            Some(mv) => Err(MoveError::Illegal { mv, side }),
            None => Ok(0),
        }
    }

    fn count(&self, side: Side) -> u32 {
        self.0.count(side)
    }

    fn occupied_by(&self, x: u8, y: u8, side: Side) -> bool {
        self.0.occupied_by(x, y, side)
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "rejected")]
fn rejected_generated_move_is_not_silently_skipped() {
    let b = RejectingBoard(Board::new());
    let root = generate_moves(&b, Side::Black).to_vec();
    let _ = search_depth(
        &b,
        Side::Black,
        &DiscCountEvaluator,
        &SearchParams::default(),
        2,
        &root,
    );
}
