use std::time::Instant;

use log::debug;

use super::SearchContext;
use crate::board::eval::Evaluator;
use crate::board::movegen::generate_moves_with;
use crate::board::position::Position;
use crate::board::search::log::{report, SearchIterationInfo};
use crate::board::search::{order_root_moves, SearchConfig, SearchResult};
use crate::board::{Move, Side};
use crate::sync::CancelToken;

impl<E: Evaluator> SearchContext<'_, E> {
    /// Iterative deepening from depth 1 up to the configured ceiling.
    ///
    /// Only completed iterations replace the answer. If the first iteration
    /// is cut short, its best-so-far root move (or the first root move)
    /// stands in.
    fn iterative_deepening<P: Position>(
        &mut self,
        pos: &P,
        side: Side,
        mut root: Vec<Move>,
        config: &SearchConfig,
        start_time: Instant,
        result: &mut SearchResult,
    ) {
        result.best_move = root.first().copied();

        let empties = pos.empties();
        for depth in 1..=self.params.depth_ceiling() {
            if self.token.poll() {
                result.timed_out = true;
                break;
            }

            let iteration = self.search_root(pos, side, depth, &root);
            if !iteration.completed {
                result.timed_out = true;
                if result.depth == 0 {
                    if let Some(partial) = iteration.best {
                        result.best_move = Some(partial.mv);
                        result.score = partial.score;
                    }
                }
                debug!(
                    "depth {depth} abandoned after {} of {} root moves",
                    iteration.ranking.len(),
                    root.len()
                );
                break;
            }
            let Some(best) = iteration.best else {
                break;
            };

            result.best_move = Some(best.mv);
            result.score = best.score;
            result.depth = depth;

            let info = SearchIterationInfo {
                depth,
                score: best.score,
                best_move: best.mv,
                nodes: iteration.nodes,
                time_ms: start_time.elapsed().as_millis() as u64,
            };
            report(&info, config.info_callback.as_ref());

            if self.params.ordering_depth == Some(depth) {
                root = order_root_moves(&root, &iteration.ranking);
            }
            result.ranking = iteration.ranking;

            // Every remaining square is covered; deeper passes change nothing.
            if depth >= empties {
                break;
            }
        }
    }
}

/// Iterative-deepening search for `side` on `pos`.
///
/// No legal moves yields `best_move: None` without searching; a single
/// legal move is returned at depth 0 without searching.
pub fn search<P: Position, E: Evaluator>(
    pos: &P,
    side: Side,
    evaluator: &E,
    config: &SearchConfig,
) -> SearchResult {
    let start_time = Instant::now();
    let moves = generate_moves_with(pos, side, config.params.movegen);

    let mut result = SearchResult::default();
    match moves.len() {
        0 => {}
        1 => {
            let mv = moves[0];
            let mut child = pos.clone();
            if child.apply(Some(mv), side).is_ok() {
                result.score = evaluator.evaluate(&child, side);
            }
            result.best_move = Some(mv);
        }
        _ => {
            let token = config
                .deadline
                .map_or_else(CancelToken::unbounded, CancelToken::with_deadline);
            let mut ctx = SearchContext::new(evaluator, &config.params, &token);
            ctx.iterative_deepening(pos, side, moves.to_vec(), config, start_time, &mut result);
            result.nodes = ctx.nodes;
        }
    }

    result.elapsed = start_time.elapsed();
    result
}
