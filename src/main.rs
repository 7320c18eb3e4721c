//! Self-play driver: pits two turn controllers against each other.
//!
//! Usage: reversi_engine [--time-ms N] [--random-opening N] [--seed S] [--disc-count-white]
//!
//! `--time-ms -1` (the default) plays without a clock. Logging goes to stderr
//! and is filtered by the `REVERSI_LOG` environment variable, in `env_logger`
//! syntax (`debug`, `reversi_engine::board::search=trace`, ...).

use std::env;
use std::error::Error;
use std::time::{Duration, Instant};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use reversi_engine::board::{
    generate_moves, Board, DiscCountEvaluator, Evaluator, Move, MoveError, Position, Side,
    WeightedEvaluator,
};
use reversi_engine::engine::{TimeBudget, TurnController};

fn init_logging() {
    let filter = env_logger::Env::default().filter_or("REVERSI_LOG", "info");
    env_logger::Builder::from_env(filter)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}

#[derive(Debug, Clone)]
struct Options {
    /// Game clock per side; negative means unbounded
    time_ms: i64,
    /// Random plies played before the engines take over
    random_opening: u32,
    seed: Option<u64>,
    disc_count_white: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            time_ms: -1,
            random_opening: 0,
            seed: None,
            disc_count_white: false,
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--time-ms" => opts.time_ms = flag_value(&arg, args.next())?,
            "--random-opening" => opts.random_opening = flag_value(&arg, args.next())?,
            "--seed" => opts.seed = Some(flag_value(&arg, args.next())?),
            "--disc-count-white" => opts.disc_count_white = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(opts)
}

fn flag_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

/// Play `plies` random legal moves from the start position.
/// Returns the resulting board and the side to move.
fn random_opening(rng: &mut StdRng, plies: u32) -> Result<(Board, Side), MoveError> {
    let mut board = Board::new();
    let mut side = Side::Black;
    for _ in 0..plies {
        if board.is_game_over() {
            break;
        }
        let moves = generate_moves(&board, side);
        if let Some(&mv) = moves.as_slice().choose(rng) {
            board.apply(Some(mv), side)?;
            info!("Random opening: {side} plays {mv}");
        }
        side = side.opponent();
    }
    Ok((board, side))
}

/// One side's game clock; `None` when the game is untimed.
struct Clock {
    left: Option<Duration>,
}

impl Clock {
    fn new(time_ms: i64) -> Self {
        Clock {
            left: u64::try_from(time_ms).ok().map(Duration::from_millis),
        }
    }

    fn budget(&self) -> TimeBudget {
        self.left.map_or(TimeBudget::Unbounded, TimeBudget::remaining)
    }

    fn charge(&mut self, side: Side, elapsed: Duration) {
        if let Some(left) = self.left.as_mut() {
            if elapsed > *left {
                warn!("{side} overstepped its clock by {:?}", elapsed - *left);
            }
            *left = left.saturating_sub(elapsed);
        }
    }
}

fn play<W: Evaluator>(
    mut black: TurnController,
    mut white: TurnController<W>,
    mut board: Board,
    mut to_move: Side,
    time_ms: i64,
) -> Result<Board, Box<dyn Error>> {
    let mut clocks = [Clock::new(time_ms), Clock::new(time_ms)];
    let mut last: Option<Move> = None;
    let mut passes = 0;

    while passes < 2 {
        let clock = &mut clocks[usize::from(to_move == Side::White)];
        let start = Instant::now();
        let played = match to_move {
            Side::Black => black.do_move(last, clock.budget())?,
            Side::White => white.do_move(last, clock.budget())?,
        };
        clock.charge(to_move, start.elapsed());

        match played {
            Some(mv) => {
                board.apply(Some(mv), to_move)?;
                passes = 0;
            }
            None => passes += 1,
        }
        last = played;
        to_move = to_move.opponent();
    }
    Ok(board)
}

fn run(opts: Options) -> Result<(), Box<dyn Error>> {
    let seed = opts.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let (board, to_move) = random_opening(&mut rng, opts.random_opening)?;

    let black = TurnController::new(Side::Black).with_board(board.clone());
    let final_board = if opts.disc_count_white {
        let white = TurnController::with_evaluator(Side::White, DiscCountEvaluator)
            .with_board(board.clone());
        play(black, white, board, to_move, opts.time_ms)?
    } else {
        let white = TurnController::with_evaluator(Side::White, WeightedEvaluator::default())
            .with_board(board.clone());
        play(black, white, board, to_move, opts.time_ms)?
    };

    let black_discs = final_board.count(Side::Black);
    let white_discs = final_board.count(Side::White);
    println!("{final_board}");
    println!("Black {black_discs} - White {white_discs}");
    match black_discs.cmp(&white_discs) {
        std::cmp::Ordering::Greater => println!("Black wins"),
        std::cmp::Ordering::Less => println!("White wins"),
        std::cmp::Ordering::Equal => println!("Draw"),
    }
    Ok(())
}

fn main() {
    init_logging();
    let opts = match parse_args(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!(
                "usage: reversi_engine [--time-ms N] [--random-opening N] [--seed S] [--disc-count-white]"
            );
            std::process::exit(2);
        }
    };
    if let Err(err) = run(opts) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags() {
        let opts = parse_args(args(&[
            "--time-ms",
            "2000",
            "--random-opening",
            "4",
            "--seed",
            "7",
            "--disc-count-white",
        ]))
        .unwrap();
        assert_eq!(opts.time_ms, 2000);
        assert_eq!(opts.random_opening, 4);
        assert_eq!(opts.seed, Some(7));
        assert!(opts.disc_count_white);
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(parse_args(args(&["--bogus"])).is_err());
        assert!(parse_args(args(&["--time-ms"])).is_err());
        assert!(parse_args(args(&["--seed", "x"])).is_err());
    }

    #[test]
    fn random_opening_is_reproducible() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        let (board_a, side_a) = random_opening(&mut a, 6).unwrap();
        let (board_b, side_b) = random_opening(&mut b, 6).unwrap();
        assert_eq!(board_a, board_b);
        assert_eq!(side_a, side_b);
        assert_eq!(board_a.total_discs(), 10);
    }

    #[test]
    fn long_random_opening_plays_only_legal_moves() {
        let mut rng = StdRng::seed_from_u64(3);
        let (board, _) = random_opening(&mut rng, 80).expect("generated moves are legal");
        assert!(board.total_discs() <= 64);
        assert!(board.total_discs() > 4);
    }

    #[test]
    fn clock_charges_elapsed_time() {
        let mut clock = Clock::new(100);
        clock.charge(Side::Black, Duration::from_millis(30));
        assert_eq!(clock.budget(), TimeBudget::Remaining { ms: 70 });
        clock.charge(Side::Black, Duration::from_millis(500));
        assert_eq!(clock.budget(), TimeBudget::Remaining { ms: 0 });
        assert!(Clock::new(-1).budget().is_unbounded());
    }
}
