//! Configuration serialization, only built with `--features serde`.
#![cfg(feature = "serde")]

use reversi_engine::board::{EvalParams, Move, MoveGenMode, SearchParams, Side};
use reversi_engine::engine::TimeConfig;

#[test]
fn search_params_from_json() {
    let json = r#"{
        "max_depth": 8,
        "ordering_depth": null,
        "pruning": false,
        "movegen": "Frontier"
    }"#;
    let params: SearchParams = serde_json::from_str(json).expect("valid params");
    assert_eq!(params.max_depth, 8);
    assert_eq!(params.ordering_depth, None);
    assert!(!params.pruning);
    assert_eq!(params.movegen, MoveGenMode::Frontier);
}

#[test]
fn configs_survive_json() {
    let eval = EvalParams::default();
    let text = serde_json::to_string(&eval).unwrap();
    assert_eq!(serde_json::from_str::<EvalParams>(&text).unwrap(), eval);

    let time = TimeConfig {
        move_overhead_ms: 50,
        ..TimeConfig::default()
    };
    let text = serde_json::to_string(&time).unwrap();
    assert_eq!(serde_json::from_str::<TimeConfig>(&text).unwrap(), time);
}

#[test]
fn moves_and_sides_serialize() {
    let mv = Move::new(3, 2).unwrap();
    let text = serde_json::to_string(&(mv, Side::White)).unwrap();
    let (back, side): (Move, Side) = serde_json::from_str(&text).unwrap();
    assert_eq!(back, mv);
    assert_eq!(side, Side::White);
}
