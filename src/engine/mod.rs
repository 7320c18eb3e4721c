//! Game-facing layer: the turn controller and its time management.

mod controller;
pub mod time;

pub use controller::TurnController;
pub use time::{TimeBudget, TimeConfig, TurnLimits};
