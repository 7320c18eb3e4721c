//! Per-turn time management.
//!
//! The driver reports the whole-game time left; each turn takes a slice of
//! it proportional to the number of moves this side still has to make.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Remaining time for the whole game, as reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBudget {
    /// No clock; the search is bounded by depth only
    #[default]
    Unbounded,
    Remaining { ms: u64 },
}

impl TimeBudget {
    /// Interpret a raw millisecond count where negative means "no limit".
    #[must_use]
    pub fn from_ms(ms: i64) -> Self {
        u64::try_from(ms).map_or(TimeBudget::Unbounded, |ms| TimeBudget::Remaining { ms })
    }

    #[must_use]
    pub fn remaining(time_left: Duration) -> Self {
        TimeBudget::Remaining {
            ms: time_left.as_millis() as u64,
        }
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, TimeBudget::Unbounded)
    }
}

/// Configuration for time slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeConfig {
    /// Time reserved per move for bookkeeping and the driver round trip
    pub move_overhead_ms: u64,
    /// Smallest slice handed to the search when time allows
    pub min_slice_ms: u64,
    /// Depth ceiling when the game has no clock
    pub unbounded_depth: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            move_overhead_ms: 20,
            min_slice_ms: 1,
            unbounded_depth: 6,
        }
    }
}

/// Limits for one turn's search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnLimits {
    /// Search time for this turn (None = no deadline)
    pub slice_ms: Option<u64>,
    /// Depth ceiling override (None = use the search params)
    pub max_depth: Option<u32>,
}

impl TimeConfig {
    /// Compute this turn's limits from the game budget and empty squares left.
    #[must_use]
    pub fn turn_limits(&self, budget: TimeBudget, empties: u32) -> TurnLimits {
        match budget {
            TimeBudget::Unbounded => TurnLimits {
                slice_ms: None,
                max_depth: Some(self.unbounded_depth),
            },
            TimeBudget::Remaining { ms } => TurnLimits {
                slice_ms: Some(self.slice_ms(ms, empties)),
                max_depth: None,
            },
        }
    }

    fn slice_ms(&self, remaining_ms: u64, empties: u32) -> u64 {
        // Critical time: split what is left rather than reserve overhead
        if remaining_ms <= self.move_overhead_ms.saturating_mul(2) {
            return (remaining_ms / 2).max(self.min_slice_ms).min(remaining_ms);
        }
        let safe_ms = remaining_ms - self.move_overhead_ms;
        let moves_left = u64::from(empties.div_ceil(2)).max(1);
        (safe_ms / moves_left).max(self.min_slice_ms).min(safe_ms)
    }
}
