//! Win counters kept across games in a session.

use crate::types::Mark;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// Number of games won by each mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
}

impl Scores {
    /// Creates zeroed scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the wins recorded for `mark`.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Adds one win for `mark`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, mark: Mark) {
        let slot = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
        info!(wins = *slot, "Win recorded");
    }

    /// Zeroes both counters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = Mark::iter()
            .map(|mark| format!("{}: {}", mark, self.get(mark)))
            .collect();
        write!(f, "{}", parts.join("  "))
    }
}
