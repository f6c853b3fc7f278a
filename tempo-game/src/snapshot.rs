//! Read-only views of a session for renderers and reports.
use serde::{Deserialize, Serialize};

use crate::catalog::Card;
use crate::lines::LineId;

/// How a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Victory,
    GameOver,
    /// Caller parked on the last card with its timer spent; only taps remain.
    Stalled,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Victory => "victory",
            Self::GameOver => "game_over",
            Self::Stalled => "stalled",
        }
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-round counters. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub matches: u32,
    pub misses: u32,
    pub wrong_taps: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub index: usize,
    pub card: Card,
    pub marked: bool,
    pub shaken: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub lives: u8,
    pub starting_lives: u8,
    pub caller_index: Option<usize>,
    pub caller_card: Option<Card>,
    pub deck_len: usize,
    pub cells: Vec<CellView>,
    pub shaken_cell: Option<usize>,
    pub completed_lines: Vec<LineId>,
    pub is_playing: bool,
    pub game_over: bool,
    pub victory: bool,
    /// Caller timer length for the current position.
    pub duration_ms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_code: Option<String>,
    pub tally: Tally,
    pub outcome: Outcome,
}

impl Snapshot {
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.marked).count()
    }

    /// Cards the caller has not reached yet.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        match self.caller_index {
            Some(index) => self.deck_len.saturating_sub(index + 1),
            None => self.deck_len,
        }
    }
}
