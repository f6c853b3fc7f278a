use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tempo_game::Snapshot;

/// What a scripted player does at the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Tap a board cell.
    Tap(usize),
    /// Tap the caller card ("SIGUIENTE").
    Next,
    /// Let virtual time run to the next deadline.
    Wait,
}

/// Policy interface for automated play.
pub trait PlayerPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    fn decide(&mut self, snapshot: &Snapshot) -> PlayerAction;
}

/// Built-in player styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayStyle {
    /// Taps every board card as soon as it is called, skips the rest.
    Perfect,
    /// Plays well but sometimes hesitates until the timer runs out.
    Sloppy,
    /// Plays well but sometimes taps a wrong cell first.
    Reckless,
    /// Never touches anything.
    Idle,
}

impl PlayStyle {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect",
            Self::Sloppy => "Sloppy",
            Self::Reckless => "Reckless",
            Self::Idle => "Idle",
        }
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn PlayerPolicy> {
        match self {
            Self::Perfect => Box::new(PerfectPolicy),
            Self::Sloppy => Box::new(SloppyPolicy::new(seed)),
            Self::Reckless => Box::new(RecklessPolicy::new(seed)),
            Self::Idle => Box::new(IdlePolicy),
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Board cell holding the caller card, if it is still unmarked.
fn open_match(snapshot: &Snapshot) -> Option<usize> {
    let caller = snapshot.caller_card.as_ref()?;
    snapshot
        .cells
        .iter()
        .find(|cell| cell.card.id == caller.id && !cell.marked)
        .map(|cell| cell.index)
}

fn caller_on_board(snapshot: &Snapshot) -> bool {
    snapshot.caller_card.as_ref().is_some_and(|caller| {
        snapshot.cells.iter().any(|cell| cell.card.id == caller.id)
    })
}

fn best_move(snapshot: &Snapshot) -> PlayerAction {
    if let Some(index) = open_match(snapshot) {
        PlayerAction::Tap(index)
    } else if caller_on_board(snapshot) {
        // Matched already; the auto-advance is pending.
        PlayerAction::Wait
    } else {
        PlayerAction::Next
    }
}

struct PerfectPolicy;
struct IdlePolicy;

/// Rolls once per caller position.
struct SloppyPolicy {
    rng: ChaCha20Rng,
    decided: Option<(Option<usize>, bool)>,
    hesitate_chance: f64,
}

impl SloppyPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            decided: None,
            hesitate_chance: 0.3,
        }
    }
}

struct RecklessPolicy {
    rng: ChaCha20Rng,
    acted_at: Option<Option<usize>>,
    blunder_chance: f64,
}

impl RecklessPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            acted_at: None,
            blunder_chance: 0.25,
        }
    }
}

impl PlayerPolicy for PerfectPolicy {
    fn name(&self) -> &'static str {
        "Perfect"
    }

    fn decide(&mut self, snapshot: &Snapshot) -> PlayerAction {
        best_move(snapshot)
    }
}

impl PlayerPolicy for IdlePolicy {
    fn name(&self) -> &'static str {
        "Idle"
    }

    fn decide(&mut self, _snapshot: &Snapshot) -> PlayerAction {
        PlayerAction::Wait
    }
}

impl PlayerPolicy for SloppyPolicy {
    fn name(&self) -> &'static str {
        "Sloppy"
    }

    fn decide(&mut self, snapshot: &Snapshot) -> PlayerAction {
        let hesitate = match self.decided {
            Some((position, hesitate)) if position == snapshot.caller_index => hesitate,
            _ => {
                let hesitate = self.rng.gen_bool(self.hesitate_chance);
                self.decided = Some((snapshot.caller_index, hesitate));
                hesitate
            }
        };
        if hesitate {
            PlayerAction::Wait
        } else {
            best_move(snapshot)
        }
    }
}

impl PlayerPolicy for RecklessPolicy {
    fn name(&self) -> &'static str {
        "Reckless"
    }

    fn decide(&mut self, snapshot: &Snapshot) -> PlayerAction {
        if snapshot.caller_card.is_some() && self.acted_at != Some(snapshot.caller_index) {
            self.acted_at = Some(snapshot.caller_index);
            if self.rng.gen_bool(self.blunder_chance) {
                let caller_id = snapshot.caller_card.as_ref().map(|card| card.id);
                let wrong: Vec<usize> = snapshot
                    .cells
                    .iter()
                    .filter(|cell| !cell.marked && Some(cell.card.id) != caller_id)
                    .map(|cell| cell.index)
                    .collect();
                if !wrong.is_empty() {
                    return PlayerAction::Tap(wrong[self.rng.gen_range(0..wrong.len())]);
                }
            }
        }
        best_move(snapshot)
    }
}
