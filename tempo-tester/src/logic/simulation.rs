use anyhow::{Context, Result};
use log::{debug, trace};
use serde::Serialize;
use tempo_game::{BuiltinLoader, GameEngine, GameSession, Outcome, Snapshot, Tally, TapOutcome};

use crate::logic::invariants::{check_layout, check_snapshot, check_transition};
use crate::logic::policy::{PlayStyle, PlayerAction};

/// Hard cap on policy turns; a round of 54 cards needs far fewer.
const MAX_STEPS: usize = 5_000;

/// Where a simulated round comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundSource {
    Seed(u64),
    ShareCode(String),
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub source: RoundSource,
    pub style: PlayStyle,
    /// Seed for the policy's own dice.
    pub policy_seed: u64,
}

/// Everything the expectations and reports look at after a round.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub share_code: Option<String>,
    pub style: PlayStyle,
    pub outcome: Outcome,
    pub lives: u8,
    pub starting_lives: u8,
    pub marked: usize,
    pub lines: usize,
    pub caller_index: Option<usize>,
    pub tally: Tally,
    pub steps: usize,
    pub virtual_ms: u64,
    pub violations: Vec<String>,
}

/// Plays one round with a scripted player on virtual time.
pub struct SimulationSession {
    session: GameSession,
    config: SimulationConfig,
    violations: Vec<String>,
    last: Snapshot,
}

impl SimulationSession {
    /// # Errors
    ///
    /// Returns an error if the session cannot be built from its source.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let engine = GameEngine::new(BuiltinLoader);
        let session = match &config.source {
            RoundSource::Seed(seed) => engine.create_session(*seed),
            RoundSource::ShareCode(code) => engine.create_session_from_code(code),
        }
        .with_context(|| format!("building session from {:?}", config.source))?;

        let violations = check_layout(&session, session.catalog());
        let last = session.snapshot();
        Ok(Self {
            session,
            config,
            violations,
            last,
        })
    }

    fn observe(&mut self, step: usize) {
        let next = self.session.snapshot();
        let mut found = check_snapshot(&next, self.session.config());
        found.extend(check_transition(&self.last, &next));
        for violation in found {
            self.violations
                .push(format!("step {step} @{}ms: {violation}", self.session.now_ms()));
        }
        self.last = next;
    }

    /// Apply one player action; returns whether it changed anything.
    fn act(&mut self, action: PlayerAction) -> bool {
        match action {
            PlayerAction::Tap(index) => self.session.tap_cell(index) != TapOutcome::Ignored,
            PlayerAction::Next => self.session.advance(false),
            PlayerAction::Wait => false,
        }
    }

    /// Play until the round finishes or nothing is left to wait for.
    pub fn run(mut self) -> SimulationSummary {
        let mut policy = self.config.style.create_policy(self.config.policy_seed);
        let mut steps = 0;

        while steps < MAX_STEPS && !self.session.outcome().is_finished() {
            steps += 1;
            let action = policy.decide(&self.last);
            trace!("{} step {steps}: {action:?}", policy.name());
            if self.act(action) {
                self.session.drain_notices();
                self.observe(steps);
                continue;
            }

            let Some(deadline) = self.session.next_deadline() else {
                break;
            };
            self.session.pump(deadline);
            self.session.drain_notices();
            self.observe(steps);
        }

        if steps >= MAX_STEPS {
            self.violations
                .push(format!("round did not finish within {MAX_STEPS} steps"));
        }

        // Deadlines left after the end must not change the round.
        let settled = self.last.clone();
        while let Some(deadline) = self.session.next_deadline() {
            self.session.pump(deadline);
        }
        self.violations.extend(
            check_transition(&settled, &self.session.snapshot())
                .into_iter()
                .map(|violation| format!("after end: {violation}")),
        );

        let snapshot = self.session.snapshot();
        debug!(
            "{} finished {} with {} lives after {steps} steps",
            self.config.style,
            snapshot.outcome,
            snapshot.lives
        );
        SimulationSummary {
            share_code: snapshot.share_code.clone(),
            style: self.config.style,
            outcome: snapshot.outcome,
            lives: snapshot.lives,
            starting_lives: snapshot.starting_lives,
            marked: snapshot.marked_count(),
            lines: snapshot.completed_lines.len(),
            caller_index: snapshot.caller_index,
            tally: snapshot.tally,
            steps,
            virtual_ms: self.session.now_ms(),
            violations: self.violations,
        }
    }
}

/// Build and play a round in one go.
///
/// # Errors
///
/// Returns an error if the session cannot be built.
pub fn simulate(config: SimulationConfig) -> Result<SimulationSummary> {
    Ok(SimulationSession::new(config)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(style: PlayStyle, seed: u64) -> SimulationSummary {
        simulate(SimulationConfig {
            source: RoundSource::Seed(seed),
            style,
            policy_seed: seed,
        })
        .unwrap()
    }

    #[test]
    fn perfect_player_always_wins_with_full_lives() {
        for seed in 0..8 {
            let summary = play(PlayStyle::Perfect, seed);
            assert_eq!(summary.outcome, Outcome::Victory, "seed {seed}");
            assert_eq!(summary.lives, summary.starting_lives);
            assert_eq!(summary.tally.matches, 9);
            assert!(summary.violations.is_empty(), "{:?}", summary.violations);
        }
    }

    #[test]
    fn idle_player_runs_out_of_lives() {
        let summary = play(PlayStyle::Idle, 21);
        assert_eq!(summary.outcome, Outcome::GameOver);
        assert_eq!(summary.lives, 0);
        assert_eq!(summary.tally.misses, 3);
        assert!(summary.violations.is_empty(), "{:?}", summary.violations);
    }

    #[test]
    fn share_code_rounds_replay_identically() {
        let config = SimulationConfig {
            source: RoundSource::ShareCode("TP-ZAPATILLA07".into()),
            style: PlayStyle::Sloppy,
            policy_seed: 4,
        };
        let first = simulate(config.clone()).unwrap();
        let second = simulate(config).unwrap();
        assert_eq!(first.share_code.as_deref(), Some("TP-ZAPATILLA07"));
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.tally, second.tally);
        assert_eq!(first.virtual_ms, second.virtual_ms);
    }

    #[test]
    fn unruly_players_never_break_invariants() {
        for seed in 0..16 {
            for style in [PlayStyle::Sloppy, PlayStyle::Reckless] {
                let summary = play(style, seed);
                assert!(summary.outcome.is_finished(), "{style} seed {seed}");
                assert!(summary.violations.is_empty(), "{:?}", summary.violations);
            }
        }
    }
}
