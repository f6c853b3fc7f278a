//! The game session controller.
//!
//! One [`GameSession`] owns the whole round: board, deck, marks, lives and the
//! deferred tasks that drive the caller. Every mutation goes through one method
//! per operation; timers are [`TaskKind`]s on the session's [`Scheduler`],
//! tagged with the generation they were created for.
use log::{debug, info, trace};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};

use crate::board::{Board, Deck, Marks, deal};
use crate::catalog::{Card, Catalog};
use crate::config::{ConfigError, TempoConfig};
use crate::lines::{LineId, NewLines, record_new_lines};
use crate::notice::{Notice, NoticeSink};
use crate::scheduler::{ScheduledTask, Scheduler, TaskKind};
use crate::seed::encode_friendly;
use crate::snapshot::{CellView, Outcome, Snapshot, Tally};

/// Mutable state of the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub generation: u64,
    /// Seed the board and deck were dealt from; `None` for hand-built layouts.
    pub round_seed: Option<u64>,
    pub board: Board,
    pub deck: Deck,
    pub lives: u8,
    /// Deck position on display; `None` before the first card.
    pub caller: Option<usize>,
    pub marks: Marks,
    pub completed_lines: BTreeSet<LineId>,
    pub is_playing: bool,
    pub game_over: bool,
    pub victory: bool,
    pub shaken_cell: Option<usize>,
    pub tally: Tally,
}

impl SessionState {
    fn fresh(
        generation: u64,
        round_seed: Option<u64>,
        board: Board,
        deck: Deck,
        lives: u8,
    ) -> Self {
        Self {
            generation,
            round_seed,
            board,
            deck,
            lives,
            caller: None,
            marks: Marks::empty(),
            completed_lines: BTreeSet::new(),
            is_playing: true,
            game_over: false,
            victory: false,
            shaken_cell: None,
            tally: Tally::default(),
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.game_over || self.victory
    }

    const fn accepts_input(&self) -> bool {
        self.is_playing && !self.is_terminal()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.caller.and_then(|index| self.deck.get(index))
    }
}

/// Result of a board tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TapOutcome {
    Ignored,
    Matched,
    Victory,
    Mismatch,
}

/// Result of a line and blackout check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCheck {
    /// Board filled; nothing further may be scheduled.
    Terminal,
    Continue { new_lines: NewLines },
}

#[derive(Debug, Clone)]
pub struct GameSession {
    catalog: Catalog,
    config: TempoConfig,
    master: ChaCha20Rng,
    state: SessionState,
    scheduler: Scheduler,
    notices: VecDeque<Notice>,
    hint_shown: bool,
}

impl GameSession {
    /// Create a session from a user seed and start its first round.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(catalog: Catalog, config: TempoConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(catalog, config, seed))
    }

    /// Session with the default tuning.
    #[must_use]
    pub fn with_defaults(catalog: Catalog, seed: u64) -> Self {
        Self::build(catalog, TempoConfig::default(), seed)
    }

    fn build(catalog: Catalog, config: TempoConfig, seed: u64) -> Self {
        let mut master = ChaCha20Rng::seed_from_u64(seed);
        let round_seed = master.next_u64();
        let (board, deck) = deal(&catalog, round_seed);
        let state = SessionState::fresh(0, Some(round_seed), board, deck, config.starting_lives);
        let mut session = Self {
            catalog,
            config,
            master,
            state,
            scheduler: Scheduler::new(),
            notices: VecDeque::new(),
            hint_shown: false,
        };
        session.install(Some(round_seed), None);
        session
    }

    /// Start a fresh round with a seed drawn from the session's master RNG.
    pub fn start_game(&mut self) {
        let round_seed = self.master.next_u64();
        self.start_game_with_seed(round_seed);
    }

    /// Start a round from a known seed, e.g. one decoded from a share code.
    pub fn start_game_with_seed(&mut self, round_seed: u64) {
        let layout = deal(&self.catalog, round_seed);
        self.install(Some(round_seed), Some(layout));
    }

    /// Start a round on a hand-built board and caller order.
    pub fn start_game_with_layout(&mut self, board: Board, deck: Deck) {
        self.install(None, Some((board, deck)));
    }

    fn install(&mut self, round_seed: Option<u64>, layout: Option<(Board, Deck)>) {
        let generation = self.state.generation + 1;
        let (board, deck) = match layout {
            Some(layout) => layout,
            None => (self.state.board.clone(), self.state.deck.clone()),
        };
        self.scheduler.clear();
        self.notices.clear();
        self.state = SessionState::fresh(
            generation,
            round_seed,
            board,
            deck,
            self.config.starting_lives,
        );
        self.schedule_caller_timer();
        info!(
            "round {generation} started (code {}, {} cards)",
            round_seed.map_or_else(|| "custom".to_string(), encode_friendly),
            self.state.deck.len()
        );
    }

    /// Move the caller one card forward, running the miss check first unless
    /// `ignore_penalty` is set. Returns whether the caller moved.
    pub fn advance(&mut self, ignore_penalty: bool) -> bool {
        if !self.state.accepts_input() {
            return false;
        }
        if !ignore_penalty {
            if let Some(index) = self.state.caller {
                self.check_missed_card(index);
            }
            if !self.state.accepts_input() {
                return false;
            }
        }

        let next = self
            .state
            .caller
            .map_or(0, |index| (index + 1).min(self.state.deck.last_index()));
        if self.state.caller == Some(next) {
            debug!("caller parked on last card {next}");
            return false;
        }
        self.state.caller = Some(next);
        self.schedule_caller_timer();
        debug!(
            "caller -> {next} ({}ms)",
            self.config.caller_duration_ms(next)
        );
        true
    }

    /// Penalize the card at `caller_index` if it sits unmarked on the board.
    /// The cell is marked for the player and one life is lost.
    pub fn check_missed_card(&mut self, caller_index: usize) -> bool {
        if !self.state.accepts_input() {
            return false;
        }
        let Some(card) = self.state.deck.get(caller_index).cloned() else {
            return false;
        };
        let Some(cell) = self.state.board.position_of(card.id) else {
            return false;
        };
        if !self.state.marks.insert(cell) {
            return false;
        }

        debug!("missed card {} at cell {cell}", card.id);
        self.notices.push_back(Notice::missed(&card));
        self.state.tally.misses += 1;
        self.lose_life();
        if self.state.accepts_input() {
            self.check_lines_and_win(self.state.marks);
        }
        true
    }

    /// Handle a tap on board cell `index` showing `card`.
    pub fn handle_cell_click(&mut self, card: &Card, index: usize) -> TapOutcome {
        if !self.state.accepts_input() {
            return TapOutcome::Ignored;
        }
        let Some(caller_card) = self.state.current_card() else {
            return TapOutcome::Ignored;
        };
        let caller_id = caller_card.id;
        if self.state.board.get(index).is_none_or(|cell| cell.id != card.id)
            || self.state.marks.contains(index)
        {
            return TapOutcome::Ignored;
        }

        if card.id == caller_id {
            self.state.marks.insert(index);
            self.state.tally.matches += 1;
            debug!("matched card {} at cell {index}", card.id);
            match self.check_lines_and_win(self.state.marks) {
                LineCheck::Terminal => TapOutcome::Victory,
                LineCheck::Continue { .. } => {
                    self.scheduler.schedule(
                        self.config.feedback_delay_ms,
                        self.state.generation,
                        TaskKind::AutoAdvance {
                            from: self.state.caller,
                        },
                    );
                    TapOutcome::Matched
                }
            }
        } else {
            debug!("wrong tap on cell {index} (card {})", card.id);
            self.state.shaken_cell = Some(index);
            self.scheduler.schedule(
                self.config.shake_ms,
                self.state.generation,
                TaskKind::ClearShake { cell: index },
            );
            self.notices.push_back(Notice::wrong_card(index));
            self.state.tally.wrong_taps += 1;
            self.lose_life();
            TapOutcome::Mismatch
        }
    }

    /// Tap a cell by index alone.
    pub fn tap_cell(&mut self, index: usize) -> TapOutcome {
        match self.state.board.get(index).cloned() {
            Some(card) => self.handle_cell_click(&card, index),
            None => TapOutcome::Ignored,
        }
    }

    /// Blackout check, then record and announce any newly completed lines.
    pub fn check_lines_and_win(&mut self, marks: Marks) -> LineCheck {
        if self.state.is_terminal() {
            return LineCheck::Terminal;
        }
        if marks.is_full() {
            self.state.victory = true;
            self.state.is_playing = false;
            self.on_terminal();
            info!("round {} won", self.state.generation);
            return LineCheck::Terminal;
        }
        let new_lines = record_new_lines(marks, &mut self.state.completed_lines);
        for line in &new_lines {
            debug!("line {line} completed");
            self.notices.push_back(Notice::line_complete(*line));
        }
        LineCheck::Continue { new_lines }
    }

    /// Fire every task due at `now_ms` in deadline order. Returns how many ran.
    pub fn pump(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(now_ms) {
            if self.fire(task) {
                fired += 1;
            }
        }
        self.scheduler.advance_clock(now_ms);
        fired
    }

    fn fire(&mut self, task: ScheduledTask) -> bool {
        if task.generation != self.state.generation {
            trace!(
                "dropping {:?} from round {} (now {})",
                task.kind, task.generation, self.state.generation
            );
            return false;
        }
        trace!("firing {:?} at {}ms", task.kind, task.due_ms);
        match task.kind {
            TaskKind::CallerTimeout => {
                if !self.state.accepts_input() {
                    return false;
                }
                let showing = self.state.caller.is_some();
                self.advance(false);
                if showing && !self.hint_shown && self.state.accepts_input() {
                    self.hint_shown = true;
                    self.notices.push_back(Notice::wait_hint());
                }
            }
            TaskKind::AutoAdvance { from } => {
                if self.state.caller != from {
                    return false;
                }
                self.advance(true);
            }
            TaskKind::ClearShake { cell } => {
                if self.state.shaken_cell != Some(cell) {
                    return false;
                }
                self.state.shaken_cell = None;
            }
        }
        true
    }

    /// Cancel every outstanding task, e.g. when the view goes away.
    pub fn teardown(&mut self) {
        let dropped = self.scheduler.len();
        self.scheduler.clear();
        debug!("teardown dropped {dropped} pending tasks");
    }

    fn lose_life(&mut self) {
        self.state.lives = self.state.lives.saturating_sub(1);
        if self.state.lives == 0 {
            self.state.game_over = true;
            self.state.is_playing = false;
            self.on_terminal();
            info!("round {} lost", self.state.generation);
        }
    }

    fn on_terminal(&mut self) {
        let generation = self.state.generation;
        self.scheduler.cancel_where(|task| {
            task.generation == generation
                && matches!(
                    task.kind,
                    TaskKind::CallerTimeout | TaskKind::AutoAdvance { .. }
                )
        });
    }

    fn schedule_caller_timer(&mut self) {
        self.scheduler
            .cancel_where(|task| task.kind == TaskKind::CallerTimeout);
        self.scheduler.schedule(
            self.current_duration_ms(),
            self.state.generation,
            TaskKind::CallerTimeout,
        );
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    /// Hand every queued notice to `sink`, oldest first.
    pub fn flush_notices(&mut self, sink: &mut impl NoticeSink) -> usize {
        let mut count = 0;
        for notice in self.notices.drain(..) {
            sink.notify(notice.severity, &notice.message);
            count += 1;
        }
        count
    }

    #[must_use]
    pub fn pending_notices(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.state.victory {
            Outcome::Victory
        } else if self.state.game_over {
            Outcome::GameOver
        } else if self.state.caller == Some(self.state.deck.last_index())
            && !self.caller_timer_pending()
        {
            Outcome::Stalled
        } else {
            Outcome::InProgress
        }
    }

    fn caller_timer_pending(&self) -> bool {
        self.scheduler.pending().any(|task| {
            task.generation == self.state.generation && task.kind == TaskKind::CallerTimeout
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let state = &self.state;
        let cells = state
            .board
            .cells()
            .iter()
            .enumerate()
            .map(|(index, card)| CellView {
                index,
                card: card.clone(),
                marked: state.marks.contains(index),
                shaken: state.shaken_cell == Some(index),
            })
            .collect();
        Snapshot {
            generation: state.generation,
            lives: state.lives,
            starting_lives: self.config.starting_lives,
            caller_index: state.caller,
            caller_card: state.current_card().cloned(),
            deck_len: state.deck.len(),
            cells,
            shaken_cell: state.shaken_cell,
            completed_lines: state.completed_lines.iter().copied().collect(),
            is_playing: state.is_playing,
            game_over: state.game_over,
            victory: state.victory,
            duration_ms: self.current_duration_ms(),
            share_code: state.round_seed.map(encode_friendly),
            tally: state.tally,
            outcome: self.outcome(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.state.current_card()
    }

    #[must_use]
    pub fn current_duration_ms(&self) -> u32 {
        self.config.duration_for(self.state.caller)
    }

    #[must_use]
    pub fn share_code(&self) -> Option<String> {
        self.state.round_seed.map(encode_friendly)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    #[must_use]
    pub const fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub const fn config(&self) -> &TempoConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
