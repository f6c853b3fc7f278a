//! Maps browser wall-clock time onto a session's virtual clock.
//!
//! The session only knows milliseconds since the page opened it. Every input
//! first pumps the session up to "now" so deferred work scheduled by that input
//! is measured from the moment of the tap.
use tempo_game::{GameSession, Notice, Snapshot, TapOutcome};

pub struct SessionDriver {
    session: GameSession,
    origin_ms: f64,
}

impl SessionDriver {
    #[must_use]
    pub const fn new(session: GameSession, wall_ms: f64) -> Self {
        Self {
            session,
            origin_ms: wall_ms,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn virtual_ms(&self, wall_ms: f64) -> u64 {
        (wall_ms - self.origin_ms).max(0.0) as u64
    }

    /// Fire everything due by `wall_ms` and collect the resulting notices.
    pub fn tick(&mut self, wall_ms: f64) -> Vec<Notice> {
        self.session.pump(self.virtual_ms(wall_ms));
        self.session.drain_notices()
    }

    /// Milliseconds until the next deferred task, if any is pending.
    #[must_use]
    pub fn delay_ms(&self, wall_ms: f64) -> Option<u32> {
        let now = self.virtual_ms(wall_ms).max(self.session.now_ms());
        self.session
            .next_deadline()
            .map(|due| u32::try_from(due.saturating_sub(now)).unwrap_or(u32::MAX))
    }

    pub fn tap(&mut self, wall_ms: f64, index: usize) -> (TapOutcome, Vec<Notice>) {
        let mut notices = self.tick(wall_ms);
        let outcome = self.session.tap_cell(index);
        notices.extend(self.session.drain_notices());
        (outcome, notices)
    }

    /// The player skipped the caller card ("SIGUIENTE").
    pub fn next_card(&mut self, wall_ms: f64) -> Vec<Notice> {
        let mut notices = self.tick(wall_ms);
        self.session.advance(false);
        notices.extend(self.session.drain_notices());
        notices
    }

    pub fn restart(&mut self, wall_ms: f64) {
        self.tick(wall_ms);
        self.session.start_game();
    }

    pub fn teardown(&mut self) {
        self.session.teardown();
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }
}
