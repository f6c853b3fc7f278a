//! Virtual-time queue of deferred session tasks.
//!
//! The driver owns the clock: it reports the current time through
//! [`Scheduler::pop_due`] and wakes up again at [`Scheduler::next_deadline`].
//! While a task fires the scheduler's clock sits at that task's deadline, so
//! tasks scheduled from inside a firing are relative to when it was due rather
//! than to when the driver noticed.
use std::collections::BTreeMap;

/// Deferred work the session can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Caller timer elapsed; advance with the miss check.
    CallerTimeout,
    /// Post-match advance. `from` is the caller position at match time.
    AutoAdvance { from: Option<usize> },
    /// Stop shaking a wrongly tapped cell.
    ClearShake { cell: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub due_ms: u64,
    pub generation: u64,
    pub seq: u64,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<(u64, u64), ScheduledTask>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward. Time never runs backwards.
    pub fn advance_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Queue `kind` to fire `delay_ms` after the current clock.
    pub fn schedule(&mut self, delay_ms: u32, generation: u64, kind: TaskKind) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due_ms = self.now_ms.saturating_add(u64::from(delay_ms));
        self.queue.insert(
            (due_ms, seq),
            ScheduledTask {
                due_ms,
                generation,
                seq,
                kind,
            },
        );
        seq
    }

    /// Drop every queued task matching `predicate`. Returns how many were dropped.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&ScheduledTask) -> bool) -> usize {
        let before = self.queue.len();
        self.queue.retain(|_, task| !predicate(task));
        before - self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &ScheduledTask> {
        self.queue.values()
    }

    /// Remove the earliest task due at or before `now_ms`, moving the clock to its deadline.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledTask> {
        let entry = self.queue.first_entry()?;
        if entry.key().0 > now_ms {
            return None;
        }
        let task = entry.remove();
        self.advance_clock(task.due_ms);
        Some(task)
    }
}
