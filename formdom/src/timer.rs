//! Cancellable delayed callbacks driven by the document clock.

use std::time::Instant;

use crate::document::Document;

/// Handle returned by [`Document::set_timeout`], used to cancel the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

pub type TimerCallback = Box<dyn FnOnce(&mut Document)>;

struct Timer {
    id: TimerId,
    deadline: Instant,
    callback: TimerCallback,
}

/// Pending timers, ordered by deadline then by scheduling order.
#[derive(Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<Timer>,
}

impl std::fmt::Debug for Timers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timers")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline: Instant, callback: TimerCallback) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            deadline,
            callback,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.deadline).min()
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub(crate) fn pop_due(&mut self, now: Instant) -> Option<(Instant, TimerCallback)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= now)
            .min_by_key(|(_, t)| (t.deadline, t.id.0))
            .map(|(i, _)| i)?;
        let timer = self.pending.remove(idx);
        log::trace!("[timer] firing {:?} due at {:?}", timer.id, timer.deadline);
        Some((timer.deadline, timer.callback))
    }
}
