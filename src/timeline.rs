//! Logical clock with cancellable scheduled transitions.
//!
//! Every timed behaviour in the site (reveal playback, page enter/exit,
//! the contact form's simulated latency) is expressed as an event scheduled
//! against a [`Timeline`] instead of a real timer. Owners drive the clock
//! explicitly, which keeps the state machines deterministic and lets tests
//! jump to any instant.
//!
//! ## Driving a timeline
//!
//! Owners pull due events one at a time with [`Timeline::pop_due`], handle
//! each (possibly scheduling follow-ups that are also due), then call
//! [`Timeline::settle`] to move the clock to the target instant:
//!
//! ```
//! # use sackhe_site::timeline::Timeline;
//! let mut timeline = Timeline::new();
//! timeline.schedule_at(1000, "done");
//! let mut fired = Vec::new();
//! while let Some((at, event)) = timeline.pop_due(1500) {
//!     fired.push((at, event));
//! }
//! timeline.settle(1500);
//! assert_eq!(fired, vec![(1000, "done")]);
//! assert_eq!(timeline.now(), 1500);
//! ```
//!
//! Events due at the same instant fire in scheduling order.

use std::collections::BTreeMap;

/// Logical time in milliseconds.
pub type Millis = u64;

/// Handle to a scheduled event, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
pub struct Timeline<E> {
    now: Millis,
    next_seq: u64,
    /// Keyed by `(due, seq)` so iteration order is firing order.
    queue: BTreeMap<(Millis, u64), E>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// A timeline whose clock already reads `now`.
    pub fn starting_at(now: Millis) -> Self {
        Self {
            now,
            next_seq: 0,
            queue: BTreeMap::new(),
        }
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    /// Schedule `event` at an absolute instant. Instants in the past are
    /// clamped to `now`, so they fire on the next `pop_due`.
    pub fn schedule_at(&mut self, at: Millis, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((at.max(self.now), seq), event);
        TimerId(seq)
    }

    /// Schedule `event` `delay` milliseconds from now.
    pub fn schedule_in(&mut self, delay: Millis, event: E) -> TimerId {
        self.schedule_at(self.now.saturating_add(delay), event)
    }

    /// Cancel a scheduled event. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.queue.keys().find(|(_, seq)| *seq == id.0).copied();
        match key {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Drop every pending event.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.queue.len();
        self.queue.clear();
        n
    }

    /// Remove and return the earliest event due at or before `until`,
    /// advancing the clock to its due time.
    pub fn pop_due(&mut self, until: Millis) -> Option<(Millis, E)> {
        let (&(at, seq), _) = self.queue.first_key_value()?;
        if at > until {
            return None;
        }
        let event = self.queue.remove(&(at, seq))?;
        self.now = self.now.max(at);
        Some((at, event))
    }

    /// Move the clock forward to `until`. Time never runs backwards.
    pub fn settle(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }

    /// Due time of the next pending event.
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Number of events still pending.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}
