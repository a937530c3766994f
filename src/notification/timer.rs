//! One-shot timer queue over a virtual clock
//!
//! Timers are keyed by `(deadline, sequence)` so that expiry order is the
//! deadline order, with ties broken by the order in which they were armed.
//! A timer only exists while its key is in the queue: cancelling removes the
//! key, so a cancelled timer can never be popped later.

use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TimerKey {
    deadline: Duration,
    seq: u64,
}

/// Owned handle to an armed timer.
///
/// Not `Clone`: exactly one owner can cancel a given timer.
#[derive(Debug, PartialEq, Eq)]
pub struct TimerHandle {
    key: TimerKey,
}

impl TimerHandle {
    /// Virtual instant at which this timer fires
    pub fn deadline(&self) -> Duration {
        self.key.deadline
    }
}

/// Ordered set of armed one-shot timers, each carrying a payload.
#[derive(Debug)]
pub struct TimerQueue<T> {
    timers: BTreeMap<TimerKey, T>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            timers: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer that expires once the clock reaches `deadline`
    pub fn schedule(&mut self, deadline: Duration, payload: T) -> TimerHandle {
        let key = TimerKey {
            deadline,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.timers.insert(key, payload);
        TimerHandle { key }
    }

    /// Disarm a timer. Returns the payload if it had not fired yet.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        self.timers.remove(&handle.key)
    }

    /// Remove and return the earliest timer whose deadline is `<= now`
    pub fn pop_expired(&mut self, now: Duration) -> Option<T> {
        let entry = self.timers.first_entry()?;
        if entry.key().deadline > now {
            return None;
        }
        Some(entry.remove())
    }

    /// Deadline of the earliest armed timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.keys().next().map(|k| k.deadline)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Disarm every timer
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
