//! Virtual-clock deferred queue.
//!
//! Anything that wants "run this later" enqueues a payload with a delay and
//! keeps going; the payload comes back out of `tick` once its due-time has
//! passed. There is no thread, no blocking wait, and no cancellation - a
//! payload that must not act after its target is gone has to carry its own
//! liveness check (see `Continuation`).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One queued payload.
///
/// Ordered by (due-time, insertion-sequence) so that equal due-times fire
/// in the order they were scheduled.
#[derive(Debug)]
struct Entry<T> {
    due: f32,
    seq: u64,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we pop the earliest entry.
        other
            .due
            .total_cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Ordered queue of (due-time, payload), advanced once per frame tick.
///
/// Single-threaded cooperative model: `tick` is the only mutation point
/// besides `after`, and fired payloads are handed back to the caller to
/// execute *after* `tick` returns. Scheduling from inside that dispatch is
/// legal and lands in a future tick, never the current pass - a zero delay
/// means "next tick", not "immediately".
///
/// ## Usage
///
/// ```
/// use pairup::scheduler::Scheduler;
///
/// let mut sched = Scheduler::new();
/// sched.after(0.5, "later");
/// sched.after(0.0, "sooner");
///
/// assert_eq!(sched.tick(0.1), vec!["sooner"]);
/// assert_eq!(sched.tick(0.5), vec!["later"]);
/// ```
#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BinaryHeap<Entry<T>>,
    now: f32,
    next_seq: u64,
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at virtual time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            now: 0.0,
            next_seq: 0,
        }
    }

    /// Queue `payload` to fire once, no sooner than `now + delay_seconds`.
    ///
    /// Negative delays are clamped to zero and logged; zero still defers
    /// to the next tick.
    pub fn after(&mut self, delay_seconds: f32, payload: T) {
        let delay = if delay_seconds < 0.0 {
            log::warn!("negative delay {delay_seconds} clamped to 0");
            0.0
        } else {
            delay_seconds
        };

        let entry = Entry {
            due: self.now + delay,
            seq: self.next_seq,
            payload,
        };
        self.next_seq += 1;
        self.queue.push(entry);
    }

    /// Advance the virtual clock and drain everything now due.
    ///
    /// Fired payloads come back in ascending due-time order, FIFO for ties,
    /// each removed from the queue before the caller sees it.
    pub fn tick(&mut self, delta_seconds: f32) -> Vec<T> {
        self.now += delta_seconds.max(0.0);

        let mut fired = Vec::new();
        while self
            .queue
            .peek()
            .is_some_and(|entry| entry.due <= self.now)
        {
            if let Some(entry) = self.queue.pop() {
                fired.push(entry.payload);
            }
        }
        fired
    }

    /// Current virtual time in seconds.
    #[must_use]
    pub const fn now(&self) -> f32 {
        self.now
    }

    /// Number of payloads still queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Is the queue empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
