//! Deadline queue for delayed actions.
//!
//! Replaces "run this after N seconds" callbacks with explicit entries that
//! the frame loop polls. Time is a [`Duration`] since program start, passed in
//! by the caller, so the queue never reads a clock itself.
//!
//! Entries with equal deadlines fire in the order they were scheduled.

use std::time::Duration;

#[derive(Debug)]
struct Entry<A> {
    due: Duration,
    action: A,
}

/// Pending actions ordered by deadline.
#[derive(Debug)]
pub struct TimerQueue<A> {
    /// Sorted by `due`, ties in insertion order.
    entries: Vec<Entry<A>>,
}

impl<A> TimerQueue<A> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Schedule `action` to fire once `now >= due`.
    pub fn schedule(&mut self, due: Duration, action: A) {
        let pos = self.entries.partition_point(|e| e.due <= due);
        self.entries.insert(pos, Entry { due, action });
    }

    /// Remove every pending entry, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    /// Take the earliest entry whose deadline has passed.
    pub fn pop_due(&mut self, now: Duration) -> Option<A> {
        if self.entries.first().is_some_and(|e| e.due <= now) {
            Some(self.entries.remove(0).action)
        } else {
            None
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_pop_due_respects_deadline() {
        let mut q = TimerQueue::new();
        q.schedule(ms(100), "a");

        assert_eq!(q.pop_due(ms(99)), None);
        assert_eq!(q.pop_due(ms(100)), Some("a"));
        assert!(q.is_empty());
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(300), 3);
        q.schedule(ms(100), 1);
        q.schedule(ms(200), 2);

        let fired: Vec<i32> = std::iter::from_fn(|| q.pop_due(ms(1000))).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_equal_deadlines_keep_insertion_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(0), "first");
        q.schedule(ms(0), "second");

        assert_eq!(q.pop_due(ms(0)), Some("first"));
        assert_eq!(q.pop_due(ms(0)), Some("second"));
    }

    #[test]
    fn test_cancel_all() {
        let mut q = TimerQueue::new();
        q.schedule(ms(10), ());
        q.schedule(ms(20), ());

        assert_eq!(q.cancel_all(), 2);
        assert!(q.is_empty());
        assert_eq!(q.pop_due(ms(1000)), None);
    }
}
