//! Debouncer for coalescing rapid input changes
//!
//! Each new value cancels the pending one and restarts the quiet period.
//! The debouncer does not own a timer: callers push values with the current
//! instant and poll once their own timer elapses, which keeps it independent
//! of any particular executor.

use std::time::{Duration, Instant};

/// A cancel-and-reschedule debouncer
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    /// Create a new debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Get the quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a value, replacing any pending one
    ///
    /// Returns the instant at which the value becomes due.
    pub fn schedule(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.pending = Some((deadline, value));
        deadline
    }

    /// Take the pending value if its quiet period has elapsed
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    /// Drop the pending value without emitting it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    /// Check if a value is waiting
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Get the deadline of the pending value
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_value_not_due_before_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("a", start);

        assert_eq!(debouncer.take_due(start + Duration::from_millis(299)), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.take_due(start + DELAY), Some("a"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_collapses_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("r", start);
        debouncer.schedule("ru", start + Duration::from_millis(100));
        debouncer.schedule("rus", start + Duration::from_millis(200));

        // The first deadline has passed but was replaced
        assert_eq!(debouncer.take_due(start + Duration::from_millis(350)), None);
        assert_eq!(
            debouncer.take_due(start + Duration::from_millis(500)),
            Some("rus")
        );
        assert_eq!(debouncer.take_due(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(1, start);
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.take_due(start + DELAY), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
