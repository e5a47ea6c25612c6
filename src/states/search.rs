//! Search State
//!
//! Tracks the live search text, the debounced term derived from it, and when
//! the caller should hear about term changes.

use crate::constants::SEARCH_DEBOUNCE_MS;
use crate::helpers::Debouncer;
use std::time::{Duration, Instant};
use tracing::debug;

/// A debounced term that replaced the previous one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub term: String,
    /// The caller should hear about the new term
    pub notify: bool,
}

/// Search text and debounced term for one popover
#[derive(Debug, Clone)]
pub struct SearchState {
    /// What the input currently shows
    text: String,
    /// Last term that survived the quiet period
    term: String,
    debouncer: Debouncer<String>,
    open: bool,
    /// The caller filters options on SearchChange events
    delegated: bool,
}

impl SearchState {
    /// Create a search state; `delegated` is true when the caller handles search
    pub fn new(delegated: bool) -> Self {
        Self::with_delay(delegated, Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }

    /// Create a search state with a custom quiet period
    pub fn with_delay(delegated: bool, delay: Duration) -> Self {
        Self {
            text: String::new(),
            term: String::new(),
            debouncer: Debouncer::new(delay),
            open: false,
            delegated,
        }
    }

    // ==================== Getters ====================

    /// Live input text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Debounced term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether the caller filters the options
    pub fn is_delegated(&self) -> bool {
        self.delegated
    }

    /// Whether the popover is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The debounce quiet period
    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    // ==================== Transitions ====================

    /// Enable or disable caller-side search
    pub fn set_delegated(&mut self, delegated: bool) {
        self.delegated = delegated;
    }

    /// Popover became visible
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Record new input text
    ///
    /// Returns the instant at which [`SearchState::flush`] should run, or
    /// `None` when the text did not change.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) -> Option<Instant> {
        let text = text.into();
        if text == self.text {
            return None;
        }
        self.text = text.clone();
        Some(self.debouncer.schedule(text, now))
    }

    /// Apply the pending term once its quiet period has elapsed
    ///
    /// Returns `None` when nothing is due or the term did not change. The
    /// caller is only notified while open and only when search is delegated.
    pub fn flush(&mut self, now: Instant) -> Option<Settled> {
        let term = self.debouncer.take_due(now)?;
        if term == self.term {
            return None;
        }
        self.term = term;
        debug!(term = %self.term, "Search term settled");

        Some(Settled {
            term: self.term.clone(),
            notify: self.open && self.delegated,
        })
    }

    /// Popover closed: reset the text and drop any pending term
    ///
    /// Returns the empty term the caller should be notified with, once per
    /// close.
    pub fn close(&mut self) -> Option<String> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.text.clear();
        self.term.clear();
        self.debouncer.cancel();

        self.delegated.then(String::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn notified(settled: Option<Settled>) -> Option<String> {
        settled.filter(|s| s.notify).map(|s| s.term)
    }

    #[test]
    fn test_keystrokes_collapse_into_one_notification() {
        let start = Instant::now();
        let mut search = SearchState::new(true);
        search.open();

        search.input("w", start);
        search.input("wi", start + ms(80));
        let due = search.input("win", start + ms(160));

        assert_eq!(due, Some(start + ms(460)));
        assert_eq!(search.flush(start + ms(300)), None);
        assert_eq!(notified(search.flush(start + ms(460))), Some("win".to_string()));
        assert_eq!(search.term(), "win");
        assert_eq!(search.flush(start + ms(900)), None);
    }

    #[test]
    fn test_local_search_updates_term_without_notifying() {
        let start = Instant::now();
        let mut search = SearchState::new(false);
        search.open();

        search.input("ab", start);
        let settled = search.flush(start + ms(300)).expect("term changed");
        assert!(!settled.notify);
        assert_eq!(settled.term, "ab");
        assert_eq!(search.term(), "ab");
    }

    #[test]
    fn test_no_notification_while_closed() {
        let start = Instant::now();
        let mut search = SearchState::new(true);

        search.input("x", start);
        assert_eq!(notified(search.flush(start + ms(300))), None);
    }

    #[test]
    fn test_close_resets_and_notifies_empty_once() {
        let start = Instant::now();
        let mut search = SearchState::new(true);
        search.open();
        search.input("tur", start);
        assert_eq!(notified(search.flush(start + ms(300))), Some("tur".to_string()));

        // A keystroke still pending at close time must never surface
        search.input("turb", start + ms(400));

        assert_eq!(search.close(), Some(String::new()));
        assert_eq!(search.text(), "");
        assert_eq!(search.term(), "");
        assert_eq!(search.close(), None);
        assert_eq!(search.flush(start + ms(1_000)), None);
    }

    #[test]
    fn test_close_without_delegation_is_silent() {
        let mut search = SearchState::new(false);
        search.open();
        search.input("abc", Instant::now());
        assert_eq!(search.close(), None);
        assert_eq!(search.text(), "");
    }

    #[test]
    fn test_unchanged_text_is_ignored() {
        let start = Instant::now();
        let mut search = SearchState::new(true);
        search.open();
        assert!(search.input("", start).is_none());
        assert!(search.input("a", start).is_some());
        assert!(search.input("a", start + ms(10)).is_none());
    }

    #[test]
    fn test_returning_to_the_settled_term_is_not_a_change() {
        let start = Instant::now();
        let mut search = SearchState::new(false);
        search.open();

        search.input("ab", start);
        assert!(search.flush(start + ms(300)).is_some());

        search.input("abc", start + ms(400));
        search.input("ab", start + ms(450));
        assert_eq!(search.flush(start + ms(750)), None);
        assert_eq!(search.term(), "ab");
    }
}
