//! Infinite Scroll State
//!
//! Scroll geometry, wheel handling policy, listener lifecycle, and the gate
//! that decides when the caller's load-more handler runs.
//!
//! Geometry uses DOM-style numbers: `scroll_top` grows downward from 0 and
//! `scroll_height` is the full content height.

use crate::constants::NEAR_BOTTOM_THRESHOLD;
use crate::helpers::Latest;
use tracing::debug;

/// Snapshot of a scroll container
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub client_height: f32,
    pub scroll_height: f32,
}

impl ScrollMetrics {
    /// Create a snapshot
    pub fn new(scroll_top: f32, client_height: f32, scroll_height: f32) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Largest reachable `scroll_top`
    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Check if the viewport is within `threshold` pixels of the bottom
    pub fn is_near_bottom(&self, threshold: f32) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - threshold
    }

    /// Check if the viewport is at the very top
    pub fn is_at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    /// Scrolled all the way down
    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll_top()
    }

    /// Move `scroll_top` by `delta_y`, clamped to the content
    pub fn scrolled_by(&self, delta_y: f32) -> Self {
        Self {
            scroll_top: (self.scroll_top + delta_y).clamp(0.0, self.max_scroll_top()),
            ..*self
        }
    }

    /// Smallest move that brings a row fully into the viewport
    pub fn revealing(&self, row_top: f32, row_height: f32) -> Self {
        let scroll_top = if row_top < self.scroll_top {
            row_top
        } else if row_top + row_height > self.scroll_top + self.client_height {
            row_top + row_height - self.client_height
        } else {
            self.scroll_top
        };
        Self {
            scroll_top: scroll_top.clamp(0.0, self.max_scroll_top()),
            ..*self
        }
    }
}

/// Pagination flags supplied by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationSignal {
    /// More pages exist
    pub has_next_page: bool,
    /// A page fetch is in flight
    pub is_fetching_next_page: bool,
}

impl PaginationSignal {
    /// Create a signal
    pub fn new(has_next_page: bool, is_fetching_next_page: bool) -> Self {
        Self {
            has_next_page,
            is_fetching_next_page,
        }
    }

    /// Whether another page may be requested now
    pub fn can_load_more(&self) -> bool {
        self.has_next_page && !self.is_fetching_next_page
    }
}

/// How wheel events on the list are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WheelPolicy {
    /// Always consume the event and scroll the list manually
    #[default]
    Intercept,
    /// Let the event reach the parent at the edges the list cannot scroll past
    BubbleAtEdges,
}

/// What to do with one wheel event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelOutcome {
    /// Leave the event to the parent
    Bubble,
    /// Consume the event; the list now sits at these metrics
    Scrolled(ScrollMetrics),
}

impl WheelPolicy {
    /// Resolve a wheel event; `delta_y > 0` scrolls toward the bottom
    pub fn resolve(&self, metrics: ScrollMetrics, delta_y: f32, has_next_page: bool) -> WheelOutcome {
        if *self == WheelPolicy::BubbleAtEdges {
            let up_at_top = delta_y < 0.0 && metrics.is_at_top();
            let down_at_end = delta_y > 0.0 && metrics.is_at_bottom() && !has_next_page;
            if up_at_top || down_at_end {
                return WheelOutcome::Bubble;
            }
        }
        WheelOutcome::Scrolled(metrics.scrolled_by(delta_y))
    }
}

/// Listener lifecycle scoped to the popover being open
///
/// Attachment waits for a settle timer; each visibility change bumps the
/// generation so a timer started before a close can never attach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListenerPhase {
    #[default]
    Detached,
    Settling(u64),
    Attached(u64),
}

/// Tracks the listener phase across visibility changes
#[derive(Debug, Clone, Default)]
pub struct ScrollListener {
    phase: ListenerPhase,
    generation: u64,
}

impl ScrollListener {
    /// Current phase
    pub fn phase(&self) -> ListenerPhase {
        self.phase
    }

    /// Whether handlers should be installed
    pub fn is_attached(&self) -> bool {
        matches!(self.phase, ListenerPhase::Attached(_))
    }

    /// Popover shown: start settling, returns the generation to attach with
    pub fn begin_settle(&mut self) -> u64 {
        self.generation += 1;
        self.phase = ListenerPhase::Settling(self.generation);
        self.generation
    }

    /// Settle timer elapsed; attaches only if no visibility change intervened
    pub fn attach(&mut self, generation: u64) -> bool {
        if self.phase == ListenerPhase::Settling(generation) {
            self.phase = ListenerPhase::Attached(generation);
            true
        } else {
            false
        }
    }

    /// Popover hidden or component dropped
    pub fn detach(&mut self) {
        self.generation += 1;
        self.phase = ListenerPhase::Detached;
    }
}

/// Decides when load-more fires
///
/// The pagination flags are read through a [`Latest`] cell so handlers built
/// once per open always see the newest fetch status.
#[derive(Debug, Clone)]
pub struct LoadMoreGate {
    signal: Latest<PaginationSignal>,
    threshold: f32,
}

impl Default for LoadMoreGate {
    fn default() -> Self {
        Self::new(NEAR_BOTTOM_THRESHOLD)
    }
}

impl LoadMoreGate {
    /// Create a gate with a near-bottom threshold in pixels
    pub fn new(threshold: f32) -> Self {
        Self {
            signal: Latest::new(PaginationSignal::default()),
            threshold,
        }
    }

    /// Accessor handed to listeners
    pub fn signal(&self) -> Latest<PaginationSignal> {
        self.signal.clone()
    }

    /// Update the caller's pagination flags
    pub fn set_signal(&self, signal: PaginationSignal) {
        self.signal.set(signal);
    }

    /// Whether a scroll position should trigger load-more
    pub fn should_load(&self, open: bool, metrics: ScrollMetrics) -> bool {
        let signal = self.signal.get();
        let fire = open && signal.can_load_more() && metrics.is_near_bottom(self.threshold);
        if open && metrics.is_near_bottom(self.threshold) && !fire {
            debug!(?signal, "Load more suppressed");
        }
        fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics_at(scroll_top: f32) -> ScrollMetrics {
        ScrollMetrics::new(scroll_top, 300.0, 1_000.0)
    }

    #[test]
    fn test_near_bottom_threshold() {
        assert!(metrics_at(700.0).is_near_bottom(5.0));
        assert!(metrics_at(697.0).is_near_bottom(5.0));
        assert!(metrics_at(695.0).is_near_bottom(5.0));
        assert!(!metrics_at(694.0).is_near_bottom(5.0));
    }

    #[test]
    fn test_load_more_fires_once_then_waits_for_fetch() {
        let gate = LoadMoreGate::default();
        let listener_view = gate.signal();
        let metrics = metrics_at(1_000.0 - 300.0 - 3.0);
        let mut calls = 0;

        gate.set_signal(PaginationSignal::new(true, false));
        if gate.should_load(true, metrics) {
            calls += 1;
        }
        assert_eq!(calls, 1);

        gate.set_signal(PaginationSignal::new(true, true));
        assert!(listener_view.get().is_fetching_next_page);
        if gate.should_load(true, metrics) {
            calls += 1;
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_load_more_requires_every_condition() {
        let gate = LoadMoreGate::default();
        let near = metrics_at(697.0);
        let far = metrics_at(100.0);

        gate.set_signal(PaginationSignal::new(true, false));
        assert!(!gate.should_load(false, near));
        assert!(!gate.should_load(true, far));

        gate.set_signal(PaginationSignal::new(false, false));
        assert!(!gate.should_load(true, near));
    }

    #[test]
    fn test_intercept_always_scrolls_with_clamp() {
        let policy = WheelPolicy::Intercept;
        assert_eq!(
            policy.resolve(metrics_at(0.0), -40.0, false),
            WheelOutcome::Scrolled(metrics_at(0.0))
        );
        assert_eq!(
            policy.resolve(metrics_at(680.0), 40.0, false),
            WheelOutcome::Scrolled(metrics_at(700.0))
        );
        assert_eq!(
            policy.resolve(metrics_at(100.0), 40.0, true),
            WheelOutcome::Scrolled(metrics_at(140.0))
        );
    }

    #[test]
    fn test_bubble_at_edges() {
        let policy = WheelPolicy::BubbleAtEdges;
        assert_eq!(policy.resolve(metrics_at(0.0), -40.0, true), WheelOutcome::Bubble);
        assert_eq!(policy.resolve(metrics_at(700.0), 40.0, false), WheelOutcome::Bubble);

        // At the bottom with more pages the list keeps the event
        assert_eq!(
            policy.resolve(metrics_at(700.0), 40.0, true),
            WheelOutcome::Scrolled(metrics_at(700.0))
        );
        // At the top scrolling down is an ordinary scroll
        assert_eq!(
            policy.resolve(metrics_at(0.0), 40.0, false),
            WheelOutcome::Scrolled(metrics_at(40.0))
        );
        // Inside the load threshold but short of the end the list still scrolls
        assert_eq!(
            policy.resolve(metrics_at(697.0), 40.0, false),
            WheelOutcome::Scrolled(metrics_at(700.0))
        );
    }

    #[test]
    fn test_listener_attaches_only_for_current_generation() {
        let mut listener = ScrollListener::default();
        let first = listener.begin_settle();
        listener.detach();
        assert!(!listener.attach(first));
        assert_eq!(listener.phase(), ListenerPhase::Detached);

        let second = listener.begin_settle();
        assert!(!listener.is_attached());
        assert!(listener.attach(second));
        assert!(listener.is_attached());

        listener.detach();
        assert!(!listener.is_attached());
    }

    #[test]
    fn test_revealing_rows() {
        let metrics = metrics_at(100.0);
        assert_eq!(metrics.revealing(150.0, 32.0).scroll_top, 100.0);
        assert_eq!(metrics.revealing(64.0, 32.0).scroll_top, 64.0);
        assert_eq!(metrics.revealing(480.0, 32.0).scroll_top, 212.0);
        assert_eq!(metrics.revealing(990.0, 32.0).scroll_top, 700.0);
    }

    #[test]
    fn test_content_shorter_than_viewport() {
        let metrics = ScrollMetrics::new(0.0, 300.0, 120.0);
        assert_eq!(metrics.max_scroll_top(), 0.0);
        assert!(metrics.is_near_bottom(5.0));
        assert_eq!(metrics.scrolled_by(50.0).scroll_top, 0.0);
    }
}
