//! Infinite scroll glue between a GPUI [`ScrollHandle`] and the headless
//! scroll state.

use std::time::Duration;

use gpui::{Context, Pixels, ScrollHandle, ScrollWheelEvent, Task, point, px};

use crate::constants::SCROLL_SETTLE_MS;
use crate::states::{
    LoadMoreGate, PaginationSignal, ScrollListener, ScrollMetrics, WheelOutcome, WheelPolicy,
};

/// Scroll state owned by a select view
pub struct InfiniteScroll {
    handle: ScrollHandle,
    listener: ScrollListener,
    gate: LoadMoreGate,
    policy: WheelPolicy,
    settle_task: Option<Task<()>>,
}

impl InfiniteScroll {
    /// Create detached scroll state
    pub fn new(policy: WheelPolicy) -> Self {
        Self {
            handle: ScrollHandle::new(),
            listener: ScrollListener::default(),
            gate: LoadMoreGate::default(),
            policy,
            settle_task: None,
        }
    }

    pub fn handle(&self) -> &ScrollHandle {
        &self.handle
    }

    pub fn policy(&self) -> WheelPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: WheelPolicy) {
        self.policy = policy;
    }

    pub fn signal(&self) -> PaginationSignal {
        self.gate.signal().get()
    }

    pub fn set_signal(&self, signal: PaginationSignal) {
        self.gate.set_signal(signal);
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_attached()
    }

    /// Current geometry in DOM terms
    pub fn metrics(&self) -> ScrollMetrics {
        let client_height = f32::from(self.handle.bounds().size.height);
        let max_offset = f32::from(self.handle.max_offset().height);
        ScrollMetrics::new(
            -f32::from(self.handle.offset().y),
            client_height,
            client_height + max_offset,
        )
    }

    fn scroll_to(&self, scroll_top: f32) {
        let offset = self.handle.offset();
        self.handle.set_offset(point(offset.x, px(-scroll_top)));
    }

    /// Popover shown; attaches the listener once the settle timer elapses
    ///
    /// `project` maps the owning view to this scroll state.
    pub fn begin_settle<V: 'static>(
        &mut self,
        cx: &mut Context<V>,
        project: fn(&mut V) -> &mut InfiniteScroll,
    ) {
        let generation = self.listener.begin_settle();
        self.settle_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(SCROLL_SETTLE_MS))
                .await;
            let _ = this.update(cx, |view, cx| {
                if project(view).listener.attach(generation) {
                    tracing::debug!(generation, "Scroll listener attached");
                    cx.notify();
                }
            });
        }));
    }

    /// Popover hidden; cancels a pending settle and rewinds the list
    pub fn detach(&mut self) {
        self.settle_task = None;
        self.listener.detach();
        self.handle.set_offset(point(px(0.), px(0.)));
    }

    /// Apply a wheel event; returns whether the list consumed it
    pub fn apply_wheel(&self, event: &ScrollWheelEvent, line_height: Pixels) -> bool {
        // GPUI deltas are positive when scrolling up
        let delta_y = -f32::from(event.delta.pixel_delta(line_height).y);
        let signal = self.signal();
        match self.policy.resolve(self.metrics(), delta_y, signal.has_next_page) {
            WheelOutcome::Bubble => false,
            WheelOutcome::Scrolled(metrics) => {
                self.scroll_to(metrics.scroll_top);
                true
            }
        }
    }

    /// Scroll just enough to show a row
    pub fn reveal_row(&self, row_top: f32, row_height: f32) {
        let metrics = self.metrics().revealing(row_top, row_height);
        self.scroll_to(metrics.scroll_top);
    }

    /// Whether the current position should request another page
    pub fn should_load(&self, open: bool) -> bool {
        self.listener.is_attached() && self.gate.should_load(open, self.metrics())
    }
}
