//! UI Constants
//!
//! Timing and layout defaults shared by both select components.

/// Quiet period before a search term is propagated
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Delay after the popover is shown before the wheel listener is attached
pub const SCROLL_SETTLE_MS: u64 = 10;

/// Distance from the bottom (in pixels) that counts as "near bottom"
pub const NEAR_BOTTOM_THRESHOLD: f32 = 5.0;

/// Default number of badges shown on the multi-select trigger
pub const DEFAULT_MAX_COUNT: usize = 3;

/// Longest badge pulse period in seconds
pub const MAX_ANIMATION_SECS: f32 = 60.0;

/// Popover list height limit
pub const LIST_MAX_HEIGHT: f32 = 300.0;

/// Trigger width defaults
pub const TRIGGER_MIN_WIDTH: f32 = 200.0;
pub const POPOVER_WIDTH: f32 = 320.0;

/// Gap between the trigger and the popover
pub const POPOVER_OFFSET: f32 = 4.0;

/// Popover keeps this margin from the window edges
pub const POPOVER_WINDOW_MARGIN: f32 = 8.0;

/// Default window dimensions for the gallery
pub const DEFAULT_WINDOW_WIDTH: f32 = 1000.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Gallery paging defaults
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_FETCH_DELAY_MS: u64 = 400;

/// Fixed height of one option row
pub const ROW_HEIGHT: f32 = 32.0;
