//! # Back-Press Tracking
//!
//! Double-press detection for the physical/keyboard back signal. The tracker
//! only answers "did the previous press land within the window?" — what to do
//! with that answer is the screen's decision.

use std::time::{Duration, Instant};

/// Default window within which two back presses count as a double press.
pub const DEFAULT_DOUBLE_PRESS_WINDOW: Duration = Duration::from_millis(1000);

#[derive(Debug)]
pub struct BackPressTracker {
    window: Duration,
    last: Option<Instant>,
}

impl BackPressTracker {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Record a press at `now`; returns whether the previous press fell
    /// within the double-press window.
    pub fn press(&mut self, now: Instant) -> bool {
        let double = self
            .last
            .is_some_and(|last| now.duration_since(last) < self.window);
        self.last = Some(now);
        double
    }
}

impl Default for BackPressTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_PRESS_WINDOW)
    }
}
