//! # Transition Animation
//!
//! Plays the transition the navigator committed: directional slides offset
//! the screen area by eased progress, fades render the incoming screen
//! dimmed until the animation ends. The animation runs over the same window
//! as the navigator's gate lock; when it completes, the run loop reports the
//! gate token back so the lock releases.
//!
//! With animations disabled there is nothing to play — the gate lock simply
//! expires on its own schedule, so the debounce window still holds.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::core::gate::GateToken;
use crate::core::nav::{PendingTransition, Transition};

pub struct TransitionAnim {
    kind: Transition,
    started: Instant,
    duration: Duration,
    token: Option<GateToken>,
}

impl TransitionAnim {
    /// Begin animating a committed transition. Returns `None` when
    /// animations are disabled.
    pub fn start(
        pending: PendingTransition,
        now: Instant,
        duration: Duration,
        animations: bool,
    ) -> Option<Self> {
        if !animations {
            return None;
        }
        Some(Self {
            kind: pending.kind,
            started: now,
            duration,
            token: pending.token,
        })
    }

    pub fn token(&self) -> Option<GateToken> {
        self.token
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= self.duration
    }

    /// Eased progress in `0.0..=1.0` (ease-out cubic).
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = (now.duration_since(self.started).as_secs_f32()
            / self.duration.as_secs_f32())
        .clamp(0.0, 1.0);
        1.0 - (1.0 - linear).powi(3)
    }

    /// The sub-area the incoming screen should render into at `now`.
    pub fn area_for(&self, area: Rect, now: Instant) -> Rect {
        let offset = ((1.0 - self.progress(now)) * area.width as f32).round() as u16;
        let offset = offset.min(area.width);
        match self.kind {
            Transition::Fade => area,
            // Forward: slide in from the right edge.
            Transition::SlideLeft => Rect {
                x: area.x + offset,
                width: area.width - offset,
                ..area
            },
            // Back: slide in from the left edge.
            Transition::SlideRight => Rect {
                width: area.width - offset,
                ..area
            },
        }
    }

    /// Whether the screen should still render dimmed (fade only).
    pub fn dims(&self, now: Instant) -> bool {
        self.kind == Transition::Fade && !self.is_done(now)
    }
}
