//! # Transition Gate
//!
//! Debounce for navigation transitions. While a transition is in flight,
//! further guarded requests are rejected; the lock expires on its own after a
//! fixed window, or earlier when the adapter reports the transition finished.
//!
//! ```text
//!            try_lock(now)
//!   Idle ───────────────────► Locked { until, token }
//!    ▲                              │
//!    │   release(token) /           │
//!    └── now >= until ◄─────────────┘
//! ```
//!
//! Expiry is evaluated lazily against a caller-supplied `Instant`, so the
//! gate needs no timers and behaves deterministically under test. Each lock
//! carries a token; `release` only cancels the lock it was issued for, so a
//! stale completion from an earlier transition cannot unlock a newer one.

use std::time::{Duration, Instant};

use log::debug;

/// Default lock window applied to every guarded transition.
pub const DEFAULT_LOCK_WINDOW: Duration = Duration::from_millis(400);

/// Handle identifying one particular lock acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateToken(u64);

#[derive(Debug, Clone, Copy)]
enum GateState {
    Idle,
    Locked { until: Instant, token: GateToken },
}

/// Per-navigator transition debounce.
#[derive(Debug)]
pub struct TransitionGate {
    window: Duration,
    state: GateState,
    next_token: u64,
}

impl TransitionGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: GateState::Idle,
            next_token: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether a transition is still in flight at `now`.
    pub fn is_locked(&self, now: Instant) -> bool {
        match self.state {
            GateState::Idle => false,
            GateState::Locked { until, .. } => now < until,
        }
    }

    /// Acquire the gate. Returns `None` while a previous lock is live.
    pub fn try_lock(&mut self, now: Instant) -> Option<GateToken> {
        if self.is_locked(now) {
            debug!("gate: lock rejected, transition in flight");
            return None;
        }
        let token = GateToken(self.next_token);
        self.next_token += 1;
        self.state = GateState::Locked {
            until: now + self.window,
            token,
        };
        Some(token)
    }

    /// Early-cancel the lock identified by `token`. Tokens from earlier,
    /// already-replaced locks are ignored.
    pub fn release(&mut self, token: GateToken) {
        if let GateState::Locked { token: live, .. } = self.state
            && live == token
        {
            debug!("gate: released early");
            self.state = GateState::Idle;
        }
    }
}

impl Default for TransitionGate {
    fn default() -> Self {
        Self::new(DEFAULT_LOCK_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> TransitionGate {
        TransitionGate::new(Duration::from_millis(400))
    }

    #[test]
    fn test_lock_blocks_within_window() {
        let mut gate = gate();
        let t0 = Instant::now();
        assert!(gate.try_lock(t0).is_some());
        assert!(gate.is_locked(t0 + Duration::from_millis(399)));
        assert!(gate.try_lock(t0 + Duration::from_millis(100)).is_none());
    }

    #[test]
    fn test_lock_expires_after_window() {
        let mut gate = gate();
        let t0 = Instant::now();
        let _ = gate.try_lock(t0);
        let later = t0 + Duration::from_millis(400);
        assert!(!gate.is_locked(later));
        assert!(gate.try_lock(later).is_some());
    }

    #[test]
    fn test_release_with_live_token_unlocks() {
        let mut gate = gate();
        let t0 = Instant::now();
        let token = gate.try_lock(t0).unwrap();
        gate.release(token);
        assert!(!gate.is_locked(t0 + Duration::from_millis(1)));
    }

    #[test]
    fn test_release_with_stale_token_is_ignored() {
        let mut gate = gate();
        let t0 = Instant::now();
        let stale = gate.try_lock(t0).unwrap();
        gate.release(stale);
        let live = gate.try_lock(t0).unwrap();
        assert_ne!(stale, live);

        // A completion report from the first transition must not unlock
        // the second one.
        gate.release(stale);
        assert!(gate.is_locked(t0 + Duration::from_millis(1)));
    }
}
