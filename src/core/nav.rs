//! # Navigator
//!
//! The navigation coordinator: owns a screen stack, a transition gate, and a
//! back-press tracker, and exposes the guarded operations the UI calls.
//!
//! Every guarded operation answers with an [`Outcome`] instead of silently
//! dropping requests — the caller (and the tests) can always observe why a
//! request went nowhere:
//!
//! | operation                  | guards                               |
//! |----------------------------|--------------------------------------|
//! | `set_default`              | none (bootstraps the container)      |
//! | `push`                     | container, gate, same-screen         |
//! | `push_and_remove_current`  | container, gate                      |
//! | `push_clearing_history`    | container, gate                      |
//! | `pop`                      | none (`Exit` on empty history)       |
//! | `pop_named_or_push`        | container, gate (+ push guards)      |
//! | `remove_or_pop`            | none                                 |
//! | `back_pressed`             | none (delegates to `pop`)            |
//!
//! A `Navigator` is an explicit instance owned by the UI loop, not global
//! state; two independent containers get two navigators and two gates.
//!
//! The coordinator decides *what* transition plays; the adapter decides how.
//! Committed transitions are handed over via [`take_transition`], and the
//! adapter reports animation completion back through [`transition_finished`]
//! so the gate can release early.
//!
//! [`take_transition`]: Navigator::take_transition
//! [`transition_finished`]: Navigator::transition_finished

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::core::backpress::BackPressTracker;
use crate::core::gate::{GateToken, TransitionGate};
use crate::core::screen::{BackDisposition, Payload, Screen, ScreenKey};
use crate::core::stack::ScreenStack;

/// Identifies the view region screens are mounted into. Recorded by
/// `set_default` and required by every push variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerId(pub u16);

/// Animation the adapter should play for a committed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Forward navigation: the incoming screen slides in from the right.
    SlideLeft,
    /// Back navigation: the restored screen slides in from the left.
    SlideRight,
    Fade,
}

/// Why a navigation request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No container recorded yet; call `set_default` first.
    NoContainer,
    /// The transition gate is locked.
    TransitionInFlight,
    /// The target's key equals the current screen's key.
    SameScreen,
}

/// What became of a navigation request.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The history was already empty; the host window should terminate.
    Exit,
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Options for `push` and the push branch of `pop_named_or_push`.
#[derive(Debug, Clone)]
pub struct PushOptions {
    /// Record a history entry named after the screen's key.
    pub add_to_history: bool,
    /// Cross-fade instead of the directional slide.
    pub fade: bool,
    /// Arguments handed to the screen's `on_attach`.
    pub args: Option<Payload>,
}

impl Default for PushOptions {
    fn default() -> Self {
        Self {
            add_to_history: true,
            fade: false,
            args: None,
        }
    }
}

impl PushOptions {
    pub fn with_args(args: Payload) -> Self {
        Self {
            args: Some(args),
            ..Self::default()
        }
    }
}

/// A committed transition waiting for the adapter to animate it.
///
/// `token` is present for gate-locked transitions; reporting it back via
/// `transition_finished` releases the gate early.
#[derive(Debug, Clone, Copy)]
pub struct PendingTransition {
    pub kind: Transition,
    pub token: Option<GateToken>,
}

/// The navigation coordinator. Owned by the UI loop, one per container.
pub struct Navigator<S: Screen> {
    container: Option<ContainerId>,
    stack: ScreenStack<S>,
    gate: TransitionGate,
    back: BackPressTracker,
    pending: Option<PendingTransition>,
}

impl<S: Screen> Navigator<S> {
    pub fn new() -> Self {
        Self::with_windows(
            crate::core::gate::DEFAULT_LOCK_WINDOW,
            crate::core::backpress::DEFAULT_DOUBLE_PRESS_WINDOW,
        )
    }

    pub fn with_windows(lock_window: Duration, double_press_window: Duration) -> Self {
        Self {
            container: None,
            stack: ScreenStack::new(),
            gate: TransitionGate::new(lock_window),
            back: BackPressTracker::new(double_press_window),
            pending: None,
        }
    }

    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }

    pub fn lock_window(&self) -> Duration {
        self.gate.window()
    }

    pub fn current(&self) -> Option<&S> {
        self.stack.current()
    }

    pub fn current_mut(&mut self) -> Option<&mut S> {
        self.stack.current_mut()
    }

    /// Whether a screen with `key` is mounted (resumed or paused).
    pub fn is_attached(&self, key: &ScreenKey) -> bool {
        self.stack.is_attached(key)
    }

    /// History entry count and names, bottom → top. Diagnostics surface.
    pub fn back_stack(&self) -> (usize, Vec<String>) {
        let names = self.stack.entry_names();
        (names.len(), names)
    }

    /// Hand the last committed transition to the adapter.
    pub fn take_transition(&mut self) -> Option<PendingTransition> {
        self.pending.take()
    }

    /// The adapter finished animating; release the gate early.
    pub fn transition_finished(&mut self, token: GateToken) {
        self.gate.release(token);
    }

    /// Record the container and replace all content with `screen`,
    /// discarding history. Repeated calls keep replacing.
    pub fn set_default(&mut self, container: ContainerId, screen: S) {
        debug!("set_default: container={container:?} screen={}", screen.key());
        self.container = Some(container);
        self.stack.begin().clear().add(screen, None).commit();
        self.pending = None;
    }

    /// Animated forward navigation; pauses and retains the outgoing screen.
    pub fn push(&mut self, screen: S, opts: PushOptions) -> Outcome {
        self.push_at(screen, opts, Instant::now())
    }

    /// Deterministic variant of [`push`](Navigator::push) for tests and
    /// headless drivers.
    pub fn push_at(&mut self, screen: S, opts: PushOptions, now: Instant) -> Outcome {
        let key = screen.key();
        debug!(
            "push: {key} add_to_history={} fade={}",
            opts.add_to_history, opts.fade
        );
        if self.container.is_none() {
            warn!("push: rejected, no container set");
            return Outcome::Rejected(Rejection::NoContainer);
        }
        if self.gate.is_locked(now) {
            debug!("push: rejected, transition in flight");
            return Outcome::Rejected(Rejection::TransitionInFlight);
        }
        if self.stack.current().map(|s| s.key()) == Some(key.clone()) {
            debug!("push: rejected, '{key}' is already current");
            return Outcome::Rejected(Rejection::SameScreen);
        }
        let Some(token) = self.gate.try_lock(now) else {
            return Outcome::Rejected(Rejection::TransitionInFlight);
        };

        let mut tx = self
            .stack
            .begin()
            .hide_current()
            .add(screen, opts.args);
        if opts.add_to_history {
            tx = tx.add_to_back_stack(key.as_str().to_string());
        }
        tx.commit();

        let kind = if opts.fade {
            Transition::Fade
        } else {
            Transition::SlideLeft
        };
        self.pending = Some(PendingTransition {
            kind,
            token: Some(token),
        });
        Outcome::Applied
    }

    /// Forward navigation that detaches the outgoing screen instead of
    /// pausing it. Never records a history entry for either side.
    pub fn push_and_remove_current(&mut self, screen: S, args: Option<Payload>) -> Outcome {
        self.push_and_remove_current_at(screen, args, Instant::now())
    }

    pub fn push_and_remove_current_at(
        &mut self,
        screen: S,
        args: Option<Payload>,
        now: Instant,
    ) -> Outcome {
        debug!("push_and_remove_current: {}", screen.key());
        if self.container.is_none() {
            warn!("push_and_remove_current: rejected, no container set");
            return Outcome::Rejected(Rejection::NoContainer);
        }
        let Some(token) = self.gate.try_lock(now) else {
            debug!("push_and_remove_current: rejected, transition in flight");
            return Outcome::Rejected(Rejection::TransitionInFlight);
        };

        self.stack
            .begin()
            .remove_current()
            .add(screen, args)
            .commit();
        self.pending = Some(PendingTransition {
            kind: Transition::SlideLeft,
            token: Some(token),
        });
        Outcome::Applied
    }

    /// Pop the entire history and replace the container content with
    /// `screen` as the new base.
    pub fn push_clearing_history(&mut self, screen: S, args: Option<Payload>) -> Outcome {
        self.push_clearing_history_at(screen, args, Instant::now())
    }

    pub fn push_clearing_history_at(
        &mut self,
        screen: S,
        args: Option<Payload>,
        now: Instant,
    ) -> Outcome {
        debug!("push_clearing_history: {}", screen.key());
        if self.container.is_none() {
            warn!("push_clearing_history: rejected, no container set");
            return Outcome::Rejected(Rejection::NoContainer);
        }
        let Some(token) = self.gate.try_lock(now) else {
            debug!("push_clearing_history: rejected, transition in flight");
            return Outcome::Rejected(Rejection::TransitionInFlight);
        };

        self.stack.begin().clear().add(screen, args).commit();
        self.pending = Some(PendingTransition {
            kind: Transition::Fade,
            token: Some(token),
        });
        Outcome::Applied
    }

    /// Pop the top history entry and restore the previous screen, or answer
    /// `Exit` when there is nothing left to pop.
    pub fn pop(&mut self) -> Outcome {
        let (count, _) = self.back_stack();
        debug!("pop: history count={count}");
        if !self.stack.pop_top() {
            return Outcome::Exit;
        }
        self.pending = Some(PendingTransition {
            kind: Transition::SlideRight,
            token: None,
        });
        Outcome::Applied
    }

    /// Singleton-screen navigation: if a screen with the target's key is
    /// already mounted, pop everything above its history entry so it becomes
    /// the top again; otherwise push it as a new entry.
    pub fn pop_named_or_push(&mut self, screen: S, opts: PushOptions) -> Outcome {
        self.pop_named_or_push_at(screen, opts, Instant::now())
    }

    pub fn pop_named_or_push_at(&mut self, screen: S, opts: PushOptions, now: Instant) -> Outcome {
        let key = screen.key();
        if self.container.is_none() {
            warn!("pop_named_or_push: rejected, no container set");
            return Outcome::Rejected(Rejection::NoContainer);
        }
        if !self.stack.is_attached(&key) {
            debug!("pop_named_or_push: '{key}' not attached, pushing");
            return self.push_at(screen, opts, now);
        }
        let Some(token) = self.gate.try_lock(now) else {
            debug!("pop_named_or_push: rejected, transition in flight");
            return Outcome::Rejected(Rejection::TransitionInFlight);
        };

        let popped = self.stack.pop_to(key.as_str(), false);
        debug!("pop_named_or_push: '{key}' attached, popped {popped} above it");
        if popped > 0 {
            self.pending = Some(PendingTransition {
                kind: Transition::SlideRight,
                token: Some(token),
            });
        }
        Outcome::Applied
    }

    /// Pop the history down to and including the entry named `key`.
    /// Unconditional: no gate, applied even when the entry is absent.
    pub fn remove_or_pop(&mut self, key: &ScreenKey) -> Outcome {
        let popped = self.stack.pop_to(key.as_str(), true);
        debug!("remove_or_pop: '{key}' popped {popped} entries");
        if popped > 0 {
            self.pending = Some(PendingTransition {
                kind: Transition::SlideRight,
                token: None,
            });
        }
        Outcome::Applied
    }

    /// Feed a physical back press through the current screen's interceptor.
    /// `Handled` consumes the press; anything else delegates to [`pop`],
    /// so an empty history answers `Exit`.
    ///
    /// [`pop`]: Navigator::pop
    pub fn back_pressed(&mut self) -> Outcome {
        self.back_pressed_at(Instant::now())
    }

    pub fn back_pressed_at(&mut self, now: Instant) -> Outcome {
        let double = self.back.press(now);
        debug!("back_pressed: double={double}");
        match self.stack.current_mut().map(|s| s.on_back(double)) {
            Some(BackDisposition::Handled) => Outcome::Applied,
            Some(BackDisposition::Pop) | Some(BackDisposition::Unhandled) | None => self.pop(),
        }
    }
}

impl<S: Screen> Default for Navigator<S> {
    fn default() -> Self {
        Self::new()
    }
}
