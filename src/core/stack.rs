//! # Screen Stack
//!
//! The container-content side of navigation: mounted screens with lifecycle
//! states, the named back-stack, and the transaction API that mutates both.
//!
//! The [`Navigator`](crate::core::nav::Navigator) decides *what* should
//! happen (guards, debounce, history policy); this module is the machinery
//! that applies it. It never looks at the clock and never rejects anything —
//! a committed transaction always lands.
//!
//! A transaction collects operations and applies them in order on `commit`:
//!
//! ```text
//! stack.begin()
//!     .hide_current()
//!     .add(screen, args)
//!     .add_to_back_stack("reader")
//!     .commit();
//! ```
//!
//! After every commit or pop the stack re-establishes its one invariant:
//! the topmost mounted screen is `Resumed`, every other one is `Paused`.

use log::{debug, warn};

use crate::core::screen::{Lifecycle, Payload, Screen, ScreenKey};

struct Mounted<S> {
    screen: S,
    state: Lifecycle,
}

/// Mounted screens (bottom → top) plus named back-stack entries.
pub struct ScreenStack<S> {
    mounted: Vec<Mounted<S>>,
    entries: Vec<String>,
}

impl<S> Default for ScreenStack<S> {
    fn default() -> Self {
        Self {
            mounted: Vec::new(),
            entries: Vec::new(),
        }
    }
}

impl<S: Screen> ScreenStack<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transaction against this stack.
    pub fn begin(&mut self) -> Transaction<'_, S> {
        Transaction {
            stack: self,
            ops: Vec::new(),
            back_entry: None,
        }
    }

    /// The currently resumed screen, if any.
    pub fn current(&self) -> Option<&S> {
        self.mounted.last().map(|m| &m.screen)
    }

    pub fn current_mut(&mut self) -> Option<&mut S> {
        self.mounted.last_mut().map(|m| &mut m.screen)
    }

    /// Whether a screen with `key` is mounted (resumed or paused).
    pub fn is_attached(&self, key: &ScreenKey) -> bool {
        self.mounted.iter().any(|m| &m.screen.key() == key)
    }

    /// Lifecycle state of the topmost mounted screen with `key`.
    pub fn state_of(&self, key: &ScreenKey) -> Option<Lifecycle> {
        self.mounted
            .iter()
            .rev()
            .find(|m| &m.screen.key() == key)
            .map(|m| m.state)
    }

    pub fn mounted_len(&self) -> usize {
        self.mounted.len()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// History entry names, bottom → top.
    pub fn entry_names(&self) -> Vec<String> {
        self.entries.clone()
    }

    /// Pop the top history entry: detach the screen it names and resume the
    /// screen underneath. Returns false when the history is empty.
    pub fn pop_top(&mut self) -> bool {
        let Some(name) = self.entries.pop() else {
            return false;
        };
        debug!("stack: pop entry '{name}'");
        self.detach_named(&name);
        self.normalize();
        true
    }

    /// Pop history entries from the top down to `name`, detaching each
    /// popped entry's screen. With `inclusive` the named entry itself is
    /// popped too. Popping to an absent name is a no-op. Returns the number
    /// of entries removed.
    pub fn pop_to(&mut self, name: &str, inclusive: bool) -> usize {
        if !self.entries.iter().any(|entry| entry == name) {
            debug!("stack: pop_to '{name}' — no such entry");
            return 0;
        }
        let mut popped = 0;
        while let Some(top) = self.entries.last() {
            let is_target = top == name;
            if is_target && !inclusive {
                break;
            }
            let entry = self.entries.pop().unwrap_or_default();
            self.detach_named(&entry);
            popped += 1;
            if is_target {
                break;
            }
        }
        debug!("stack: pop_to '{name}' inclusive={inclusive} popped={popped}");
        self.normalize();
        popped
    }

    /// Detach the topmost mounted screen named `name`, pausing it first if
    /// it was the resumed one.
    fn detach_named(&mut self, name: &str) {
        let Some(index) = self
            .mounted
            .iter()
            .rposition(|m| m.screen.key().as_str() == name)
        else {
            warn!("stack: entry '{name}' has no mounted screen");
            return;
        };
        let mut removed = self.mounted.remove(index);
        if removed.state == Lifecycle::Resumed {
            removed.screen.on_pause();
        }
        removed.screen.on_detach();
    }

    /// Re-establish the invariant: topmost mounted screen resumed, all
    /// others paused.
    fn normalize(&mut self) {
        let top = self.mounted.len().checked_sub(1);
        for (index, mounted) in self.mounted.iter_mut().enumerate() {
            if Some(index) == top {
                if mounted.state != Lifecycle::Resumed {
                    mounted.screen.on_resume();
                    mounted.state = Lifecycle::Resumed;
                }
            } else if mounted.state == Lifecycle::Resumed {
                mounted.screen.on_pause();
                mounted.state = Lifecycle::Paused;
            }
        }
    }
}

enum Op<S> {
    /// Pause the resumed screen, keeping it mounted.
    HideCurrent,
    /// Detach the topmost screen outright (no pause state).
    RemoveCurrent,
    /// Detach everything and clear the history.
    Clear,
    /// Mount a screen on top.
    Add { screen: S, args: Option<Payload> },
}

/// A batch of stack mutations applied atomically on [`commit`].
///
/// [`commit`]: Transaction::commit
pub struct Transaction<'a, S: Screen> {
    stack: &'a mut ScreenStack<S>,
    ops: Vec<Op<S>>,
    back_entry: Option<String>,
}

impl<'a, S: Screen> Transaction<'a, S> {
    pub fn hide_current(mut self) -> Self {
        self.ops.push(Op::HideCurrent);
        self
    }

    pub fn remove_current(mut self) -> Self {
        self.ops.push(Op::RemoveCurrent);
        self
    }

    pub fn clear(mut self) -> Self {
        self.ops.push(Op::Clear);
        self
    }

    pub fn add(mut self, screen: S, args: Option<Payload>) -> Self {
        self.ops.push(Op::Add { screen, args });
        self
    }

    pub fn add_to_back_stack(mut self, name: impl Into<String>) -> Self {
        self.back_entry = Some(name.into());
        self
    }

    pub fn commit(self) {
        for op in self.ops {
            match op {
                Op::HideCurrent => {
                    if let Some(top) = self.stack.mounted.last_mut()
                        && top.state == Lifecycle::Resumed
                    {
                        top.screen.on_pause();
                        top.state = Lifecycle::Paused;
                    }
                }
                Op::RemoveCurrent => {
                    // Straight to detached, skipping the pause state.
                    if let Some(mut removed) = self.stack.mounted.pop() {
                        removed.screen.on_detach();
                    }
                }
                Op::Clear => {
                    // Tear down top-first, the order pops would have used.
                    for mut mounted in self.stack.mounted.drain(..).rev() {
                        if mounted.state == Lifecycle::Resumed {
                            mounted.screen.on_pause();
                        }
                        mounted.screen.on_detach();
                    }
                    self.stack.entries.clear();
                }
                Op::Add { mut screen, args } => {
                    screen.on_attach(args.as_ref());
                    self.stack.mounted.push(Mounted {
                        screen,
                        state: Lifecycle::Created,
                    });
                }
            }
        }
        if let Some(name) = self.back_entry {
            self.stack.entries.push(name);
        }
        self.stack.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ProbeScreen, drain, event_log};

    #[test]
    fn test_commit_hide_add_fires_hooks_in_order() {
        let events = event_log();
        let mut stack = ScreenStack::new();
        stack
            .begin()
            .add(ProbeScreen::new("home", &events), None)
            .commit();
        drain(&events);

        stack
            .begin()
            .hide_current()
            .add(ProbeScreen::new("library", &events), None)
            .add_to_back_stack("library")
            .commit();

        assert_eq!(
            drain(&events),
            ["pause:home", "attach:library", "resume:library"]
        );
        assert_eq!(stack.entry_names(), ["library"]);
        assert_eq!(
            stack.state_of(&ScreenKey::new("home")),
            Some(Lifecycle::Paused)
        );
    }

    #[test]
    fn test_pop_top_detaches_and_resumes_previous() {
        let events = event_log();
        let mut stack = ScreenStack::new();
        stack
            .begin()
            .add(ProbeScreen::new("home", &events), None)
            .commit();
        stack
            .begin()
            .hide_current()
            .add(ProbeScreen::new("library", &events), None)
            .add_to_back_stack("library")
            .commit();
        drain(&events);

        assert!(stack.pop_top());
        assert_eq!(
            drain(&events),
            ["pause:library", "detach:library", "resume:home"]
        );
        assert_eq!(stack.entry_count(), 0);
        assert_eq!(stack.current().unwrap().key(), ScreenKey::new("home"));
    }

    #[test]
    fn test_pop_top_on_empty_history() {
        let events = event_log();
        let mut stack = ScreenStack::new();
        stack
            .begin()
            .add(ProbeScreen::new("home", &events), None)
            .commit();
        assert!(!stack.pop_top());
        assert_eq!(stack.mounted_len(), 1);
    }

    #[test]
    fn test_pop_to_exclusive_keeps_named_entry() {
        let events = event_log();
        let mut stack = ScreenStack::new();
        stack
            .begin()
            .add(ProbeScreen::new("home", &events), None)
            .commit();
        for key in ["a", "b", "c"] {
            stack
                .begin()
                .hide_current()
                .add(ProbeScreen::new(key, &events), None)
                .add_to_back_stack(key)
                .commit();
        }

        assert_eq!(stack.pop_to("a", false), 2);
        assert_eq!(stack.entry_names(), ["a"]);
        assert_eq!(stack.current().unwrap().key(), ScreenKey::new("a"));
    }

    #[test]
    fn test_pop_to_inclusive_removes_named_entry() {
        let events = event_log();
        let mut stack = ScreenStack::new();
        stack
            .begin()
            .add(ProbeScreen::new("home", &events), None)
            .commit();
        for key in ["a", "b"] {
            stack
                .begin()
                .hide_current()
                .add(ProbeScreen::new(key, &events), None)
                .add_to_back_stack(key)
                .commit();
        }

        assert_eq!(stack.pop_to("a", true), 2);
        assert_eq!(stack.entry_count(), 0);
        assert_eq!(stack.current().unwrap().key(), ScreenKey::new("home"));
    }

    #[test]
    fn test_pop_to_absent_name_is_noop() {
        let events = event_log();
        let mut stack = ScreenStack::new();
        stack
            .begin()
            .add(ProbeScreen::new("home", &events), None)
            .commit();
        stack
            .begin()
            .hide_current()
            .add(ProbeScreen::new("a", &events), None)
            .add_to_back_stack("a")
            .commit();

        assert_eq!(stack.pop_to("missing", true), 0);
        assert_eq!(stack.entry_names(), ["a"]);
    }

    #[test]
    fn test_remove_current_skips_pause() {
        let events = event_log();
        let mut stack = ScreenStack::new();
        stack
            .begin()
            .add(ProbeScreen::new("home", &events), None)
            .commit();
        drain(&events);

        stack
            .begin()
            .remove_current()
            .add(ProbeScreen::new("reader", &events), None)
            .commit();

        // The removed screen goes straight to detached, no pause hook.
        assert_eq!(
            drain(&events),
            ["detach:home", "attach:reader", "resume:reader"]
        );
        assert!(!stack.is_attached(&ScreenKey::new("home")));
    }

    #[test]
    fn test_clear_detaches_everything_and_empties_history() {
        let events = event_log();
        let mut stack = ScreenStack::new();
        stack
            .begin()
            .add(ProbeScreen::new("home", &events), None)
            .commit();
        stack
            .begin()
            .hide_current()
            .add(ProbeScreen::new("a", &events), None)
            .add_to_back_stack("a")
            .commit();
        drain(&events);

        stack
            .begin()
            .clear()
            .add(ProbeScreen::new("fresh", &events), None)
            .commit();

        assert_eq!(
            drain(&events),
            [
                "pause:a",
                "detach:a",
                "detach:home",
                "attach:fresh",
                "resume:fresh"
            ]
        );
        assert_eq!(stack.entry_count(), 0);
        assert_eq!(stack.mounted_len(), 1);
    }
}
