//! # Screen Model
//!
//! The contract between the navigator and the things it navigates.
//!
//! A screen is a full-container UI unit. The navigator never inspects what a
//! screen draws; it only needs a stable identity ([`ScreenKey`]), lifecycle
//! hooks to drive, and an optional back-press interceptor. Rendering lives in
//! the `tui` adapter.
//!
//! Identity is compared by value, not by pointer: two instances with the same
//! key are "the same screen" as far as guards and history lookups are
//! concerned. The key string doubles as the history-entry name.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable, value-compared identity for a screen.
///
/// Most screens use a fixed key (`ScreenKey::new("library")`); screens that
/// exist in parameterized variants can build one from a `String`. The key is
/// also the name recorded in the back stack for history entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScreenKey(Cow<'static, str>);

impl ScreenKey {
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ScreenKey {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for ScreenKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for ScreenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Arguments handed to a screen when it is mounted.
///
/// An ordered string → JSON-value map. Ordered so that rendering and logging
/// are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload(BTreeMap<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// Where a mounted screen currently is in its life.
///
/// ```text
/// Created ──► Resumed ◄──► Paused
///                │            │
///                └── Detached ┘
/// ```
///
/// Exactly one mounted screen is `Resumed` at any time. `Paused` screens are
/// hidden but retained; `Detached` screens have been dropped from the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Resumed,
    Paused,
    Detached,
}

/// What a screen's back interceptor decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackDisposition {
    /// The press was consumed; the navigator does nothing further.
    Handled,
    /// The screen asks the navigator to pop (or exit on an empty stack).
    Pop,
    /// No interceptor installed; the navigator applies its default pop.
    Unhandled,
}

/// A full-container UI unit managed by the navigator.
///
/// All hooks default to no-ops so simple screens only implement `key`.
/// `on_back` is only ever invoked on the currently resumed screen, which
/// gives the installed-on-resume / removed-on-pause scoping for free.
pub trait Screen {
    fn key(&self) -> ScreenKey;

    /// Called once when the screen is mounted, with any push arguments.
    fn on_attach(&mut self, _args: Option<&Payload>) {}

    /// Called whenever the screen becomes the visible, active screen.
    fn on_resume(&mut self) {}

    /// Called when the screen is hidden but retained behind a newer one.
    fn on_pause(&mut self) {}

    /// Called when the screen is permanently removed from the stack.
    fn on_detach(&mut self) {}

    /// Back-press interceptor. `double_press` is true when the previous
    /// press landed within the double-press window.
    fn on_back(&mut self, _double_press: bool) -> BackDisposition {
        BackDisposition::Unhandled
    }
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    fn key(&self) -> ScreenKey {
        (**self).key()
    }

    fn on_attach(&mut self, args: Option<&Payload>) {
        (**self).on_attach(args);
    }

    fn on_resume(&mut self) {
        (**self).on_resume();
    }

    fn on_pause(&mut self) {
        (**self).on_pause();
    }

    fn on_detach(&mut self) {
        (**self).on_detach();
    }

    fn on_back(&mut self, double_press: bool) -> BackDisposition {
        (**self).on_back(double_press)
    }
}
