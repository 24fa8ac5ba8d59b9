//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::screen::{BackDisposition, Payload, Screen, ScreenKey};

/// A screen that records every lifecycle call into a shared event log.
pub struct ProbeScreen {
    key: &'static str,
    events: Rc<RefCell<Vec<String>>>,
    back: BackDisposition,
}

impl ProbeScreen {
    pub fn new(key: &'static str, events: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            key,
            events: Rc::clone(events),
            back: BackDisposition::Unhandled,
        }
    }

    /// What `on_back` should answer.
    pub fn with_back(mut self, back: BackDisposition) -> Self {
        self.back = back;
        self
    }

    fn record(&self, event: String) {
        self.events.borrow_mut().push(event);
    }
}

impl Screen for ProbeScreen {
    fn key(&self) -> ScreenKey {
        ScreenKey::new(self.key)
    }

    fn on_attach(&mut self, args: Option<&Payload>) {
        let suffix = if args.is_some() { "+args" } else { "" };
        self.record(format!("attach:{}{}", self.key, suffix));
    }

    fn on_resume(&mut self) {
        self.record(format!("resume:{}", self.key));
    }

    fn on_pause(&mut self) {
        self.record(format!("pause:{}", self.key));
    }

    fn on_detach(&mut self) {
        self.record(format!("detach:{}", self.key));
    }

    fn on_back(&mut self, double_press: bool) -> BackDisposition {
        self.record(format!("back:{}:{}", self.key, double_press));
        self.back
    }
}

/// Creates an empty shared event log for [`ProbeScreen`]s.
pub fn event_log() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}

/// Takes and returns everything recorded so far.
pub fn drain(events: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
    events.borrow_mut().drain(..).collect()
}
