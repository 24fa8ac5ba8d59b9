//! # Demo Screens
//!
//! The screens the demo binary navigates between. Each one implements three
//! small traits:
//!
//! - `Screen` (core): identity + lifecycle hooks the navigator drives
//! - `Component` (tui): rendering into a `Rect`
//! - `AppScreen` (here): event handling that emits [`ScreenRequest`]s
//!
//! Screens never touch the navigator directly — it owns them, so they hand
//! navigation intents back to the run loop instead. Between them the screens
//! exercise every navigator operation: plain pushes with payloads (library →
//! reader), `push_and_remove_current` (chapter advance), a fade push
//! (bookmark), the settings singleton via `pop_named_or_push`,
//! `remove_or_pop` (jump back past the library), `push_clearing_history`
//! (reset), and the home screen's double-press-to-exit back interceptor.

use log::warn;

use crate::core::nav::PushOptions;
use crate::core::screen::{Payload, Screen, ScreenKey};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

mod bookmark;
mod home;
mod library;
mod reader;
mod settings;

pub use bookmark::BookmarkScreen;
pub use home::{HOME_KEY, HomeScreen};
pub use library::{LIBRARY_KEY, LibraryScreen};
pub use reader::{READER_KEY, ReaderScreen};
pub use settings::{SETTINGS_KEY, SettingsScreen};

/// A screen the demo app can mount: core contract plus rendering plus
/// event handling.
pub trait AppScreen: Screen + Component {
    /// Handle an input event, optionally emitting a navigation request.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenRequest>;
}

/// Navigation intents screens hand back to the run loop.
pub enum ScreenRequest {
    Push {
        screen: Box<dyn AppScreen>,
        opts: PushOptions,
    },
    PushAndRemoveCurrent {
        screen: Box<dyn AppScreen>,
        args: Option<Payload>,
    },
    PushClearingHistory {
        screen: Box<dyn AppScreen>,
        args: Option<Payload>,
    },
    PopNamedOrPush {
        screen: Box<dyn AppScreen>,
        opts: PushOptions,
    },
    RemoveOrPop {
        key: ScreenKey,
    },
    Pop,
}

/// Resolve the configured start screen name. Unknown names fall back to home.
pub fn start_screen(name: &str) -> Box<dyn AppScreen> {
    match name {
        "home" => Box::new(HomeScreen::new()),
        "library" => Box::new(LibraryScreen::new()),
        "settings" => Box::new(SettingsScreen::new()),
        other => {
            warn!("Unknown start screen '{other}', falling back to home");
            Box::new(HomeScreen::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_screen_resolves_known_names() {
        assert_eq!(start_screen("home").key(), HOME_KEY);
        assert_eq!(start_screen("library").key(), LIBRARY_KEY);
        assert_eq!(start_screen("settings").key(), SETTINGS_KEY);
    }

    #[test]
    fn test_start_screen_falls_back_to_home() {
        assert_eq!(start_screen("garage").key(), HOME_KEY);
    }
}
