//! Backstack library exports: guarded screen-stack navigation for terminal
//! UIs, plus the demo TUI that exercises it.

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which demo screen the app boots into.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum StartScreen {
    #[default]
    Home,
    Library,
    Settings,
}

impl StartScreen {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartScreen::Home => "home",
            StartScreen::Library => "library",
            StartScreen::Settings => "settings",
        }
    }
}
