//! # Settings Screen
//!
//! The singleton screen: reached from anywhere via `pop_named_or_push`, so
//! there is never more than one of it in the live stack. Also hosts the
//! `push_clearing_history` reset action.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::screen::{Screen, ScreenKey};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::screens::{AppScreen, HomeScreen, ScreenRequest};

pub const SETTINGS_KEY: ScreenKey = ScreenKey::new("settings");

pub struct SettingsScreen {
    cursor: usize,
    list_state: ListState,
    toggles: Vec<(&'static str, bool)>,
}

impl SettingsScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            cursor: 0,
            list_state,
            toggles: vec![
                ("Show chapter timestamps", true),
                ("Wrap long lines", true),
                ("Dim inactive hints", false),
            ],
        }
    }

    fn select(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.list_state.select(Some(cursor));
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SettingsScreen {
    fn key(&self) -> ScreenKey {
        SETTINGS_KEY
    }
}

impl Component for SettingsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let items: Vec<ListItem> = self
            .toggles
            .iter()
            .map(|(label, enabled)| {
                let mark = if *enabled { "[x]" } else { "[ ]" };
                ListItem::new(format!("{mark} {label}"))
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title(" Settings "))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        let hint = ratatui::text::Span::styled(
            " Enter toggle  r reset session  Esc back ",
            Style::default().fg(Color::DarkGray),
        );
        frame.render_widget(hint, hint_area);
    }
}

impl AppScreen for SettingsScreen {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenRequest> {
        match event {
            TuiEvent::CursorUp => {
                self.select(self.cursor.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select((self.cursor + 1).min(self.toggles.len() - 1));
                None
            }
            TuiEvent::Submit => {
                if let Some(toggle) = self.toggles.get_mut(self.cursor) {
                    toggle.1 = !toggle.1;
                }
                None
            }
            // Tear the whole session down to a fresh home.
            TuiEvent::InputChar('r') => Some(ScreenRequest::PushClearingHistory {
                screen: Box::new(HomeScreen::new()),
                args: None,
            }),
            _ => None,
        }
    }
}
