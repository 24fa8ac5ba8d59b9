//! # Home Screen
//!
//! The default screen: a small menu plus the double-press-to-exit back
//! interceptor. The first Esc arms an exit hint (`Handled`), a second press
//! within the double-press window answers `Pop` — with an empty history that
//! becomes `Exit` in the navigator.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::nav::PushOptions;
use crate::core::screen::{BackDisposition, Screen, ScreenKey};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::screens::{AppScreen, LibraryScreen, ScreenRequest, SettingsScreen};

pub const HOME_KEY: ScreenKey = ScreenKey::new("home");

const MENU: &[(&str, &str)] = &[
    ("Library", "browse the shelf and open a book"),
    ("Settings", "toggles, plus the reset-to-fresh action"),
];

pub struct HomeScreen {
    cursor: usize,
    list_state: ListState,
    exit_armed: bool,
}

impl HomeScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            cursor: 0,
            list_state,
            exit_armed: false,
        }
    }

    fn select(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.list_state.select(Some(cursor));
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for HomeScreen {
    fn key(&self) -> ScreenKey {
        HOME_KEY
    }

    fn on_resume(&mut self) {
        self.exit_armed = false;
    }

    fn on_back(&mut self, double_press: bool) -> BackDisposition {
        if double_press {
            BackDisposition::Pop
        } else {
            self.exit_armed = true;
            BackDisposition::Handled
        }
    }
}

impl Component for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let items: Vec<ListItem> = MENU
            .iter()
            .map(|(label, detail)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{label:<10}"), Style::default().fg(Color::White)),
                    Span::styled(*detail, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title(" Home "))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        let hint = if self.exit_armed {
            Span::styled(
                " press Esc again to exit ",
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::styled(
                " ↑/↓ select  Enter open  Esc exit ",
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(hint, hint_area);
    }
}

impl AppScreen for HomeScreen {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenRequest> {
        match event {
            TuiEvent::CursorUp => {
                self.select(self.cursor.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select((self.cursor + 1).min(MENU.len() - 1));
                None
            }
            TuiEvent::Submit => match self.cursor {
                0 => Some(ScreenRequest::Push {
                    screen: Box::new(LibraryScreen::new()),
                    opts: PushOptions::default(),
                }),
                _ => Some(ScreenRequest::PopNamedOrPush {
                    screen: Box::new(SettingsScreen::new()),
                    opts: PushOptions::default(),
                }),
            },
            _ => None,
        }
    }
}
