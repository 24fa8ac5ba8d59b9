//! # Library Screen
//!
//! A shelf of titles. Opening one pushes the reader with a payload carrying
//! the title; `s` jumps to the settings singleton from here.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::nav::PushOptions;
use crate::core::screen::{Payload, Screen, ScreenKey};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::screens::{AppScreen, ReaderScreen, ScreenRequest, SettingsScreen};

pub const LIBRARY_KEY: ScreenKey = ScreenKey::new("library");

const SHELF: &[&str] = &[
    "The Left Hand of Darkness",
    "A Wizard of Earthsea",
    "The Dispossessed",
    "The Lathe of Heaven",
    "Always Coming Home",
];

pub struct LibraryScreen {
    cursor: usize,
    list_state: ListState,
}

impl LibraryScreen {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            cursor: 0,
            list_state,
        }
    }

    fn select(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.list_state.select(Some(cursor));
    }
}

impl Default for LibraryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LibraryScreen {
    fn key(&self) -> ScreenKey {
        LIBRARY_KEY
    }
}

impl Component for LibraryScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let items: Vec<ListItem> = SHELF.iter().map(|title| ListItem::new(*title)).collect();
        let list = List::new(items)
            .block(Block::bordered().title(" Library "))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        let hint = ratatui::text::Span::styled(
            " Enter open  s settings  Esc back ",
            Style::default().fg(Color::DarkGray),
        );
        frame.render_widget(hint, hint_area);
    }
}

impl AppScreen for LibraryScreen {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenRequest> {
        match event {
            TuiEvent::CursorUp => {
                self.select(self.cursor.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select((self.cursor + 1).min(SHELF.len() - 1));
                None
            }
            TuiEvent::Submit => {
                let args = Payload::new()
                    .with("title", SHELF[self.cursor])
                    .with("chapter", 1u64);
                Some(ScreenRequest::Push {
                    screen: Box::new(ReaderScreen::new()),
                    opts: PushOptions::with_args(args),
                })
            }
            TuiEvent::InputChar('s') => Some(ScreenRequest::PopNamedOrPush {
                screen: Box::new(SettingsScreen::new()),
                opts: PushOptions::default(),
            }),
            _ => None,
        }
    }
}
