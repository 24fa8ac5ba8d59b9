//! # Bookmark Screen
//!
//! Small confirmation screen pushed from the reader with a fade. Leaves via
//! a normal pop (Enter or the default back handling).

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::screen::{Payload, Screen, ScreenKey};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::screens::{AppScreen, ScreenRequest};

pub const BOOKMARK_KEY: ScreenKey = ScreenKey::new("bookmark");

pub struct BookmarkScreen {
    title: String,
    chapter: u64,
    saved_at: String,
}

impl BookmarkScreen {
    pub fn new() -> Self {
        Self {
            title: String::from("untitled"),
            chapter: 1,
            saved_at: String::new(),
        }
    }
}

impl Default for BookmarkScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for BookmarkScreen {
    fn key(&self) -> ScreenKey {
        BOOKMARK_KEY
    }

    fn on_attach(&mut self, args: Option<&Payload>) {
        if let Some(args) = args {
            if let Some(title) = args.get_str("title") {
                self.title = title.to_string();
            }
            if let Some(chapter) = args.get_u64("chapter") {
                self.chapter = chapter;
            }
        }
        self.saved_at = Local::now().format("%H:%M:%S").to_string();
    }
}

impl Component for BookmarkScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(format!(
                "Bookmarked \"{}\" at chapter {}.",
                self.title, self.chapter
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("saved {}", self.saved_at),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter or Esc to return to the reader.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::bordered().title(" Bookmark "));
        frame.render_widget(body, area);
    }
}

impl AppScreen for BookmarkScreen {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenRequest> {
        match event {
            TuiEvent::Submit => Some(ScreenRequest::Pop),
            _ => None,
        }
    }
}
