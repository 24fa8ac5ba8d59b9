//! # Reader Screen
//!
//! Renders the payload it was pushed with. The chapter keys exercise the
//! navigator variants: `n` replaces the current reader via
//! `push_and_remove_current` (history does not grow per chapter), `m` pushes
//! a bookmark with a fade, `b` jumps back past the library.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::nav::PushOptions;
use crate::core::screen::{Payload, Screen, ScreenKey};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::screens::{
    AppScreen, BookmarkScreen, LIBRARY_KEY, ScreenRequest, SettingsScreen,
};

pub const READER_KEY: ScreenKey = ScreenKey::new("reader");

pub struct ReaderScreen {
    title: String,
    chapter: u64,
    opened_at: String,
}

impl ReaderScreen {
    pub fn new() -> Self {
        Self {
            title: String::from("untitled"),
            chapter: 1,
            opened_at: String::new(),
        }
    }

    fn chapter_args(&self, chapter: u64) -> Payload {
        Payload::new()
            .with("title", self.title.as_str())
            .with("chapter", chapter)
    }
}

impl Default for ReaderScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ReaderScreen {
    fn key(&self) -> ScreenKey {
        READER_KEY
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
        self.opened_at = Local::now().format("%H:%M:%S").to_string();
    }
}

impl Component for ReaderScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body_area, hint_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Chapter {}", self.chapter),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(
                "The words of the chapter would flow here; the demo only cares \
                 about how you arrived and how you leave.",
            ),
            Line::from(""),
            Line::from(Span::styled(
                format!("opened at {}", self.opened_at),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(format!(" {} ", self.title)));
        frame.render_widget(body, body_area);

        let hint = Span::styled(
            " n next chapter  m bookmark  b shelf-skip  s settings  Esc back ",
            Style::default().fg(Color::DarkGray),
        );
        frame.render_widget(hint, hint_area);
    }
}

impl AppScreen for ReaderScreen {
    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScreenRequest> {
        match event {
            // Chapter advance replaces this screen; backing out of chapter 5
            // should land on the library, not chapters 4, 3, 2...
            TuiEvent::InputChar('n') => Some(ScreenRequest::PushAndRemoveCurrent {
                screen: Box::new(ReaderScreen::new()),
                args: Some(self.chapter_args(self.chapter + 1)),
            }),
            TuiEvent::InputChar('m') => Some(ScreenRequest::Push {
                screen: Box::new(BookmarkScreen::new()),
                opts: PushOptions {
                    fade: true,
                    args: Some(self.chapter_args(self.chapter)),
                    ..PushOptions::default()
                },
            }),
            TuiEvent::InputChar('b') => Some(ScreenRequest::RemoveOrPop { key: LIBRARY_KEY }),
            TuiEvent::InputChar('s') => Some(ScreenRequest::PopNamedOrPush {
                screen: Box::new(SettingsScreen::new()),
                opts: PushOptions::default(),
            }),
            _ => None,
        }
    }
}
