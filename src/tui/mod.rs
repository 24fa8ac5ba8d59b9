//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! screen inside the chrome, and translates keyboard events into navigator
//! calls. This is the only module that knows about ratatui and crossterm.
//!
//! ## Event → Navigation Flow
//!
//! ```text
//! crossterm event ─► TuiEvent ─► current screen ─► ScreenRequest
//!                        │                              │
//!                      (Esc)                       apply_request
//!                        ▼                              ▼
//!                nav.back_pressed()              Navigator op → Outcome
//! ```
//!
//! The navigator owns the screens, so screens cannot call it directly —
//! they emit `ScreenRequest` values the loop applies. Rejected outcomes are
//! surfaced in the title bar's status slot instead of being dropped
//! silently.
//!
//! ## Redraw Strategy
//!
//! The loop uses conditional redraw: while a transition animates it polls at
//! ~12 fps; idle it sleeps up to 500 ms and only redraws on events. When an
//! animation completes, its gate token is reported back to the navigator so
//! the transition lock releases.

pub mod component;
pub mod event;
pub mod screens;
mod transition;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::core::config::ResolvedConfig;
use crate::core::nav::{ContainerId, Navigator, Outcome, Rejection};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::{AppScreen, ScreenRequest};
use crate::tui::transition::TransitionAnim;

/// The demo mounts everything into a single full-frame container.
const MAIN_CONTAINER: ContainerId = ContainerId(1);

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut terminal = ratatui::init();
    info!("TUI starting with {config:?}");

    let mut nav: Navigator<Box<dyn AppScreen>> =
        Navigator::with_windows(config.lock_window, config.double_press_window);
    nav.set_default(MAIN_CONTAINER, screens::start_screen(&config.start_screen));

    let mut status = String::new();
    let mut anim: Option<TransitionAnim> = None;
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();

        // Pick up any transition committed since the last frame.
        if let Some(pending) = nav.take_transition() {
            anim = TransitionAnim::start(pending, now, nav.lock_window(), config.animations);
            needs_redraw = true;
        }

        // Retire a finished animation and release its gate token.
        if let Some(active) = anim.take() {
            if active.is_done(now) {
                if let Some(token) = active.token() {
                    nav.transition_finished(token);
                }
            } else {
                anim = Some(active);
            }
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &mut nav, &status, anim.as_ref(), now))?;
            needs_redraw = false;
        }

        // Short poll while animating (~12fps), long poll when idle.
        let timeout = if anim.is_some() {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => continue,

                // Ctrl+C always quits regardless of what screens want
                TuiEvent::ForceQuit => {
                    should_quit = true;
                }

                TuiEvent::Back => match nav.back_pressed() {
                    Outcome::Exit => should_quit = true,
                    Outcome::Applied => status.clear(),
                    Outcome::Rejected(rejection) => {
                        status = rejection_status(rejection).to_string();
                    }
                },

                other => {
                    let request = nav
                        .current_mut()
                        .and_then(|screen| screen.handle_event(&other));
                    if let Some(request) = request {
                        match apply_request(&mut nav, request) {
                            Outcome::Exit => should_quit = true,
                            Outcome::Applied => status.clear(),
                            Outcome::Rejected(rejection) => {
                                debug!("screen request rejected: {rejection:?}");
                                status = rejection_status(rejection).to_string();
                            }
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    info!("TUI shutting down");
    ratatui::restore();
    Ok(())
}

/// Apply a screen's navigation intent to the navigator.
fn apply_request(nav: &mut Navigator<Box<dyn AppScreen>>, request: ScreenRequest) -> Outcome {
    match request {
        ScreenRequest::Push { screen, opts } => nav.push(screen, opts),
        ScreenRequest::PushAndRemoveCurrent { screen, args } => {
            nav.push_and_remove_current(screen, args)
        }
        ScreenRequest::PushClearingHistory { screen, args } => {
            nav.push_clearing_history(screen, args)
        }
        ScreenRequest::PopNamedOrPush { screen, opts } => nav.pop_named_or_push(screen, opts),
        ScreenRequest::RemoveOrPop { key } => nav.remove_or_pop(&key),
        ScreenRequest::Pop => nav.pop(),
    }
}

fn rejection_status(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::NoContainer => "navigation: no container set",
        Rejection::TransitionInFlight => "navigation busy — hold on",
        Rejection::SameScreen => "already showing that screen",
    }
}
