use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::nav::Navigator;
use crate::tui::screens::AppScreen;
use crate::tui::transition::TransitionAnim;

/// Draw the chrome and the current screen: a one-line title bar, the
/// container area (offset/dimmed while a transition animates), and a
/// one-line history readout.
pub fn draw_ui(
    frame: &mut Frame,
    nav: &mut Navigator<Box<dyn AppScreen>>,
    status: &str,
    anim: Option<&TransitionAnim>,
    now: Instant,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, history_area] = layout.areas(frame.area());

    // Title bar
    let screen_name = nav
        .current()
        .map(|screen| screen.key().to_string())
        .unwrap_or_default();
    let title_text = if status.is_empty() {
        format!("Backstack ({screen_name})")
    } else {
        format!("Backstack ({screen_name}) | {status}")
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // Container area — the animation decides where the screen lands
    let target = anim
        .map(|active| active.area_for(main_area, now))
        .unwrap_or(main_area);
    if let Some(screen) = nav.current_mut() {
        screen.render(frame, target);
    }
    if let Some(active) = anim
        && active.dims(now)
    {
        let buffer = frame.buffer_mut();
        for y in main_area.top()..main_area.bottom() {
            for x in main_area.left()..main_area.right() {
                buffer[Position::new(x, y)].modifier |= Modifier::DIM;
            }
        }
    }

    // History bar
    let (count, names) = nav.back_stack();
    frame.render_widget(
        Span::styled(
            format_history(count, &names),
            Style::default().fg(Color::DarkGray),
        ),
        history_area,
    );
}

/// Bottom-to-top breadcrumb of the history entries.
fn format_history(count: usize, names: &[String]) -> String {
    if names.is_empty() {
        " history: (empty) ".to_string()
    } else {
        format!(" history: {} ({count}) ", names.join(" › "))
    }
}
