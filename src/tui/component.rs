use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable UI unit.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can update internal presentation
/// state (cursor positions, list offsets) during the render pass. This
/// aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
