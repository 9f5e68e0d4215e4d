use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::tui::app::AppState;

/// A full-width strip of the screen drawn straight from the app state.
pub trait Component {
    /// Rows the strip wants; the layout shrinks it on small terminals.
    fn height(&self) -> u16;

    fn render(&self, app: &AppState, area: Rect, buf: &mut Buffer);
}
