use crate::tui::app::AppState;
use crate::tui::component::Component;
use crate::tui::components::{Input, StatusLines};
use crate::tui::header::Header;
use ratatui::layout::{Position, Rect};

pub const PROMPT: &str = "> ";
const MIN_POPUP_WIDTH: u16 = 32;
const MAX_POPUP_WIDTH: u16 = 64;

/// Screen regions of one frame. Computed once per render and reused for
/// mouse hit-testing so clicks resolve against what is actually on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub input: Rect,
    pub popup: Option<Rect>,
    pub status: Rect,
    /// Index of the first suggestion shown in the popup.
    pub popup_offset: usize,
}

impl AppLayout {
    pub fn compute(area: Rect, app: &AppState) -> Self {
        let header = Rect {
            height: Header.height().min(area.height),
            ..area
        };
        let input = Rect {
            y: header.bottom(),
            height: Input.height().min(area.bottom().saturating_sub(header.bottom())),
            ..area
        };
        let status_height = StatusLines.height().min(area.bottom().saturating_sub(input.bottom()));
        let status = Rect {
            y: area.bottom() - status_height,
            height: status_height,
            ..area
        };

        let mut layout = Self {
            header,
            input,
            popup: None,
            status,
            popup_offset: 0,
        };

        let suggestions = &app.view.suggestions;
        let available = status.y.saturating_sub(input.bottom());
        if suggestions.is_empty() || available < 3 {
            return layout;
        }

        let height = (suggestions.len() as u16 + 2).min(available);
        let longest = suggestions
            .iter()
            .map(|s| s.text.chars().count() + s.category.as_deref().map_or(0, |c| c.len() + 3))
            .max()
            .unwrap_or(0) as u16;
        let width = (longest + 6)
            .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH)
            .min(area.width);

        let rows = (height - 2) as usize;
        layout.popup_offset = app
            .view
            .selected_index
            .map_or(0, |selected| (selected + 1).saturating_sub(rows));
        layout.popup = Some(Rect {
            x: input.x,
            y: input.bottom(),
            width,
            height,
        });
        layout
    }

    /// Where the first input character is drawn.
    pub fn text_origin(&self) -> Position {
        Position {
            x: self.input.x + 1 + PROMPT.len() as u16,
            y: self.input.y + 1,
        }
    }

    pub fn in_input(&self, column: u16, row: u16) -> bool {
        self.input.contains(Position { x: column, y: row })
    }

    /// Suggestion index under a click, if it hit a popup row.
    pub fn popup_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let popup = self.popup?;
        let inner = Rect {
            x: popup.x + 1,
            y: popup.y + 1,
            width: popup.width.saturating_sub(2),
            height: popup.height.saturating_sub(2),
        };
        if !inner.contains(Position { x: column, y: row }) {
            return None;
        }
        Some(self.popup_offset + (row - inner.y) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::Suggestion;

    fn app_with(n: usize) -> AppState {
        let mut app = AppState::new("mock", None);
        app.view.suggestions = (0..n)
            .map(|i| Suggestion::new(i as i64 + 1, format!("word{}", i)))
            .collect();
        app
    }

    #[test]
    fn popup_hidden_without_suggestions() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), &app_with(0));

        assert!(layout.popup.is_none());
        assert_eq!(layout.input, Rect::new(0, 1, 80, 3));
        assert_eq!(layout.status, Rect::new(0, 22, 80, 2));
    }

    #[test]
    fn popup_sits_below_input() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), &app_with(3));

        assert_eq!(layout.popup, Some(Rect::new(0, 4, 32, 5)));
    }

    #[test]
    fn click_maps_to_row_index() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), &app_with(3));

        assert_eq!(layout.popup_row_at(3, 5), Some(0));
        assert_eq!(layout.popup_row_at(3, 7), Some(2));
        assert_eq!(layout.popup_row_at(3, 4), None);
        assert_eq!(layout.popup_row_at(50, 5), None);
    }

    #[test]
    fn short_screen_scrolls_to_selection() {
        let mut app = app_with(10);
        app.view.selected_index = Some(8);

        let layout = AppLayout::compute(Rect::new(0, 0, 80, 12), &app);

        let popup = layout.popup.unwrap();
        assert_eq!(popup.height, 6);
        assert_eq!(layout.popup_offset, 5);
        assert_eq!(layout.popup_row_at(1, popup.y + 4), Some(8));
    }

    #[test]
    fn text_origin_skips_border_and_prompt() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), &app_with(0));

        assert_eq!(layout.text_origin(), Position { x: 3, y: 2 });
    }
}
