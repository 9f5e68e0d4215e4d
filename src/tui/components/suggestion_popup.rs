use crate::tui::app::AppState;
use crate::tui::layout::AppLayout;
use ratatui::text::{Line, Span};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

/// Dropdown of ranked suggestions under the input box.
pub struct SuggestionPopupWidget<'a> {
    app_state: &'a AppState,
    layout: &'a AppLayout,
}

impl<'a> SuggestionPopupWidget<'a> {
    pub fn new(app_state: &'a AppState, layout: &'a AppLayout) -> Self {
        Self { app_state, layout }
    }
}

impl<'a> Widget for SuggestionPopupWidget<'a> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let Some(popup_area) = self.layout.popup else {
            return;
        };
        let view = &self.app_state.view;

        let rows = popup_area.height.saturating_sub(2) as usize;
        let offset = self.layout.popup_offset;
        let end_idx = (offset + rows).min(view.suggestions.len());

        let items: Vec<ListItem> = view.suggestions[offset..end_idx]
            .iter()
            .enumerate()
            .map(|(idx, suggestion)| {
                let is_selected = view.selected_index == Some(offset + idx);
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                let prefix = if is_selected { "> " } else { "  " };
                let mut spans = vec![Span::raw(format!("{}{}", prefix, suggestion.text))];
                if let Some(category) = &suggestion.category {
                    spans.push(Span::styled(
                        format!(" [{}]", category),
                        Style::default().add_modifier(Modifier::DIM),
                    ));
                }
                ListItem::new(Line::from(spans)).style(style)
            })
            .collect();

        let current_selection = view.selected_index.map_or(0, |i| i + 1);
        let title = Span::styled(
            format!(
                " Suggestions ( {} / {} ) ",
                current_selection,
                view.suggestions.len()
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        List::new(items).block(block).render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::Suggestion;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn renders_rows_in_server_order_with_selection_marker() {
        let mut app = AppState::new("mock", None);
        app.view.suggestions = vec![
            Suggestion::new(1, "apple").with_category("english"),
            Suggestion::new(2, "app"),
        ];
        app.view.selected_index = Some(1);
        let area = Rect::new(0, 0, 40, 12);
        let layout = AppLayout::compute(area, &app);
        let mut buf = Buffer::empty(area);

        SuggestionPopupWidget::new(&app, &layout).render(area, &mut buf);

        let popup = layout.popup.unwrap();
        assert!(row_text(&buf, popup.y).contains("( 2 / 2 )"));
        assert!(row_text(&buf, popup.y + 1).contains("  apple [english]"));
        assert!(row_text(&buf, popup.y + 2).contains("> app"));
    }

    #[test]
    fn renders_nothing_without_popup() {
        let app = AppState::new("mock", None);
        let area = Rect::new(0, 0, 40, 12);
        let layout = AppLayout::compute(area, &app);
        let mut buf = Buffer::empty(area);

        SuggestionPopupWidget::new(&app, &layout).render(area, &mut buf);

        assert_eq!(buf, Buffer::empty(area));
    }
}
