use crate::tui::app::AppState;
use crate::tui::component::Component;
use crate::tui::layout::PROMPT;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct Input;

impl Component for Input {
    fn height(&self) -> u16 {
        3
    }

    fn render(&self, state: &AppState, area: Rect, buf: &mut Buffer) {
        let border_color = if state.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search ");

        let inner_area = input_block.inner(area);
        input_block.render(area, buf);

        let horizontal = Layout::horizontal([
            Constraint::Length(PROMPT.len() as u16),
            Constraint::Min(1),
        ]);
        let [prompt_area, text_area] = horizontal.areas(inner_area);

        Paragraph::new(PROMPT).render(prompt_area, buf);

        if state.input.is_empty() {
            Paragraph::new(Span::styled(
                "start typing...",
                Style::default().fg(Color::DarkGray),
            ))
            .render(text_area, buf);
        } else {
            Paragraph::new(state.input.text()).render(text_area, buf);
        }
    }
}
