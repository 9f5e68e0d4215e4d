use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::app::AppState;
use crate::tui::component::Component;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn create_header_line(backend_name: &str, base_url: Option<&str>) -> Line<'static> {
    let logo_color = Color::Rgb(142, 240, 204);
    let info_color = Color::Rgb(150, 150, 150);

    let mut spans = vec![
        Span::styled("typeahead", Style::default().fg(logo_color)),
        Span::styled(format!(" v{}", VERSION), Style::default().fg(info_color)),
        Span::styled(format!("  {}", backend_name), Style::default().fg(info_color)),
    ];
    if let Some(url) = base_url {
        spans.push(Span::styled(format!(" {}", url), Style::default().fg(info_color)));
    }
    Line::from(spans)
}

pub struct Header;

impl Component for Header {
    fn height(&self) -> u16 {
        1
    }

    fn render(&self, app: &AppState, area: Rect, buf: &mut Buffer) {
        Paragraph::new(create_header_line(app.backend_name, app.endpoint.as_deref()))
            .render(area, buf);
    }
}
