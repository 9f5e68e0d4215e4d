use crate::autocomplete::Phase;
use crate::tui::app::AppState;
use crate::tui::component::Component;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Two lines: the lookup status, then the acceptance/report line.
pub struct StatusLines;

impl StatusLines {
    pub fn lookup_line(state: &AppState) -> Line<'static> {
        let view = &state.view;
        match view.phase() {
            Phase::Pending => Line::from(Span::styled(
                "Searching...",
                Style::default().fg(Color::Yellow),
            )),
            Phase::Failed => Line::from(Span::styled(
                format!(
                    "Lookup failed: {}",
                    view.error.as_deref().unwrap_or_default()
                ),
                Style::default().fg(Color::Red),
            )),
            Phase::Populated => Line::from(Span::styled(
                format!(
                    "{} suggestion(s)  ↑/↓ move  Enter accept  Esc dismiss",
                    view.suggestions.len()
                ),
                Style::default().fg(Color::DarkGray),
            )),
            Phase::Idle => Line::from(Span::styled(
                "Ctrl+C to quit",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }

    pub fn report_line(state: &AppState) -> Line<'static> {
        if let Some(failure) = &state.report_failure {
            return Line::from(Span::styled(
                format!(
                    "Could not record selection #{}: {}",
                    failure.suggestion_id, failure.message
                ),
                Style::default().fg(Color::Yellow),
            ));
        }

        let mut spans = vec![Span::styled(
            format!("{} backend", state.backend_name),
            Style::default().fg(Color::DarkGray),
        )];
        if let Some(category) = &state.category {
            spans.push(Span::styled(
                format!("  category: {}", category),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(accepted) = &state.last_accepted {
            spans.push(Span::styled(
                format!("  accepted '{}'", accepted.text),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }
}

impl Component for StatusLines {
    fn height(&self) -> u16 {
        2
    }

    fn render(&self, state: &AppState, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![Self::lookup_line(state), Self::report_line(state)]).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::ReportFailure;
    use crate::suggestion::Suggestion;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn lookup_error_and_report_failure_are_separate() {
        let mut app = AppState::new("http", Some("english".to_string()));
        app.view.error = Some("HTTP error! status: 500".to_string());
        app.report_failure = Some(ReportFailure {
            suggestion_id: 2,
            message: "HTTP error! status: 503".to_string(),
        });

        assert_eq!(
            text(&StatusLines::lookup_line(&app)),
            "Lookup failed: HTTP error! status: 500"
        );
        assert_eq!(
            text(&StatusLines::report_line(&app)),
            "Could not record selection #2: HTTP error! status: 503"
        );
    }

    #[test]
    fn report_line_shows_last_acceptance() {
        let mut app = AppState::new("mock", None);
        app.record_acceptance(Suggestion::new(1, "apple"));

        assert_eq!(
            text(&StatusLines::report_line(&app)),
            "mock backend  accepted 'apple'"
        );
        assert_eq!(app.input.text(), "apple");
    }
}
