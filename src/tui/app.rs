use crate::autocomplete::{ControllerState, ReportFailure, SuggestionController};
use crate::suggestion::Suggestion;
use crate::tui::input_line::InputLine;

/// Presentation-side state. The controller owns the autocomplete data; `view`
/// is a copy taken after every change so rendering never touches the controller.
pub struct AppState {
    pub input: InputLine,
    pub view: ControllerState,
    pub focused: bool,
    pub last_accepted: Option<Suggestion>,
    pub report_failure: Option<ReportFailure>,
    pub backend_name: &'static str,
    pub category: Option<String>,
    /// Service location shown in the header, when there is one.
    pub endpoint: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(backend_name: &'static str, category: Option<String>) -> Self {
        Self {
            input: InputLine::new(),
            view: ControllerState::default(),
            focused: true,
            last_accepted: None,
            report_failure: None,
            backend_name,
            category,
            endpoint: None,
            should_quit: false,
        }
    }

    pub fn sync(&mut self, controller: &SuggestionController) {
        if self.view != *controller.state() {
            self.view = controller.state().clone();
        }
    }

    /// Mirrors an acceptance into the input line.
    pub fn record_acceptance(&mut self, suggestion: Suggestion) {
        self.input.set_text(&suggestion.text);
        self.report_failure = None;
        self.last_accepted = Some(suggestion);
    }
}
