use crate::autocomplete::SuggestionController;
use crate::tui::app::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crate::tui::layout::AppLayout;
use crossterm::event::{Event, KeyCode, KeyModifiers};

/// Ctrl+C clears a non-empty input first and quits on an empty one.
pub struct QuitHandler;

impl QuitHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuitHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler for QuitHandler {
    fn handle_event(
        &mut self,
        event: &Event,
        app: &mut AppState,
        controller: &mut SuggestionController,
        _layout: &AppLayout,
    ) -> KeyHandlerResult {
        let Event::Key(key) = event else {
            return KeyHandlerResult::NotHandled;
        };

        if !(key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)) {
            return KeyHandlerResult::NotHandled;
        }

        if !app.input.is_empty() {
            app.input.clear();
            controller.set_query("");
            KeyHandlerResult::Handled
        } else {
            app.should_quit = true;
            KeyHandlerResult::ShouldQuit
        }
    }
}
