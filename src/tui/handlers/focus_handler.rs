use crate::autocomplete::SuggestionController;
use crate::tui::app::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crate::tui::layout::AppLayout;
use crossterm::event::Event;

/// Terminal focus changes stand in for the input losing and regaining focus.
pub struct FocusHandler;

impl FocusHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FocusHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler for FocusHandler {
    fn handle_event(
        &mut self,
        event: &Event,
        app: &mut AppState,
        controller: &mut SuggestionController,
        _layout: &AppLayout,
    ) -> KeyHandlerResult {
        match event {
            Event::FocusLost => {
                app.focused = false;
                controller.blur();
                KeyHandlerResult::Handled
            }
            Event::FocusGained => {
                app.focused = true;
                controller.focus();
                KeyHandlerResult::Handled
            }
            _ => KeyHandlerResult::NotHandled,
        }
    }
}
