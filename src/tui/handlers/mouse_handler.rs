use crate::autocomplete::SuggestionController;
use crate::tui::app::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crate::tui::layout::AppLayout;
use crossterm::event::{Event, MouseButton, MouseEventKind};

/// Left clicks: a popup row accepts it, the input box focuses, anywhere else blurs.
pub struct MouseHandler;

impl MouseHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MouseHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler for MouseHandler {
    fn handle_event(
        &mut self,
        event: &Event,
        app: &mut AppState,
        controller: &mut SuggestionController,
        layout: &AppLayout,
    ) -> KeyHandlerResult {
        let Event::Mouse(mouse) = event else {
            return KeyHandlerResult::NotHandled;
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyHandlerResult::NotHandled;
        }

        if let Some(index) = layout.popup_row_at(mouse.column, mouse.row) {
            if let Some(suggestion) = controller.activate(index) {
                app.record_acceptance(suggestion);
            }
            app.focused = true;
            controller.focus();
        } else if layout.in_input(mouse.column, mouse.row) {
            app.focused = true;
            controller.focus();
        } else {
            app.focused = false;
            controller.blur();
        }
        KeyHandlerResult::Handled
    }
}
