use crate::autocomplete::{KeyOutcome, NavKey, SuggestionController};
use crate::tui::app::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crate::tui::layout::AppLayout;
use crossterm::event::{Event, KeyCode, KeyModifiers};

/// Routes navigation keys to the controller while its key listener is attached.
pub struct DropdownHandler;

impl DropdownHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DropdownHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn nav_key(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Down => Some(NavKey::ArrowDown),
        KeyCode::Up => Some(NavKey::ArrowUp),
        KeyCode::Enter | KeyCode::Tab => Some(NavKey::Enter),
        KeyCode::Esc => Some(NavKey::Escape),
        _ => None,
    }
}

impl InputHandler for DropdownHandler {
    fn handle_event(
        &mut self,
        event: &Event,
        app: &mut AppState,
        controller: &mut SuggestionController,
        _layout: &AppLayout,
    ) -> KeyHandlerResult {
        if !controller.wants_keys() {
            return KeyHandlerResult::NotHandled;
        }

        let Event::Key(key_event) = event else {
            return KeyHandlerResult::NotHandled;
        };
        if key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return KeyHandlerResult::NotHandled;
        }
        let Some(key) = nav_key(key_event.code) else {
            return KeyHandlerResult::NotHandled;
        };

        match controller.handle_key(key) {
            KeyOutcome::Ignored => KeyHandlerResult::NotHandled,
            KeyOutcome::Handled => KeyHandlerResult::Handled,
            KeyOutcome::Accepted(suggestion) => {
                app.record_acceptance(suggestion);
                KeyHandlerResult::Handled
            }
        }
    }
}
