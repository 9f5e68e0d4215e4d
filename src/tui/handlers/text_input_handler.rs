use crate::autocomplete::SuggestionController;
use crate::tui::app::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use crate::tui::layout::AppLayout;
use crossterm::event::{Event, KeyCode, KeyModifiers};

/// Line editing. Every edit that changes the text is forwarded as a new query.
pub struct TextInputHandler;

impl TextInputHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextInputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler for TextInputHandler {
    fn handle_event(
        &mut self,
        event: &Event,
        app: &mut AppState,
        controller: &mut SuggestionController,
        _layout: &AppLayout,
    ) -> KeyHandlerResult {
        let before = app.input.text().to_string();

        match event {
            Event::Paste(text) => app.input.insert_str(text),
            Event::Key(key_event) => {
                let control = key_event.modifiers.contains(KeyModifiers::CONTROL);
                match key_event.code {
                    KeyCode::Char('w') if control => {
                        app.input.delete_word_backward();
                    }
                    KeyCode::Char('u') if control => {
                        app.input.delete_to_start();
                    }
                    KeyCode::Char(ch)
                        if !control && !key_event.modifiers.contains(KeyModifiers::ALT) =>
                    {
                        app.input.insert_char(ch);
                    }
                    KeyCode::Backspace => {
                        app.input.delete_backward();
                    }
                    KeyCode::Delete => {
                        app.input.delete_forward();
                    }
                    KeyCode::Left => app.input.move_left(),
                    KeyCode::Right => app.input.move_right(),
                    KeyCode::Home => app.input.move_home(),
                    KeyCode::End => app.input.move_end(),
                    _ => return KeyHandlerResult::NotHandled,
                }
            }
            _ => return KeyHandlerResult::NotHandled,
        }

        if !app.focused {
            app.focused = true;
            controller.focus();
        }
        if app.input.text() != before {
            controller.set_query(app.input.text());
        }
        KeyHandlerResult::Handled
    }
}
