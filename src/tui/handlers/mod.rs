pub mod dropdown_handler;
pub mod focus_handler;
pub mod mouse_handler;
pub mod quit_handler;
pub mod text_input_handler;

pub use dropdown_handler::DropdownHandler;
pub use focus_handler::FocusHandler;
pub use mouse_handler::MouseHandler;
pub use quit_handler::QuitHandler;
pub use text_input_handler::TextInputHandler;

use crate::tui::input_handler::InputHandler;

/// Handlers in priority order; the first one that handles an event wins.
pub fn default_handlers() -> Vec<Box<dyn InputHandler + Send>> {
    vec![
        Box::new(QuitHandler::new()),
        Box::new(FocusHandler::new()),
        Box::new(MouseHandler::new()),
        Box::new(DropdownHandler::new()),
        Box::new(TextInputHandler::new()),
    ]
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
