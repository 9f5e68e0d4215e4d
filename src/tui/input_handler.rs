use crate::autocomplete::SuggestionController;
use crate::tui::app::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::layout::AppLayout;
use crossterm::event::{Event, KeyEventKind};

pub trait InputHandler {
    /// `NotHandled` passes the event on to the next handler in the chain.
    fn handle_event(
        &mut self,
        event: &Event,
        app: &mut AppState,
        controller: &mut SuggestionController,
        layout: &AppLayout,
    ) -> KeyHandlerResult;
}

/// Offers `event` to each handler in turn. Key releases are dropped.
pub fn dispatch_event(
    handlers: &mut [Box<dyn InputHandler + Send>],
    event: &Event,
    app: &mut AppState,
    controller: &mut SuggestionController,
    layout: &AppLayout,
) -> KeyHandlerResult {
    if matches!(event, Event::Key(key) if key.kind == KeyEventKind::Release) {
        return KeyHandlerResult::NotHandled;
    }

    for handler in handlers.iter_mut() {
        match handler.handle_event(event, app, controller, layout) {
            KeyHandlerResult::NotHandled => continue,
            result => return result,
        }
    }
    KeyHandlerResult::NotHandled
}
