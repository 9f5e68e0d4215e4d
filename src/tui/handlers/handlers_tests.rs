use super::*;
use crate::autocomplete::{ControllerOptions, SuggestionController};
use crate::backends::MockBackend;
use crate::suggestion::Suggestion;
use crate::tui::app::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::dispatch_event;
use crate::tui::layout::AppLayout;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::sync::Arc;

struct Harness {
    app: AppState,
    controller: SuggestionController,
    handlers: Vec<Box<dyn InputHandler + Send>>,
    backend: Arc<MockBackend>,
}

impl Harness {
    fn new() -> Self {
        let backend = Arc::new(MockBackend::with_suggestions(vec![
            Suggestion::new(1, "apple").with_frequency(9),
            Suggestion::new(2, "apricot").with_frequency(4),
            Suggestion::new(3, "banana").with_frequency(2),
        ]));
        let (controller, _failures) =
            SuggestionController::new(backend.clone(), ControllerOptions::default());
        Self {
            app: AppState::new("mock", None),
            controller,
            handlers: default_handlers(),
            backend,
        }
    }

    fn layout(&self) -> AppLayout {
        AppLayout::compute(Rect::new(0, 0, 80, 24), &self.app)
    }

    fn send(&mut self, event: Event) -> KeyHandlerResult {
        let layout = self.layout();
        let result = dispatch_event(
            &mut self.handlers,
            &event,
            &mut self.app,
            &mut self.controller,
            &layout,
        );
        self.app.sync(&self.controller);
        result
    }

    fn key(&mut self, code: KeyCode) -> KeyHandlerResult {
        self.send(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(&mut self, ch: char) -> KeyHandlerResult {
        self.send(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.key(KeyCode::Char(ch));
        }
    }

    fn click(&mut self, column: u16, row: u16) -> KeyHandlerResult {
        self.send(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    async fn settle(&mut self) {
        self.controller.step().await;
        self.controller.step().await;
        self.app.sync(&self.controller);
    }
}

#[tokio::test(start_paused = true)]
async fn typing_forwards_query_to_controller() {
    let mut h = Harness::new();

    h.type_text("ap");
    assert_eq!(h.controller.state().query, "ap");
    assert!(h.controller.is_debouncing());

    h.settle().await;
    assert_eq!(h.app.view.suggestions.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn cursor_moves_do_not_restart_lookup() {
    let mut h = Harness::new();
    h.type_text("ap");
    let generation = h.controller.generation();

    h.key(KeyCode::Left);
    h.key(KeyCode::Home);

    assert_eq!(h.controller.generation(), generation);
}

#[tokio::test(start_paused = true)]
async fn arrows_navigate_only_while_dropdown_is_open() {
    let mut h = Harness::new();
    h.type_text("ap");

    assert_eq!(h.key(KeyCode::Down), KeyHandlerResult::NotHandled);

    h.settle().await;
    assert_eq!(h.key(KeyCode::Down), KeyHandlerResult::Handled);
    assert_eq!(h.app.view.selected_index, Some(0));
}

#[tokio::test(start_paused = true)]
async fn enter_accepts_into_input_and_reports() {
    let mut h = Harness::new();
    h.type_text("ap");
    h.settle().await;

    h.key(KeyCode::Down);
    h.key(KeyCode::Down);
    h.key(KeyCode::Enter);

    assert_eq!(h.app.input.text(), "apricot");
    assert!(h.app.view.suggestions.is_empty());
    assert_eq!(h.app.last_accepted.as_ref().map(|s| s.id), Some(2));

    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert_eq!(h.backend.get(2).await.unwrap().frequency, 5);
}

#[tokio::test(start_paused = true)]
async fn escape_closes_dropdown_and_keeps_text() {
    let mut h = Harness::new();
    h.type_text("ap");
    h.settle().await;

    h.key(KeyCode::Esc);

    assert_eq!(h.app.input.text(), "ap");
    assert!(h.app.view.suggestions.is_empty());
    assert!(!h.controller.wants_keys());
}

#[tokio::test(start_paused = true)]
async fn clicking_a_row_accepts_it() {
    let mut h = Harness::new();
    h.type_text("ap");
    h.settle().await;
    let popup = h.layout().popup.unwrap();

    h.click(popup.x + 2, popup.y + 2);

    assert_eq!(h.app.input.text(), "apricot");
    assert!(h.app.view.suggestions.is_empty());
}

#[tokio::test(start_paused = true)]
async fn clicking_outside_blurs_then_clears() {
    let mut h = Harness::new();
    h.type_text("ap");
    h.settle().await;

    h.click(70, 15);
    assert!(!h.app.focused);
    assert!(h.app.view.is_visible());

    h.controller.step().await;
    h.app.sync(&h.controller);
    assert!(h.app.view.suggestions.is_empty());
    assert_eq!(h.app.input.text(), "ap");
}

#[tokio::test(start_paused = true)]
async fn focus_regained_keeps_dropdown() {
    let mut h = Harness::new();
    h.type_text("ap");
    h.settle().await;

    h.send(Event::FocusLost);
    h.send(Event::FocusGained);

    let quiet =
        tokio::time::timeout(std::time::Duration::from_secs(1), h.controller.step()).await;
    assert!(quiet.is_err());
    assert!(h.controller.state().is_visible());
}

#[tokio::test(start_paused = true)]
async fn ctrl_c_clears_then_quits() {
    let mut h = Harness::new();
    h.type_text("ap");

    assert_eq!(h.ctrl('c'), KeyHandlerResult::Handled);
    assert!(h.app.input.is_empty());
    assert!(!h.controller.is_debouncing());

    assert_eq!(h.ctrl('c'), KeyHandlerResult::ShouldQuit);
    assert!(h.app.should_quit);
}

#[tokio::test(start_paused = true)]
async fn key_release_is_ignored() {
    let mut h = Harness::new();

    let result = h.send(Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    )));

    assert_eq!(result, KeyHandlerResult::NotHandled);
    assert!(h.app.input.is_empty());
}

#[tokio::test(start_paused = true)]
async fn paste_becomes_query() {
    let mut h = Harness::new();

    h.send(Event::Paste("ban\nana".to_string()));

    assert_eq!(h.app.input.text(), "banana");
    assert_eq!(h.controller.state().query, "banana");
}
