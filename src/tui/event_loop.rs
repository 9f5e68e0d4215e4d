use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::layout::Position;
use ratatui::widgets::Widget;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::autocomplete::{ReportFailure, SuggestionController};
use crate::console::console;
use crate::tui::app::AppState;
use crate::tui::component::Component;
use crate::tui::components::{Input, StatusLines, SuggestionPopupWidget};
use crate::tui::header::Header;
use crate::tui::input_handler::{InputHandler, dispatch_event};
use crate::tui::layout::AppLayout;
use crate::tui::terminal::TypeaheadTerminal;

pub struct EventLoopContext {
    pub controller: SuggestionController,
    pub failures: mpsc::UnboundedReceiver<ReportFailure>,
    pub input_handlers: Vec<Box<dyn InputHandler + Send>>,
}

/// Drives terminal input, controller timers and fetch results from one task.
pub async fn run_event_loop(
    terminal: &mut TypeaheadTerminal,
    app: &mut AppState,
    mut context: EventLoopContext,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut render_interval = interval(Duration::from_millis(50));
    let mut layout = render_frame(app, terminal)?;

    loop {
        tokio::select! {
            _ = render_interval.tick() => {
                layout = render_frame(app, terminal)?;
            }
            signal = context.controller.next_signal() => {
                context.controller.apply(signal);
                app.sync(&context.controller);
            }
            Some(failure) = context.failures.recv() => {
                app.report_failure = Some(failure);
            }
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        dispatch_event(
                            &mut context.input_handlers,
                            &event,
                            app,
                            &mut context.controller,
                            &layout,
                        );
                        app.sync(&context.controller);
                        layout = render_frame(app, terminal)?;
                    }
                    Some(Err(err)) => console().debug(&format!("Terminal event error: {}", err)),
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn render_frame(app: &AppState, terminal: &mut TypeaheadTerminal) -> Result<AppLayout> {
    let mut layout = AppLayout::default();

    terminal.draw(|frame| {
        let area = frame.area();
        layout = AppLayout::compute(area, app);

        let buf = frame.buffer_mut();
        Header.render(app, layout.header, buf);
        Input.render(app, layout.input, buf);
        StatusLines.render(app, layout.status, buf);
        SuggestionPopupWidget::new(app, &layout).render(area, buf);

        if app.focused {
            let origin = layout.text_origin();
            let last_column = layout.input.right().saturating_sub(2);
            frame.set_cursor_position(Position {
                x: (origin.x + app.input.cursor_column()).min(last_column),
                y: origin.y,
            });
        }
    })?;

    Ok(layout)
}
