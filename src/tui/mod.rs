mod app;
mod component;
pub mod components;
mod event_loop;
mod handler_result;
pub mod handlers;
mod header;
mod input_handler;
mod input_line;
pub mod layout;
mod terminal;

use anyhow::Result;
use std::path::Path;

use crate::autocomplete::SuggestionController;
use crate::backends::Backends;
use crate::config::AppConfig;
use crate::console::{Console, VerbosityLevel, console, init_console, install_console};

pub use app::AppState;
pub use handler_result::KeyHandlerResult;
pub use input_handler::{InputHandler, dispatch_event};
pub use input_line::InputLine;

use event_loop::{EventLoopContext, run_event_loop};
use terminal::{init_terminal, restore_terminal};

/// Runs the interactive autocomplete screen until the user quits.
pub async fn run(backends: Backends, config: AppConfig, verbosity: VerbosityLevel) -> Result<()> {
    redirect_console(config.log_file.as_deref(), verbosity);

    let (controller, failures) =
        SuggestionController::new(backends.lookup, config.controller_options());

    let mut app = AppState::new(controller.backend_name(), config.category.clone());
    if config.backend == "http" {
        app.endpoint = Some(config.base_url.clone());
    }

    let context = EventLoopContext {
        controller,
        failures,
        input_handlers: handlers::default_handlers(),
    };

    let mut terminal = init_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app, context).await;
    restore_terminal(terminal)?;
    init_console(verbosity);

    if let Some(accepted) = &app.last_accepted {
        console().verbose(&format!("Last accepted suggestion: {}", accepted.text));
    }
    result
}

/// The alternate screen owns stdout, so console lines go to the log file or nowhere.
fn redirect_console(log_file: Option<&Path>, verbosity: VerbosityLevel) {
    let replacement = match log_file {
        Some(path) => match Console::with_log_file(verbosity, path) {
            Ok(file_console) => file_console,
            Err(err) => {
                console().warning(&format!(
                    "Cannot open log file {}: {}",
                    path.display(),
                    err
                ));
                Console::new(VerbosityLevel::Quiet)
            }
        },
        None => Console::new(VerbosityLevel::Quiet),
    };
    install_console(replacement);
}
