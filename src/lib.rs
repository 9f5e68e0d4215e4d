pub mod autocomplete;
pub mod backends;
pub mod cli;
pub mod config;
pub mod console;
pub mod suggestion;
pub mod tui;

pub use autocomplete::{
    ControllerOptions, ControllerState, KeyOutcome, NavKey, Phase, ReportFailure,
    SuggestionController,
};
pub use backends::{
    AdminBackend, BackendError, BackendResult, Backends, HttpBackend, MockBackend,
    SuggestionBackend, create_backends,
};
pub use config::{AppConfig, ConfigError};
pub use console::{Console, VerbosityLevel, console, init_console};
pub use suggestion::{Suggestion, SuggestionId, SuggestionQuery, SuggestionStats};
