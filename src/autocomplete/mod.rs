pub mod controller;
pub mod debounce;
pub mod keys;
pub mod reporter;
pub mod state;

pub use controller::{
    ControllerOptions, DEFAULT_BLUR_DELAY_MS, FetchOutcome, Signal, SuggestionController,
};
pub use debounce::{DEFAULT_DEBOUNCE_MS, DebounceScheduler, PendingQuery, Schedule, Timer};
pub use keys::{KeyOutcome, KeySubscription, NavKey, SubscriptionChange};
pub use reporter::{ReportFailure, SelectionReporter};
pub use state::{ControllerState, Phase};
