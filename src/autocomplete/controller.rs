use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use super::debounce::{DEFAULT_DEBOUNCE_MS, DebounceScheduler, PendingQuery, Schedule, Timer};
use super::keys::{KeyOutcome, KeySubscription, NavKey, SubscriptionChange};
use super::reporter::{ReportFailure, SelectionReporter};
use super::state::{ControllerState, Phase};
use crate::backends::{BackendResult, SuggestionBackend};
use crate::console::console;
use crate::suggestion::{DEFAULT_LIMIT, Suggestion, SuggestionQuery};

pub const DEFAULT_BLUR_DELAY_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    pub debounce: Duration,
    /// Grace period after focus loss, long enough for a click on a row to land.
    pub blur_delay: Duration,
    pub limit: usize,
    pub category: Option<String>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            blur_delay: Duration::from_millis(DEFAULT_BLUR_DELAY_MS),
            limit: DEFAULT_LIMIT,
            category: None,
        }
    }
}

/// Result of one lookup, tagged with the generation that requested it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: BackendResult<Vec<Suggestion>>,
}

/// Something the controller was waiting on has happened.
#[derive(Debug)]
pub enum Signal {
    Settled(PendingQuery),
    Fetched(FetchOutcome),
    BlurElapsed,
}

struct InFlight {
    generation: u64,
    task: JoinHandle<()>,
}

/// Owns the state of one autocomplete input.
///
/// All mutation happens through `&mut self` on the caller's event loop. Each
/// query edit, acceptance or clear bumps `generation`; a fetch result may only
/// touch the state if it carries the current generation, which is how stale
/// responses are suppressed.
pub struct SuggestionController {
    state: ControllerState,
    generation: u64,
    options: ControllerOptions,
    scheduler: DebounceScheduler,
    blur: Timer<()>,
    keys: KeySubscription,
    backend: Arc<dyn SuggestionBackend>,
    reporter: SelectionReporter,
    in_flight: Option<InFlight>,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    fetches_issued: u64,
}

impl SuggestionController {
    /// Builds a controller plus the receiving end of its report-failure channel.
    pub fn new(
        backend: Arc<dyn SuggestionBackend>,
        options: ControllerOptions,
    ) -> (Self, mpsc::UnboundedReceiver<ReportFailure>) {
        let (reporter, failures) = SelectionReporter::new(Arc::clone(&backend));
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

        let controller = Self {
            state: ControllerState::default(),
            generation: 0,
            scheduler: DebounceScheduler::new(options.debounce),
            blur: Timer::new(options.blur_delay),
            keys: KeySubscription::new(),
            options,
            backend,
            reporter,
            in_flight: None,
            fetch_tx,
            fetch_rx,
            fetches_issued: 0,
        };
        (controller, failures)
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    /// True while the dropdown's key listener is attached.
    pub fn wants_keys(&self) -> bool {
        self.keys.is_active()
    }

    pub fn key_subscription(&self) -> &KeySubscription {
        &self.keys
    }

    pub fn fetches_issued(&self) -> u64 {
        self.fetches_issued
    }

    pub fn is_debouncing(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Records a new query text and restarts the debounce window.
    ///
    /// Blank text skips the network entirely and empties the list at once.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.advance_generation();

        match self.scheduler.schedule(self.generation, &text) {
            Schedule::Armed => {}
            Schedule::Bypassed => {
                self.state.clear_suggestions();
                self.state.error = None;
            }
        }
        self.state.query = text;
        self.sync_keys();
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if !self.keys.is_active() {
            return KeyOutcome::Ignored;
        }

        match key {
            NavKey::ArrowDown => {
                self.state.select_next();
                KeyOutcome::Handled
            }
            NavKey::ArrowUp => {
                self.state.select_prev();
                KeyOutcome::Handled
            }
            NavKey::Enter => match self.state.selected().cloned() {
                Some(suggestion) => {
                    self.accept(suggestion.clone());
                    KeyOutcome::Accepted(suggestion)
                }
                None => KeyOutcome::Handled,
            },
            NavKey::Escape => {
                self.clear();
                KeyOutcome::Handled
            }
        }
    }

    /// Pointer activation of a visible row, independent of the keyboard cursor.
    pub fn activate(&mut self, index: usize) -> Option<Suggestion> {
        let suggestion = self.state.suggestions.get(index).cloned()?;
        self.accept(suggestion.clone());
        Some(suggestion)
    }

    /// Commits `suggestion` as the query and reports it in the background.
    ///
    /// The visible state is final when this returns; the report outcome can
    /// only show up on the failure channel. No lookup is scheduled for the
    /// accepted text, so the dropdown stays closed until the next edit.
    pub fn accept(&mut self, suggestion: Suggestion) -> JoinHandle<()> {
        self.advance_generation();
        self.scheduler.cancel();
        self.blur.cancel();

        self.state.query = suggestion.text.clone();
        self.state.clear_suggestions();
        self.state.error = None;
        self.sync_keys();

        console().verbose(&format!(
            "Accepted suggestion {} ('{}')",
            suggestion.id, suggestion.text
        ));
        self.reporter.report(suggestion.id)
    }

    /// Hides the dropdown and forgets any outstanding lookup. The query stays.
    pub fn clear(&mut self) {
        self.advance_generation();
        self.scheduler.cancel();
        self.blur.cancel();

        self.state.clear_suggestions();
        self.state.error = None;
        self.sync_keys();
    }

    /// Focus left the input: clear once the blur delay passes.
    pub fn blur(&mut self) {
        self.blur.arm(());
    }

    pub fn focus(&mut self) {
        self.blur.cancel();
    }

    /// Waits for the debounce timer, the blur timer or a fetch completion.
    ///
    /// Cancel safe, so it can sit in a `select!` next to terminal input.
    pub async fn next_signal(&mut self) -> Signal {
        tokio::select! {
            pending = self.scheduler.settled() => Signal::Settled(pending),
            () = self.blur.expired() => Signal::BlurElapsed,
            Some(outcome) = self.fetch_rx.recv() => Signal::Fetched(outcome),
        }
    }

    pub fn apply(&mut self, signal: Signal) {
        match signal {
            Signal::Settled(pending) => self.on_settled(pending),
            Signal::Fetched(outcome) => {
                self.apply_fetch(outcome);
            }
            Signal::BlurElapsed => self.clear(),
        }
    }

    /// Waits for the next signal and applies it.
    pub async fn step(&mut self) {
        let signal = self.next_signal().await;
        self.apply(signal);
    }

    fn on_settled(&mut self, pending: PendingQuery) {
        if pending.generation != self.generation {
            console().debug(&format!(
                "Ignoring settled query for generation {} (current {})",
                pending.generation, self.generation
            ));
            return;
        }
        self.begin_fetch(pending.text);
    }

    fn begin_fetch(&mut self, text: String) {
        let generation = self.generation;
        let query = SuggestionQuery::new(text)
            .with_category(self.options.category.clone())
            .with_limit(self.options.limit);

        console().debug(&format!(
            "Fetching suggestions for '{}' (generation {})",
            query.text, generation
        ));

        let backend = Arc::clone(&self.backend);
        let results = self.fetch_tx.clone();
        let task = tokio::spawn(async move {
            let result = backend.fetch_suggestions(&query).await;
            let _ = results.send(FetchOutcome { generation, result });
        });

        if let Some(previous) = self.in_flight.replace(InFlight { generation, task }) {
            previous.task.abort();
        }
        self.fetches_issued += 1;
        self.state.loading = true;
        self.state.error = None;
    }

    /// Applies a lookup result. Returns false when the result was stale and dropped.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation {
            console().debug(&format!(
                "Dropping stale response for generation {} (current {})",
                outcome.generation, self.generation
            ));
            return false;
        }

        if self
            .in_flight
            .as_ref()
            .is_some_and(|f| f.generation == outcome.generation)
        {
            self.in_flight = None;
        }
        self.state.loading = false;

        match outcome.result {
            Ok(suggestions) => {
                self.state.replace_suggestions(suggestions);
                self.state.error = None;
            }
            Err(err) => {
                let message = err.user_message();
                console().verbose(&format!(
                    "Lookup for '{}' failed: {}",
                    self.state.query, message
                ));
                self.state.clear_suggestions();
                self.state.error = Some(message);
            }
        }
        self.sync_keys();
        true
    }

    /// Invalidates every outstanding lookup.
    fn advance_generation(&mut self) {
        self.generation += 1;
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
        self.state.loading = false;
    }

    fn sync_keys(&mut self) {
        match self.keys.sync(self.state.is_visible()) {
            Some(SubscriptionChange::Attached) => console().debug("Dropdown key listener attached"),
            Some(SubscriptionChange::Detached) => console().debug("Dropdown key listener detached"),
            None => {}
        }
    }
}

impl Drop for SuggestionController {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
