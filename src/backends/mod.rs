use async_trait::async_trait;

use crate::suggestion::{Suggestion, SuggestionId, SuggestionQuery, SuggestionStats};

pub mod backend_factory;
pub mod error;
pub mod http;
pub mod mock;

pub use backend_factory::{AVAILABLE_BACKENDS, BackendFactory, Backends, create_backends};
pub use error::{BackendError, BackendResult};
pub use http::{HttpBackend, HttpBackendConfig};
pub use mock::MockBackend;

/// Lookup side of the suggestion service, used by the autocomplete controller.
///
/// Ranking is owned by the server: implementations return items in the order
/// received and never re-sort them.
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    async fn fetch_suggestions(&self, query: &SuggestionQuery) -> BackendResult<Vec<Suggestion>>;

    /// Tells the backend a suggestion was accepted. Repeated reports are allowed.
    async fn record_selection(&self, id: SuggestionId) -> BackendResult<()>;

    fn backend_name(&self) -> &'static str;
}

/// Corpus management operations behind `/admin`.
#[async_trait]
pub trait AdminBackend: Send + Sync {
    async fn list_suggestions(&self) -> BackendResult<Vec<Suggestion>>;

    async fn list_by_category(&self, category: &str) -> BackendResult<Vec<Suggestion>>;

    async fn recently_used(&self, limit: usize) -> BackendResult<Vec<Suggestion>>;

    async fn by_frequency_range(&self, min_freq: u64, max_freq: u64)
    -> BackendResult<Vec<Suggestion>>;

    async fn create_suggestion(
        &self,
        text: &str,
        category: Option<&str>,
    ) -> BackendResult<Suggestion>;

    async fn update_suggestion(
        &self,
        id: SuggestionId,
        text: &str,
        category: Option<&str>,
    ) -> BackendResult<Suggestion>;

    async fn delete_suggestion(&self, id: SuggestionId) -> BackendResult<()>;

    async fn bulk_create(&self, texts: &[String], category: Option<&str>) -> BackendResult<()>;

    async fn stats(&self) -> BackendResult<SuggestionStats>;

    /// Free-form status line from the service's health endpoint.
    async fn health(&self) -> BackendResult<String>;
}
