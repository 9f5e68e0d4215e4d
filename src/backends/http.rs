use super::{AdminBackend, BackendError, BackendResult, SuggestionBackend};
use crate::console::console;
use crate::suggestion::{Suggestion, SuggestionId, SuggestionQuery, SuggestionStats};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// reqwest client for the suggestion service REST API.
///
/// Calls are independent; the client keeps no per-request state and never retries.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> BackendResult<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            BackendError::Configuration(format!("invalid base_url '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::Configuration(format!(
                "base_url '{}' cannot carry a path",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> BackendResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::Configuration("base_url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> BackendResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        Ok(self.client.request(method, url))
    }

    async fn send(&self, request: RequestBuilder) -> BackendResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        console().debug(&format!("{} -> {}", response.url(), status));
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            if !message.is_empty() {
                console().debug(&format!("Error body: {}", message.trim()));
            }
            return Err(BackendError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> BackendResult<T> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn form_params<'a>(text: &'a str, category: Option<&'a str>) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![("text", text)];
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            params.push(("category", category));
        }
        params
    }
}

#[async_trait]
impl SuggestionBackend for HttpBackend {
    async fn fetch_suggestions(&self, query: &SuggestionQuery) -> BackendResult<Vec<Suggestion>> {
        let request = match query.category.as_deref() {
            Some(category) => self.request(Method::GET, &["autocomplete", "category", category])?,
            None => self.request(Method::GET, &["autocomplete"])?,
        };
        let limit = query.limit.to_string();
        let request = request.query(&[("query", query.text.as_str()), ("limit", limit.as_str())]);

        self.send_json(request).await
    }

    async fn record_selection(&self, id: SuggestionId) -> BackendResult<()> {
        let id = id.to_string();
        let request = self.request(Method::POST, &["autocomplete", "select", id.as_str()])?;
        self.send(request).await.map(|_| ())
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}

#[async_trait]
impl AdminBackend for HttpBackend {
    async fn list_suggestions(&self) -> BackendResult<Vec<Suggestion>> {
        let request = self.request(Method::GET, &["admin", "suggestions"])?;
        self.send_json(request).await
    }

    async fn list_by_category(&self, category: &str) -> BackendResult<Vec<Suggestion>> {
        let request = self.request(Method::GET, &["admin", "suggestions", "category", category])?;
        self.send_json(request).await
    }

    async fn recently_used(&self, limit: usize) -> BackendResult<Vec<Suggestion>> {
        let request = self
            .request(Method::GET, &["admin", "suggestions", "recent"])?
            .query(&[("limit", limit)]);
        self.send_json(request).await
    }

    async fn by_frequency_range(
        &self,
        min_freq: u64,
        max_freq: u64,
    ) -> BackendResult<Vec<Suggestion>> {
        let request = self
            .request(Method::GET, &["admin", "suggestions", "frequency"])?
            .query(&[("minFreq", min_freq), ("maxFreq", max_freq)]);
        self.send_json(request).await
    }

    async fn create_suggestion(
        &self,
        text: &str,
        category: Option<&str>,
    ) -> BackendResult<Suggestion> {
        let request = self
            .request(Method::POST, &["admin", "suggestions"])?
            .form(&Self::form_params(text, category));
        self.send_json(request).await
    }

    async fn update_suggestion(
        &self,
        id: SuggestionId,
        text: &str,
        category: Option<&str>,
    ) -> BackendResult<Suggestion> {
        let id = id.to_string();
        let request = self
            .request(Method::PUT, &["admin", "suggestions", id.as_str()])?
            .form(&Self::form_params(text, category));
        self.send_json(request).await
    }

    async fn delete_suggestion(&self, id: SuggestionId) -> BackendResult<()> {
        let id = id.to_string();
        let request = self.request(Method::DELETE, &["admin", "suggestions", id.as_str()])?;
        self.send(request).await.map(|_| ())
    }

    async fn bulk_create(&self, texts: &[String], category: Option<&str>) -> BackendResult<()> {
        let mut request = self
            .request(Method::POST, &["admin", "suggestions", "bulk"])?
            .json(texts);
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            request = request.query(&[("category", category)]);
        }
        self.send(request).await.map(|_| ())
    }

    async fn stats(&self) -> BackendResult<SuggestionStats> {
        let request = self.request(Method::GET, &["admin", "stats"])?;
        self.send_json(request).await
    }

    async fn health(&self) -> BackendResult<String> {
        let request = self.request(Method::GET, &["test"])?;
        let response = self.send(request).await?;
        response
            .text()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
