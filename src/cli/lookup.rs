use crate::backends::{AdminBackend, SuggestionBackend};
use crate::config::AppConfig;
use crate::console::console;
use crate::suggestion::{Suggestion, SuggestionId, SuggestionQuery};
use anyhow::{Context, Result};

/// Single lookup outside the interactive controller. Blank queries skip the network.
pub async fn handle_suggest(
    query: &str,
    backend: &dyn SuggestionBackend,
    config: &AppConfig,
) -> Result<Vec<Suggestion>> {
    if query.trim().is_empty() {
        console().info("Query is empty, nothing to look up");
        return Ok(Vec::new());
    }

    let request = SuggestionQuery::new(query)
        .with_category(config.category.clone())
        .with_limit(config.limit);
    let suggestions = backend
        .fetch_suggestions(&request)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Lookup failed")?;

    console().suggestion_table(&suggestions);
    Ok(suggestions)
}

pub async fn handle_select(id: SuggestionId, backend: &dyn SuggestionBackend) -> Result<()> {
    backend
        .record_selection(id)
        .await
        .map_err(|e| match e.status() {
            Some(404) => anyhow::anyhow!("Suggestion {} does not exist", id),
            _ => anyhow::anyhow!(e.user_message()),
        })
        .with_context(|| format!("Failed to record selection of {}", id))?;
    console().success(&format!("Recorded selection of suggestion {}", id));
    Ok(())
}

pub async fn handle_ping(backend: &dyn AdminBackend) -> Result<()> {
    let status = match backend.health().await {
        Ok(status) => status,
        Err(err) if err.is_network() => {
            return Err(anyhow::anyhow!(err.user_message())).context("Service is not reachable");
        }
        Err(err) => {
            return Err(anyhow::anyhow!(err.user_message()))
                .context("Service answered with an error");
        }
    };
    console().success(&status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::{HttpBackend, HttpBackendConfig, MockBackend};
    use std::time::Duration;

    #[tokio::test]
    async fn blank_query_returns_nothing() {
        let backend = MockBackend::new();

        let found = handle_suggest("  ", &backend, &AppConfig::default())
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn suggest_applies_configured_limit() {
        let backend = MockBackend::new();
        let config = AppConfig {
            limit: 2,
            ..AppConfig::default()
        };

        let found = handle_suggest("app", &backend, &config).await.unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|s| s.text.starts_with("app")));
    }

    #[tokio::test]
    async fn select_unknown_id_fails() {
        let backend = MockBackend::empty();

        let err = handle_select(42, &backend).await.unwrap_err();

        assert!(format!("{:#}", err).contains("Suggestion 42 does not exist"));
    }

    #[tokio::test]
    async fn ping_unreachable_service_says_so() {
        let backend = HttpBackend::new(HttpBackendConfig {
            base_url: "http://127.0.0.1:1/api".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let err = handle_ping(&backend).await.unwrap_err();

        assert!(format!("{:#}", err).starts_with("Service is not reachable: Network error"));
    }

    #[tokio::test]
    async fn ping_reports_health() {
        let backend = MockBackend::new();
        assert!(handle_ping(&backend).await.is_ok());
    }
}
