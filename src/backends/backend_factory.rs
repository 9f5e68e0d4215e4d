use crate::backends::{
    AdminBackend, HttpBackend, HttpBackendConfig, MockBackend, SuggestionBackend,
};
use crate::config::AppConfig;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

pub const AVAILABLE_BACKENDS: &[&str] = &["http", "mock"];

/// One service instance seen through both of its interfaces.
#[derive(Clone)]
pub struct Backends {
    pub lookup: Arc<dyn SuggestionBackend>,
    pub admin: Arc<dyn AdminBackend>,
}

impl Backends {
    fn from_shared<B>(backend: Arc<B>) -> Self
    where
        B: SuggestionBackend + AdminBackend + 'static,
    {
        Self {
            lookup: backend.clone(),
            admin: backend,
        }
    }

    pub fn name(&self) -> &'static str {
        self.lookup.backend_name()
    }
}

pub trait BackendFactory {
    fn create(config: &AppConfig) -> Result<Backends>;
}

impl BackendFactory for HttpBackend {
    fn create(config: &AppConfig) -> Result<Backends> {
        let http_config = HttpBackendConfig {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        };
        Ok(Backends::from_shared(Arc::new(HttpBackend::new(http_config)?)))
    }
}

impl BackendFactory for MockBackend {
    fn create(_config: &AppConfig) -> Result<Backends> {
        Ok(Backends::from_shared(Arc::new(MockBackend::new())))
    }
}

pub fn create_backends(backend_name: &str, config: &AppConfig) -> Result<Backends> {
    match backend_name {
        "http" => HttpBackend::create(config),
        "mock" => MockBackend::create(config),
        _ => anyhow::bail!(
            "Unknown backend: {}. Available backends: {}",
            backend_name,
            AVAILABLE_BACKENDS.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_named_backends() {
        let config = AppConfig::default();

        assert_eq!(create_backends("mock", &config).unwrap().name(), "mock");
        assert_eq!(create_backends("http", &config).unwrap().name(), "http");
    }

    #[test]
    fn unknown_backend_lists_alternatives() {
        let err = create_backends("grpc", &AppConfig::default())
            .err()
            .unwrap()
            .to_string();

        assert!(err.contains("grpc"));
        assert!(err.contains("http, mock"));
    }

    #[test]
    fn bad_base_url_fails_creation() {
        let config = AppConfig {
            base_url: "not a url".to_string(),
            ..AppConfig::default()
        };

        assert!(create_backends("http", &config).is_err());
    }
}
