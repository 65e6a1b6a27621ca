//! Remote API settings, resolved once at startup.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::app::{FrontpageError, Result};

/// Environment variable holding the per-deployment project secret.
pub const SECRET_ENV: &str = "FRONTPAGE_PROJECT_SECRET";

/// Placeholder substituted with the project secret in [`ApiConfig::endpoint`].
pub const SECRET_PLACEHOLDER: &str = "{secret}";

pub const DEFAULT_ENDPOINT: &str = "https://{secret}.mockapi.io/api";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub project_secret: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Lifetime of the shared "all posts" cache; 0 disables it.
    pub cache_ttl_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            project_secret: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            cache_ttl_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Override the configured secret with one from the CLI or environment.
    pub fn with_secret(mut self, secret: Option<String>) -> Self {
        if let Some(secret) = secret.filter(|s| !s.trim().is_empty()) {
            self.project_secret = Some(secret);
        }
        self
    }

    pub fn secret(&self) -> Option<&str> {
        self.project_secret
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Base URL of the API, e.g. `https://abc123.mockapi.io/api`.
    ///
    /// Fails with a configuration error when no secret is available so
    /// callers never reach the network without one.
    pub fn base_url(&self) -> Result<Url> {
        let secret = self.secret().ok_or_else(|| {
            FrontpageError::Config(format!(
                "Project secret not found. Pass --project-secret, set {}, or add project_secret under [api] in the config file.",
                SECRET_ENV
            ))
        })?;

        let url = Url::parse(&self.endpoint.replace(SECRET_PLACEHOLDER, secret))?;
        if url.cannot_be_a_base() {
            return Err(FrontpageError::Config(format!(
                "API endpoint is not a base URL: {}",
                self.endpoint
            )));
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_secs > 0).then(|| Duration::from_secs(self.cache_ttl_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_is_config_error() {
        let err = ApiConfig::default().base_url().unwrap_err();
        assert!(matches!(err, FrontpageError::Config(_)));
        assert!(err.to_string().contains(SECRET_ENV));
    }

    #[test]
    fn test_blank_secret_is_missing() {
        let config = ApiConfig {
            project_secret: Some("   ".into()),
            ..ApiConfig::default()
        };
        assert!(config.secret().is_none());
        assert!(config.base_url().is_err());
    }

    #[test]
    fn test_secret_forms_host() {
        let config = ApiConfig::default().with_secret(Some("abc123".into()));
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://abc123.mockapi.io/api"
        );
    }

    #[test]
    fn test_override_keeps_file_secret_when_absent() {
        let config = ApiConfig {
            project_secret: Some("from-file".into()),
            ..ApiConfig::default()
        }
        .with_secret(None);
        assert_eq!(config.secret(), Some("from-file"));
    }

    #[test]
    fn test_custom_endpoint_template() {
        let config = ApiConfig {
            project_secret: Some("p1".into()),
            endpoint: "http://127.0.0.1:8080/{secret}/api".into(),
            ..ApiConfig::default()
        };
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "http://127.0.0.1:8080/p1/api"
        );
    }

    #[test]
    fn test_cache_ttl_zero_disables() {
        let config = ApiConfig {
            cache_ttl_secs: 0,
            ..ApiConfig::default()
        };
        assert!(config.cache_ttl().is_none());
        assert_eq!(
            ApiConfig::default().cache_ttl(),
            Some(Duration::from_secs(30))
        );
    }
}
