use dioxus_logger::tracing;

use crate::client::{error::ConfigError, store::preferences::Preferences};

/// Base URL used when neither a stored override nor a build-time value is set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Client configuration resolved once at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Resolve the configuration from persisted overrides and build-time values
    ///
    /// Precedence: stored `API_BASE_URL` override, then the `GARAGE_API_BASE_URL`
    /// environment variable at build time, then [`DEFAULT_API_BASE_URL`]. An invalid
    /// override is logged and skipped.
    pub fn resolve(preferences: &Preferences) -> Self {
        Self::from_sources(
            preferences.api_base_url_override(),
            option_env!("GARAGE_API_BASE_URL"),
        )
    }

    pub fn from_sources(stored: Option<String>, build_time: Option<&str>) -> Self {
        let candidates = stored
            .into_iter()
            .map(|url| ("stored override", url))
            .chain(build_time.map(|url| ("build-time value", url.to_string())));

        for (source, url) in candidates {
            match Self::validate_base_url(&url) {
                Ok(api_base_url) => return Self { api_base_url },
                Err(err) => tracing::warn!("Ignoring API base URL {}: {}", source, err),
            }
        }

        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Check and normalize a base URL, stripping trailing slashes
    pub fn validate_base_url(url: &str) -> Result<String, ConfigError> {
        let trimmed = url.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
                reason: "empty".to_string(),
            });
        }

        if !(trimmed.starts_with("http://")
            || trimmed.starts_with("https://")
            || trimmed.starts_with('/'))
        {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
                reason: "must start with http://, https:// or /".to_string(),
            });
        }

        Ok(trimmed.to_string())
    }

    /// Join a resource path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
