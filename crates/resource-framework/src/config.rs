//! # Client Settings
//!
//! Settings for the live backend. Values come either from code
//! (`ClientSettings::new(url).with_page_size(50)`) or from the environment via
//! [`ClientSettings::from_env`], which loads a `.env` file first when one exists.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PORTAL_API_BASE_URL` | required |
//! | `PORTAL_API_DEFAULT_PAGE_SIZE` | `20` |
//! | `PORTAL_API_CACHE_ENABLED` | `false` |
//! | `PORTAL_API_CACHE_TTL_MS` | `60000` |
//! | `PORTAL_API_TIMEOUT_MS` | `30000` |
//! | `PORTAL_API_TOKEN` | unset (anonymous) |
//!
//! Settings are validated before any client is built, so a bad URL or page size is reported
//! at startup rather than on the first request.

use crate::auth::{NoAuth, StaticToken, TokenProvider};
use crate::error::ConfigError;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const DEFAULT_PAGE_SIZE: i32 = 20;
pub const DEFAULT_CACHE_TTL_MS: u64 = 60_000;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Clone, Deserialize)]
pub struct ClientSettings {
    pub base_url: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: i32,
    #[serde(default)]
    pub cache_enabled: bool,
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default)]
    pub access_token: Option<String>,
}

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

fn default_cache_ttl_ms() -> u64 {
    DEFAULT_CACHE_TTL_MS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Whole milliseconds, saturating. Anything under a millisecond becomes 0 and fails validation.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl std::fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSettings")
            .field("base_url", &self.base_url)
            .field("default_page_size", &self.default_page_size)
            .field("cache_enabled", &self.cache_enabled)
            .field("cache_ttl_ms", &self.cache_ttl_ms)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_page_size: DEFAULT_PAGE_SIZE,
            cache_enabled: false,
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            access_token: None,
        }
    }

    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn with_cache(mut self, ttl: Duration) -> Self {
        self.cache_enabled = true;
        self.cache_ttl_ms = millis(ttl);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = millis(timeout);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Reads settings from `PORTAL_API_*` variables, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("PORTAL_API_BASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("PORTAL_API_BASE_URL".to_string()))?;

        let settings = Self {
            base_url,
            default_page_size: parse_env("PORTAL_API_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            cache_enabled: parse_env("PORTAL_API_CACHE_ENABLED", false)?,
            cache_ttl_ms: parse_env("PORTAL_API_CACHE_TTL_MS", DEFAULT_CACHE_TTL_MS)?,
            request_timeout_ms: parse_env("PORTAL_API_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?,
            access_token: std::env::var("PORTAL_API_TOKEN").ok().filter(|t| !t.is_empty()),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        validate_page_size(self.default_page_size)?;
        if self.cache_enabled && self.cache_ttl_ms == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "cache_ttl_ms",
                reason: "must be at least 1ms when caching is enabled".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "request_timeout_ms",
                reason: "must be at least 1ms".to_string(),
            });
        }
        Ok(())
    }

    /// Parsed base URL with a trailing slash, so relative joins keep any path prefix.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "{}: scheme must be http or https",
                self.base_url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Token provider implied by `access_token`.
    pub fn token_provider(&self) -> Arc<dyn TokenProvider> {
        match &self.access_token {
            Some(token) => Arc::new(StaticToken::new(token.clone())),
            None => Arc::new(NoAuth),
        }
    }
}

/// Page size check shared by every way of building a client, live or in-memory.
pub fn validate_page_size(page_size: i32) -> Result<(), ConfigError> {
    if page_size <= 0 {
        return Err(ConfigError::InvalidSetting {
            name: "default_page_size",
            reason: format!("must be positive, got {page_size}"),
        });
    }
    Ok(())
}

fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = ClientSettings::new("http://localhost:5000");
        assert!(settings.validate().is_ok());
        assert_eq!(settings.default_page_size, DEFAULT_PAGE_SIZE);
        assert!(!settings.cache_enabled);
    }

    #[test]
    fn non_positive_page_size_fails() {
        let err = ClientSettings::new("http://localhost")
            .with_page_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSetting {
                name: "default_page_size",
                ..
            }
        ));
    }

    #[test]
    fn non_http_url_fails() {
        for url in ["ftp://portal", "not a url", "file:///tmp/x"] {
            let err = ClientSettings::new(url).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBaseUrl(_)), "{url}");
        }
    }

    #[test]
    fn zero_ttl_with_cache_fails() {
        let err = ClientSettings::new("https://portal")
            .with_cache(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting { name: "cache_ttl_ms", .. }));
    }

    #[test]
    fn sub_second_durations_are_kept() {
        let settings = ClientSettings::new("https://portal")
            .with_cache(Duration::from_millis(250))
            .with_timeout(Duration::from_millis(1500));
        assert!(settings.validate().is_ok());
        assert_eq!(settings.cache_ttl(), Duration::from_millis(250));
        assert_eq!(settings.request_timeout(), Duration::from_millis(1500));

        let err = ClientSettings::new("https://portal")
            .with_timeout(Duration::from_micros(10))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting { name: "request_timeout_ms", .. }));
    }

    #[test]
    fn base_url_keeps_path_prefix() {
        let url = ClientSettings::new("https://portal.example/api").base_url().unwrap();
        assert_eq!(url.as_str(), "https://portal.example/api/");
        assert_eq!(
            url.join("v1/players").unwrap().as_str(),
            "https://portal.example/api/v1/players"
        );
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{"base_url":"http://localhost:8080","cache_enabled":true}"#)
                .unwrap();
        assert!(settings.cache_enabled);
        assert_eq!(settings.cache_ttl(), Duration::from_millis(DEFAULT_CACHE_TTL_MS));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn debug_redacts_token() {
        let settings = ClientSettings::new("http://localhost").with_token("secret");
        assert!(!format!("{settings:?}").contains("secret"));
    }
}
