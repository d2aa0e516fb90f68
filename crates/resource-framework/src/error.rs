//! # Framework Errors
//!
//! Every [`ResourceApi`](crate::ResourceApi) operation, live or in-memory, fails with the same
//! [`ApiError`] so callers can match on the outcome without caring which backend served it.
//! Configuration problems are reported separately through [`ConfigError`] because they surface
//! at construction time, before any request exists.

/// Errors returned at the resource contract boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The referenced id does not exist. Never treated as exceptional.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The request was malformed: bad pagination bounds, missing required field, bad body.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Authentication or authorization failed; callers should refresh credentials.
    #[error("Unauthorized ({status:?}): {message}")]
    Unauthorized { status: Option<u16>, message: String },

    /// Network, unexpected status, or deserialization failure on the live backend.
    #[error("Transport error on {method} {path} ({status:?}): {message}")]
    Transport {
        method: String,
        path: String,
        status: Option<u16>,
        message: String,
    },

    /// The caller's cancellation token fired before the operation completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{resource}/{id}"))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// HTTP-equivalent status code for the outcome, when one exists.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Validation(_) => Some(400),
            Self::Unauthorized { status, .. } => Some(status.unwrap_or(401)),
            Self::Transport { status, .. } => *status,
            Self::Cancelled => None,
        }
    }
}

/// Errors raised while loading or validating client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {value}")]
    InvalidEnvVar { name: String, value: String },

    /// The base URL is not an absolute http(s) URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A setting is out of its allowed range.
    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    /// The underlying HTTP client could not be built.
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(ApiError::not_found("players", 1).status_code(), Some(404));
        assert_eq!(ApiError::validation("take").status_code(), Some(400));
        assert_eq!(
            ApiError::Unauthorized {
                status: None,
                message: "no token".into()
            }
            .status_code(),
            Some(401)
        );
        assert_eq!(ApiError::Cancelled.status_code(), None);
    }

    #[test]
    fn not_found_message_names_resource_and_id() {
        let err = ApiError::not_found("players", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Item not found: players/abc");
    }
}
