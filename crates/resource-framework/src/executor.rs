//! # Request Executor
//!
//! The `RequestExecutor` is the only component that touches the network. It resolves a request
//! path against the configured base URL, attaches the bearer token, sends the request under the
//! caller's cancellation token and classifies the outcome:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | 2xx | `Ok(ApiResponse)` |
//! | 404 | `ApiError::NotFound` (`{resource}/{id}` for item requests) |
//! | 400 | `ApiError::Validation` (server message) |
//! | 401, 403 | `ApiError::Unauthorized` |
//! | other status, connect/timeout error | `ApiError::Transport` |
//! | token cancelled | `ApiError::Cancelled` |
//!
//! Requests are not retried. The executor is shared by every resource client built from the same
//! settings, so it is held behind an `Arc`.

use crate::auth::TokenProvider;
use crate::cache::ResponseCache;
use crate::config::ClientSettings;
use crate::error::{ApiError, ConfigError};
use crate::request::{ApiRequest, ApiResponse};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

pub struct RequestExecutor {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
    cache: Option<ResponseCache>,
    default_page_size: i32,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("base_url", &self.base_url.as_str())
            .field("cache", &self.cache.is_some())
            .finish()
    }
}

impl RequestExecutor {
    /// Validates the settings and builds the HTTP client.
    pub fn new(
        settings: &ClientSettings,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            http,
            base_url: settings.base_url()?,
            tokens,
            cache: settings
                .cache_enabled
                .then(|| ResponseCache::new(settings.cache_ttl())),
            default_page_size: settings.default_page_size,
        })
    }

    /// Builds an executor whose token provider comes from the settings themselves.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ConfigError> {
        Self::new(settings, settings.token_provider())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn default_page_size(&self) -> i32 {
        self.default_page_size
    }

    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_ref()
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(&request.path).map_err(|e| {
            let err = request.transport_error(None, format!("invalid path: {e}"));
            warn!(error = %err, "Request path rejected");
            err
        })?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    #[tracing::instrument(skip(self, request, cancel), fields(method = %request.method, path = %request.path))]
    pub async fn execute(
        &self,
        request: ApiRequest,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse, ApiError> {
        if cancel.is_cancelled() {
            debug!("Cancelled before send");
            return Err(ApiError::Cancelled);
        }

        let url = self.url_for(&request)?;
        let cache_key = url.to_string();
        let cacheable = request.method == reqwest::Method::GET;

        if cacheable {
            if let Some((status, body)) = self.cache.as_ref().and_then(|c| c.get(&cache_key)) {
                debug!("Cache hit");
                return Ok(ApiResponse::new(status, body, &request));
            }
        }

        let token = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Cancelled while acquiring token");
                return Err(ApiError::Cancelled);
            }
            token = self.tokens.access_token() => token,
        };
        let token = token.map_err(|e| {
            warn!(error = %e, "Access token unavailable");
            e
        })?;

        let mut builder = self.http.request(request.method.clone(), url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!("Sending request");
        let sent = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Cancelled in flight");
                return Err(ApiError::Cancelled);
            }
            result = builder.send() => result,
        };
        let response = sent.map_err(|e| {
            let err = request.transport_error(e.status().map(|s| s.as_u16()), e.to_string());
            warn!(error = %err, "Request failed");
            err
        })?;

        let status = response.status();
        let read = tokio::select! {
            _ = cancel.cancelled() => return Err(ApiError::Cancelled),
            text = response.text() => text,
        };
        let body = read.map_err(|e| {
            let err = request.transport_error(Some(status.as_u16()), format!("reading body: {e}"));
            warn!(error = %err, "Request failed");
            err
        })?;

        let outcome = classify(&request, status, body);
        match &outcome {
            Ok(response) => {
                debug!(status = response.status, "Response received");
                if let Some(cache) = &self.cache {
                    if cacheable {
                        cache.put(
                            cache_key,
                            request.resource,
                            request.embeds,
                            response.status,
                            response.body.clone(),
                        );
                    } else if !request.is_read() {
                        cache.evict_resource(request.resource);
                    }
                }
            }
            Err(ApiError::NotFound(_)) => debug!(status = status.as_u16(), "Not found"),
            Err(e) => warn!(status = status.as_u16(), error = %e, "Request failed"),
        }
        outcome
    }
}

fn classify(request: &ApiRequest, status: StatusCode, body: String) -> Result<ApiResponse, ApiError> {
    if status.is_success() {
        return Ok(ApiResponse::new(status.as_u16(), body, request));
    }
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        body
    };
    match status {
        StatusCode::NOT_FOUND => Err(request.not_found()),
        StatusCode::BAD_REQUEST => Err(ApiError::Validation(message)),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized {
            status: Some(status.as_u16()),
            message,
        }),
        _ => Err(request.transport_error(Some(status.as_u16()), message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ApiRequest {
        ApiRequest::get("players", "v1/players".into())
    }

    #[test]
    fn classifies_status_codes() {
        assert!(classify(&request(), StatusCode::OK, "[]".into()).is_ok());
        assert!(classify(&request(), StatusCode::CREATED, "{}".into()).is_ok());
        assert!(matches!(
            classify(&request(), StatusCode::NOT_FOUND, String::new()),
            Err(ApiError::NotFound(_))
        ));
        let id = uuid::Uuid::new_v4();
        assert_eq!(
            classify(
                &ApiRequest::get("players", format!("v1/players/{id}")).for_item(id),
                StatusCode::NOT_FOUND,
                String::new()
            ),
            Err(ApiError::not_found("players", id))
        );
        assert!(matches!(
            classify(&request(), StatusCode::BAD_REQUEST, "take must be positive".into()),
            Err(ApiError::Validation(message)) if message == "take must be positive"
        ));
        assert!(matches!(
            classify(&request(), StatusCode::FORBIDDEN, String::new()),
            Err(ApiError::Unauthorized { status: Some(403), .. })
        ));
        assert!(matches!(
            classify(&request(), StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            Err(ApiError::Transport { status: Some(500), .. })
        ));
    }

    #[test]
    fn invalid_settings_fail_before_any_request() {
        let settings = ClientSettings::new("ftp://portal");
        assert!(matches!(
            RequestExecutor::from_settings(&settings),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn cancelled_token_short_circuits() {
        let executor =
            RequestExecutor::from_settings(&ClientSettings::new("http://127.0.0.1:9")).unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(
            executor.execute(request(), &cancel).await.unwrap_err(),
            ApiError::Cancelled
        );
    }
}
