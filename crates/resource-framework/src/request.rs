//! # Wire Requests
//!
//! This module defines the request and response envelopes exchanged between
//! [`HttpResourceApi`](crate::HttpResourceApi) and the [`RequestExecutor`](crate::RequestExecutor).
//!
//! Every resource operation maps onto one HTTP verb against a versioned path:
//!
//! | Operation | Verb | Path |
//! |-----------|------|------|
//! | get | GET | `/{version}/{resource}/{id}` |
//! | head | HEAD | `/{version}/{resource}/{id}` |
//! | list | GET | `/{version}/{resource}?skipEntries=…` |
//! | create | POST | `/{version}/{resource}` (object body) |
//! | create_many | POST | `/{version}/{resource}` (array body) |
//! | update | PATCH | `/{version}/{resource}/{id}` |
//! | delete | DELETE | `/{version}/{resource}/{id}` |
//! | replace owned collection | PUT | `/{version}/{resource}/{id}/{sub-resource}` (array body) |

use crate::error::ApiError;
use crate::version::ApiVersion;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

/// Builds `{version}/{resource}[/{id}][/{sub}]`, relative to the configured base URL.
pub fn resource_path(
    version: ApiVersion,
    resource: &str,
    id: Option<Uuid>,
    sub: Option<&str>,
) -> String {
    let mut path = format!("{version}/{resource}");
    if let Some(id) = id {
        path.push_str(&format!("/{id}"));
    }
    if let Some(sub) = sub {
        path.push('/');
        path.push_str(sub);
    }
    path
}

/// A single request against the portal API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Collection the request touches; used for cache eviction.
    pub resource: &'static str,
    pub path: String,
    /// Item the request addresses, if any. A 404 names it as `{resource}/{id}`.
    pub item: Option<Uuid>,
    /// Other collections whose items appear in the response; writes to them evict it too.
    pub embeds: &'static [&'static str],
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, resource: &'static str, path: String) -> Self {
        Self {
            method,
            resource,
            path,
            item: None,
            embeds: &[],
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(resource: &'static str, path: String) -> Self {
        Self::new(Method::GET, resource, path)
    }

    pub fn head(resource: &'static str, path: String) -> Self {
        Self::new(Method::HEAD, resource, path)
    }

    pub fn post(resource: &'static str, path: String) -> Self {
        Self::new(Method::POST, resource, path)
    }

    pub fn patch(resource: &'static str, path: String) -> Self {
        Self::new(Method::PATCH, resource, path)
    }

    pub fn put(resource: &'static str, path: String) -> Self {
        Self::new(Method::PUT, resource, path)
    }

    pub fn delete(resource: &'static str, path: String) -> Self {
        Self::new(Method::DELETE, resource, path)
    }

    pub fn for_item(mut self, id: Uuid) -> Self {
        self.item = Some(id);
        self
    }

    pub fn embedding(mut self, embeds: &'static [&'static str]) -> Self {
        self.embeds = embeds;
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attaches a JSON body. Serialization failures are reported as validation errors
    /// since nothing has been sent yet.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::validation(format!("request body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn is_read(&self) -> bool {
        self.method == Method::GET || self.method == Method::HEAD
    }

    /// `NotFound` naming the addressed item the same way the in-memory backend does, or the
    /// raw path when the request addresses no single item.
    pub(crate) fn not_found(&self) -> ApiError {
        match self.item {
            Some(id) => ApiError::not_found(self.resource, id),
            None => ApiError::NotFound(self.path.clone()),
        }
    }

    pub(crate) fn transport_error(&self, status: Option<u16>, message: impl Into<String>) -> ApiError {
        ApiError::Transport {
            method: self.method.to_string(),
            path: self.path.clone(),
            status,
            message: message.into(),
        }
    }
}

/// A successful (2xx) response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    pub(crate) method: Method,
    pub(crate) path: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: String, request: &ApiRequest) -> Self {
        Self {
            status,
            body,
            method: request.method.clone(),
            path: request.path.clone(),
        }
    }

    /// Decodes the body. Decode failures are logged and surface as `Transport`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| {
            warn!(
                method = %self.method,
                path = %self.path,
                status = self.status,
                error = %e,
                "Response body could not be decoded"
            );
            ApiError::Transport {
                method: self.method.to_string(),
                path: self.path.clone(),
                status: Some(self.status),
                message: format!("invalid response body: {e}"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_versioned() {
        let id = Uuid::nil();
        assert_eq!(resource_path(ApiVersion::V1, "players", None, None), "v1/players");
        assert_eq!(
            resource_path(ApiVersion::V1_1, "players", Some(id), None),
            format!("v1.1/players/{id}")
        );
        assert_eq!(
            resource_path(ApiVersion::V1, "maps", Some(id), Some("map-files")),
            format!("v1/maps/{id}/map-files")
        );
    }

    #[test]
    fn not_found_names_the_item_when_known() {
        let id = Uuid::new_v4();
        let item = ApiRequest::put("maps", format!("v1/maps/{id}/map-files")).for_item(id);
        assert_eq!(item.method, Method::PUT);
        assert_eq!(item.not_found(), ApiError::not_found("maps", id));

        let collection = ApiRequest::get("maps", "v1/maps".into());
        assert_eq!(collection.not_found(), ApiError::NotFound("v1/maps".into()));
    }

    #[test]
    fn undecodable_body_is_transport() {
        let request = ApiRequest::get("players", "v1/players".into());
        let response = ApiResponse::new(200, "not json".into(), &request);
        let err = response.json::<Vec<u32>>().unwrap_err();
        assert!(matches!(err, ApiError::Transport { status: Some(200), .. }));
    }
}
