//! Bearer token providers consumed by the request executor.
//!
//! Token acquisition flows live outside this crate. The executor asks the provider before every
//! request and attaches whatever it returns; `Ok(None)` sends the request anonymously.

use crate::error::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait TokenProvider: Send + Sync + 'static {
    async fn access_token(&self) -> Result<Option<String>, ApiError>;
}

/// Anonymous requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

#[async_trait]
impl TokenProvider for NoAuth {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(None)
    }
}

/// A token obtained elsewhere.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(***)")
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<Option<String>, ApiError> {
        Ok(Some(self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn providers_return_expected_tokens() {
        assert_eq!(NoAuth.access_token().await.unwrap(), None);
        assert_eq!(
            StaticToken::new("abc").access_token().await.unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(format!("{:?}", StaticToken::new("secret")), "StaticToken(***)");
    }
}
