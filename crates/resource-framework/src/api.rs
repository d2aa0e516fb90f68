//! # ResourceApi Trait
//!
//! The single contract every resource exposes, regardless of which backend serves it.
//! [`HttpResourceApi`](crate::HttpResourceApi) talks to the portal over HTTP,
//! [`InMemoryResourceApi`](crate::InMemoryResourceApi) serves an in-process store, and
//! [`MockResourceApi`](crate::mock::MockResourceApi) replays scripted outcomes. Application code
//! holds `Arc<dyn ResourceApi<R>>` and cannot tell them apart.
//!
//! Every operation takes a [`CancellationToken`]. A cancelled token yields
//! [`ApiError::Cancelled`] from all backends.

use crate::error::ApiError;
use crate::query::{CollectionResult, Query};
use crate::resource::{OwnedCollection, Resource};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[async_trait]
pub trait ResourceApi<R: Resource>: Send + Sync {
    /// Fetch one item with its direct relationships populated.
    async fn get(&self, id: Uuid, cancel: &CancellationToken) -> Result<R::Dto, ApiError>;

    /// Existence check without a payload.
    async fn head(&self, id: Uuid, cancel: &CancellationToken) -> Result<(), ApiError>;

    /// Filter, order and paginate. Items come back without relationships.
    async fn list(
        &self,
        query: Query<R>,
        cancel: &CancellationToken,
    ) -> Result<CollectionResult<R::Dto>, ApiError>;

    /// Create one item. The id is assigned by the backend.
    async fn create(&self, input: R::Create, cancel: &CancellationToken) -> Result<R::Dto, ApiError>;

    /// Create several items in one call.
    async fn create_many(
        &self,
        inputs: Vec<R::Create>,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError>;

    /// Apply a partial edit and return the updated item.
    async fn update(&self, edit: R::Edit, cancel: &CancellationToken) -> Result<R::Dto, ApiError>;

    async fn delete(&self, id: Uuid, cancel: &CancellationToken) -> Result<(), ApiError>;

    /// `head` folded into a boolean. Errors other than `NotFound` still propagate.
    #[tracing::instrument(skip(self, cancel), fields(resource = R::PATH))]
    async fn exists(&self, id: Uuid, cancel: &CancellationToken) -> Result<bool, ApiError> {
        match self.head(id, cancel).await {
            Ok(()) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Wholesale replacement of a collection owned by one item, e.g. the files of a map.
#[async_trait]
pub trait CollectionApi<R: OwnedCollection>: Send + Sync {
    /// Replaces the collection of item `id` with `items`. An empty list clears it.
    async fn replace(
        &self,
        id: Uuid,
        items: Vec<R::Item>,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError>;
}

/// Fails with `Cancelled` if the token already fired.
pub fn ensure_active(cancel: &CancellationToken) -> Result<(), ApiError> {
    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }
    Ok(())
}

/// Shared check for bulk creates, run before any input is stored or sent.
pub fn validate_batch<R: Resource>(inputs: &[R::Create]) -> Result<(), ApiError> {
    if inputs.is_empty() {
        return Err(ApiError::validation(format!(
            "{} batch must contain at least one item",
            R::PATH
        )));
    }
    inputs.iter().try_for_each(R::validate_create)
}
