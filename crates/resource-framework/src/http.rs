//! # Live Backend
//!
//! `HttpResourceApi<R>` implements [`ResourceApi`] for any resource by translating each call into
//! an [`ApiRequest`] against `/{version}/{R::PATH}` and handing it to the shared
//! [`RequestExecutor`]. Owned collections are replaced with PUT at
//! `/{version}/{R::PATH}/{id}/{R::SUB_PATH}`. Input validation that both backends share
//! (pagination bounds, required create fields, empty batches) runs here before anything is sent.

use crate::api::{validate_batch, CollectionApi, ResourceApi};
use crate::error::ApiError;
use crate::executor::RequestExecutor;
use crate::query::{CollectionResult, Query};
use crate::request::{resource_path, ApiRequest};
use crate::resource::{OwnedCollection, Resource};
use crate::version::ApiVersion;
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

/// Network-backed implementation of [`ResourceApi`].
pub struct HttpResourceApi<R: Resource> {
    executor: Arc<RequestExecutor>,
    version: ApiVersion,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for HttpResourceApi<R> {
    fn clone(&self) -> Self {
        Self {
            executor: self.executor.clone(),
            version: self.version,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> HttpResourceApi<R> {
    pub fn new(executor: Arc<RequestExecutor>, version: ApiVersion) -> Self {
        Self {
            executor,
            version,
            _resource: PhantomData,
        }
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    fn path(&self, id: Option<Uuid>) -> String {
        resource_path(self.version, R::PATH, id, None)
    }
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for HttpResourceApi<R> {
    #[tracing::instrument(skip(self, cancel), fields(resource = R::PATH, version = %self.version))]
    async fn get(&self, id: Uuid, cancel: &CancellationToken) -> Result<R::Dto, ApiError> {
        let request = ApiRequest::get(R::PATH, self.path(Some(id)))
            .for_item(id)
            .embedding(R::EMBEDS);
        self.executor.execute(request, cancel).await?.json()
    }

    #[tracing::instrument(skip(self, cancel), fields(resource = R::PATH, version = %self.version))]
    async fn head(&self, id: Uuid, cancel: &CancellationToken) -> Result<(), ApiError> {
        let request = ApiRequest::head(R::PATH, self.path(Some(id))).for_item(id);
        self.executor.execute(request, cancel).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, query, cancel), fields(resource = R::PATH, version = %self.version))]
    async fn list(
        &self,
        query: Query<R>,
        cancel: &CancellationToken,
    ) -> Result<CollectionResult<R::Dto>, ApiError> {
        query.validate()?;
        debug!(?query, "Sending request");
        let request =
            ApiRequest::get(R::PATH, self.path(None)).with_query(query.query_pairs::<R::Dto>());
        self.executor.execute(request, cancel).await?.json()
    }

    #[tracing::instrument(skip(self, input, cancel), fields(resource = R::PATH, version = %self.version))]
    async fn create(&self, input: R::Create, cancel: &CancellationToken) -> Result<R::Dto, ApiError> {
        R::validate_create(&input)?;
        debug!(?input, "Sending request");
        let request = ApiRequest::post(R::PATH, self.path(None)).with_json(&input)?;
        self.executor.execute(request, cancel).await?.json()
    }

    #[tracing::instrument(skip(self, inputs, cancel), fields(resource = R::PATH, version = %self.version, count = inputs.len()))]
    async fn create_many(
        &self,
        inputs: Vec<R::Create>,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError> {
        validate_batch::<R>(&inputs)?;
        let request = ApiRequest::post(R::PATH, self.path(None)).with_json(&inputs)?;
        self.executor.execute(request, cancel).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, edit, cancel), fields(resource = R::PATH, version = %self.version))]
    async fn update(&self, edit: R::Edit, cancel: &CancellationToken) -> Result<R::Dto, ApiError> {
        let id = R::edit_target(&edit);
        debug!(%id, ?edit, "Sending request");
        let request = ApiRequest::patch(R::PATH, self.path(Some(id)))
            .for_item(id)
            .with_json(&edit)?;
        self.executor.execute(request, cancel).await?.json()
    }

    #[tracing::instrument(skip(self, cancel), fields(resource = R::PATH, version = %self.version))]
    async fn delete(&self, id: Uuid, cancel: &CancellationToken) -> Result<(), ApiError> {
        let request = ApiRequest::delete(R::PATH, self.path(Some(id))).for_item(id);
        self.executor.execute(request, cancel).await?;
        Ok(())
    }
}

#[async_trait]
impl<R: OwnedCollection> CollectionApi<R> for HttpResourceApi<R> {
    #[tracing::instrument(skip(self, items, cancel), fields(resource = R::PATH, sub = R::SUB_PATH, version = %self.version, count = items.len()))]
    async fn replace(
        &self,
        id: Uuid,
        items: Vec<R::Item>,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError> {
        R::validate_items(&items)?;
        let path = resource_path(self.version, R::PATH, Some(id), Some(R::SUB_PATH));
        let request = ApiRequest::put(R::PATH, path)
            .for_item(id)
            .with_json(&items)?;
        self.executor.execute(request, cancel).await?;
        Ok(())
    }
}
