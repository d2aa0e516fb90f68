//! Backends produce one `ResourceApi` per resource and version. The facade is built once from a
//! backend and never looks at it again.

use crate::lifecycle::FakeDataStore;
use resource_framework::{
    ApiVersion, CollectionApi, HttpResourceApi, InMemoryCollection, InMemoryResource,
    InMemoryResourceApi, RequestExecutor, ResourceApi,
};
use std::sync::Arc;

/// A resource both backends can serve: anything whose in-memory storage lives in
/// [`FakeDataStore`].
pub trait PortalResource: InMemoryResource<Context = FakeDataStore> {}

impl<R: InMemoryResource<Context = FakeDataStore>> PortalResource for R {}

/// An owned collection both backends can replace.
pub trait PortalCollection: PortalResource + InMemoryCollection {}

impl<R: PortalResource + InMemoryCollection> PortalCollection for R {}

pub trait Backend {
    fn bind<R: PortalResource>(&self, version: ApiVersion) -> Arc<dyn ResourceApi<R>>;

    fn bind_collection<R: PortalCollection>(
        &self,
        version: ApiVersion,
    ) -> Arc<dyn CollectionApi<R>>;
}

/// Talks to the portal over HTTP through one shared executor.
#[derive(Debug, Clone)]
pub struct LiveBackend {
    executor: Arc<RequestExecutor>,
}

impl LiveBackend {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }
}

impl Backend for LiveBackend {
    fn bind<R: PortalResource>(&self, version: ApiVersion) -> Arc<dyn ResourceApi<R>> {
        Arc::new(HttpResourceApi::<R>::new(self.executor.clone(), version))
    }

    fn bind_collection<R: PortalCollection>(
        &self,
        version: ApiVersion,
    ) -> Arc<dyn CollectionApi<R>> {
        Arc::new(HttpResourceApi::<R>::new(self.executor.clone(), version))
    }
}

/// Serves every resource from one shared in-memory store. The version is ignored.
#[derive(Debug, Clone)]
pub struct FakeBackend {
    store: Arc<FakeDataStore>,
}

impl FakeBackend {
    pub fn new(store: Arc<FakeDataStore>) -> Self {
        Self { store }
    }
}

impl Backend for FakeBackend {
    fn bind<R: PortalResource>(&self, _version: ApiVersion) -> Arc<dyn ResourceApi<R>> {
        Arc::new(InMemoryResourceApi::<R>::new(self.store.clone()))
    }

    fn bind_collection<R: PortalCollection>(
        &self,
        _version: ApiVersion,
    ) -> Arc<dyn CollectionApi<R>> {
        Arc::new(InMemoryResourceApi::<R>::new(self.store.clone()))
    }
}
