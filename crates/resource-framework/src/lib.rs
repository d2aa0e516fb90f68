//! # Resource Framework
//!
//! Building blocks for a typed, versioned client over a CRUD HTTP API, with an in-memory backend
//! that satisfies exactly the same contract.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`Resource`], [`EntityMapping`]): what a resource is. DTOs, inputs,
//!    filters, orderings and the mapping between storage entities and DTOs.
//! 2. **Contract Layer** ([`ResourceApi`]): the operations every resource offers (`get`, `head`,
//!    `list`, `create`, `create_many`, `update`, `delete`), each cancellable, plus
//!    [`CollectionApi`] for collections an item owns and replaces as a whole.
//! 3. **Backend Layer**: interchangeable implementations of the contract.
//!    - [`HttpResourceApi`] sends requests through a shared [`RequestExecutor`].
//!    - [`InMemoryResourceApi`] serves entities from [`InMemoryStore`]s.
//!    - [`mock::MockResourceApi`] replays scripted outcomes for fault injection.
//!
//! A resource is described **once** through its marker type, and every backend serves it without
//! per-resource code.
//!
//! ## Example
//!
//! ```rust
//! use resource_framework::{
//!     EntityMapping, Expand, InMemoryResource, InMemoryResourceApi, InMemoryStore, ListQuery,
//!     Resource, ResourceApi, Unordered,
//! };
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use uuid::Uuid;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct TagDto { id: Uuid, name: String }
//! #[derive(Debug, Clone, Serialize)]
//! struct TagCreate { name: String }
//! #[derive(Debug, Clone, Serialize)]
//! struct TagEdit { id: Uuid }
//!
//! struct Tags;
//!
//! impl Resource for Tags {
//!     const NAME: &'static str = "Tag";
//!     const PATH: &'static str = "tags";
//!     type Dto = TagDto;
//!     type Create = TagCreate;
//!     type Edit = TagEdit;
//!     type Filter = ();
//!     type Order = Unordered;
//!     fn edit_target(edit: &TagEdit) -> Uuid { edit.id }
//! }
//!
//! impl EntityMapping for Tags {
//!     type Entity = TagDto;
//!     fn to_dto(entity: &TagDto, _: Expand) -> TagDto { entity.clone() }
//!     fn to_entity(input: TagCreate) -> TagDto { TagDto { id: Uuid::nil(), name: input.name } }
//!     fn apply_to(_: &TagEdit, _: &mut TagDto) {}
//! }
//!
//! impl InMemoryResource for Tags {
//!     type Context = InMemoryStore<TagDto>;
//!     fn store(ctx: &Self::Context) -> &InMemoryStore<TagDto> { ctx }
//!     fn entity_id(entity: &TagDto) -> Uuid { entity.id }
//!     fn assign_identity(entity: &mut TagDto, id: Uuid, _: chrono::DateTime<chrono::Utc>) {
//!         entity.id = id;
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let api: Arc<dyn ResourceApi<Tags>> =
//!         Arc::new(InMemoryResourceApi::<Tags>::new(Arc::new(InMemoryStore::new())));
//!     let cancel = CancellationToken::new();
//!
//!     let tag = api.create(TagCreate { name: "vip".into() }, &cancel).await.unwrap();
//!     let page = api.list(ListQuery::first(10), &cancel).await.unwrap();
//!     assert_eq!(page.total_records, 1);
//!     assert_eq!(api.get(tag.id, &cancel).await.unwrap().name, "vip");
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod in_memory;
pub mod mapping;
pub mod mock;
pub mod patch;
pub mod query;
pub mod request;
pub mod resource;
pub mod version;

pub use api::{CollectionApi, ResourceApi};
pub use auth::{NoAuth, StaticToken, TokenProvider};
pub use config::ClientSettings;
pub use error::{ApiError, ConfigError};
pub use executor::RequestExecutor;
pub use http::HttpResourceApi;
pub use in_memory::{InMemoryCollection, InMemoryResource, InMemoryResourceApi, InMemoryStore};
pub use mapping::{EntityMapping, Expand};
pub use patch::Patch;
pub use query::{CollectionResult, ListQuery, Query};
pub use request::{ApiRequest, ApiResponse};
pub use resource::{OwnedCollection, Resource, ResourceFilter, SortOrder, Unordered};
pub use version::ApiVersion;
