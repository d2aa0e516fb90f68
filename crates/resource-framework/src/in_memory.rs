//! # In-Memory Backend
//!
//! A drop-in replacement for the live backend that keeps entities in process. It honours the same
//! [`ResourceApi`] contract so application code can be tested without a network or database.
//!
//! ## Storage
//!
//! Each entity type lives in an [`InMemoryStore`], a `DashMap` keyed by id. Every insert takes a
//! sequence number from an atomic counter, and listings are returned in sequence order, which is
//! what gives unordered queries a stable result.
//!
//! Stores are owned by a shared context (`InMemoryResource::Context`) rather than by the API
//! object, so two API versions of one resource see the same data and an entity can load related
//! entities of other types before it is mapped.
//!
//! ## List pipeline
//!
//! 1. Map every stored entity to a shallow DTO (`Expand::None`).
//! 2. Keep the ones in scope: their count is `total_records`.
//! 3. Apply the narrowing filter and free text: their count is `filtered_records`.
//! 4. Stable-sort by the requested order; ties keep insertion order.
//! 5. Skip and take.
//!
//! ## Concurrency
//!
//! Single inserts, lookups, updates and removals are atomic per key. A read followed by a write
//! in separate calls is not.

use crate::api::{ensure_active, validate_batch, CollectionApi, ResourceApi};
use crate::error::ApiError;
use crate::mapping::{EntityMapping, Expand};
use crate::query::{CollectionResult, Query};
use crate::resource::{OwnedCollection, Resource, ResourceFilter, SortOrder};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Stored<E> {
    seq: u64,
    entity: E,
}

/// Concurrent keyed store that remembers insertion order.
#[derive(Debug)]
pub struct InMemoryStore<E> {
    items: DashMap<Uuid, Stored<E>>,
    next_seq: AtomicU64,
}

impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self {
            items: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }
}

impl<E: Clone> InMemoryStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced entity keeps its original position.
    pub fn insert(&self, id: Uuid, entity: E) {
        match self.items.entry(id) {
            Entry::Occupied(mut occupied) => occupied.get_mut().entity = entity,
            Entry::Vacant(vacant) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                vacant.insert(Stored { seq, entity });
            }
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<E> {
        self.items.get(id).map(|stored| stored.entity.clone())
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.items.contains_key(id)
    }

    /// Mutates the entity in place under its shard lock and returns the result.
    pub fn update(&self, id: &Uuid, apply: impl FnOnce(&mut E)) -> Option<E> {
        let mut stored = self.items.get_mut(id)?;
        apply(&mut stored.entity);
        Some(stored.entity.clone())
    }

    pub fn remove(&self, id: &Uuid) -> Option<E> {
        self.items.remove(id).map(|(_, stored)| stored.entity)
    }

    /// All entities in insertion order.
    pub fn snapshot(&self) -> Vec<E> {
        let mut stored: Vec<Stored<E>> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        stored.sort_by_key(|s| s.seq);
        stored.into_iter().map(|s| s.entity).collect()
    }

    /// Entities matching `predicate`, in insertion order.
    pub fn find(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        self.snapshot().into_iter().filter(|e| predicate(e)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&self) {
        self.items.clear();
    }
}

/// A resource the in-memory backend can serve.
pub trait InMemoryResource: EntityMapping {
    /// Shared state holding this resource's store (and usually every other resource's).
    type Context: Send + Sync + 'static;

    fn store(ctx: &Self::Context) -> &InMemoryStore<Self::Entity>;

    fn entity_id(entity: &Self::Entity) -> Uuid;

    /// Sets server-owned fields on a freshly mapped entity.
    fn assign_identity(entity: &mut Self::Entity, id: Uuid, now: DateTime<Utc>);

    /// Loads direct relationships from `ctx` so an expanded mapping can see them.
    fn load_related(_entity: &mut Self::Entity, _ctx: &Self::Context) {}
}

/// An owned collection the in-memory backend can replace.
pub trait InMemoryCollection: InMemoryResource + OwnedCollection {
    fn replace_items(entity: &mut Self::Entity, items: Vec<Self::Item>);
}

/// In-process implementation of [`ResourceApi`].
pub struct InMemoryResourceApi<R: InMemoryResource> {
    ctx: Arc<R::Context>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: InMemoryResource> Clone for InMemoryResourceApi<R> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: InMemoryResource> InMemoryResourceApi<R> {
    pub fn new(ctx: Arc<R::Context>) -> Self {
        Self {
            ctx,
            _resource: PhantomData,
        }
    }

    fn store(&self) -> &InMemoryStore<R::Entity> {
        R::store(&self.ctx)
    }

    fn expanded(&self, mut entity: R::Entity) -> R::Dto {
        R::load_related(&mut entity, &self.ctx);
        R::to_dto(&entity, Expand::OneHop)
    }

    fn insert_new(&self, input: R::Create) -> R::Entity {
        let mut entity = R::to_entity(input);
        R::assign_identity(&mut entity, Uuid::new_v4(), Utc::now());
        self.store().insert(R::entity_id(&entity), entity.clone());
        entity
    }
}

/// Runs the list pipeline over already shallow-mapped DTOs.
pub fn query_items<R: Resource>(
    dtos: Vec<R::Dto>,
    query: &Query<R>,
) -> CollectionResult<R::Dto> {
    let scoped: Vec<R::Dto> = dtos
        .into_iter()
        .filter(|dto| query.filter.in_scope(dto))
        .collect();
    let total = scoped.len();

    let text = query.text();
    let mut filtered: Vec<R::Dto> = scoped
        .into_iter()
        .filter(|dto| query.filter.matches(dto))
        .filter(|dto| text.map_or(true, |t| R::matches_text(&query.filter, dto, t)))
        .collect();

    if let Some(order) = &query.order {
        filtered.sort_by(|a, b| order.compare(a, b));
    }

    CollectionResult::paginate(total, filtered, query.skip, query.take)
}

#[async_trait]
impl<R: InMemoryResource> ResourceApi<R> for InMemoryResourceApi<R> {
    #[tracing::instrument(skip(self, cancel), fields(resource = R::PATH))]
    async fn get(&self, id: Uuid, cancel: &CancellationToken) -> Result<R::Dto, ApiError> {
        ensure_active(cancel)?;
        let entity = self.store().get(&id);
        debug!(entity_type = R::NAME, %id, found = entity.is_some(), "Get");
        let entity = entity.ok_or_else(|| ApiError::not_found(R::PATH, id))?;
        Ok(self.expanded(entity))
    }

    #[tracing::instrument(skip(self, cancel), fields(resource = R::PATH))]
    async fn head(&self, id: Uuid, cancel: &CancellationToken) -> Result<(), ApiError> {
        ensure_active(cancel)?;
        if self.store().contains(&id) {
            Ok(())
        } else {
            Err(ApiError::not_found(R::PATH, id))
        }
    }

    #[tracing::instrument(skip(self, query, cancel), fields(resource = R::PATH))]
    async fn list(
        &self,
        query: Query<R>,
        cancel: &CancellationToken,
    ) -> Result<CollectionResult<R::Dto>, ApiError> {
        ensure_active(cancel)?;
        query.validate()?;
        let dtos = self
            .store()
            .snapshot()
            .iter()
            .map(|entity| R::to_dto(entity, Expand::None))
            .collect();
        let result = query_items::<R>(dtos, &query);
        debug!(
            entity_type = R::NAME,
            total = result.total_records,
            filtered = result.filtered_records,
            returned = result.items.len(),
            "List"
        );
        Ok(result)
    }

    #[tracing::instrument(skip(self, input, cancel), fields(resource = R::PATH))]
    async fn create(&self, input: R::Create, cancel: &CancellationToken) -> Result<R::Dto, ApiError> {
        ensure_active(cancel)?;
        debug!(entity_type = R::NAME, ?input, "Create");
        R::validate_create(&input)?;
        let entity = self.insert_new(input);
        info!(
            entity_type = R::NAME,
            id = %R::entity_id(&entity),
            size = self.store().len(),
            "Created"
        );
        Ok(self.expanded(entity))
    }

    #[tracing::instrument(skip(self, inputs, cancel), fields(resource = R::PATH, count = inputs.len()))]
    async fn create_many(
        &self,
        inputs: Vec<R::Create>,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError> {
        ensure_active(cancel)?;
        validate_batch::<R>(&inputs)?;
        for input in inputs {
            self.insert_new(input);
        }
        info!(entity_type = R::NAME, size = self.store().len(), "Created batch");
        Ok(())
    }

    #[tracing::instrument(skip(self, edit, cancel), fields(resource = R::PATH))]
    async fn update(&self, edit: R::Edit, cancel: &CancellationToken) -> Result<R::Dto, ApiError> {
        ensure_active(cancel)?;
        let id = R::edit_target(&edit);
        debug!(entity_type = R::NAME, %id, ?edit, "Update");
        let entity = self
            .store()
            .update(&id, |entity| R::apply_to(&edit, entity))
            .ok_or_else(|| ApiError::not_found(R::PATH, id))?;
        info!(entity_type = R::NAME, %id, "Updated");
        Ok(self.expanded(entity))
    }

    #[tracing::instrument(skip(self, cancel), fields(resource = R::PATH))]
    async fn delete(&self, id: Uuid, cancel: &CancellationToken) -> Result<(), ApiError> {
        ensure_active(cancel)?;
        self.store()
            .remove(&id)
            .ok_or_else(|| ApiError::not_found(R::PATH, id))?;
        info!(entity_type = R::NAME, %id, size = self.store().len(), "Deleted");
        Ok(())
    }
}

#[async_trait]
impl<R: InMemoryCollection> CollectionApi<R> for InMemoryResourceApi<R> {
    #[tracing::instrument(skip(self, items, cancel), fields(resource = R::PATH, sub = R::SUB_PATH))]
    async fn replace(
        &self,
        id: Uuid,
        items: Vec<R::Item>,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError> {
        ensure_active(cancel)?;
        R::validate_items(&items)?;
        let count = items.len();
        self.store()
            .update(&id, |entity| R::replace_items(entity, items))
            .ok_or_else(|| ApiError::not_found(R::PATH, id))?;
        info!(entity_type = R::NAME, %id, collection = R::SUB_PATH, count, "Replaced");
        Ok(())
    }
}
