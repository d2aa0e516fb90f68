//! # Mapping Layer
//!
//! Converts between storage entities and wire DTOs. Mappings are pure functions on the resource
//! marker type:
//!
//! - [`EntityMapping::to_dto`] reads an entity, populating relationship fields only when asked.
//! - [`EntityMapping::to_entity`] builds a fresh entity from a create input. Server-owned fields
//!   (id, creation timestamps) are left at their defaults for the backend to assign.
//! - [`EntityMapping::apply_to`] applies a partial edit to an already loaded entity.
//!
//! ## Expansion depth
//!
//! Relationship fields are filled through [`Expand::related_many`] and [`Expand::related_one`].
//! Both hand the nested mapper [`Expand::None`], so at most one hop of the entity graph is ever
//! materialised and cyclic graphs (player → admin action → player) terminate.

use crate::resource::Resource;
use std::fmt::Debug;

/// How far relationships are populated when mapping to a DTO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expand {
    /// Relationship fields stay empty.
    #[default]
    None,
    /// Direct relationships are mapped, each with `Expand::None`.
    OneHop,
}

impl From<bool> for Expand {
    fn from(expand: bool) -> Self {
        if expand {
            Self::OneHop
        } else {
            Self::None
        }
    }
}

impl Expand {
    pub fn is_expanded(self) -> bool {
        self == Self::OneHop
    }

    /// Expansion handed to related DTOs. Always `None`.
    pub fn nested(self) -> Expand {
        Expand::None
    }

    /// Maps a to-many relationship, or returns an empty list when not expanded.
    pub fn related_many<E, D>(self, related: &[E], map: impl Fn(&E, Expand) -> D) -> Vec<D> {
        if !self.is_expanded() {
            return Vec::new();
        }
        related.iter().map(|item| map(item, self.nested())).collect()
    }

    /// Maps a to-one relationship, or returns `None` when not expanded or absent.
    pub fn related_one<E, D>(self, related: Option<&E>, map: impl Fn(&E, Expand) -> D) -> Option<D> {
        if !self.is_expanded() {
            return None;
        }
        related.map(|item| map(item, self.nested()))
    }
}

/// Entity <-> DTO conversions for a resource.
pub trait EntityMapping: Resource {
    /// Storage shape of the resource, including loaded relationships.
    type Entity: Clone + Debug + Send + Sync + 'static;

    fn to_dto(entity: &Self::Entity, expand: Expand) -> Self::Dto;

    fn to_entity(input: Self::Create) -> Self::Entity;

    fn apply_to(edit: &Self::Edit, entity: &mut Self::Entity);
}
