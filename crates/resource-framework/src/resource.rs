//! # Resource Trait
//!
//! The `Resource` trait is the contract every portal resource (players, game servers, reports, …)
//! implements so the generic backends can serve it. It carries no behaviour of its own; it names
//! the DTO, input, filter and ordering types through associated types so that a `PlayerCreate`
//! can never be sent to the game server endpoint.
//!
//! Resources are zero-sized marker types. Two markers may share DTOs (two API versions of the
//! same resource) while differing in their filter type.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Debug;
use uuid::Uuid;

/// A CRUD resource exposed by the portal API.
pub trait Resource: Send + Sync + 'static {
    /// Human-readable name used in logs (e.g. `"Player"`).
    const NAME: &'static str;

    /// Collection path segment on the wire (e.g. `"players"`).
    const PATH: &'static str;

    /// Paths of other resources whose items appear in this resource's expanded reads.
    const EMBEDS: &'static [&'static str] = &[];

    /// Read model returned by every operation.
    type Dto: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    /// Input for `create`. Never carries an id.
    type Create: Serialize + Clone + Debug + Send + Sync + 'static;

    /// Partial update input. Carries the id of the item it targets.
    type Edit: Serialize + Clone + Debug + Send + Sync + 'static;

    /// Scoping and narrowing predicates for `list`.
    type Filter: ResourceFilter<Self::Dto>;

    /// Sort keys accepted by `list`.
    type Order: SortOrder<Self::Dto>;

    /// Id of the item an edit applies to.
    fn edit_target(edit: &Self::Edit) -> Uuid;

    /// Required-field checks run by both backends before any I/O.
    fn validate_create(_input: &Self::Create) -> Result<(), ApiError> {
        Ok(())
    }

    /// Free-text match used by the in-memory backend for `filter_string`. The filter is passed
    /// along since some resources let it choose which fields the text targets.
    fn matches_text(_filter: &Self::Filter, _dto: &Self::Dto, _text: &str) -> bool {
        true
    }
}

/// A list owned by every item of a resource and replaced as a whole, served at
/// `/{version}/{resource}/{id}/{SUB_PATH}`.
pub trait OwnedCollection: Resource {
    const SUB_PATH: &'static str;

    type Item: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    /// Checks run by both backends before a replacement is stored or sent.
    fn validate_items(_items: &[Self::Item]) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Resource-specific list filter.
///
/// Scoping predicates (`in_scope`) define the population counted by `total_records`.
/// Narrowing predicates (`matches`) further reduce it to `filtered_records`.
pub trait ResourceFilter<D>: Default + Clone + Debug + Send + Sync + 'static {
    fn in_scope(&self, _dto: &D) -> bool {
        true
    }

    fn matches(&self, _dto: &D) -> bool {
        true
    }

    /// Query string pairs sent by the live backend.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Filter for resources that accept none.
impl<D> ResourceFilter<D> for () {}

/// Resource-specific sort key.
pub trait SortOrder<D>: Copy + Debug + Send + Sync + 'static {
    fn compare(&self, a: &D, b: &D) -> Ordering;

    /// Value of the `order` query parameter.
    fn as_query_value(&self) -> &'static str;
}

/// Sort key for resources without ordering. Cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unordered {}

impl<D> SortOrder<D> for Unordered {
    fn compare(&self, _a: &D, _b: &D) -> Ordering {
        match *self {}
    }

    fn as_query_value(&self) -> &'static str {
        match *self {}
    }
}

/// Case-insensitive substring match shared by `matches_text` implementations.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_filter_accepts_everything() {
        let filter = ();
        assert!(ResourceFilter::<u32>::in_scope(&filter, &1));
        assert!(ResourceFilter::<u32>::matches(&filter, &1));
        assert!(ResourceFilter::<u32>::query_pairs(&filter).is_empty());
    }

    #[test]
    fn text_match_ignores_case() {
        assert!(contains_ignore_case("Alice-CoD4", "cod4"));
        assert!(!contains_ignore_case("Alice", "bob"));
    }
}
