//! # Query Model
//!
//! [`ListQuery`] is the one query shape every resource accepts: a resource-specific filter,
//! optional free text, skip/take pagination and an optional resource-specific order.
//! [`CollectionResult`] is the one response shape every `list` returns.

use crate::error::ApiError;
use crate::resource::{Resource, ResourceFilter, SortOrder};
use serde::{Deserialize, Serialize};

/// Parameters of a `list` call.
#[derive(Debug, Clone)]
pub struct ListQuery<F, O> {
    pub filter: F,
    pub filter_string: Option<String>,
    pub skip: i32,
    pub take: i32,
    pub order: Option<O>,
}

/// `ListQuery` specialised for a resource.
pub type Query<R> = ListQuery<<R as Resource>::Filter, <R as Resource>::Order>;

impl<F: Default, O> ListQuery<F, O> {
    pub fn new(skip: i32, take: i32) -> Self {
        Self {
            filter: F::default(),
            filter_string: None,
            skip,
            take,
            order: None,
        }
    }

    /// First page of `take` items.
    pub fn first(take: i32) -> Self {
        Self::new(0, take)
    }
}

impl<F, O> ListQuery<F, O> {
    pub fn with_filter(mut self, filter: F) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_order(mut self, order: O) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_filter_string(mut self, text: impl Into<String>) -> Self {
        self.filter_string = Some(text.into());
        self
    }

    /// Rejects out-of-range pagination. Bounds are never clamped.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.take <= 0 {
            return Err(ApiError::validation(format!(
                "take must be positive, got {}",
                self.take
            )));
        }
        if self.skip < 0 {
            return Err(ApiError::validation(format!(
                "skip must not be negative, got {}",
                self.skip
            )));
        }
        Ok(())
    }

    /// Trimmed free text, if any was supplied.
    pub fn text(&self) -> Option<&str> {
        self.filter_string
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Wire query string for the live backend.
    pub fn query_pairs<D>(&self) -> Vec<(String, String)>
    where
        F: ResourceFilter<D>,
        O: SortOrder<D>,
    {
        let mut pairs = vec![
            ("skipEntries".to_string(), self.skip.to_string()),
            ("takeEntries".to_string(), self.take.to_string()),
        ];
        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), order.as_query_value().to_string()));
        }
        if let Some(text) = self.text() {
            pairs.push(("filterString".to_string(), text.to_string()));
        }
        pairs.extend(
            self.filter
                .query_pairs()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value)),
        );
        pairs
    }
}

/// A page of items plus the counts around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResult<T> {
    pub items: Vec<T>,
    /// Items in scope, before narrowing filters.
    pub total_records: usize,
    /// Items after every filter, before pagination.
    pub filtered_records: usize,
}

impl<T> CollectionResult<T> {
    pub fn empty(total_records: usize) -> Self {
        Self {
            items: Vec::new(),
            total_records,
            filtered_records: 0,
        }
    }

    /// Builds a page from the already filtered and sorted items.
    pub fn paginate(total_records: usize, filtered: Vec<T>, skip: i32, take: i32) -> Self {
        let filtered_records = filtered.len();
        let skip = usize::try_from(skip).unwrap_or(0);
        let take = usize::try_from(take).unwrap_or(0);
        let items = filtered.into_iter().skip(skip).take(take).collect();
        Self {
            items,
            total_records,
            filtered_records,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CollectionResult<U> {
        CollectionResult {
            items: self.items.into_iter().map(f).collect(),
            total_records: self.total_records,
            filtered_records: self.filtered_records,
        }
    }
}
