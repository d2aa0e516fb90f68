//! Response cache for the live backend.
//!
//! Successful GET bodies are kept per full URL for a fixed TTL. Any successful write to a
//! resource evicts every cached entry of that resource, across API versions, since versions share
//! storage on the server. It also evicts entries that embed the written resource, such as an
//! expanded player read after one of that player's admin actions changes.

use dashmap::DashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CachedResponse {
    resource: &'static str,
    embeds: &'static [&'static str],
    status: u16,
    body: String,
    stored_at: Instant,
}

#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: DashMap<String, CachedResponse>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
        }
    }

    /// Status and body for `key` if present and fresh. Expired entries are dropped.
    pub fn get(&self, key: &str) -> Option<(u16, String)> {
        let fresh = self
            .entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| (entry.status, entry.body.clone()));
        if fresh.is_none() {
            self.entries.remove(key);
        }
        fresh
    }

    pub fn put(
        &self,
        key: String,
        resource: &'static str,
        embeds: &'static [&'static str],
        status: u16,
        body: String,
    ) {
        self.entries.insert(
            key,
            CachedResponse {
                resource,
                embeds,
                status,
                body,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn evict_resource(&self, resource: &str) {
        self.entries.retain(|_, entry| {
            entry.resource != resource && !entry.embeds.iter().any(|embedded| *embedded == resource)
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
