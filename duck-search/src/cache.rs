//! Bounded in-memory cache of raw response bodies.
//!
//! Keys are fully-formed request URLs, so the query, page offset and safe
//! search flag all take part in the key. Eviction is strictly FIFO: when a
//! new URL is inserted into a full cache, the entry inserted earliest is
//! dropped. Reads never refresh an entry's position.
//!
//! The cache is owned by a [`DuckSearch`](crate::DuckSearch) client and
//! shared with its sources through an `Arc`; a mutex serialises access so the
//! capacity bound holds on multi-threaded runtimes.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

/// FIFO-bounded map from request URL to response body.
#[derive(Debug)]
pub struct ResponseCache {
    capacity: usize,
    inner: Mutex<Entries>,
}

#[derive(Debug, Default)]
struct Entries {
    bodies: HashMap<String, String>,
    /// Insertion order, oldest at the front.
    order: VecDeque<String>,
}

impl ResponseCache {
    /// Create an empty cache holding at most `capacity` bodies.
    ///
    /// A capacity of 0 disables caching: every [`put`](Self::put) is ignored.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(Entries::default()),
        }
    }

    /// Look up the cached body for `url`.
    pub fn get(&self, url: &str) -> Option<String> {
        self.lock().bodies.get(url).cloned()
    }

    /// Store `body` under `url`.
    ///
    /// Inserting a new URL into a full cache first evicts the earliest
    /// inserted entry. Re-inserting a cached URL replaces its body in place.
    pub fn put(&self, url: impl Into<String>, body: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        let url = url.into();
        let body = body.into();
        let mut entries = self.lock();

        if let Some(existing) = entries.bodies.get_mut(&url) {
            *existing = body;
            return;
        }

        if entries.bodies.len() >= self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.bodies.remove(&oldest);
                tracing::trace!(url = %oldest, "evicted cached response");
            }
        }

        entries.order.push_back(url.clone());
        entries.bodies.insert(url, body);
    }

    /// Returns `true` if a body is cached for `url`.
    pub fn contains(&self, url: &str) -> bool {
        self.lock().bodies.contains_key(url)
    }

    /// Number of cached bodies.
    pub fn len(&self) -> usize {
        self.lock().bodies.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of cached bodies.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every cached body.
    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.bodies.clear();
        entries.order.clear();
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // The map and queue are never left half-updated, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
