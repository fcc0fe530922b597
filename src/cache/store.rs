use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use super::Clock;
use crate::state::data::{Recipe, RecipeSummary};

/// Request signature: operation plus normalized parameters
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Search(String),
    Lookup(String),
    Category(String),
    Categories,
}

impl CacheKey {
    pub fn search(query: &str) -> Self {
        CacheKey::Search(query.trim().to_string())
    }

    pub fn lookup(id: &str) -> Self {
        CacheKey::Lookup(id.trim().to_string())
    }

    pub fn category(category: &str) -> Self {
        CacheKey::Category(category.trim().to_string())
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Search(query) => write!(f, "search:{query}"),
            CacheKey::Lookup(id) => write!(f, "lookup:{id}"),
            CacheKey::Category(category) => write!(f, "category:{category}"),
            CacheKey::Categories => f.write_str("categories"),
        }
    }
}

/// Cached response payloads, one variant per operation
#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    Summaries(Vec<RecipeSummary>),
    Recipe(Option<Recipe>),
    Categories(Vec<String>),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CacheValue,
    fetched_at: DateTime<Utc>,
}

/// Session-wide response cache with a fixed freshness window.
///
/// Entries are only ever superseded; a stale entry stays in the map
/// until the next successful fetch for its key replaces it.
pub struct ResponseCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    clock: Arc<dyn Clock>,
    freshness: Duration,
}

impl ResponseCache {
    pub fn new(clock: Arc<dyn Clock>, freshness: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
            freshness,
        }
    }

    /// Fresh value for `key`, or `None` if absent or older than the window
    pub fn get(&self, key: &CacheKey) -> Option<CacheValue> {
        let now = self.clock.now();
        let entries = self.entries.lock();
        let entry = entries.get(key)?;
        if now - entry.fetched_at < self.freshness {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Store `value` stamped with the current time
    pub fn put(&self, key: CacheKey, value: CacheValue) {
        let fetched_at = self.clock.now();
        self.entries.lock().insert(key, CacheEntry { value, fetched_at });
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

impl fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCache")
            .field("entries", &self.len())
            .field("freshness", &self.freshness)
            .finish()
    }
}
