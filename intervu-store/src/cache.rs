use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entries older than this are discarded on read (30 minutes).
pub const DEFAULT_TTL_MS: i64 = 1_800_000;

/// A value with its write timestamp. Serialized as `{ "data": …,
/// "timestamp": <epoch millis> }`, the payload shape the original client
/// kept in local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cached<T> {
    pub data: T,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub stored_at: DateTime<Utc>,
}

impl<T> Cached<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            stored_at: Utc::now(),
        }
    }

    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.stored_at < ttl
    }
}

/// Keyed store for session state, JSON-encoded, with a TTL check on every
/// read. Scoped to one client session, so there is no concurrent writer.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    entries: HashMap<String, String>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn with_default_ttl() -> Self {
        Self::new(Duration::milliseconds(DEFAULT_TTL_MS))
    }

    /// Store a value under `key` with a fresh timestamp, replacing any
    /// previous entry.
    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&Cached::new(value))?;
        self.entries.insert(key.to_string(), payload);
        Ok(())
    }

    /// Read a value, evicting it first if it is older than the TTL.
    pub fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, StoreError> {
        self.get_at(key, Utc::now())
    }

    fn get_at<T: DeserializeOwned>(
        &mut self,
        key: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<T>, StoreError> {
        let Some(payload) = self.entries.get(key) else {
            return Ok(None);
        };
        let cached: Cached<T> = serde_json::from_str(payload)?;
        if cached.is_fresh(self.ttl, now) {
            Ok(Some(cached.data))
        } else {
            tracing::debug!(key, "cache entry expired");
            self.entries.remove(key);
            Ok(None)
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed cache entry: {0}")]
    Malformed(#[from] serde_json::Error),
}
