//! In-memory key-value store
//!
//! Cloning yields another handle onto the same storage, so a fresh controller
//! can be built over what a previous one persisted.

use crate::error::StoreError;
use crate::KeyValueStore;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
    denied: bool,
}

impl Inner {
    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

/// Shared in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Create empty store without quota
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty store with a byte quota over all keys and values
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        let store = Self::new();
        store.inner.lock().quota_bytes = Some(quota_bytes);
        store
    }

    /// Deny or allow all access
    pub fn set_denied(&self, denied: bool) {
        self.inner.lock().denied = denied;
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Check if nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self.inner.lock();
        if guard.denied {
            return Err(StoreError::AccessDenied);
        }
        Ok(guard.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.lock();
        if guard.denied {
            return Err(StoreError::AccessDenied);
        }
        if let Some(limit) = guard.quota_bytes {
            let needed = guard.used_bytes_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        guard.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut guard = self.inner.lock();
        if guard.denied {
            return Err(StoreError::AccessDenied);
        }
        guard.entries.remove(key);
        Ok(())
    }
}
