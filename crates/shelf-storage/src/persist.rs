//! Catalog persistence
//!
//! The catalog is mirrored under a single key as a JSON array. Reading treats
//! every failure as "nothing stored"; writing is best-effort and failures are
//! only logged.

use crate::error::StoreError;
use crate::KeyValueStore;
use shelf_catalog::Catalog;

/// Key the catalog is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "products";

/// Catalog mirror over a key-value store
#[derive(Debug, Clone)]
pub struct CatalogStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Create mirror under the default key
    #[inline]
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Create mirror under a custom key
    #[inline]
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Storage key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load stored catalog
    ///
    /// Missing key, unreadable storage, malformed JSON and non-array JSON all
    /// read as `None`.
    #[must_use]
    pub fn load(&self) -> Option<Catalog> {
        match self.try_load() {
            Ok(Some(catalog)) => {
                tracing::debug!(key = %self.key, products = catalog.len(), "loaded stored catalog");
                Some(catalog)
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored catalog");
                None
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "ignoring unreadable stored catalog");
                None
            }
        }
    }

    /// Load stored catalog, reporting why it could not be read
    ///
    /// # Errors
    /// Returns error if storage cannot be read or holds something other than
    /// a product array.
    pub fn try_load(&self) -> Result<Option<Catalog>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Catalog>(&raw)
            .map(Some)
            .map_err(|e| StoreError::malformed(&self.key, e.to_string()))
    }

    /// Persist catalog, ignoring failures
    pub fn save(&self, catalog: &Catalog) {
        if let Err(e) = self.try_save(catalog) {
            tracing::warn!(key = %self.key, error = %e, "catalog not persisted");
        }
    }

    /// Persist catalog
    ///
    /// # Errors
    /// Returns the storage error on quota exhaustion, denied access or IO
    /// failure.
    pub fn try_save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let json = serde_json::to_string(catalog).map_err(|e| StoreError::Encode(e.to_string()))?;
        self.store.set(&self.key, &json)?;
        tracing::debug!(
            key = %self.key,
            products = catalog.len(),
            bytes = json.len(),
            "catalog persisted"
        );
        Ok(())
    }
}
