//! Shelf Storage
//!
//! Persisted state for the catalog: a string key-value store scoped to one
//! origin, and a catalog mirror on top of it that never lets a storage
//! failure escape.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──save──▶ CatalogStore ──JSON──▶ KeyValueStore ("products")
//!    ▲                   │                     ├── MemoryStore
//!    └──────load─────────┘                     └── FileStore
//! ```
//!
//! # Example
//!
//! ```rust
//! use shelf_catalog::{Catalog, Product};
//! use shelf_storage::{CatalogStore, MemoryStore};
//!
//! let store = CatalogStore::new(MemoryStore::new());
//! assert!(store.load().is_none());
//!
//! store.save(&Catalog::from(vec![Product::new("Book", 100.0)]));
//! assert_eq!(store.load().unwrap().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod file;
pub mod memory;
pub mod persist;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persist::{CatalogStore, DEFAULT_STORAGE_KEY};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// String key-value storage surviving restarts
///
/// Implementations use interior mutability so a store can be shared by
/// handle, the way browser local storage is shared by every script on a page.
pub trait KeyValueStore {
    /// Read value for key, `None` if absent
    ///
    /// # Errors
    /// Returns error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write value for key, replacing any previous value
    ///
    /// # Errors
    /// Returns error on quota exhaustion, denied access, or IO failure.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove key if present
    ///
    /// # Errors
    /// Returns error if the backing storage cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with shelf storage
    pub use crate::{CatalogStore, FileStore, KeyValueStore, MemoryStore, StoreError};
}
