//! Shelf Core - Catalog Controller
//!
//! The single owner of the product catalog and the page rendered from it:
//! - Loads the catalog from storage, or seeds it once from page markup
//! - Filters and sorts rendered items by keyword, price range and sort key
//! - Validates add-product submissions and inserts them at the front
//! - Persists the catalog after every insertion, best-effort
//!
//! # Example
//!
//! ```rust
//! use shelf_core::{CatalogController, InitialPage, ShelfConfig};
//! use shelf_storage::MemoryStore;
//! use std::time::Instant;
//!
//! let mut controller = CatalogController::initialize(
//!     ShelfConfig::default(),
//!     MemoryStore::new(),
//!     InitialPage::new(""),
//!     Instant::now(),
//! );
//!
//! controller.toggle_form();
//! controller.form_mut().fields.name = "Book".to_string();
//! controller.form_mut().fields.price = "100".to_string();
//! controller.submit(Instant::now()).unwrap();
//!
//! assert_eq!(controller.catalog().as_slice()[0].name, "Book");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod event;

pub use config::{ShelfConfig, DEFAULT_FADE_OUT_MS};
pub use controller::{CatalogController, CatalogOrigin, InitialPage};
pub use driver::settle_transitions;
pub use error::{ConfigError, ShelfError};
pub use event::{Effect, FormField, Key, Submitted, UiEvent};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the catalog controller
    pub use crate::{
        settle_transitions, CatalogController, Effect, InitialPage, ShelfConfig, UiEvent,
    };
    pub use shelf_catalog::{Catalog, Product, ProductDraft};
    pub use shelf_storage::{FileStore, KeyValueStore, MemoryStore};
    pub use shelf_view::{FilterControls, SortKey};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
