//! Shelf View
//!
//! Rendered state of the listing page, kept as plain data so it can be
//! driven and inspected without a browser.
//!
//! # Core Concepts
//!
//! - [`ProductList`]: container of rendered item elements, in display order
//! - [`ItemPhase`]: per-item visibility (`Visible`, `FadingOut`, `Hidden`) with its own fade timer
//! - [`FilterControls`] / [`FilterQuery`]: search, price range and sort input
//! - [`FormPanel`]: the add-product panel, its fields and error slot
//! - [`markup`]: HTML projection of the list, and scraping of server-rendered items
//!
//! # Example
//!
//! ```rust
//! use shelf_catalog::Product;
//! use shelf_view::{FilterQuery, ProductList};
//! use std::time::{Duration, Instant};
//!
//! let mut list = ProductList::new();
//! list.render_all(&[Product::new("Pen", 5000.0), Product::new("Lamp", 90000.0)]);
//!
//! let outcome = list.apply(&FilterQuery::all().with_keyword("pen"), Instant::now(), Duration::ZERO);
//! assert_eq!(outcome.shown.len(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod filter;
pub mod form;
pub mod list;
pub mod markup;
pub mod phase;

pub use error::{TransitionError, UnknownSortKey};
pub use filter::{FilterControls, FilterQuery, SortKey};
pub use form::{FormFields, FormPanel, FormPhase};
pub use list::{ElementId, FilterOutcome, ItemElement, ProductList};
pub use markup::{render_item, render_list, scrape_products};
pub use phase::{ItemPhase, PhaseKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with view state
    pub use crate::{
        FilterControls, FilterOutcome, FilterQuery, FormPanel, FormPhase, ItemPhase, ProductList,
        SortKey,
    };
}
