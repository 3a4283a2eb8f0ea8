//! Shelf Catalog
//!
//! Data model for the product listing.
//!
//! # Core Concepts
//!
//! - [`Product`]: A single product record (name, price, optional description and image)
//! - [`Catalog`]: Ordered product sequence, newest first
//! - [`ProductDraft`]: Raw add-product form input, validated into a [`Product`]
//! - [`PriceFormatter`]: Vietnamese-locale price rendering with a currency suffix
//!
//! # Example
//!
//! ```rust
//! use shelf_catalog::{Catalog, ProductDraft};
//!
//! let mut catalog = Catalog::new();
//! let product = ProductDraft::new("Book", "100").validate().unwrap();
//! catalog.insert_front(product);
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.as_slice()[0].name, "Book");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod catalog;
mod draft;
mod price;
mod product;

pub use catalog::Catalog;
pub use draft::{ProductDraft, ValidationError, MIN_DESCRIPTION_CHARS};
pub use price::{format_price, parse_display_price, PriceFormatter, DEFAULT_CURRENCY_SUFFIX};
pub use product::Product;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
