//! Testing utilities for Shelf workspace
//!
//! Shared fixtures: seed markup, sample products, and controllers wired to
//! in-memory storage.

#![allow(missing_docs)]

use shelf_catalog::{Catalog, Product};
use shelf_core::{CatalogController, InitialPage, ShelfConfig};
use shelf_storage::{CatalogStore, MemoryStore};
use shelf_view::FilterControls;
use std::time::Instant;

/// Server-rendered listing with three products, as a shop page ships it
pub const SEED_MARKUP: &str = r#"
<section id="product-list" class="products">
  <article class="product-item">
    <img src="https://cdn.example.com/lamp.png" alt="Desk Lamp">
    <h3 class="product-name">Desk Lamp</h3>
    <p class="product-desc">Warm light, adjustable arm</p>
    <p class="price">350.000 ₫</p>
  </article>
  <article class="product-item">
    <h3 class="product-name">Notebook</h3>
    <p class="product-desc">A5, dotted</p>
    <p class="price">45.000 ₫</p>
  </article>
  <article class="product-item">
    <h3 class="product-name">Fountain Pen</h3>
    <p class="price">1.200.000 ₫</p>
  </article>
</section>
"#;

pub fn seed_markup() -> &'static str {
    SEED_MARKUP
}

/// Products equal to what [`SEED_MARKUP`] scrapes to
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("Desk Lamp", 350_000.0)
            .with_description("Warm light, adjustable arm")
            .with_image_url("https://cdn.example.com/lamp.png"),
        Product::new("Notebook", 45_000.0).with_description("A5, dotted"),
        Product::new("Fountain Pen", 1_200_000.0),
    ]
}

/// A small catalog with mixed prices and name casing
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("banana", 12_000.0),
        Product::new("Apple", 30_000.0),
        Product::new("cherry", 95_000.0),
        Product::new("apple pie", 55_000.0),
    ]
}

/// Memory store that already holds `products` under the default key
pub fn memory_store_with(products: Vec<Product>) -> MemoryStore {
    let memory = MemoryStore::new();
    CatalogStore::new(memory.clone()).save(&Catalog::from(products));
    memory
}

/// Controller seeded from [`SEED_MARKUP`] over a fresh memory store
///
/// The returned store shares storage with the controller.
pub fn controller_with_memory_store() -> (CatalogController<MemoryStore>, MemoryStore) {
    controller_over(MemoryStore::new(), FilterControls::default())
}

/// Controller over `memory` with prefilled controls
pub fn controller_over(
    memory: MemoryStore,
    controls: FilterControls,
) -> (CatalogController<MemoryStore>, MemoryStore) {
    let controller = CatalogController::initialize(
        ShelfConfig::default(),
        memory.clone(),
        InitialPage::new(SEED_MARKUP).with_controls(controls),
        Instant::now(),
    );
    (controller, memory)
}

/// Names of visible items, in container order
pub fn visible_names(controller: &CatalogController<MemoryStore>) -> Vec<String> {
    controller
        .list()
        .visible_products()
        .map(|p| p.name.clone())
        .collect()
}

/// Open the form, fill it and submit
pub fn submit_product(
    controller: &mut CatalogController<MemoryStore>,
    name: &str,
    price: &str,
    description: &str,
    image_url: &str,
) -> Result<shelf_core::Submitted, shelf_catalog::ValidationError> {
    if controller.form().is_hidden() {
        controller.toggle_form();
    }
    let fields = &mut controller.form_mut().fields;
    fields.name = name.to_string();
    fields.price = price.to_string();
    fields.description = description.to_string();
    fields.image_url = image_url.to_string();
    controller.submit(Instant::now())
}
