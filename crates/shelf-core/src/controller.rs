//! Catalog Controller
//!
//! Owns the catalog and everything rendered from it:
//! - Seeds the catalog from storage, or once from page markup
//! - Filters and sorts the rendered items
//! - Validates and inserts submitted products
//! - Persists the catalog after every insertion

use crate::config::ShelfConfig;
use crate::error::ShelfError;
use crate::event::{Effect, FormField, Key, Submitted, UiEvent};
use shelf_catalog::{Catalog, PriceFormatter, ValidationError};
use shelf_storage::{CatalogStore, FileStore, KeyValueStore};
use shelf_view::{markup, ElementId, FilterControls, FilterOutcome, FormPanel, ProductList};
use std::time::Instant;

/// Where the catalog came from at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Non-empty catalog found in storage
    Storage,
    /// Derived from page markup and persisted
    Markup,
}

/// Page state at startup
#[derive(Debug, Clone, Default)]
pub struct InitialPage<'a> {
    /// Server-rendered listing markup
    pub markup: &'a str,
    /// Control values already present (e.g. autofill)
    pub controls: FilterControls,
}

impl<'a> InitialPage<'a> {
    /// Page with markup and empty controls
    #[inline]
    #[must_use]
    pub fn new(markup: &'a str) -> Self {
        Self {
            markup,
            controls: FilterControls::default(),
        }
    }

    /// With prefilled controls
    #[inline]
    #[must_use]
    pub fn with_controls(mut self, controls: FilterControls) -> Self {
        self.controls = controls;
        self
    }
}

/// The single owner of catalog and page state
#[derive(Debug)]
pub struct CatalogController<S> {
    config: ShelfConfig,
    store: CatalogStore<S>,
    catalog: Catalog,
    origin: CatalogOrigin,
    list: ProductList,
    controls: FilterControls,
    form: FormPanel,
    formatter: PriceFormatter,
}

impl CatalogController<FileStore> {
    /// Initialize over a file store in the configured data directory
    ///
    /// # Errors
    /// Returns `ShelfError::Config` if the config fails validation, or
    /// `ShelfError::MissingDataDir` if it names no directory.
    pub fn open_in_data_dir(
        config: ShelfConfig,
        page: InitialPage<'_>,
        now: Instant,
    ) -> Result<Self, ShelfError> {
        config.validate()?;
        let dir = config.data_dir.clone().ok_or(ShelfError::MissingDataDir)?;
        Ok(Self::initialize(config, FileStore::new(dir), page, now))
    }
}

impl<S: KeyValueStore> CatalogController<S> {
    /// Load the catalog, or derive it from the page
    ///
    /// A stored, non-empty catalog wins and replaces whatever the page
    /// rendered. Otherwise the page markup is scraped and the result is
    /// persisted straight away. If the search box already holds text, one
    /// filter pass runs.
    pub fn initialize(config: ShelfConfig, store: S, page: InitialPage<'_>, now: Instant) -> Self {
        let store = CatalogStore::with_key(store, config.storage_key.clone());
        let formatter = PriceFormatter::new(config.currency_suffix.clone());

        let (catalog, origin) = match store.load() {
            Some(catalog) if !catalog.is_empty() => (catalog, CatalogOrigin::Storage),
            _ => {
                let catalog = Catalog::from(markup::scrape_products(page.markup));
                store.save(&catalog);
                (catalog, CatalogOrigin::Markup)
            }
        };
        tracing::info!(products = catalog.len(), origin = ?origin, "catalog initialized");

        let mut list = ProductList::new();
        list.render_all(&catalog);

        let mut controller = Self {
            config,
            store,
            catalog,
            origin,
            list,
            controls: page.controls,
            form: FormPanel::new(),
            formatter,
        };
        if !controller.controls.keyword.is_empty() {
            controller.apply_filter(now);
        }
        controller
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// Catalog, newest first
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Where the catalog came from
    #[inline]
    #[must_use]
    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    /// Rendered items
    #[inline]
    #[must_use]
    pub fn list(&self) -> &ProductList {
        &self.list
    }

    /// Current control values
    #[inline]
    #[must_use]
    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    /// Mutable control values; call [`Self::apply_filter`] to act on them
    #[inline]
    pub fn controls_mut(&mut self) -> &mut FilterControls {
        &mut self.controls
    }

    /// Add-product panel
    #[inline]
    #[must_use]
    pub fn form(&self) -> &FormPanel {
        &self.form
    }

    /// Mutable add-product panel, for filling fields
    #[inline]
    pub fn form_mut(&mut self) -> &mut FormPanel {
        &mut self.form
    }

    /// Underlying catalog store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    /// Price formatter in use
    #[inline]
    #[must_use]
    pub fn formatter(&self) -> &PriceFormatter {
        &self.formatter
    }

    /// Dispatch one page event
    pub fn handle(&mut self, event: UiEvent, now: Instant) -> Effect {
        match event {
            UiEvent::SearchInput(text) => {
                self.controls.keyword = text;
                Effect::None
            }
            UiEvent::SearchClicked | UiEvent::SearchKeyUp(Key::Enter) => {
                Effect::Filtered(self.apply_filter(now))
            }
            UiEvent::SearchKeyUp(Key::Other) => Effect::None,
            UiEvent::PriceMinInput(text) => {
                self.controls.price_min = text;
                Effect::Filtered(self.apply_filter(now))
            }
            UiEvent::PriceMaxInput(text) => {
                self.controls.price_max = text;
                Effect::Filtered(self.apply_filter(now))
            }
            UiEvent::SortChanged(value) => {
                self.controls.sort = value;
                Effect::Filtered(self.apply_filter(now))
            }
            UiEvent::AddProductClicked => {
                self.toggle_form();
                Effect::None
            }
            UiEvent::FieldInput(field, text) => {
                let fields = &mut self.form.fields;
                match field {
                    FormField::Name => fields.name = text,
                    FormField::Price => fields.price = text,
                    FormField::Description => fields.description = text,
                    FormField::ImageUrl => fields.image_url = text,
                }
                Effect::None
            }
            UiEvent::Submit => match self.submit(now) {
                Ok(submitted) => Effect::Added(submitted),
                Err(e) => Effect::Rejected(e),
            },
            UiEvent::CancelClicked => {
                self.cancel_form();
                Effect::None
            }
            UiEvent::FormTransitionEnd => {
                self.form_transition_end();
                Effect::None
            }
            UiEvent::Tick => Effect::Settled(self.advance(now)),
        }
    }

    /// Run one filter pass with the current control values
    ///
    /// Only rendered state changes; the catalog and storage are untouched.
    pub fn apply_filter(&mut self, now: Instant) -> FilterOutcome {
        let query = self.controls.query();
        self.list.apply(&query, now, self.config.fade_out())
    }

    /// Validate the form and insert the product at the front
    ///
    /// On success the catalog is persisted, the new item is rendered first,
    /// the form is reset and hidden, and the current filter is re-applied.
    ///
    /// # Errors
    /// Returns the first failing validation rule; its message is also put in
    /// the form's error slot.
    pub fn submit(&mut self, now: Instant) -> Result<Submitted, ValidationError> {
        let product = match self.form.fields.to_draft().validate() {
            Ok(product) => product,
            Err(e) => {
                tracing::debug!(error = %e, "submission rejected");
                self.form.show_error(e.to_string());
                return Err(e);
            }
        };

        self.form.clear_error();
        self.catalog.insert_front(product.clone());
        self.store.save(&self.catalog);
        tracing::info!(name = %product.name, price = product.price, "product added");

        let element = self.list.prepend(product);
        self.form.close_immediately();
        let outcome = self.apply_filter(now);

        Ok(Submitted { element, outcome })
    }

    /// Add-product button
    pub fn toggle_form(&mut self) {
        self.form.toggle(self.config.animate_form);
    }

    /// Cancel button: reset fields, clear error, close
    pub fn cancel_form(&mut self) {
        self.form.cancel(self.config.animate_form);
    }

    /// Form close animation finished
    pub fn form_transition_end(&mut self) -> bool {
        self.form.transition_end()
    }

    /// Fire due fade timers
    pub fn advance(&mut self, now: Instant) -> Vec<ElementId> {
        self.list.advance(now)
    }

    /// Earliest pending fade timer
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.list.next_deadline()
    }

    /// HTML projection of the listing
    #[must_use]
    pub fn render_html(&self) -> String {
        markup::render_list(&self.list, &self.formatter)
    }
}
