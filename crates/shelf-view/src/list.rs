//! Product list container
//!
//! Holds one element per rendered product, in container order. Filtering
//! only changes element phases and, when sorting, element order; the catalog
//! is never touched.

use crate::filter::{FilterQuery, SortKey};
use crate::phase::ItemPhase;
use shelf_catalog::Product;
use std::fmt;
use std::time::{Duration, Instant};

/// Identity of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// A rendered product
#[derive(Debug, Clone, PartialEq)]
pub struct ItemElement {
    /// Element identity
    pub id: ElementId,
    /// Product this element projects
    pub product: Product,
    /// Visibility
    pub phase: ItemPhase,
}

/// What a filter pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Matching items, in container order after the pass
    pub shown: Vec<ElementId>,
    /// Non-matching items
    pub hidden: Vec<ElementId>,
    /// Matching items that were not visible before the pass (fade in)
    pub revealed: Vec<ElementId>,
}

/// Ordered container of rendered items
#[derive(Debug, Clone, Default)]
pub struct ProductList {
    items: Vec<ItemElement>,
    next_id: u64,
}

impl ProductList {
    /// Create empty container
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Replace all content with one visible element per product
    pub fn render_all<'a>(&mut self, products: impl IntoIterator<Item = &'a Product>) {
        self.items.clear();
        for product in products {
            let id = self.allocate();
            self.items.push(ItemElement {
                id,
                product: product.clone(),
                phase: ItemPhase::Visible,
            });
        }
    }

    /// Insert a visible element at the front
    pub fn prepend(&mut self, product: Product) -> ElementId {
        let id = self.allocate();
        self.items.insert(
            0,
            ItemElement {
                id,
                product,
                phase: ItemPhase::Visible,
            },
        );
        id
    }

    /// Elements in container order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[ItemElement] {
        &self.items
    }

    /// Element by id
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&ItemElement> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of elements, hidden ones included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if container is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Products of fully visible elements, in container order
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        self.items
            .iter()
            .filter(|item| item.phase.is_visible())
            .map(|item| &item.product)
    }

    /// Run one filter pass over the rendered elements
    ///
    /// Matching elements are shown, others start fading out and leave layout
    /// once `fade` has elapsed. With a sort key, visible elements are moved
    /// to the end of the container in key order; everything else keeps its
    /// relative position.
    pub fn apply(&mut self, query: &FilterQuery, now: Instant, fade: Duration) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        for item in &mut self.items {
            if query.matches(&item.product) {
                if item.phase.show() {
                    outcome.revealed.push(item.id);
                }
            } else {
                item.phase.hide(now, fade);
                outcome.hidden.push(item.id);
            }
        }

        if query.sort != SortKey::None {
            let (mut visible, rest): (Vec<_>, Vec<_>) = self
                .items
                .drain(..)
                .partition(|item| item.phase.is_visible());
            visible.sort_by(|a, b| query.sort.compare(&a.product, &b.product));
            self.items = rest;
            self.items.extend(visible);
        }

        outcome.shown = self
            .items
            .iter()
            .filter(|item| item.phase.is_visible())
            .map(|item| item.id)
            .collect();

        tracing::debug!(
            keyword = %query.keyword,
            min = ?query.min,
            max = ?query.max,
            sort = %query.sort,
            shown = outcome.shown.len(),
            hidden = outcome.hidden.len(),
            "filter applied"
        );
        outcome
    }

    /// Fire due fade timers; returns elements that left layout
    pub fn advance(&mut self, now: Instant) -> Vec<ElementId> {
        self.items
            .iter_mut()
            .filter_map(|item| item.phase.advance(now).then_some(item.id))
            .collect()
    }

    /// Earliest pending fade timer
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.items.iter().filter_map(|item| item.phase.deadline()).min()
    }
}
