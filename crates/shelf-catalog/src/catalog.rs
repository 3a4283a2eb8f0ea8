//! Ordered product catalog

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Ordered sequence of products
///
/// Identity is positional. New products go to the front; nothing is ever
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert product at position 0
    pub fn insert_front(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    /// Number of products
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if catalog has no products
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in catalog order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    /// Iterate in catalog order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Consume into the underlying vector
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<Product> {
        self.products
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_front_puts_newest_first() {
        let mut catalog = Catalog::from(vec![Product::new("Old", 1.0)]);
        catalog.insert_front(Product::new("New", 2.0));

        let names: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["New", "Old"]);
    }

    #[test]
    fn serializes_as_bare_array() {
        let catalog = Catalog::from(vec![Product::new("A", 1.0)]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with('['));
    }

    #[test]
    fn rejects_non_array_json() {
        assert!(serde_json::from_str::<Catalog>(r#"{"name":"A"}"#).is_err());
    }
}
