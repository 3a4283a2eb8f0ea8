//! Filter controls and the query they describe

use crate::error::UnknownSortKey;
use shelf_catalog::Product;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to visible items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep current order
    #[default]
    None,
    /// Name, ascending, case-insensitive
    NameAsc,
    /// Price, lowest first
    PriceAsc,
    /// Price, highest first
    PriceDesc,
}

impl SortKey {
    /// All sort keys, in control order
    pub const ALL: [SortKey; 4] = [Self::None, Self::NameAsc, Self::PriceAsc, Self::PriceDesc];

    /// Control value for this key
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NameAsc => "name-asc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    /// Read a sort control value; anything unrecognised means no sorting
    #[must_use]
    pub fn from_control(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Compare two products under this key
    #[must_use]
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::PriceAsc => a.price.total_cmp(&b.price),
            Self::PriceDesc => b.price.total_cmp(&a.price),
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(Self::None),
            "name-asc" => Ok(Self::NameAsc),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values of the search, price-range and sort controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    /// Search box text
    pub keyword: String,
    /// Minimum price box text
    pub price_min: String,
    /// Maximum price box text
    pub price_max: String,
    /// Sort select value
    pub sort: String,
}

impl FilterControls {
    /// Create controls with only a keyword
    #[must_use]
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// Interpret the current control values
    #[must_use]
    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            keyword: self.keyword.trim().to_lowercase(),
            min: parse_bound(&self.price_min),
            max: parse_bound(&self.price_max),
            sort: SortKey::from_control(&self.sort),
        }
    }
}

/// Empty or non-numeric bound text means no bound
fn parse_bound(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Interpreted filter: keyword, optional price bounds, sort key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    /// Lowercased, trimmed keyword; empty matches everything
    pub keyword: String,
    /// Inclusive lower price bound
    pub min: Option<f64>,
    /// Inclusive upper price bound
    pub max: Option<f64>,
    /// Ordering for visible items
    pub sort: SortKey,
}

impl FilterQuery {
    /// Query matching everything, unsorted
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// With keyword (lowercased)
    #[must_use]
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = keyword.trim().to_lowercase();
        self
    }

    /// With price bounds
    #[must_use]
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// With sort key
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check if a product passes keyword and price bounds
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        product.name_matches(&self.keyword)
            && self.min.map_or(true, |min| product.price >= min)
            && self.max.map_or(true, |max| product.price <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_to_query() {
        let controls = FilterControls {
            keyword: "  Pen ".to_string(),
            price_min: "100".to_string(),
            price_max: "abc".to_string(),
            sort: "price-desc".to_string(),
        };
        let query = controls.query();
        assert_eq!(query.keyword, "pen");
        assert_eq!(query.min, Some(100.0));
        assert_eq!(query.max, None);
        assert_eq!(query.sort, SortKey::PriceDesc);
    }

    #[test]
    fn empty_controls_match_everything() {
        let query = FilterControls::default().query();
        assert!(query.matches(&Product::new("Anything", -1.0)));
        assert_eq!(query.sort, SortKey::None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let query = FilterQuery::all().with_bounds(Some(10.0), Some(20.0));
        assert!(query.matches(&Product::new("a", 10.0)));
        assert!(query.matches(&Product::new("a", 20.0)));
        assert!(!query.matches(&Product::new("a", 9.99)));
        assert!(!query.matches(&Product::new("a", 20.01)));
    }

    #[test]
    fn sort_key_parsing() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::None);
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::from_control("cheapest"), SortKey::None);
    }

    #[test]
    fn name_comparison_ignores_case() {
        let a = Product::new("apple", 1.0);
        let b = Product::new("Banana", 1.0);
        assert_eq!(SortKey::NameAsc.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::PriceDesc.compare(&a, &b), Ordering::Equal);
    }
}
