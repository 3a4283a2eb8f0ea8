//! Product record
//!
//! The persisted shape uses the short field names `desc` and `img`. Reads are
//! lenient because stored data may have been written by hand: missing or null
//! names become empty, and a price that is missing, null or not a number
//! becomes zero.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    /// Price in VND
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,

    /// Optional free-form description
    #[serde(
        rename = "desc",
        alias = "description",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Optional image URL
    #[serde(
        rename = "img",
        alias = "imageUrl",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Product {
    /// Create product with name and price
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            image_url: None,
        }
    }

    /// With description; empty text clears it
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    /// With image URL; empty text clears it
    #[inline]
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = non_empty(image_url.into());
        self
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `keyword` must already be lowercased.
    #[inline]
    #[must_use]
    pub fn name_matches(&self, keyword: &str) -> bool {
        keyword.is_empty() || self.name.to_lowercase().contains(keyword)
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if price.is_finite() { price } else { 0.0 })
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => non_empty(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_storage_field_names() {
        let product = Product::new("Book", 100.0)
            .with_description("Paperback")
            .with_image_url("https://example.com/a.png");

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["name"], "Book");
        assert_eq!(value["price"], 100.0);
        assert_eq!(value["desc"], "Paperback");
        assert_eq!(value["img"], "https://example.com/a.png");
    }

    #[test]
    fn omits_absent_optionals() {
        let value = serde_json::to_value(Product::new("Pen", 5.0)).unwrap();
        assert!(value.get("desc").is_none());
        assert!(value.get("img").is_none());
    }

    #[test]
    fn empty_optionals_read_as_none() {
        let product: Product =
            serde_json::from_str(r#"{"name":"Pen","price":5,"desc":"","img":""}"#).unwrap();
        assert_eq!(product.description, None);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn accepts_long_field_aliases() {
        let product: Product = serde_json::from_str(
            r#"{"name":"Pen","price":5,"description":"Blue ink","imageUrl":"https://x.io/p.png"}"#,
        )
        .unwrap();
        assert_eq!(product.description.as_deref(), Some("Blue ink"));
        assert_eq!(product.image_url.as_deref(), Some("https://x.io/p.png"));
    }

    #[test]
    fn lenient_about_hand_written_records() {
        let product: Product = serde_json::from_str(r#"{"price":null}"#).unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.price, 0.0);

        let product: Product = serde_json::from_str(r#"{"name":"Cup","price":"2500"}"#).unwrap();
        assert_eq!(product.price, 2500.0);

        let product: Product = serde_json::from_str(r#"{"name":"Cup","price":"abc"}"#).unwrap();
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn does_not_validate_price_on_load() {
        let product: Product = serde_json::from_str(r#"{"name":"Free","price":-3}"#).unwrap();
        assert_eq!(product.price, -3.0);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let product = Product::new("Blue Notebook", 1.0);
        assert!(product.name_matches("note"));
        assert!(product.name_matches(""));
        assert!(!product.name_matches("pen"));
    }
}
