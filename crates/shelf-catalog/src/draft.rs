//! Add-product form input and its validation
//!
//! Rules run in a fixed order and stop at the first failure:
//! 1. name and price present, price a finite number > 0
//! 2. description, when given, at least [`MIN_DESCRIPTION_CHARS`] characters
//! 3. image URL, when given, an absolute URL

use crate::product::Product;
use url::Url;

/// Minimum description length, in characters
pub const MIN_DESCRIPTION_CHARS: usize = 5;

/// Raw, untrimmed form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Name field
    pub name: String,
    /// Price field, as typed
    pub price: String,
    /// Description field
    pub description: String,
    /// Image URL field
    pub image_url: String,
}

impl ProductDraft {
    /// Create draft with name and price text
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            ..Self::default()
        }
    }

    /// With description text
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With image URL text
    #[inline]
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Validate and build the product record
    ///
    /// # Errors
    /// Returns the first rule that fails; its `Display` is the message shown
    /// to the user.
    pub fn validate(&self) -> Result<Product, ValidationError> {
        let name = self.name.trim();
        let price_text = self.price.trim();
        let description = self.description.trim();
        let image_url = self.image_url.trim();

        if name.is_empty() {
            return Err(ValidationError::InvalidNameOrPrice);
        }
        let price = parse_price(price_text).ok_or(ValidationError::InvalidNameOrPrice)?;

        if !description.is_empty() && description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(ValidationError::DescriptionTooShort);
        }

        if !image_url.is_empty() && Url::parse(image_url).is_err() {
            return Err(ValidationError::InvalidImageUrl);
        }

        Ok(Product::new(name, price)
            .with_description(description)
            .with_image_url(image_url))
    }
}

/// Parse price text into a finite, strictly positive number
fn parse_price(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    // Rust accepts "inf"/"nan" spellings; the finiteness check rejects them.
    let value = text.parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Add-product validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Missing name, missing price, or price not a number > 0
    #[error("please enter a valid name and price (price > 0)")]
    InvalidNameOrPrice,

    /// Description given but shorter than the minimum
    #[error("description too short, minimum 5 characters")]
    DescriptionTooShort,

    /// Image URL given but not a valid absolute URL
    #[error("invalid image URL")]
    InvalidImageUrl,
}
