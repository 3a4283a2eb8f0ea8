//! Price display: vi-VN number grouping plus currency suffix
//!
//! Grouping follows the Vietnamese locale: `.` between thousands, `,` before
//! the fraction, at most three fraction digits with trailing zeros dropped.

/// Default currency suffix (Vietnamese dong)
pub const DEFAULT_CURRENCY_SUFFIX: &str = "₫";

const MAX_FRACTION_DIGITS: usize = 3;

/// Values at or above this have no representable fraction digits left.
const FRACTION_LIMIT: f64 = 1e15;

/// Formats prices with a configured currency suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    suffix: String,
}

impl PriceFormatter {
    /// Create formatter with a currency suffix
    #[inline]
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Currency suffix
    #[inline]
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Format a price for display
    ///
    /// Non-finite values cannot be grouped and fall back to the raw value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match group_vi(value) {
            Some(grouped) => format!("{grouped} {}", self.suffix),
            None => format!("{value} {}", self.suffix),
        }
    }
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SUFFIX)
    }
}

/// Format a price with the default `₫` suffix
#[must_use]
pub fn format_price(value: f64) -> String {
    PriceFormatter::default().format(value)
}

/// Parse a display-formatted price back into a number
///
/// Every non-digit is discarded, so `"1.250.000 ₫"` reads as `1250000`.
/// Text without digits reads as `0`.
#[must_use]
pub fn parse_display_price(text: &str) -> f64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse::<f64>().unwrap_or(0.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn group_vi(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let abs = value.abs();
    let (int_digits, fraction) = if abs < FRACTION_LIMIT {
        let scale = 10u64.pow(MAX_FRACTION_DIGITS as u32);
        let scaled = (abs * scale as f64).round() as u64;
        let fraction = format!("{:0width$}", scaled % scale, width = MAX_FRACTION_DIGITS);
        (
            (scaled / scale).to_string(),
            fraction.trim_end_matches('0').to_string(),
        )
    } else {
        (format!("{abs:.0}"), String::new())
    };

    let mut out = String::with_capacity(int_digits.len() + int_digits.len() / 3 + 8);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    for (i, digit) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(&fraction);
    }
    Some(out)
}
