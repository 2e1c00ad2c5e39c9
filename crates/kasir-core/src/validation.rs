//! # Validation Module
//!
//! Input validation for the product form fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      What gets checked                                  │
//! │                                                                         │
//! │  name field ────► validate_product_name()                              │
//! │                   └── blank? → Required { field: "name" }              │
//! │                                                                         │
//! │  price field ───► parse_price_text()                                   │
//! │                   ├── blank?         → Required { field: "price" }     │
//! │                   ├── no digits?     → InvalidFormat                   │
//! │                   ├── below zero?    → OutOfRange                      │
//! │                   └── above MAX_PRICE → OutOfRange                     │
//! │                                                                         │
//! │  Nothing else is validated: no length limits, no duplicate names.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::validation::{parse_price_text, validate_product_name};
//!
//! assert!(validate_product_name("Kopi").is_ok());
//! assert_eq!(parse_price_text("10000").unwrap().minor(), 10_000);
//! assert!(parse_price_text("abc").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Constants
// =============================================================================

/// Highest accepted price in minor units (one trillion).
///
/// A cart would need more than nine million lines at this price before its
/// total left the `i64` range.
pub const MAX_PRICE: i64 = 1_000_000_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Lower-cases a search query for case-insensitive matching.
///
/// An empty query matches every product.
pub fn normalize_search_query(query: &str) -> String {
    query.to_lowercase()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses the price text field into minor units.
///
/// ## Rules
/// Integer parsing is lenient in the same way a numeric keypad field is:
/// - leading whitespace is skipped, an optional `+`/`-` sign is accepted
/// - the leading run of ASCII digits is the value (`"12abc"` is 12,
///   `"12.5"` is 12)
/// - text with no leading digit is rejected (`"abc"`, `"-"`, `".5"`)
/// - negative prices and prices above [`MAX_PRICE`] are rejected
///
/// ## Example
/// ```rust
/// use kasir_core::validation::parse_price_text;
///
/// assert_eq!(parse_price_text(" 8000").unwrap().minor(), 8_000);
/// assert_eq!(parse_price_text("15000 rupiah").unwrap().minor(), 15_000);
/// assert!(parse_price_text("").is_err());
/// assert!(parse_price_text("-5").is_err());
/// ```
pub fn parse_price_text(text: &str) -> ValidationResult<Money> {
    let text = text.trim_start();

    if text.trim_end().is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let (negative, unsigned) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a whole number".to_string(),
        });
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: "price".to_string(),
        min: 0,
        max: MAX_PRICE,
    };

    let value: i64 = unsigned[..digits_len].parse().map_err(|_| out_of_range())?;

    if (negative && value != 0) || value > MAX_PRICE {
        return Err(out_of_range());
    }

    Ok(Money::from_minor(value))
}

/// Validates both product form fields together.
///
/// The name is checked first, so a form with both fields empty reports the
/// missing name.
pub fn validate_product_input(name: &str, price_text: &str) -> ValidationResult<(String, Money)> {
    let name = validate_product_name(name)?;
    let price = parse_price_text(price_text)?;
    Ok((name, price))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("Kopi").unwrap(), "Kopi");
        assert_eq!(validate_product_name("  Roti Bakar ").unwrap(), "Roti Bakar");
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_parse_price_text_accepts_integers() {
        assert_eq!(parse_price_text("0").unwrap().minor(), 0);
        assert_eq!(parse_price_text("10000").unwrap().minor(), 10_000);
        assert_eq!(parse_price_text("+250").unwrap().minor(), 250);
        assert_eq!(parse_price_text("  42  ").unwrap().minor(), 42);
    }

    #[test]
    fn test_parse_price_text_takes_leading_digits() {
        assert_eq!(parse_price_text("12abc").unwrap().minor(), 12);
        assert_eq!(parse_price_text("12.99").unwrap().minor(), 12);
        assert_eq!(parse_price_text("1e3").unwrap().minor(), 1);
    }

    #[test]
    fn test_parse_price_text_rejects() {
        assert_eq!(
            parse_price_text(""),
            Err(ValidationError::Required {
                field: "price".to_string()
            })
        );
        assert!(matches!(
            parse_price_text("abc"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price_text("-"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_price_text("-100"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_price_text("99999999999999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_price_text_caps_at_max_price() {
        assert_eq!(
            parse_price_text("1000000000000").unwrap().minor(),
            MAX_PRICE
        );
        assert_eq!(
            parse_price_text("1000000000001"),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: MAX_PRICE,
            })
        );
        assert!(matches!(
            parse_price_text("9223372036854775807"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(parse_price_text("-0").unwrap().minor(), 0);
    }

    #[test]
    fn test_validate_product_input_checks_name_first() {
        let err = validate_product_input("", "").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn test_normalize_search_query() {
        assert_eq!(normalize_search_query("KoPi"), "kopi");
        assert_eq!(normalize_search_query(""), "");
    }
}
