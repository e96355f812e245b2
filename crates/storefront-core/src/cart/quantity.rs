//! Quantity input coercion.
//!
//! The cart clamps numbers but never parses text. Callers turn user input
//! into an integer here first.

use crate::error::StorefrontError;

/// Parse quantity text such as the value of a number input.
///
/// Surrounding whitespace is ignored. Out-of-range numbers are accepted; the
/// cart clamps them.
pub fn parse_quantity(input: &str) -> Result<i64, StorefrontError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| StorefrontError::InvalidQuantity(input.to_string()))
}
