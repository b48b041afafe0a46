//! Quantity input validation.
//!
//! Raw quantity input arrives as text (a form field, a shell token).
//! Parsing rules:
//!
//! - Surrounding whitespace is trimmed.
//! - The remainder must be a strict base-10 integer. Decimal input
//!   ("2.5") and locale-formatted input ("1,000") are rejected, never
//!   truncated.
//! - Values at or below zero are rejected; the cart quantity invariant
//!   is `quantity >= 1`.
//!
//! Every rejection is recoverable: the view surfaces it as a warning
//! notice and dispatches nothing.

use std::num::IntErrorKind;

/// Reasons a raw quantity input is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The parsed value is zero or negative.
    #[error("Quantity must be greater than 0")]
    NotPositive,
    /// The input is not a whole base-10 number.
    #[error("Quantity must be a whole number")]
    NotAnInteger,
    /// The value does not fit in a `u32` quantity.
    #[error("Quantity must be at most {max}")]
    TooLarge {
        /// Largest accepted quantity.
        max: u32,
    },
}

/// Parse a raw quantity input into a positive quantity.
///
/// # Errors
///
/// Returns a [`QuantityError`] when the input is not a strictly
/// positive base-10 integer that fits in a `u32`.
pub fn parse_quantity(raw: &str) -> Result<u32, QuantityError> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value <= 0 => Err(QuantityError::NotPositive),
        Ok(value) => {
            u32::try_from(value).map_err(|_| QuantityError::TooLarge { max: u32::MAX })
        }
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(QuantityError::TooLarge { max: u32::MAX })
        }
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Err(QuantityError::NotPositive),
        Err(_) => Err(QuantityError::NotAnInteger),
    }
}
