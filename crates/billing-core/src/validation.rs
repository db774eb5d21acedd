//! # Validation Module
//!
//! Input validation for billing operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      What Gets Rejected                                 │
//! │                                                                         │
//! │  Hard errors (invalid argument):                                       │
//! │  ├── quantity <= 0 for subtotal / total / bulk                         │
//! │  ├── parts <= 0 for split payments                                     │
//! │  ├── negative amount for price_with_tax                                │
//! │  └── refund fraction outside [0, 1]                                    │
//! │                                                                         │
//! │  Boolean checks (never error):                                         │
//! │  ├── validate_tax_number                                               │
//! │  └── validate_coupon                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billing_core::validation::{validate_quantity, validate_tax_number};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_tax_number("LV1234567890"));
//! ```

use crate::error::ValidationError;
use crate::types::Coupon;
use crate::TAX_NUMBER_DIGITS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ## User Workflow
/// ```text
/// compute_total(10.0, qty)
///      │
///      ▼
/// validate_quantity(qty) ← THIS FUNCTION
///      │
///      ├── qty <= 0? → Error: "quantity must be positive"
///      │
///      └── OK → subtotal = unit_price × qty
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: qty,
        });
    }

    Ok(())
}

/// Validates the number of parties a payment is split between.
pub fn validate_parts(parts: i64) -> ValidationResult<()> {
    if parts <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "parts".to_string(),
            value: parts,
        });
    }

    Ok(())
}

/// Validates that an amount is not negative.
///
/// Zero is allowed. NaN is rejected.
///
/// ## Example
/// ```rust
/// use billing_core::validation::validate_non_negative;
///
/// assert!(validate_non_negative("amount", 0.0).is_ok());
/// assert!(validate_non_negative("amount", -1.0).is_err());
/// ```
pub fn validate_non_negative(field: &str, amount: f64) -> ValidationResult<()> {
    if amount < 0.0 || amount.is_nan() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
            value: amount,
        });
    }

    Ok(())
}

/// Validates a fraction in the inclusive range [0, 1].
pub fn validate_fraction(field: &str, fraction: f64) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 1.0,
            value: fraction,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Checks a VAT-style tax number.
///
/// ## Rules
/// - Exactly two uppercase ASCII letters (country prefix)
/// - Followed by exactly ten ASCII digits
/// - Case-sensitive: `lv1234567890` is rejected
///
/// ## Example
/// ```rust
/// use billing_core::validation::validate_tax_number;
///
/// assert!(validate_tax_number("LV1234567890"));
/// assert!(!validate_tax_number("lv1234567890"));
/// assert!(!validate_tax_number("LV123456789"));
/// ```
pub fn validate_tax_number(text: &str) -> bool {
    let bytes = text.as_bytes();

    if bytes.len() != 2 + TAX_NUMBER_DIGITS {
        return false;
    }

    let (prefix, digits) = bytes.split_at(2);
    prefix.iter().all(u8::is_ascii_uppercase) && digits.iter().all(u8::is_ascii_digit)
}

/// Checks whether a coupon code is known (case-insensitive).
///
/// Missing, empty or unknown codes are simply not valid; this never errors.
///
/// ## Example
/// ```rust
/// use billing_core::validation::validate_coupon;
///
/// assert!(validate_coupon(Some("sport10")));
/// assert!(!validate_coupon(None));
/// ```
pub fn validate_coupon(code: Option<&str>) -> bool {
    code.and_then(Coupon::lookup).is_some()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_parts() {
        assert!(validate_parts(3).is_ok());
        assert!(matches!(
            validate_parts(0),
            Err(ValidationError::MustBePositive { ref field, value: 0 }) if field == "parts"
        ));
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("amount", 0.0).is_ok());
        assert!(validate_non_negative("amount", 12.5).is_ok());
        assert!(validate_non_negative("amount", -0.01).is_err());
        assert!(validate_non_negative("amount", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_fraction() {
        assert!(validate_fraction("fraction", 0.0).is_ok());
        assert!(validate_fraction("fraction", 0.5).is_ok());
        assert!(validate_fraction("fraction", 1.0).is_ok());
        assert!(validate_fraction("fraction", 1.1).is_err());
        assert!(validate_fraction("fraction", -0.1).is_err());
        assert!(validate_fraction("fraction", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_tax_number() {
        assert!(validate_tax_number("LV1234567890"));
        assert!(validate_tax_number("EE0000000000"));

        assert!(!validate_tax_number("lv1234567890"));
        assert!(!validate_tax_number("Lv1234567890"));
        assert!(!validate_tax_number("LV12345678901"));
        assert!(!validate_tax_number("LV123456789A"));
        assert!(!validate_tax_number("1V1234567890"));
        assert!(!validate_tax_number(""));
    }

    #[test]
    fn test_validate_tax_number_multibyte_input() {
        // 12 bytes but not ASCII letters
        assert!(!validate_tax_number("ÄÖ12345678"));
    }

    #[test]
    fn test_validate_coupon() {
        assert!(validate_coupon(Some("SPORT10")));
        assert!(validate_coupon(Some("NEWUSER5")));
        assert!(validate_coupon(Some("BLACKFRIDAY")));
        assert!(validate_coupon(Some("sport10")));
        assert!(validate_coupon(Some("Sport10")));

        assert!(!validate_coupon(Some("INVALID")));
        assert!(!validate_coupon(Some("")));
        assert!(!validate_coupon(None));
    }
}
