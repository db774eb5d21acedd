//! # Pricing Module
//!
//! Quantity-based pricing, coupons, refunds, currency conversion and bill
//! splitting.
//!
//! ## Order Total Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        compute_total                                    │
//! │                                                                         │
//! │  unit_price × quantity ──► subtotal         (quantity must be > 0)     │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  + booking_fee(quantity)   0.50 per unit                               │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  apply_coupon(code)        unknown code → unchanged                    │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  price_with_tax            × 1.21                                      │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  round to 2 places         ties away from zero                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::BillingResult;
use crate::money::{round_cents, Money};
use crate::tax::price_with_tax;
use crate::types::{Coupon, Currency};
use crate::validation::{validate_fraction, validate_quantity};
use crate::{BOOKING_FEE_PER_UNIT, BULK_TIERS};

// =============================================================================
// Coupons
// =============================================================================

/// Applies a coupon discount to an amount.
///
/// Unknown, empty or absent codes leave the amount unchanged.
///
/// ## Example
/// ```rust
/// use billing_core::pricing::apply_coupon;
///
/// assert_eq!(apply_coupon(100.0, Some("sport10")), 90.0);
/// assert_eq!(apply_coupon(100.0, Some("INVALID")), 100.0);
/// assert_eq!(apply_coupon(100.0, None), 100.0);
/// ```
pub fn apply_coupon(amount: f64, coupon: Option<&str>) -> f64 {
    let Some(code) = coupon else {
        return amount;
    };

    match Coupon::lookup(code) {
        Some(coupon) => amount * (1.0 - coupon.discount()),
        None => {
            debug!(code, "Ignoring unknown coupon");
            amount
        }
    }
}

// =============================================================================
// Quantity Pricing
// =============================================================================

/// Unit price times quantity.
///
/// ## Errors
/// Invalid argument when `quantity <= 0`.
pub fn compute_subtotal(unit_price: f64, quantity: i64) -> BillingResult<f64> {
    validate_quantity(quantity)?;
    Ok(unit_price * quantity as f64)
}

/// Per-unit booking surcharge. Not validated: a negative quantity gives a
/// negative fee.
pub fn booking_fee(quantity: i64) -> f64 {
    quantity as f64 * BOOKING_FEE_PER_UNIT
}

/// Full order total: subtotal plus booking fee, coupon, tax, rounded.
///
/// ## Example
/// ```rust
/// use billing_core::pricing::compute_total;
///
/// assert_eq!(compute_total(10.0, 2, None).unwrap(), 25.41);
/// assert_eq!(compute_total(10.0, 2, Some("SPORT10")).unwrap(), 22.87);
/// ```
///
/// ## Errors
/// Invalid argument when `quantity <= 0`, or when the discounted amount is
/// negative (tax only applies to non-negative amounts).
pub fn compute_total(unit_price: f64, quantity: i64, coupon: Option<&str>) -> BillingResult<f64> {
    let subtotal = compute_subtotal(unit_price, quantity)? + booking_fee(quantity);
    let discounted = apply_coupon(subtotal, coupon);
    round_cents(price_with_tax(discounted)?)
}

/// Tiered discount fraction for a quantity.
///
/// Thresholds are inclusive and checked from the highest tier down:
/// `>= 20 → 0.15`, `>= 10 → 0.08`, otherwise `0.0`.
pub fn bulk_discount(quantity: i64) -> f64 {
    BULK_TIERS
        .iter()
        .find(|(min_quantity, _)| quantity >= *min_quantity)
        .map_or(0.0, |(_, discount_bps)| f64::from(*discount_bps) / 10_000.0)
}

/// Subtotal minus the bulk discount, with tax, rounded.
///
/// ## Example
/// ```rust
/// use billing_core::pricing::compute_bulk_total;
///
/// assert_eq!(compute_bulk_total(10.0, 25).unwrap(), 257.13);
/// assert_eq!(compute_bulk_total(10.0, 5).unwrap(), 60.5);
/// ```
///
/// ## Errors
/// Invalid argument when `quantity <= 0`.
pub fn compute_bulk_total(unit_price: f64, quantity: i64) -> BillingResult<f64> {
    let subtotal = compute_subtotal(unit_price, quantity)?;
    let discounted = subtotal * (1.0 - bulk_discount(quantity));
    round_cents(price_with_tax(discounted)?)
}

// =============================================================================
// Payments & Refunds
// =============================================================================

/// Splits an amount into `parts` shares of whole cents.
///
/// The shares always add up to the amount rounded to cents; the leftover
/// cents land on the last share.
///
/// ## Example
/// ```rust
/// use billing_core::pricing::split_payment;
///
/// assert_eq!(split_payment(100.0, 3).unwrap(), vec![33.33, 33.33, 33.34]);
/// assert_eq!(split_payment(0.01, 3).unwrap(), vec![0.0, 0.0, 0.01]);
/// ```
///
/// ## Errors
/// Invalid argument when `parts <= 0`.
pub fn split_payment(amount: f64, parts: i64) -> BillingResult<Vec<f64>> {
    let shares = Money::from_amount(amount)?.split(parts)?;
    Ok(shares.iter().map(Money::to_amount).collect())
}

/// Refunds a fraction of an amount, rounded to cents.
///
/// ## Errors
/// Invalid argument when `fraction` is outside [0, 1].
pub fn compute_refund(amount: f64, fraction: f64) -> BillingResult<f64> {
    validate_fraction("fraction", fraction)?;
    round_cents(amount * fraction)
}

/// Caps an amount at `cap` by raw value.
///
/// No absolute-value semantics: `cap_price(50.0, -100.0)` is `-100.0`.
pub fn cap_price(amount: f64, cap: f64) -> f64 {
    if amount > cap {
        cap
    } else {
        amount
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Converts a base-currency amount, rounded to cents.
///
/// ## Example
/// ```rust
/// use billing_core::pricing::convert_currency;
///
/// assert_eq!(convert_currency(100.0, "usd").unwrap(), 108.70);
/// assert!(convert_currency(100.0, "JPY").unwrap_err().is_lookup());
/// ```
///
/// ## Errors
/// [`crate::BillingError::UnknownCurrency`] for codes outside the table.
pub fn convert_currency(amount: f64, currency_code: &str) -> BillingResult<f64> {
    let currency = Currency::lookup(currency_code)?;
    round_cents(amount * currency.rate())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BillingError, ValidationError};

    #[test]
    fn test_apply_coupon_known_codes() {
        assert_eq!(apply_coupon(100.0, Some("SPORT10")), 90.0);
        assert_eq!(apply_coupon(100.0, Some("NEWUSER5")), 95.0);
        assert_eq!(apply_coupon(100.0, Some("BLACKFRIDAY")), 75.0);
    }

    #[test]
    fn test_apply_coupon_unknown_or_missing() {
        assert_eq!(apply_coupon(100.0, Some("INVALID")), 100.0);
        assert_eq!(apply_coupon(100.0, Some("")), 100.0);
        assert_eq!(apply_coupon(100.0, None), 100.0);
    }

    #[test]
    fn test_apply_coupon_case_insensitive() {
        assert_eq!(apply_coupon(100.0, Some("sport10")), 90.0);
        assert_eq!(apply_coupon(100.0, Some("Sport10")), 90.0);
    }

    #[test]
    fn test_compute_subtotal() {
        assert_eq!(compute_subtotal(10.0, 2).unwrap(), 20.0);
        assert!(compute_subtotal(10.0, 0).unwrap_err().is_invalid_argument());
        assert!(compute_subtotal(10.0, -1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_booking_fee() {
        assert_eq!(booking_fee(2), 1.0);
        assert_eq!(booking_fee(0), 0.0);
        assert_eq!(booking_fee(-2), -1.0);
    }

    #[test]
    fn test_compute_total() {
        assert_eq!(compute_total(10.0, 2, None).unwrap(), 25.41);
        assert_eq!(compute_total(10.0, 2, Some("SPORT10")).unwrap(), 22.87);
        assert_eq!(compute_total(10.0, 2, Some("nope")).unwrap(), 25.41);
    }

    #[test]
    fn test_compute_total_rejects_bad_quantity() {
        for quantity in [0, -1] {
            assert!(matches!(
                compute_total(10.0, quantity, None),
                Err(BillingError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_bulk_discount_tiers() {
        assert_eq!(bulk_discount(25), 0.15);
        assert_eq!(bulk_discount(20), 0.15);
        assert_eq!(bulk_discount(19), 0.08);
        assert_eq!(bulk_discount(15), 0.08);
        assert_eq!(bulk_discount(10), 0.08);
        assert_eq!(bulk_discount(9), 0.0);
        assert_eq!(bulk_discount(5), 0.0);
        assert_eq!(bulk_discount(-5), 0.0);
    }

    #[test]
    fn test_compute_bulk_total() {
        assert_eq!(compute_bulk_total(10.0, 25).unwrap(), 257.13);
        assert_eq!(compute_bulk_total(10.0, 15).unwrap(), 166.98);
        assert_eq!(compute_bulk_total(10.0, 5).unwrap(), 60.5);
        assert!(compute_bulk_total(10.0, 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_split_payment() {
        assert_eq!(split_payment(100.0, 2).unwrap(), vec![50.0, 50.0]);
        assert_eq!(split_payment(100.0, 3).unwrap(), vec![33.33, 33.33, 33.34]);
        assert_eq!(split_payment(0.01, 3).unwrap(), vec![0.0, 0.0, 0.01]);
        assert_eq!(split_payment(42.0, 1).unwrap(), vec![42.0]);
    }

    #[test]
    fn test_split_payment_large_amounts() {
        assert_eq!(split_payment(1e17, 2).unwrap(), vec![5e16, 5e16]);
        assert_eq!(split_payment(1e20, 4).unwrap(), vec![2.5e19; 4]);
    }

    #[test]
    fn test_split_payment_unallocatable_parts() {
        let err = split_payment(1.0, i64::MAX).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(
            err,
            BillingError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_split_payment_invalid_parts() {
        assert!(split_payment(100.0, 0).unwrap_err().is_invalid_argument());
        assert!(split_payment(100.0, -1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_compute_refund() {
        assert_eq!(compute_refund(100.0, 0.5).unwrap(), 50.0);
        assert_eq!(compute_refund(100.0, 1.0).unwrap(), 100.0);
        assert_eq!(compute_refund(100.0, 0.0).unwrap(), 0.0);
        assert_eq!(compute_refund(0.0, 0.5).unwrap(), 0.0);
    }

    #[test]
    fn test_compute_refund_invalid_fraction() {
        assert!(compute_refund(100.0, 1.1).unwrap_err().is_invalid_argument());
        assert!(compute_refund(100.0, -0.1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_cap_price() {
        assert_eq!(cap_price(150.0, 100.0), 100.0);
        assert_eq!(cap_price(50.0, 100.0), 50.0);
        assert_eq!(cap_price(-50.0, 100.0), -50.0);
        assert_eq!(cap_price(50.0, -100.0), -100.0);
    }

    #[test]
    fn test_convert_currency() {
        assert_eq!(convert_currency(100.0, "USD").unwrap(), 108.70);
        assert_eq!(convert_currency(100.0, "GBP").unwrap(), 86.96);
        assert_eq!(convert_currency(100.0, "usd").unwrap(), 108.70);
        assert_eq!(convert_currency(100.0, "Usd").unwrap(), 108.70);
    }

    #[test]
    fn test_convert_currency_unknown() {
        assert_eq!(
            convert_currency(100.0, "JPY"),
            Err(BillingError::UnknownCurrency {
                code: "JPY".to_string()
            })
        );
    }

    #[test]
    fn test_large_amounts_pass_through_rounding() {
        let subtotal = 1e27 * 100.0 + booking_fee(100);
        assert_eq!(
            compute_total(1e27, 100, None).unwrap(),
            price_with_tax(subtotal).unwrap()
        );
        assert_eq!(
            convert_currency(1e30, "USD").unwrap(),
            1e30 * Currency::Usd.rate()
        );
    }
}
