//! # Loyalty Module
//!
//! Points are earned per [`crate::LOYALTY_SPEND_PER_POINT`] of spend and
//! redeemed at [`crate::LOYALTY_POINT_VALUE`] each.

use crate::error::{BillingResult, ValidationError};
use crate::{LOYALTY_POINT_VALUE, LOYALTY_SPEND_PER_POINT};

/// Points earned for a purchase amount: `floor(amount / 50)`.
///
/// ## Example
/// ```rust
/// use billing_core::loyalty::loyalty_points_earned;
///
/// assert_eq!(loyalty_points_earned(100.0).unwrap(), 2);
/// assert_eq!(loyalty_points_earned(49.99).unwrap(), 0);
/// ```
///
/// ## Errors
/// [`ValidationError::NotRepresentable`] for NaN, infinities and amounts
/// whose point count does not fit in `i64`.
pub fn loyalty_points_earned(amount: f64) -> BillingResult<i64> {
    let points = (amount / LOYALTY_SPEND_PER_POINT).floor();

    // 2^63 is exact as f64; anything at or beyond it would saturate.
    if !points.is_finite() || points.abs() >= 9_223_372_036_854_775_808.0 {
        return Err(ValidationError::NotRepresentable {
            field: "amount".to_string(),
            value: amount,
        }
        .into());
    }

    Ok(points as i64)
}

/// Redeems points against an amount.
///
/// The result is not clamped: negative point counts raise the amount and
/// large point counts can push it below zero.
///
/// ## Example
/// ```rust
/// use billing_core::loyalty::apply_loyalty_discount;
///
/// assert_eq!(apply_loyalty_discount(100.0, -50), 100.5);
/// assert_eq!(apply_loyalty_discount(100.0, 10_000), 0.0);
/// ```
pub fn apply_loyalty_discount(amount: f64, points: i64) -> f64 {
    amount - points as f64 * LOYALTY_POINT_VALUE
}
