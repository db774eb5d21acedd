//! # Money Module
//!
//! Rounding of floating-point amounts and the `Money` type used for exact
//! cent splitting.
//!
//! ## Why Decimal Rounding?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The literal 10.555 is stored as 10.55499999999999971578...            │
//! │  Rounding that binary value to 2 places gives 10.55  ❌ WRONG!          │
//! │                                                                         │
//! │  OUR SOLUTION: round the number the caller actually wrote               │
//! │    f64 ──► shortest round-trip text "10.555" ──► Decimal              │
//! │    Decimal ──► round half away from zero ──► 10.56  ✅                  │
//! │                                                                         │
//! │  Splits work on integer cents so no cent is ever lost:                 │
//! │    10000 cents / 3 = 3333 + 3333 + 3334                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billing_core::money::{round_money, Money};
//!
//! assert_eq!(round_money(10.555, 2).unwrap(), 10.56);
//!
//! let total = Money::from_amount(100.0).unwrap();
//! let shares = total.split(3).unwrap();
//! assert_eq!(shares.last().unwrap().cents(), 3334);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{BillingResult, ValidationError};
use crate::validation::validate_parts;
use crate::MONEY_DECIMALS;

// =============================================================================
// Rounding
// =============================================================================

/// Magnitude (2^52) from which every `f64` is a whole number, so there are
/// no fractional digits left to round.
const INTEGRAL_F64_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Rounds an amount to `decimals` places, ties away from zero.
///
/// The tie is decided on the shortest decimal text of `amount`, so
/// `10.555` rounds up even though its binary value is slightly below.
/// Amounts of 2^52 and beyond are already whole and come back unchanged.
///
/// ## Example
/// ```rust
/// use billing_core::money::round_money;
///
/// assert_eq!(round_money(10.555, 2).unwrap(), 10.56);
/// assert_eq!(round_money(-10.555, 0).unwrap(), -11.0);
/// assert_eq!(round_money(1.21e29, 2).unwrap(), 1.21e29);
/// ```
///
/// ## Errors
/// [`ValidationError::NotRepresentable`] for NaN and infinities.
pub fn round_money(amount: f64, decimals: u32) -> BillingResult<f64> {
    if amount.is_finite() && amount.abs() >= INTEGRAL_F64_THRESHOLD {
        return Ok(amount);
    }

    let rounded = to_decimal("amount", amount)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    Ok(from_decimal("amount", rounded, amount)?)
}

/// Rounds to the 2 places used for every monetary result.
pub(crate) fn round_cents(amount: f64) -> BillingResult<f64> {
    round_money(amount, MONEY_DECIMALS)
}

/// Converts through the shortest round-trip representation of `value`.
fn to_decimal(field: &str, value: f64) -> Result<Decimal, ValidationError> {
    let not_representable = || ValidationError::NotRepresentable {
        field: field.to_string(),
        value,
    };

    if !value.is_finite() {
        return Err(not_representable());
    }

    Decimal::from_str(&value.to_string()).map_err(|_| not_representable())
}

/// `original` is the amount the caller passed in, reported on failure.
fn from_decimal(field: &str, value: Decimal, original: f64) -> Result<f64, ValidationError> {
    value
        .to_f64()
        .ok_or_else(|| ValidationError::NotRepresentable {
            field: field.to_string(),
            value: original,
        })
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (cents).
///
/// ## Design Decisions
/// - **i128 (signed)**: every whole `f64` amount up to ~1.7e36 fits once
///   scaled to cents, and refunds may go negative
/// - **Single field tuple struct**: zero-cost abstraction over i128
///
/// Only used where exactness matters (splitting a bill). The public
/// calculation API stays on `f64` amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(i128);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i128) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a floating-point amount, rounded to
    /// the nearest cent (ties away from zero).
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(33.335).unwrap().cents(), 3334);
    /// assert_eq!(Money::from_amount(-0.005).unwrap().cents(), -1);
    /// assert_eq!(Money::from_amount(1e17).unwrap().cents(), 10_000_000_000_000_000_000);
    /// ```
    ///
    /// ## Errors
    /// [`ValidationError::NotRepresentable`] for NaN, infinities and amounts
    /// whose cents overflow `i128`.
    pub fn from_amount(amount: f64) -> BillingResult<Self> {
        let not_representable = || ValidationError::NotRepresentable {
            field: "amount".to_string(),
            value: amount,
        };

        let cents = if amount.is_finite() && amount.abs() >= INTEGRAL_F64_THRESHOLD {
            // `as` saturates, so anything at the i128 limit is out of range.
            let whole = amount as i128;
            if whole == i128::MAX || whole == i128::MIN {
                return Err(not_representable().into());
            }
            whole.checked_mul(100).ok_or_else(not_representable)?
        } else {
            to_decimal("amount", amount)?
                .round_dp_with_strategy(MONEY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
                .checked_mul(Decimal::ONE_HUNDRED)
                .and_then(|cents| cents.to_i128())
                .ok_or_else(not_representable)?
        };

        Ok(Money(cents))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i128 {
        self.0
    }

    /// Returns the value as a floating-point amount with 2 decimals.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3334).to_amount(), 33.34);
    /// ```
    #[inline]
    pub fn to_amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Splits into `parts` shares that sum exactly to `self`.
    ///
    /// Every share gets the floored equal portion; the cents left over
    /// go to the last share.
    ///
    /// ## User Workflow
    /// ```text
    /// Bill: 100.00 between 3 guests
    ///      │
    ///      ▼
    /// split(3) ← THIS FUNCTION
    ///      │
    ///      ├── 10000 / 3 = 3333 (floored)
    ///      │
    ///      ▼
    /// [33.33, 33.33, 33.34]  (10000 - 2 × 3333 on the last share)
    /// ```
    ///
    /// ## Errors
    /// Invalid argument when `parts <= 0`, or when `parts` shares cannot be
    /// allocated.
    pub fn split(&self, parts: i64) -> BillingResult<Vec<Money>> {
        validate_parts(parts)?;

        let out_of_range = || ValidationError::OutOfRange {
            field: "parts".to_string(),
            min: 1.0,
            max: (isize::MAX as usize / std::mem::size_of::<Money>()) as f64,
            value: parts as f64,
        };

        let count = usize::try_from(parts).map_err(|_| out_of_range())?;
        let mut shares = Vec::new();
        shares.try_reserve_exact(count).map_err(|_| out_of_range())?;

        let parts = i128::from(parts);
        let share = self.0.div_euclid(parts);
        shares.resize(count - 1, Money(share));
        shares.push(Money(self.0 - share * (parts - 1)));

        Ok(shares)
    }
}

/// Sums shares back into a total.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).sum())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BillingError;

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(10.555, 2).unwrap(), 10.56);
        assert_eq!(round_money(-10.555, 2).unwrap(), -10.56);
        assert_eq!(round_money(-10.555, 0).unwrap(), -11.0);
        assert_eq!(round_money(2.5, 0).unwrap(), 3.0);
        assert_eq!(round_money(257.125, 2).unwrap(), 257.13);
    }

    #[test]
    fn test_round_money_other_precisions() {
        assert_eq!(round_money(10.555, 1).unwrap(), 10.6);
        assert_eq!(round_money(10.555, 3).unwrap(), 10.555);
        assert_eq!(round_money(-10.555, 1).unwrap(), -10.6);
        assert_eq!(round_money(-10.555, 3).unwrap(), -10.555);
    }

    #[test]
    fn test_round_money_large_amounts_unchanged() {
        assert_eq!(round_money(1e17, 2).unwrap(), 1e17);
        assert_eq!(round_money(1.21e29, 2).unwrap(), 1.21e29);
        assert_eq!(round_money(-1e300, 0).unwrap(), -1e300);
        assert_eq!(round_money(f64::MAX, 2).unwrap(), f64::MAX);
    }

    #[test]
    fn test_round_money_keeps_short_values() {
        assert_eq!(round_money(100.0, 2).unwrap(), 100.0);
        assert_eq!(round_money(0.0, 2).unwrap(), 0.0);
        assert_eq!(round_money(1.5, 4).unwrap(), 1.5);
    }

    #[test]
    fn test_round_money_rejects_non_finite() {
        let err = round_money(f64::NAN, 2).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(
            round_money(f64::INFINITY, 2),
            Err(BillingError::Validation(ValidationError::NotRepresentable { .. }))
        ));
    }

    #[test]
    fn test_errors_report_the_amount_passed_in() {
        assert_eq!(
            round_money(f64::INFINITY, 2),
            Err(BillingError::Validation(ValidationError::NotRepresentable {
                field: "amount".to_string(),
                value: f64::INFINITY,
            }))
        );
        assert_eq!(
            Money::from_amount(-1e37),
            Err(BillingError::Validation(ValidationError::NotRepresentable {
                field: "amount".to_string(),
                value: -1e37,
            }))
        );
    }

    #[test]
    fn test_from_amount() {
        assert_eq!(Money::from_amount(100.0).unwrap().cents(), 10000);
        assert_eq!(Money::from_amount(0.01).unwrap().cents(), 1);
        assert_eq!(Money::from_amount(10.555).unwrap().cents(), 1056);
        assert_eq!(Money::from_amount(-5.5).unwrap().cents(), -550);
    }

    #[test]
    fn test_from_amount_beyond_i64_cents() {
        assert_eq!(
            Money::from_amount(1e17).unwrap().cents(),
            10_000_000_000_000_000_000
        );
        assert_eq!(
            Money::from_amount(-1e20).unwrap().cents(),
            -10_000_000_000_000_000_000_000
        );
    }

    #[test]
    fn test_from_amount_rejects_cents_beyond_i128() {
        assert!(Money::from_amount(1e37).unwrap_err().is_invalid_argument());
        assert!(Money::from_amount(f64::MAX).unwrap_err().is_invalid_argument());
        assert!(Money::from_amount(f64::NAN).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_split_remainder_goes_last() {
        let shares = Money::from_cents(10000).split(3).unwrap();
        assert_eq!(
            shares,
            vec![
                Money::from_cents(3333),
                Money::from_cents(3333),
                Money::from_cents(3334)
            ]
        );
        assert_eq!(shares.into_iter().sum::<Money>(), Money::from_cents(10000));
    }

    #[test]
    fn test_split_smaller_than_parts() {
        let shares = Money::from_cents(1).split(3).unwrap();
        assert_eq!(
            shares.iter().map(Money::cents).collect::<Vec<_>>(),
            vec![0, 0, 1]
        );
    }

    #[test]
    fn test_split_negative_total_still_sums() {
        let shares = Money::from_cents(-100).split(3).unwrap();
        assert_eq!(shares.iter().copied().sum::<Money>().cents(), -100);
        assert_eq!(shares.len(), 3);
    }

    #[test]
    fn test_split_large_total() {
        let shares = Money::from_amount(1e17).unwrap().split(2).unwrap();
        assert_eq!(
            shares.iter().map(Money::to_amount).collect::<Vec<_>>(),
            vec![5e16, 5e16]
        );
    }

    #[test]
    fn test_split_unallocatable_parts_is_out_of_range() {
        let err = Money::from_cents(100).split(i64::MAX).unwrap_err();
        assert!(matches!(
            err,
            BillingError::Validation(ValidationError::OutOfRange { ref field, .. }) if field == "parts"
        ));
    }

    #[test]
    fn test_split_rejects_non_positive_parts() {
        assert!(Money::from_cents(100).split(0).unwrap_err().is_invalid_argument());
        assert!(Money::from_cents(100).split(-1).unwrap_err().is_invalid_argument());
    }
}
