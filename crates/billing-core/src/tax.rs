//! # Tax Module
//!
//! Flat-rate and per-country tax calculations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Country code (any case)                                                │
//! │       │                                                                 │
//! │       ├── "LV" ──► STANDARD_TAX_RATE (21%)                             │
//! │       │                                                                 │
//! │       └── other ─► DEFAULT_TAX_RATE  (20%)   soft default, no error    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::trace;

use crate::error::BillingResult;
use crate::types::{TaxBreakdown, TaxRate};
use crate::validation::validate_non_negative;
use crate::{DEFAULT_TAX_RATE, STANDARD_TAX_COUNTRY, STANDARD_TAX_RATE};

/// Adds the standard 21% tax to a non-negative amount.
///
/// ## Example
/// ```rust
/// use billing_core::tax::price_with_tax;
///
/// assert_eq!(price_with_tax(100.0).unwrap(), 121.0);
/// assert!(price_with_tax(-1.0).is_err());
/// ```
///
/// ## Errors
/// Invalid argument when `amount < 0`.
pub fn price_with_tax(amount: f64) -> BillingResult<f64> {
    validate_non_negative("amount", amount)?;
    Ok(STANDARD_TAX_RATE.apply(amount))
}

/// Splits an amount into net and standard-rate tax.
///
/// The tax keeps the sign of the amount, so a credit note of `-100.0`
/// carries `-21.0` tax.
pub fn tax_breakdown(amount: f64) -> TaxBreakdown {
    TaxBreakdown {
        net: amount,
        tax: STANDARD_TAX_RATE.tax_on(amount),
    }
}

/// Resolves the tax rate for a country code.
pub fn tax_rate_for_country(country_code: &str) -> TaxRate {
    if country_code.eq_ignore_ascii_case(STANDARD_TAX_COUNTRY) {
        STANDARD_TAX_RATE
    } else {
        trace!(country_code, "Using default tax rate");
        DEFAULT_TAX_RATE
    }
}

/// Adds the tax of the given country to an amount.
///
/// ## Example
/// ```rust
/// use billing_core::tax::apply_dynamic_tax;
///
/// assert_eq!(apply_dynamic_tax(100.0, "lv"), 121.0);
/// assert_eq!(apply_dynamic_tax(100.0, "EE"), 120.0);
/// ```
pub fn apply_dynamic_tax(amount: f64, country_code: &str) -> f64 {
    tax_rate_for_country(country_code).apply(amount)
}
