//! # Domain Types
//!
//! Value types used by the billing calculations.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │     Coupon      │   │    Currency     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  SPORT10   10%  │   │  USD  1.0870    │       │
//! │  │  2100 = 21%     │   │  NEWUSER5   5%  │   │  GBP  0.8696    │       │
//! │  └─────────────────┘   │  BLACKFRIDAY 25%│   │  (base: EUR)    │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │  ┌─────────────────┐                                                   │
//! │  │  TaxBreakdown   │   No identity, no lifecycle: every value lives   │
//! │  │  net, tax       │   for the single call that produced it.          │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Basis Points?
//! Rates and discounts are stored as integers (1 bps = 0.01%) and turned into
//! `f64` factors by a single division, which yields exactly the same value as
//! writing the decimal literal (`2100 bps` → `0.21`, gross `1.21`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::BillingError;

const BPS_SCALE: f64 = 10_000.0;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 2100 bps = 21%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (2100 bps → 0.21).
    #[inline]
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / BPS_SCALE
    }

    /// Returns the factor that turns a net amount into a gross one
    /// (2100 bps → 1.21).
    #[inline]
    pub fn gross_multiplier(&self) -> f64 {
        (f64::from(self.0) + BPS_SCALE) / BPS_SCALE
    }

    /// Returns `amount` with this tax added.
    #[inline]
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.gross_multiplier()
    }

    /// Returns the tax portion charged on `amount`.
    #[inline]
    pub fn tax_on(&self, amount: f64) -> f64 {
        amount * self.fraction()
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A known coupon code.
///
/// Lookups are case-insensitive; unknown codes are not an error, the caller
/// just gets no coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Coupon {
    /// `SPORT10`: 10% off.
    Sport10,
    /// `NEWUSER5`: 5% off.
    #[serde(rename = "NEWUSER5")]
    NewUser5,
    /// `BLACKFRIDAY`: 25% off.
    #[serde(rename = "BLACKFRIDAY")]
    BlackFriday,
}

impl Coupon {
    /// Every coupon in the table.
    pub const ALL: [Coupon; 3] = [Coupon::Sport10, Coupon::NewUser5, Coupon::BlackFriday];

    /// Canonical (uppercase) code.
    pub const fn code(&self) -> &'static str {
        match self {
            Coupon::Sport10 => "SPORT10",
            Coupon::NewUser5 => "NEWUSER5",
            Coupon::BlackFriday => "BLACKFRIDAY",
        }
    }

    /// Discount in basis points (1000 = 10%).
    pub const fn discount_bps(&self) -> u32 {
        match self {
            Coupon::Sport10 => 1000,
            Coupon::NewUser5 => 500,
            Coupon::BlackFriday => 2500,
        }
    }

    /// Discount as a fraction (0.10 for `SPORT10`).
    pub fn discount(&self) -> f64 {
        f64::from(self.discount_bps()) / BPS_SCALE
    }

    /// Finds a coupon by code, ignoring ASCII case.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::types::Coupon;
    ///
    /// assert_eq!(Coupon::lookup("sport10"), Some(Coupon::Sport10));
    /// assert_eq!(Coupon::lookup("INVALID"), None);
    /// assert_eq!(Coupon::lookup(""), None);
    /// ```
    pub fn lookup(code: &str) -> Option<Coupon> {
        Coupon::ALL
            .into_iter()
            .find(|coupon| coupon.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Currencies that amounts can be converted into.
///
/// Rates are relative to the base currency (EUR) and
/// stored in ten-thousandths (10870 = 1.0870).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Pound sterling.
    Gbp,
}

impl Currency {
    /// Every currency in the table.
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Gbp];

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }

    /// Conversion rate in ten-thousandths of the base currency.
    pub const fn rate_per_10k(&self) -> u32 {
        match self {
            Currency::Usd => 10_870,
            Currency::Gbp => 8_696,
        }
    }

    /// Conversion rate as a factor (1.0870 for USD).
    pub fn rate(&self) -> f64 {
        f64::from(self.rate_per_10k()) / BPS_SCALE
    }

    /// Finds a currency by code, ignoring ASCII case.
    ///
    /// ## Errors
    /// [`BillingError::UnknownCurrency`] when the code is not in the table.
    pub fn lookup(code: &str) -> Result<Currency, BillingError> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                debug!(code, "Currency not in conversion table");
                BillingError::UnknownCurrency {
                    code: code.to_string(),
                }
            })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::lookup(s)
    }
}

// =============================================================================
// Tax Breakdown
// =============================================================================

/// Net amount and the tax charged on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Amount before tax.
    pub net: f64,

    /// Tax portion (same sign as `net`).
    pub tax: f64,
}

impl TaxBreakdown {
    /// Net plus tax.
    pub fn gross(&self) -> f64 {
        self.net + self.tax
    }
}

impl From<TaxBreakdown> for (f64, f64) {
    fn from(breakdown: TaxBreakdown) -> Self {
        (breakdown.net, breakdown.tax)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_factors_match_literals() {
        let rate = TaxRate::from_bps(2100);
        assert_eq!(rate.fraction(), 0.21);
        assert_eq!(rate.gross_multiplier(), 1.21);
        assert_eq!(TaxRate::from_bps(2000).gross_multiplier(), 1.20);
    }

    #[test]
    fn test_tax_rate_apply() {
        let rate = TaxRate::from_bps(2100);
        assert_eq!(rate.apply(100.0), 121.0);
        assert_eq!(rate.tax_on(100.0), 21.0);
        assert_eq!(rate.tax_on(-100.0), -21.0);
    }

    #[test]
    fn test_coupon_table() {
        assert_eq!(Coupon::Sport10.discount(), 0.10);
        assert_eq!(Coupon::NewUser5.discount(), 0.05);
        assert_eq!(Coupon::BlackFriday.discount(), 0.25);
    }

    #[test]
    fn test_coupon_lookup_is_case_insensitive() {
        assert_eq!(Coupon::lookup("SPORT10"), Some(Coupon::Sport10));
        assert_eq!(Coupon::lookup("Sport10"), Some(Coupon::Sport10));
        assert_eq!(Coupon::lookup("blackfriday"), Some(Coupon::BlackFriday));
        assert_eq!(Coupon::lookup("SPORT"), None);
    }

    #[test]
    fn test_coupon_serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&Coupon::NewUser5).unwrap(),
            "\"NEWUSER5\""
        );
        let parsed: Coupon = serde_json::from_str("\"SPORT10\"").unwrap();
        assert_eq!(parsed, Coupon::Sport10);
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(Currency::lookup("usd").unwrap(), Currency::Usd);
        assert_eq!("Gbp".parse::<Currency>().unwrap(), Currency::Gbp);
        assert_eq!(Currency::Usd.rate(), 1.0870);
        assert_eq!(Currency::Gbp.rate(), 0.8696);

        let err = Currency::lookup("JPY").unwrap_err();
        assert!(err.is_lookup());
        assert_eq!(err.to_string(), "Unknown currency: JPY");
    }

    #[test]
    fn test_tax_breakdown_into_pair() {
        let breakdown = TaxBreakdown {
            net: 100.0,
            tax: 21.0,
        };
        assert_eq!(breakdown.gross(), 121.0);
        let (net, tax): (f64, f64) = breakdown.into();
        assert_eq!((net, tax), (100.0, 21.0));
    }
}
