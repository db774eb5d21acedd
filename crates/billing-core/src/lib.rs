//! # billing-core: Pure Billing Arithmetic
//!
//! Price, tax, coupon, currency, refund and loyalty calculations as pure
//! functions with zero I/O dependencies.
//!
//! ## Module Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ★ billing-core (THIS CRATE) ★                       │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐           │
//! │   │  pricing  │  │    tax    │  │  loyalty  │  │   dates   │           │
//! │   │ subtotal  │  │ flat 21%  │  │  earn     │  │ ISO parse │           │
//! │   │ coupons   │  │ by country│  │  redeem   │  │ weekend   │           │
//! │   │ split/fx  │  │ breakdown │  │           │  │           │           │
//! │   └─────┬─────┘  └─────┬─────┘  └───────────┘  └───────────┘           │
//! │         │              │                                                │
//! │   ┌─────▼──────────────▼─────┐  ┌───────────┐  ┌───────────┐           │
//! │   │   money  (rounding,      │  │   types   │  │ validation│           │
//! │   │   cent splitting)        │  │ rates/enum│  │   rules   │           │
//! │   └──────────────────────────┘  └───────────┘  └───────────┘           │
//! │                                                                         │
//! │   NO I/O • NO SHARED STATE • SAFE TO CALL FROM ANY THREAD              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no shared state
//! 2. **Decimal Rounding**: every rounded result goes through `rust_decimal`,
//!    ties away from zero
//! 3. **Explicit Errors**: invalid arguments and failed lookups are typed
//!    errors; unknown coupons and countries are soft defaults
//!
//! ## Example Usage
//!
//! ```rust
//! use billing_core::{compute_total, convert_currency, split_payment};
//!
//! let total = compute_total(10.0, 2, Some("SPORT10")).unwrap();
//! assert_eq!(total, 22.87);
//!
//! assert_eq!(convert_currency(100.0, "USD").unwrap(), 108.70);
//! assert_eq!(split_payment(100.0, 3).unwrap(), vec![33.33, 33.33, 33.34]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dates;
pub mod error;
pub mod loyalty;
pub mod money;
pub mod pricing;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use billing_core::compute_total` instead of
// `use billing_core::pricing::compute_total`

pub use dates::{is_weekend_rate, parse_iso_date};
pub use error::{BillingError, BillingResult, ValidationError};
pub use loyalty::{apply_loyalty_discount, loyalty_points_earned};
pub use money::{round_money, Money};
pub use pricing::{
    apply_coupon, booking_fee, bulk_discount, cap_price, compute_bulk_total, compute_refund,
    compute_subtotal, compute_total, convert_currency, split_payment,
};
pub use tax::{apply_dynamic_tax, price_with_tax, tax_breakdown, tax_rate_for_country};
pub use types::{Coupon, Currency, TaxBreakdown, TaxRate};
pub use validation::{validate_coupon, validate_tax_number};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Decimal places of every rounded monetary result.
pub const MONEY_DECIMALS: u32 = 2;

/// Standard tax rate (21%), used by `price_with_tax` and `tax_breakdown`.
pub const STANDARD_TAX_RATE: TaxRate = TaxRate::from_bps(2100);

/// Tax rate for every country other than [`STANDARD_TAX_COUNTRY`] (20%).
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(2000);

/// Country code charged the standard rate by `apply_dynamic_tax`.
pub const STANDARD_TAX_COUNTRY: &str = "LV";

/// Surcharge per booked unit.
pub const BOOKING_FEE_PER_UNIT: f64 = 0.5;

/// Bulk discount tiers as `(minimum quantity, discount bps)`, highest first.
pub const BULK_TIERS: [(i64, u32); 2] = [(20, 1500), (10, 800)];

/// Spend needed to earn one loyalty point.
pub const LOYALTY_SPEND_PER_POINT: f64 = 50.0;

/// Value of one loyalty point when redeemed.
pub const LOYALTY_POINT_VALUE: f64 = 0.01;

/// Digits following the two-letter prefix of a tax number.
pub const TAX_NUMBER_DIGITS: usize = 10;
