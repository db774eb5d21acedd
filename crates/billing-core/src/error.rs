//! # Error Types
//!
//! Domain-specific error types for billing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  billing-core errors (this file)                                       │
//! │  ├── BillingError     - What every fallible operation returns          │
//! │  │   ├── Validation       → invalid argument                           │
//! │  │   └── UnknownCurrency  → lookup failure                             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Soft defaults (NOT errors):                                           │
//! │  ├── unknown coupon  → no discount                                     │
//! │  └── unknown country → default tax rate                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value, bounds)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Billing Error
// =============================================================================

/// Errors returned by billing operations.
///
/// Exactly two kinds exist: an invalid argument (wrapping a
/// [`ValidationError`]) and a failed table lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    /// An argument was outside the domain of the operation.
    ///
    /// ## When This Occurs
    /// - Negative amount passed to `price_with_tax`
    /// - Quantity or split parts of zero or less
    /// - Refund fraction outside [0, 1]
    /// - Date text that is not `YYYY-MM-DD`
    #[error("Invalid argument: {0}")]
    Validation(#[from] ValidationError),

    /// Currency code is not in the conversion table.
    ///
    /// ## User Workflow
    /// ```text
    /// convert_currency(100.0, "JPY")
    ///      │
    ///      ▼
    /// Currency::lookup("JPY") → no entry
    ///      │
    ///      ▼
    /// UnknownCurrency { code: "JPY" }
    /// ```
    #[error("Unknown currency: {code}")]
    UnknownCurrency { code: String },
}

impl BillingError {
    /// Returns true for the invalid-argument family.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BillingError::Validation(_))
    }

    /// Returns true for table lookup failures.
    pub fn is_lookup(&self) -> bool {
        matches!(self, BillingError::UnknownCurrency { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when an argument does not meet the operation's requirements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative, got {value}")]
    MustBeNonNegative { field: String, value: f64 },

    /// Value is outside an inclusive range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Invalid format (e.g., malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value cannot be carried through decimal arithmetic
    /// (NaN, infinite, or too large once scaled to cents).
    #[error("{field} cannot be represented as a decimal amount: {value}")]
    NotRepresentable { field: String, value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BillingError.
pub type BillingResult<T> = Result<T, BillingError>;

// =============================================================================
// Unit Tests
// =============================================================================
