//! # Money Module
//!
//! Provides the `Money` type used for book prices.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    39.99 is stored as 39.990000000000002  ❌ WRONG!                     │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimal                                            │
//! │    39.999 is stored as mantissa 39999, scale 3 (exactly as given)      │
//! │    Display rounds half away from zero to two places: "40.00"           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::money::Money;
//!
//! // Create from cents
//! let price = Money::from_cents(3999);
//! assert_eq!(price.to_string(), "39.99");
//!
//! // Or parse decimal text; the stored amount keeps every digit
//! let parsed: Money = "39.999".parse().unwrap();
//! assert_eq!(parsed.amount().to_string(), "39.999");
//! assert_eq!(parsed.to_string(), "40.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::BookError;

/// Decimal places shown when a price is rendered.
const DISPLAY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// An exact decimal monetary amount.
///
/// ## Design Decisions
/// - **rust_decimal**: exact base-10 digits, no binary rounding drift
/// - **Stored as given**: rounding happens only when rendering
/// - **Signed**: negative prices are accepted as given
/// - **No currency**: the currency code travels next to the amount on `Book`
///
/// Equality is numeric, so `39.9` and `39.90` are the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let price = Money::from_cents(3999);
    /// assert_eq!(price.to_string(), "39.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, DISPLAY_SCALE))
    }

    /// Returns the stored amount, unrounded.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded half away from zero to two places.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let price: Money = "0.005".parse().unwrap();
    /// assert_eq!(price.rounded().to_string(), "0.01");
    /// ```
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_SCALE);
        rounded
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount with exactly two decimal places and no currency sign.
///
/// The decimal separator is always `.` regardless of host locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Parses decimal text such as `"39.99"`, `"-5.5"`, `"40"` or `"39.999"`.
impl FromStr for Money {
    type Err = BookError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(input.trim())
            .map(Money)
            .map_err(|err| BookError::InvalidAmount {
                input: input.to_string(),
                reason: err.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
