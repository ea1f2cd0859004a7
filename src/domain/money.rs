use crate::error::CartError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Largest accepted unit price or fee rate. Keeps price times a `u32` quantity,
/// summed over a catalog, far inside `Decimal`'s range.
pub const MAX_RATE: Decimal = dec!(1000000000);

/// A signed monetary value.
///
/// Wraps `rust_decimal::Decimal` so cart arithmetic stays exact. Derived values
/// such as the discounted subtotal are allowed to go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Scales the amount by a rate, e.g. `dec!(0.05)` for five percent.
    pub fn scale(self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Renders as `$12.50`, or `-$3.00` for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if self.is_negative() {
            write!(f, "-${:.2}", rounded.abs())
        } else {
            write!(f, "${:.2}", rounded)
        }
    }
}

/// A unit price from the catalog. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, CartError> {
        if value <= Decimal::ZERO {
            Err(CartError::ValidationError(format!(
                "Price must be positive, got {value}"
            )))
        } else if value > MAX_RATE {
            Err(CartError::ValidationError(format!(
                "Price must not exceed {MAX_RATE}, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    /// For prices known to be positive at compile time.
    pub(crate) const fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Extended price for `quantity` units.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0 * Decimal::from(quantity))
    }
}

impl TryFrom<Decimal> for Price {
    type Error = CartError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// A per-unit fee rate (gift wrap, shipping). Zero is allowed, negatives are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Fee(Decimal);

impl Fee {
    pub fn new(value: Decimal) -> Result<Self, CartError> {
        if value < Decimal::ZERO {
            Err(CartError::ValidationError(format!(
                "Fee must not be negative, got {value}"
            )))
        } else if value > MAX_RATE {
            Err(CartError::ValidationError(format!(
                "Fee must not exceed {MAX_RATE}, got {value}"
            )))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn times(&self, count: u64) -> Money {
        Money(self.0 * Decimal::from(count))
    }
}

impl TryFrom<Decimal> for Fee {
    type Error = CartError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Fee> for Decimal {
    fn from(fee: Fee) -> Self {
        fee.0
    }
}
