//! Prices, discount percentages and the reference currency.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Price in minor currency units (e.g. cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Apply a percentage discount, rounding the discount amount down.
    ///
    /// `final = original - floor(original * pct / 100)`
    pub fn discounted_by(self, percentage: DiscountPercentage) -> Self {
        let amount = u128::from(self.0) * u128::from(percentage.value()) / 100;
        // amount <= self.0 since percentage <= 100
        Self(self.0 - amount as u64)
    }
}

impl ValueObject for Price {}

impl TryFrom<i64> for Price {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("price cannot be negative: {value}")))
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Discount percentage in the inclusive range `0..=100`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiscountPercentage(u8);

impl DiscountPercentage {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::validation(format!(
                "discount percentage must be within 0..=100, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl ValueObject for DiscountPercentage {}

impl TryFrom<u8> for DiscountPercentage {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiscountPercentage> for u8 {
    fn from(value: DiscountPercentage) -> Self {
        value.0
    }
}

/// Currency attached to every computed price.
///
/// Only the reference currency exists; conversion is not supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
        }
    }
}

impl ValueObject for Currency {}
