//! Discount resolution: turns a raw product into a final, currency-tagged price.

pub mod calculator;
pub mod error;

pub use calculator::{DiscountPricingService, PriceCalculator, best_discount};
pub use error::{PricingError, PricingResult};
