//! `storefront-core` — catalog value types shared by every layer.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{Category, Sku};
pub use money::{Currency, DiscountPercentage, Price};
pub use value_object::ValueObject;
