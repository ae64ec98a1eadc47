//! Read-only, in-memory catalog storage.
//!
//! Loaded once at start-up and never mutated afterwards, so both
//! repositories are `Send + Sync` without any locking.

pub mod discounts;
pub mod products;

pub use discounts::InMemoryDiscountRepository;
pub use products::InMemoryProductRepository;
