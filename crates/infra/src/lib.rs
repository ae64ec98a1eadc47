//! Infrastructure layer: catalog storage and seed loading.

pub mod read_model;
pub mod seed;

pub use read_model::{InMemoryDiscountRepository, InMemoryProductRepository};
pub use seed::{CatalogSeed, SeedError, SeededRepositories};
