//! Catalog seed loading.
//!
//! The product catalog and discount rules are supplied externally (a JSON
//! document) and turned into repositories exactly once at start-up.
//!
//! ```json
//! {
//!   "products":  [{ "sku": "000001", "name": "...", "category": "boots", "price": 89000 }],
//!   "discounts": [{ "type": "category", "category": "boots", "percentage": 30 },
//!                 { "type": "product", "sku": "000003", "percentage": 15 }]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use storefront_catalog::{Discount, Pagination, Product};
use storefront_core::DomainError;

use crate::read_model::{InMemoryDiscountRepository, InMemoryProductRepository};

const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed: {0}")]
    Invalid(#[from] DomainError),
}

/// Raw catalog contents, validated value-by-value during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogSeed {
    pub products: Vec<Product>,
    #[serde(default)]
    pub discounts: Vec<Discount>,
}

/// Repositories built from a seed.
#[derive(Debug, Clone)]
pub struct SeededRepositories {
    pub products: InMemoryProductRepository,
    pub discounts: InMemoryDiscountRepository,
}

impl CatalogSeed {
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The bundled six-product demo catalog.
    pub fn demo() -> Result<Self, SeedError> {
        Self::from_json_str(DEMO_CATALOG)
    }

    /// Build the read-only repositories.
    ///
    /// `default_window` is applied by the product repository to criteria
    /// without pagination.
    pub fn into_repositories(
        self,
        default_window: Pagination,
    ) -> Result<SeededRepositories, SeedError> {
        let product_count = self.products.len();
        let discount_count = self.discounts.len();

        let products = InMemoryProductRepository::new(self.products, default_window)?;
        let discounts = InMemoryDiscountRepository::new(self.discounts)?;

        tracing::info!(
            products = product_count,
            discounts = discount_count,
            "catalog seed loaded"
        );

        Ok(SeededRepositories {
            products,
            discounts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{DiscountRepository, Filter, ProductRepository, SearchCriteria};
    use storefront_core::{Category, Sku};

    fn default_window() -> Pagination {
        Pagination::new(5, 0).unwrap()
    }

    #[test]
    fn demo_seed_loads_six_products_and_two_rules() {
        let seed = CatalogSeed::demo().unwrap();
        assert_eq!(seed.products.len(), 6);
        assert_eq!(seed.discounts.len(), 2);

        let repos = seed.into_repositories(default_window()).unwrap();
        assert_eq!(repos.products.len(), 6);
        assert_eq!(repos.discounts.len(), 2);

        let page = repos.products.list(&SearchCriteria::default()).unwrap();
        assert_eq!(page.meta().total, 6);
        assert_eq!(page.items().len(), 5);

        let rules = repos
            .discounts
            .find(&SearchCriteria::new(
                None,
                vec![
                    Filter::category(Category::new("boots").unwrap()),
                    Filter::sku(Sku::new("000003").unwrap()),
                ],
            ))
            .unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn discounts_are_optional() {
        let seed = CatalogSeed::from_json_str(
            r#"{ "products": [{ "sku": "1", "name": "a", "category": "c", "price": 10 }] }"#,
        )
        .unwrap();
        assert!(seed.discounts.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CatalogSeed::from_json_str("{ \"products\": [").unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn invalid_values_are_rejected_while_parsing() {
        let err = CatalogSeed::from_json_str(
            r#"{ "products": [{ "sku": "1", "name": "a", "category": "c", "price": -10 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn duplicate_skus_are_invalid() {
        let seed = CatalogSeed::from_json_str(
            r#"{ "products": [
                { "sku": "1", "name": "a", "category": "c", "price": 10 },
                { "sku": "1", "name": "b", "category": "c", "price": 20 }
            ] }"#,
        )
        .unwrap();

        let err = seed.into_repositories(default_window()).unwrap_err();
        assert!(matches!(
            err,
            SeedError::Invalid(DomainError::Validation(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CatalogSeed::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
