use std::collections::HashSet;

use storefront_catalog::{
    Filter, PaginatedProducts, Pagination, PaginationMeta, Product, ProductRepository,
    RepositoryResult, SearchCriteria,
};
use storefront_core::{DomainError, DomainResult};

/// In-memory product catalog.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
    default_window: Pagination,
}

impl InMemoryProductRepository {
    /// Build the catalog, rejecting duplicate SKUs.
    ///
    /// `default_window` is used for criteria that carry no pagination.
    pub fn new(products: Vec<Product>, default_window: Pagination) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.sku()) {
                return Err(DomainError::validation(format!(
                    "duplicate SKU in catalog: {}",
                    product.sku()
                )));
            }
        }

        Ok(Self {
            products,
            default_window,
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn matches(filter: &Filter, product: &Product) -> bool {
    match filter {
        Filter::Category(f) => product.category() == f.value(),
        Filter::PriceLessThan(f) => product.price() <= f.value(),
        Filter::Sku(f) => product.sku() == f.value(),
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self, criteria: &SearchCriteria) -> RepositoryResult<PaginatedProducts> {
        let window = criteria.pagination().unwrap_or(self.default_window);

        // Conjunction: a product must satisfy every filter.
        let filtered: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| criteria.filters().iter().all(|f| matches(f, product)))
            .collect();

        let items = window
            .slice(&filtered)
            .iter()
            .map(|p| (*p).clone())
            .collect();

        Ok(PaginatedProducts::new(
            PaginationMeta::new(filtered.len(), window),
            items,
        ))
    }
}
