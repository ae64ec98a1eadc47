use thiserror::Error;

use storefront_catalog::RepositoryError;
use storefront_core::Sku;

pub type PricingResult<T> = Result<T, PricingError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// The discount backend failed while pricing a specific product.
    #[error("failed to resolve discounts for product {sku}: {source}")]
    DiscountLookup { sku: Sku, source: RepositoryError },
}

impl PricingError {
    pub fn sku(&self) -> &Sku {
        match self {
            PricingError::DiscountLookup { sku, .. } => sku,
        }
    }

    /// The backend error that caused this failure.
    pub fn repository_error(&self) -> &RepositoryError {
        match self {
            PricingError::DiscountLookup { source, .. } => source,
        }
    }
}
