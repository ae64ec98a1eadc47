use thiserror::Error;

use storefront_catalog::RepositoryError;
use storefront_pricing::PricingError;

pub type ListingResult<T> = Result<T, ListingError>;

/// First failure raised by either collaborator, passed through untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}
