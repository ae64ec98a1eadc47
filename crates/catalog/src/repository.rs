//! Repository contracts the query pipeline is evaluated against.

use std::sync::Arc;

use thiserror::Error;

use crate::criteria::SearchCriteria;
use crate::discount::Discount;
use crate::product::PaginatedProducts;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failure surfaced by a storage backend.
///
/// Propagated unchanged through pricing and listing; never retried by the
/// query pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    /// Caller-imposed deadline exceeded, as translated by the backend.
    #[error("storage backend timed out: {0}")]
    Timeout(String),

    #[error("corrupt data in storage backend: {0}")]
    Corrupt(String),
}

/// Read-only product catalog.
///
/// ## List Semantics
///
/// `list()` must, for any backend (in-memory, SQL, remote):
/// - apply every filter in `criteria.filters()` as a **conjunction** over the
///   full catalog (a product must satisfy all of them)
/// - report `meta.total` as the size of the filtered set, before slicing
/// - return `filtered[offset..offset + limit]`, clamped to the filtered set;
///   an offset past the end is an empty page, not an error
/// - use its configured default window when `criteria.pagination()` is `None`,
///   and report that window in `meta.pagination`
///
/// Filter matching: category is exact, case-sensitive equality; price ceiling
/// is inclusive (`price <= ceiling`); SKU is exact equality.
pub trait ProductRepository: Send + Sync {
    fn list(&self, criteria: &SearchCriteria) -> RepositoryResult<PaginatedProducts>;
}

/// Read-only discount rule set.
///
/// ## Find Semantics
///
/// `find()` answers "which rules could apply to this product": it returns the
/// union of the category rule registered for the criteria's category filter
/// and the product rule registered for its SKU filter. Each lookup is
/// independent (OR across filter kinds, unlike `ProductRepository::list`).
/// No match is an empty vector, not an error. Pagination is ignored.
pub trait DiscountRepository: Send + Sync {
    fn find(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<Discount>>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn list(&self, criteria: &SearchCriteria) -> RepositoryResult<PaginatedProducts> {
        (**self).list(criteria)
    }
}

impl<S> DiscountRepository for Arc<S>
where
    S: DiscountRepository + ?Sized,
{
    fn find(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<Discount>> {
        (**self).find(criteria)
    }
}
