//! Search criteria: a pagination window plus a conjunction of filters.
//!
//! Filters are plain values. They carry no matching behaviour of their own;
//! each repository interprets the variants it understands by pattern match.

use storefront_core::{Category, Price, Sku, ValueObject};

use crate::pagination::Pagination;

/// Matches products whose category equals the carried one (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryFilter(Category);

impl CategoryFilter {
    pub fn new(category: Category) -> Self {
        Self(category)
    }

    pub fn value(&self) -> &Category {
        &self.0
    }
}

/// Matches products priced at or below the carried ceiling (inclusive).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PriceLessThanFilter(Price);

impl PriceLessThanFilter {
    pub fn new(ceiling: Price) -> Self {
        Self(ceiling)
    }

    pub fn value(&self) -> Price {
        self.0
    }
}

/// Matches the product with exactly this SKU.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkuFilter(Sku);

impl SkuFilter {
    pub fn new(sku: Sku) -> Self {
        Self(sku)
    }

    pub fn value(&self) -> &Sku {
        &self.0
    }
}

/// One typed predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Filter {
    Category(CategoryFilter),
    PriceLessThan(PriceLessThanFilter),
    Sku(SkuFilter),
}

impl Filter {
    pub fn category(category: Category) -> Self {
        Self::Category(CategoryFilter::new(category))
    }

    pub fn price_less_than(ceiling: Price) -> Self {
        Self::PriceLessThan(PriceLessThanFilter::new(ceiling))
    }

    pub fn sku(sku: Sku) -> Self {
        Self::Sku(SkuFilter::new(sku))
    }
}

impl ValueObject for Filter {}

/// A query against a repository.
///
/// `pagination == None` means the caller imposes no window; the repository
/// applies the default window it was configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pagination: Option<Pagination>,
    filters: Vec<Filter>,
}

impl SearchCriteria {
    pub fn new(pagination: Option<Pagination>, filters: Vec<Filter>) -> Self {
        Self {
            pagination,
            filters,
        }
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }
}

impl ValueObject for SearchCriteria {}
