//! Listing pipeline: one repository fetch, then a sequential pricing pass.

use std::sync::Arc;

use storefront_catalog::{
    DiscountedProduct, PaginatedDiscountedProducts, ProductRepository, SearchCriteria,
};
use storefront_pricing::PriceCalculator;

use crate::error::ListingResult;

/// Paginated, filtered, price-adjusted product listing.
pub trait ProductLister: Send + Sync {
    fn list(&self, criteria: &SearchCriteria) -> ListingResult<PaginatedDiscountedProducts>;
}

impl<L> ProductLister for Arc<L>
where
    L: ProductLister + ?Sized,
{
    fn list(&self, criteria: &SearchCriteria) -> ListingResult<PaginatedDiscountedProducts> {
        (**self).list(criteria)
    }
}

/// Default `ProductLister`: repository page + per-item pricing.
///
/// All-or-nothing: the first failing product aborts the whole call, so a
/// partially priced page is never returned. Item order and page metadata are
/// taken from the repository unchanged.
#[derive(Debug, Clone)]
pub struct ListingService<P, C> {
    products: P,
    pricing: C,
}

impl<P, C> ListingService<P, C>
where
    P: ProductRepository,
    C: PriceCalculator,
{
    pub fn new(products: P, pricing: C) -> Self {
        Self { products, pricing }
    }
}

impl<P, C> ProductLister for ListingService<P, C>
where
    P: ProductRepository,
    C: PriceCalculator,
{
    fn list(&self, criteria: &SearchCriteria) -> ListingResult<PaginatedDiscountedProducts> {
        let page = self.products.list(criteria)?;
        let (meta, products) = page.into_parts();

        let items = products
            .iter()
            .map(|product| -> ListingResult<DiscountedProduct> {
                let price = self.pricing.calculate(product)?;
                Ok(DiscountedProduct::new(product, price))
            })
            .collect::<ListingResult<Vec<_>>>()?;

        tracing::debug!(
            filters = criteria.filters().len(),
            total = meta.total,
            returned = items.len(),
            "listed products"
        );

        Ok(PaginatedDiscountedProducts::new(meta, items))
    }
}
