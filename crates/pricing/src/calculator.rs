//! Best-discount pricing.

use std::sync::Arc;

use storefront_catalog::{
    Discount, DiscountRepository, DiscountedPrice, Filter, Product, SearchCriteria,
};
use storefront_core::DiscountPercentage;

use crate::error::{PricingError, PricingResult};

/// Resolves the final price of one product.
pub trait PriceCalculator: Send + Sync {
    fn calculate(&self, product: &Product) -> PricingResult<DiscountedPrice>;
}

impl<C> PriceCalculator for Arc<C>
where
    C: PriceCalculator + ?Sized,
{
    fn calculate(&self, product: &Product) -> PricingResult<DiscountedPrice> {
        (**self).calculate(product)
    }
}

/// Picks the highest percentage among `discounts`.
///
/// Ties keep the first rule encountered; whether a rule targets a category or
/// a SKU plays no part in the comparison.
pub fn best_discount(discounts: &[Discount]) -> Option<DiscountPercentage> {
    discounts
        .iter()
        .map(Discount::percentage)
        .fold(None, |best, pct| match best {
            Some(current) if current >= pct => Some(current),
            _ => Some(pct),
        })
}

/// `PriceCalculator` backed by a `DiscountRepository`.
///
/// Discounts never stack: exactly one rule (the best one) is applied.
#[derive(Debug, Clone)]
pub struct DiscountPricingService<R> {
    repository: R,
}

impl<R: DiscountRepository> DiscountPricingService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Criteria for "every rule that could apply to this product".
    fn candidate_criteria(product: &Product) -> SearchCriteria {
        SearchCriteria::new(
            None,
            vec![
                Filter::category(product.category().clone()),
                Filter::sku(product.sku().clone()),
            ],
        )
    }
}

impl<R: DiscountRepository> PriceCalculator for DiscountPricingService<R> {
    fn calculate(&self, product: &Product) -> PricingResult<DiscountedPrice> {
        let criteria = Self::candidate_criteria(product);
        let discounts = self.repository.find(&criteria).map_err(|source| {
            tracing::warn!(sku = %product.sku(), error = %source, "discount lookup failed");
            PricingError::DiscountLookup {
                sku: product.sku().clone(),
                source,
            }
        })?;

        let applied = best_discount(&discounts);
        tracing::debug!(
            sku = %product.sku(),
            candidates = discounts.len(),
            percentage = applied.map(|p| p.value()),
            "resolved discount"
        );

        Ok(DiscountedPrice::new(product.price(), applied))
    }
}
