use std::sync::Arc;

use storefront_catalog::Pagination;
use storefront_infra::{CatalogSeed, SeedError, SeededRepositories};
use storefront_listing::{ListingService, ProductLister};
use storefront_pricing::DiscountPricingService;

use crate::config::ApiConfig;

/// Everything the handlers need, shared behind an `Arc`.
#[derive(Clone)]
pub struct AppServices {
    pub lister: Arc<dyn ProductLister>,
    /// Fills in `limit`/`offset` when a request sets only one of them.
    pub default_window: Pagination,
}

impl AppServices {
    pub fn new(lister: Arc<dyn ProductLister>, default_window: Pagination) -> Self {
        Self {
            lister,
            default_window,
        }
    }

    /// Wire the listing pipeline over an already-loaded seed.
    pub fn from_seed(seed: CatalogSeed, default_window: Pagination) -> Result<Self, SeedError> {
        let SeededRepositories {
            products,
            discounts,
        } = seed.into_repositories(default_window)?;

        let pricing = DiscountPricingService::new(discounts);
        let lister = ListingService::new(products, pricing);

        Ok(Self::new(Arc::new(lister), default_window))
    }
}

/// Load the configured seed (or the bundled demo catalog) and wire services.
pub fn build_services(config: &ApiConfig) -> Result<AppServices, SeedError> {
    let seed = match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog seed");
            CatalogSeed::from_path(path)?
        }
        None => {
            tracing::warn!("CATALOG_SEED_PATH not set; using bundled demo catalog");
            CatalogSeed::demo()?
        }
    };

    AppServices::from_seed(seed, config.default_window)
}
