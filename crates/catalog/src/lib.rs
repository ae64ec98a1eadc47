//! Catalog query model.
//!
//! Products, discount rules, search criteria and pagination, plus the
//! repository contracts any storage backend must satisfy. Pure data and
//! traits: no IO, no HTTP, no storage.

pub mod criteria;
pub mod discount;
pub mod pagination;
pub mod product;
pub mod repository;

pub use criteria::{CategoryFilter, Filter, PriceLessThanFilter, SearchCriteria, SkuFilter};
pub use discount::{
    CategoryDiscount, Discount, DiscountedPrice, DiscountedProduct, PaginatedDiscountedProducts,
    ProductDiscount,
};
pub use pagination::{Paginated, Pagination, PaginationMeta};
pub use product::{PaginatedProducts, Product};
pub use repository::{DiscountRepository, ProductRepository, RepositoryError, RepositoryResult};
