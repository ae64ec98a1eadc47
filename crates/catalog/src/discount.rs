//! Discount rules and price-adjusted products.

use serde::{Deserialize, Serialize};

use storefront_core::{Category, Currency, DiscountPercentage, Price, Sku, ValueObject};

use crate::pagination::Paginated;
use crate::product::Product;

/// Discount applying to every product of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDiscount {
    category: Category,
    percentage: DiscountPercentage,
}

impl CategoryDiscount {
    pub fn new(category: Category, percentage: DiscountPercentage) -> Self {
        Self {
            category,
            percentage,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn percentage(&self) -> DiscountPercentage {
        self.percentage
    }
}

/// Discount applying to a single SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDiscount {
    sku: Sku,
    percentage: DiscountPercentage,
}

impl ProductDiscount {
    pub fn new(sku: Sku, percentage: DiscountPercentage) -> Self {
        Self { sku, percentage }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn percentage(&self) -> DiscountPercentage {
        self.percentage
    }
}

/// A discount rule, tagged by what it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Discount {
    Category(CategoryDiscount),
    Product(ProductDiscount),
}

impl Discount {
    pub fn category(category: Category, percentage: DiscountPercentage) -> Self {
        Self::Category(CategoryDiscount::new(category, percentage))
    }

    pub fn product(sku: Sku, percentage: DiscountPercentage) -> Self {
        Self::Product(ProductDiscount::new(sku, percentage))
    }

    pub fn percentage(&self) -> DiscountPercentage {
        match self {
            Discount::Category(d) => d.percentage(),
            Discount::Product(d) => d.percentage(),
        }
    }
}

impl ValueObject for Discount {}

/// Final price of a product after discount resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountedPrice {
    pub original: Price,
    #[serde(rename = "final")]
    pub final_price: Price,
    /// `None` when no discount applied.
    pub discount_percentage: Option<DiscountPercentage>,
    pub currency: Currency,
}

impl DiscountedPrice {
    pub fn new(original: Price, discount: Option<DiscountPercentage>) -> Self {
        let final_price = match discount {
            Some(percentage) => original.discounted_by(percentage),
            None => original,
        };
        Self {
            original,
            final_price,
            discount_percentage: discount,
            currency: Currency::Eur,
        }
    }
}

/// A product with its resolved price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountedProduct {
    pub sku: Sku,
    pub name: String,
    pub category: Category,
    pub price: DiscountedPrice,
}

impl DiscountedProduct {
    pub fn new(product: &Product, price: DiscountedPrice) -> Self {
        Self {
            sku: product.sku().clone(),
            name: product.name().to_string(),
            category: product.category().clone(),
            price,
        }
    }
}

/// A page of priced products, as returned to the transport layer.
pub type PaginatedDiscountedProducts = Paginated<DiscountedProduct>;
