//! Catalog products.

use serde::{Deserialize, Serialize};

use storefront_core::{Category, Price, Sku, ValueObject};

use crate::pagination::Paginated;

/// A catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    sku: Sku,
    name: String,
    category: Category,
    price: Price,
}

impl Product {
    pub fn new(sku: Sku, name: impl Into<String>, category: Category, price: Price) -> Self {
        Self {
            sku,
            name: name.into(),
            category,
            price,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl ValueObject for Product {}

/// A page of raw (not yet priced) products.
pub type PaginatedProducts = Paginated<Product>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_seed_shape() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "sku": "000003",
            "name": "Ashlington leather ankle boots",
            "category": "boots",
            "price": 71000
        }))
        .unwrap();

        assert_eq!(product.sku().as_str(), "000003");
        assert_eq!(product.category().as_str(), "boots");
        assert_eq!(product.price(), Price::new(71000));
    }

    #[test]
    fn rejects_negative_price_and_blank_sku() {
        let negative = serde_json::from_value::<Product>(serde_json::json!({
            "sku": "000001", "name": "x", "category": "boots", "price": -1
        }));
        assert!(negative.is_err());

        let blank = serde_json::from_value::<Product>(serde_json::json!({
            "sku": "", "name": "x", "category": "boots", "price": 1
        }));
        assert!(blank.is_err());
    }
}
