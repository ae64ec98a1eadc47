use std::collections::HashMap;

use storefront_catalog::{Discount, DiscountRepository, Filter, RepositoryResult, SearchCriteria};
use storefront_core::{Category, DomainError, DomainResult, Sku};

/// In-memory discount rules, indexed by target.
///
/// At most one rule per category and one per SKU.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiscountRepository {
    by_category: HashMap<Category, Discount>,
    by_sku: HashMap<Sku, Discount>,
}

impl InMemoryDiscountRepository {
    pub fn new(discounts: Vec<Discount>) -> DomainResult<Self> {
        let mut repo = Self::default();

        for discount in discounts {
            let duplicate = match &discount {
                Discount::Category(d) => repo
                    .by_category
                    .insert(d.category().clone(), discount.clone())
                    .map(|_| d.category().to_string()),
                Discount::Product(d) => repo
                    .by_sku
                    .insert(d.sku().clone(), discount.clone())
                    .map(|_| d.sku().to_string()),
            };
            if let Some(target) = duplicate {
                return Err(DomainError::validation(format!(
                    "more than one discount registered for {target}"
                )));
            }
        }

        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.by_category.len() + self.by_sku.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiscountRepository for InMemoryDiscountRepository {
    fn find(&self, criteria: &SearchCriteria) -> RepositoryResult<Vec<Discount>> {
        // Two independent lookups, merged (OR across filter kinds).
        let found = criteria
            .filters()
            .iter()
            .filter_map(|filter| match filter {
                Filter::Category(f) => self.by_category.get(f.value()),
                Filter::Sku(f) => self.by_sku.get(f.value()),
                Filter::PriceLessThan(_) => None,
            })
            .cloned()
            .collect();

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{DiscountPercentage, Price};

    fn pct(value: u8) -> DiscountPercentage {
        DiscountPercentage::new(value).unwrap()
    }

    fn boots() -> Category {
        Category::new("boots").unwrap()
    }

    fn sku(value: &str) -> Sku {
        Sku::new(value).unwrap()
    }

    fn repo() -> InMemoryDiscountRepository {
        InMemoryDiscountRepository::new(vec![
            Discount::category(boots(), pct(30)),
            Discount::product(sku("000003"), pct(15)),
        ])
        .unwrap()
    }

    fn candidates(category: Category, sku: Sku) -> SearchCriteria {
        SearchCriteria::new(None, vec![Filter::category(category), Filter::sku(sku)])
    }

    #[test]
    fn returns_union_of_category_and_sku_rules() {
        let found = repo().find(&candidates(boots(), sku("000003"))).unwrap();

        assert_eq!(
            found,
            vec![
                Discount::category(boots(), pct(30)),
                Discount::product(sku("000003"), pct(15)),
            ]
        );
    }

    #[test]
    fn category_rule_alone() {
        let found = repo().find(&candidates(boots(), sku("000001"))).unwrap();
        assert_eq!(found, vec![Discount::category(boots(), pct(30))]);
    }

    #[test]
    fn sku_rule_matches_regardless_of_category() {
        let found = repo()
            .find(&candidates(Category::new("hats").unwrap(), sku("000003")))
            .unwrap();
        assert_eq!(found, vec![Discount::product(sku("000003"), pct(15))]);
    }

    #[test]
    fn no_match_is_empty() {
        let found = repo()
            .find(&candidates(
                Category::new("sandals").unwrap(),
                sku("000004"),
            ))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn price_filters_select_no_rules() {
        let criteria = SearchCriteria::new(None, vec![Filter::price_less_than(Price::new(1))]);
        assert!(repo().find(&criteria).unwrap().is_empty());
    }

    #[test]
    fn rejects_two_rules_for_one_target() {
        let err = InMemoryDiscountRepository::new(vec![
            Discount::category(boots(), pct(30)),
            Discount::category(boots(), pct(10)),
        ])
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
