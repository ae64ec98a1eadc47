use serde::Deserialize;

use storefront_catalog::{Filter, Pagination, SearchCriteria};
use storefront_core::{Category, DomainError, DomainResult, Price, Sku};

// -------------------------
// Request DTOs
// -------------------------

/// `GET /products` query string. Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    #[serde(rename = "priceLessThan")]
    pub price_less_than: Option<String>,
    pub sku: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListProductsQuery {
    /// Map query parameters to search criteria.
    ///
    /// Without `limit` and `offset` the criteria carry no window and the
    /// repository's default applies; with only one of them, the other is
    /// taken from `default_window`.
    pub fn to_criteria(&self, default_window: Pagination) -> DomainResult<SearchCriteria> {
        let limit = parse_int("limit", &self.limit)?;
        let offset = parse_int("offset", &self.offset)?;

        let pagination = match (limit, offset) {
            (None, None) => None,
            (limit, offset) => Some(Pagination::new(
                limit.unwrap_or_else(|| to_i64(default_window.limit())),
                offset.unwrap_or_else(|| to_i64(default_window.offset())),
            )?),
        };

        let mut filters = Vec::new();
        if let Some(category) = present(&self.category) {
            filters.push(Filter::category(Category::new(category)?));
        }
        if let Some(ceiling) = parse_int("priceLessThan", &self.price_less_than)? {
            filters.push(Filter::price_less_than(Price::try_from(ceiling)?));
        }
        if let Some(sku) = present(&self.sku) {
            filters.push(Filter::sku(Sku::new(sku)?));
        }

        Ok(SearchCriteria::new(pagination, filters))
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_int(name: &str, value: &Option<String>) -> DomainResult<Option<i64>> {
    present(value)
        .map(|raw| {
            raw.parse::<i64>().map_err(|_| {
                DomainError::validation(format!("{name} must be an integer, got {raw:?}"))
            })
        })
        .transpose()
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_window() -> Pagination {
        Pagination::new(5, 0).unwrap()
    }

    #[test]
    fn empty_query_has_no_window_and_no_filters() {
        let criteria = ListProductsQuery::default()
            .to_criteria(default_window())
            .unwrap();

        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn partial_window_is_completed_from_defaults() {
        let query = ListProductsQuery {
            offset: Some("5".to_string()),
            ..Default::default()
        };

        let criteria = query.to_criteria(default_window()).unwrap();
        assert_eq!(criteria.pagination(), Some(Pagination::new(5, 5).unwrap()));
    }

    #[test]
    fn maps_every_filter() {
        let query = ListProductsQuery {
            category: Some("boots".to_string()),
            price_less_than: Some("71000".to_string()),
            sku: Some("000003".to_string()),
            ..Default::default()
        };

        let criteria = query.to_criteria(default_window()).unwrap();
        assert_eq!(
            criteria.filters(),
            &[
                Filter::category(Category::new("boots").unwrap()),
                Filter::price_less_than(Price::new(71000)),
                Filter::sku(Sku::new("000003").unwrap()),
            ]
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        let query = ListProductsQuery {
            category: Some("".to_string()),
            limit: Some(" ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            query.to_criteria(default_window()).unwrap(),
            SearchCriteria::default()
        );
    }

    #[test]
    fn rejects_malformed_and_negative_numbers() {
        for query in [
            ListProductsQuery {
                limit: Some("ten".to_string()),
                ..Default::default()
            },
            ListProductsQuery {
                limit: Some("-1".to_string()),
                ..Default::default()
            },
            ListProductsQuery {
                offset: Some("-5".to_string()),
                ..Default::default()
            },
            ListProductsQuery {
                price_less_than: Some("-100".to_string()),
                ..Default::default()
            },
        ] {
            assert!(matches!(
                query.to_criteria(default_window()),
                Err(DomainError::Validation(_))
            ));
        }
    }
}
