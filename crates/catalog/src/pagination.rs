//! Pagination window and the total-count envelope.

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, ValueObject};

/// A `(limit, offset)` window over a *filtered* result set.
///
/// `limit == 0` is legal and yields no items. Offsets past the end are legal
/// and yield an empty page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pagination {
    limit: usize,
    offset: usize,
}

impl Pagination {
    /// Build a window, rejecting negative values.
    pub fn new(limit: i64, offset: i64) -> DomainResult<Self> {
        let limit = usize::try_from(limit).map_err(|_| {
            DomainError::validation(format!("limit must be non-negative, got {limit}"))
        })?;
        let offset = usize::try_from(offset).map_err(|_| {
            DomainError::validation(format!("offset must be non-negative, got {offset}"))
        })?;
        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// `items[offset..offset + limit]`, clamped to `items.len()`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

impl ValueObject for Pagination {}

/// Page metadata: the filtered count before slicing plus the window used.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub total: usize,
    pub pagination: Pagination,
}

impl PaginationMeta {
    pub fn new(total: usize, pagination: Pagination) -> Self {
        Self { total, pagination }
    }
}

/// One page of a filtered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paginated<T> {
    meta: PaginationMeta,
    items: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn new(meta: PaginationMeta, items: Vec<T>) -> Self {
        Self { meta, items }
    }

    pub fn meta(&self) -> &PaginationMeta {
        &self.meta
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_parts(self) -> (PaginationMeta, Vec<T>) {
        (self.meta, self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(limit: i64, offset: i64) -> Pagination {
        Pagination::new(limit, offset).unwrap()
    }

    #[test]
    fn rejects_negative_limit_and_offset() {
        assert!(matches!(
            Pagination::new(-1, 0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Pagination::new(5, -1),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn zero_limit_is_legal_and_selects_nothing() {
        let items = [1, 2, 3];
        assert!(window(0, 0).slice(&items).is_empty());
    }

    #[test]
    fn slice_clamps_to_length() {
        let items = [1, 2, 3, 4, 5, 6];
        assert_eq!(window(5, 0).slice(&items), &[1, 2, 3, 4, 5]);
        assert_eq!(window(5, 5).slice(&items), &[6]);
        assert!(window(5, 6).slice(&items).is_empty());
        assert!(window(5, 600).slice(&items).is_empty());
    }

    #[test]
    fn huge_limit_does_not_overflow() {
        let items = [1, 2, 3];
        let p = Pagination {
            limit: usize::MAX,
            offset: 1,
        };
        assert_eq!(p.slice(&items), &[2, 3]);
    }

    #[test]
    fn meta_serializes_total_and_window() {
        let meta = PaginationMeta::new(6, window(5, 0));
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "total": 6, "pagination": { "limit": 5, "offset": 0 } })
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a page is the clamped sub-slice `[offset, offset + limit)`.
            #[test]
            fn slice_matches_reference_window(
                len in 0usize..50,
                limit in 0i64..60,
                offset in 0i64..60,
            ) {
                let items: Vec<usize> = (0..len).collect();
                let page = window(limit, offset).slice(&items);

                prop_assert!(page.len() <= limit as usize);
                let expected: Vec<usize> = items
                    .iter()
                    .copied()
                    .skip(offset as usize)
                    .take(limit as usize)
                    .collect();
                prop_assert_eq!(page, expected.as_slice());
            }
        }
    }
}
