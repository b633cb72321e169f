//! Offset pagination for search results

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default page size
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Page number and page size.
///
/// # Examples
///
/// ```
/// use gauge_settings::Pagination;
///
/// let pagination = Pagination::new(3, 50);
/// assert_eq!(pagination.offset(), 100);
///
/// // Page numbers start at 1
/// assert_eq!(Pagination::new(0, 50).page, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: usize,

    /// Items per page
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Read `page` from query parameters; the page size is fixed.
    pub fn from_query_params(params: &HashMap<String, String>) -> Self {
        let page = params
            .get("page")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1);

        Self::new(page, DEFAULT_PAGE_SIZE)
    }

    /// Items skipped before this page; saturates for page numbers past
    /// the addressable range.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> usize {
        self.per_page
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.per_page)
    }

    pub fn has_next(&self, total_items: usize) -> bool {
        self.page < self.total_pages(total_items)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Pagination response metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub per_page: usize,

    /// Items across all pages
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(pagination: Pagination, total: usize) -> Self {
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            total,
            total_pages: pagination.total_pages(total),
            has_next: pagination.has_next(total),
            has_prev: pagination.has_prev(),
        }
    }
}

/// One page of results plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    /// Cut the requested page out of the full, ordered result set.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        let total = items.len();
        let data = items
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit())
            .collect();

        Self {
            data,
            meta: PaginationMeta::new(pagination, total),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_clamps() {
        let pagination = Pagination::new(0, 0);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.per_page, 1);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_from_query_params() {
        let mut params = HashMap::new();
        params.insert("page".to_string(), "3".to_string());
        assert_eq!(Pagination::from_query_params(&params).offset(), 100);

        params.insert("page".to_string(), "abc".to_string());
        assert_eq!(Pagination::from_query_params(&params).page, 1);
    }

    #[test]
    fn test_huge_page_number() {
        let mut params = HashMap::new();
        params.insert("page".to_string(), usize::MAX.to_string());

        let pagination = Pagination::from_query_params(&params);
        assert_eq!(pagination.page, usize::MAX);
        assert_eq!(pagination.offset(), usize::MAX);

        let page = Page::new((0..10).collect::<Vec<usize>>(), pagination);
        assert!(page.is_empty());
        assert_eq!(page.meta.total, 10);
        assert!(!page.meta.has_next);
        assert!(page.meta.has_prev);
    }

    #[test]
    fn test_page_slicing() {
        let items: Vec<usize> = (0..120).collect();

        let page = Page::new(items.clone(), Pagination::new(3, 50));
        assert_eq!(page.len(), 20);
        assert_eq!(page.data[0], 100);
        assert_eq!(page.meta.total, 120);
        assert_eq!(page.meta.total_pages, 3);
        assert!(!page.meta.has_next);
        assert!(page.meta.has_prev);

        let page = Page::new(items, Pagination::new(9, 50));
        assert!(page.is_empty());
        assert_eq!(page.meta.total, 120);
    }

    #[test]
    fn test_empty_result_meta() {
        let page: Page<usize> = Page::new(Vec::new(), Pagination::default());
        assert_eq!(page.meta.total_pages, 0);
        assert!(!page.meta.has_next);
        assert!(!page.meta.has_prev);
    }
}
