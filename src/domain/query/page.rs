use std::future::Future;

use serde::Serialize;

use super::sort::Sort;
use crate::domain::repositories::errors::{RepositoryError, RepositoryResult};

/// Which slice of an ordered result to fetch
///
/// A request is a row offset, a positive page size and a sort. The page
/// number reported back is `offset / size`; offsets need not be aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    offset: u64,
    size: u32,
    sort: Sort,
}

impl PageRequest {
    /// Creates an unsorted request for zero-based page `page`
    ///
    /// # Errors
    /// `RepositoryError::InvalidPageRequest` when `size` is zero.
    pub fn of(page: u32, size: u32) -> RepositoryResult<Self> {
        Self::at_offset(page as u64 * size as u64, size)
    }

    /// Creates an unsorted request starting at row `offset`
    ///
    /// # Errors
    /// `RepositoryError::InvalidPageRequest` when `limit` is zero.
    pub fn at_offset(offset: u64, limit: u32) -> RepositoryResult<Self> {
        if limit == 0 {
            return Err(RepositoryError::InvalidPageRequest(
                "Page size must be positive".to_string(),
            ));
        }

        Ok(Self {
            offset,
            size: limit,
            sort: Sort::unsorted(),
        })
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Request for the rows right after this one, same size and sort
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.size as u64),
            size: self.size,
            sort: self.sort.clone(),
        }
    }

    /// Zero-based page number containing the first requested row
    pub fn page(&self) -> u64 {
        self.offset / self.size as u64
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

/// A slice of an ordered result plus the total number of matching rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub number: u64,
    pub offset: u64,
    pub size: u32,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Assembles a page from fetched content and a known total
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            total_elements,
            number: request.page(),
            offset: request.offset(),
            size: request.size(),
            total_pages: total_elements.div_ceil(request.size() as u64),
        }
    }

    /// Assembles a page, running `count` only when the total cannot be
    /// derived from the fetched content
    pub async fn with_count<F, Fut>(
        content: Vec<T>,
        request: &PageRequest,
        count: F,
    ) -> RepositoryResult<Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RepositoryResult<u64>>,
    {
        let total = match derived_total(content.len(), request) {
            Some(total) => total,
            None => count().await?,
        };

        Ok(Self::new(content, request, total))
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn is_first(&self) -> bool {
        self.offset == 0
    }

    /// True while rows remain after this page
    pub fn has_next(&self) -> bool {
        self.offset.saturating_add(self.size as u64) < self.total_elements
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            number: self.number,
            offset: self.offset,
            size: self.size,
            total_pages: self.total_pages,
        }
    }
}

/// Total row count implied by a fetched page, when it is implied at all
///
/// - first page shorter than the page size: the content is everything
/// - later non-empty page shorter than the page size: it is the last page
/// - otherwise the total is unknown
pub fn derived_total(content_len: usize, request: &PageRequest) -> Option<u64> {
    let content_len = content_len as u64;
    let size = request.size() as u64;

    if request.offset() == 0 {
        return (content_len < size).then_some(content_len);
    }

    (content_len > 0 && content_len < size).then(|| request.offset() + content_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            PageRequest::of(0, 0),
            Err(RepositoryError::InvalidPageRequest(_))
        ));
    }

    #[test]
    fn offset_is_page_times_size() {
        let request = PageRequest::of(2, 3).unwrap();

        assert_eq!(request.offset(), 6);
        assert_eq!(request.next().offset(), 9);
    }

    #[test]
    fn at_offset_accepts_unaligned_offsets() {
        let request = PageRequest::at_offset(5, 3).unwrap();

        assert_eq!(request.offset(), 5);
        assert_eq!(request.page(), 1);
        assert_eq!(request.next().offset(), 8);
        assert_eq!(PageRequest::at_offset(6, 3).unwrap().page(), 2);
        assert!(PageRequest::at_offset(0, 0).is_err());
    }

    #[test]
    fn unaligned_page_knows_whether_rows_remain() {
        let request = PageRequest::at_offset(4, 3).unwrap();
        let middle = Page::new(vec![5, 6, 7], &request, 8);
        let tail = Page::new(vec![6, 7, 8], &PageRequest::at_offset(5, 3).unwrap(), 8);

        assert_eq!(middle.offset, 4);
        assert!(!middle.is_first());
        assert!(middle.has_next());
        assert!(!tail.has_next());
    }

    #[test]
    fn derived_total_for_short_unaligned_page() {
        let request = PageRequest::at_offset(5, 4).unwrap();

        assert_eq!(derived_total(3, &request), Some(8));
        assert_eq!(derived_total(4, &request), None);
    }

    #[test]
    fn total_pages_is_ceiling() {
        let request = PageRequest::of(0, 3).unwrap();

        assert_eq!(Page::new(vec![1, 2, 3], &request, 8).total_pages, 3);
        assert_eq!(Page::new(vec![1, 2, 3], &request, 9).total_pages, 3);
        assert_eq!(Page::new(Vec::<i32>::new(), &request, 0).total_pages, 0);
    }

    #[test]
    fn size_is_requested_size_not_content_length() {
        let request = PageRequest::of(0, 10).unwrap();
        let page = Page::new(vec![1; 8], &request, 8);

        assert_eq!(page.size, 10);
        assert_eq!(page.number_of_elements(), 8);
        assert!(page.is_first());
        assert!(page.is_last());
    }

    #[test]
    fn has_next_until_last_page() {
        let first = Page::new(vec![1, 2, 3], &PageRequest::of(0, 3).unwrap(), 8);
        let last = Page::new(vec![7, 8], &PageRequest::of(2, 3).unwrap(), 8);

        assert!(first.has_next());
        assert!(!last.has_next());
    }

    #[test]
    fn derived_total_for_short_first_page() {
        assert_eq!(derived_total(8, &PageRequest::of(0, 10).unwrap()), Some(8));
        assert_eq!(derived_total(0, &PageRequest::of(0, 10).unwrap()), Some(0));
    }

    #[test]
    fn derived_total_for_short_later_page() {
        assert_eq!(derived_total(2, &PageRequest::of(2, 3).unwrap()), Some(8));
    }

    #[test]
    fn derived_total_unknown_for_full_or_empty_later_page() {
        assert_eq!(derived_total(3, &PageRequest::of(0, 3).unwrap()), None);
        assert_eq!(derived_total(3, &PageRequest::of(1, 3).unwrap()), None);
        assert_eq!(derived_total(0, &PageRequest::of(5, 3).unwrap()), None);
    }

    #[tokio::test]
    async fn with_count_skips_count_when_total_is_derivable() {
        let calls = AtomicUsize::new(0);
        let request = PageRequest::of(0, 10).unwrap();

        let page = Page::with_count(vec![1; 8], &request, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(99)
        })
        .await
        .unwrap();

        assert_eq!(page.total_elements, 8);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn with_count_runs_count_for_full_page() {
        let request = PageRequest::of(0, 3).unwrap();

        let page = Page::with_count(vec![1, 2, 3], &request, || async { Ok(8) })
            .await
            .unwrap();

        assert_eq!(page.total_elements, 8);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn map_keeps_paging_metadata() {
        let page = Page::new(vec![1, 2], &PageRequest::of(1, 2).unwrap(), 4).map(|n| n * 10);

        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn page_serializes_camel_case() {
        let page = Page::new(vec!["a"], &PageRequest::of(0, 5).unwrap(), 1);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["size"], 5);
    }
}
