//! Page-at-a-time listing and full materialisation.

use super::tracker::TrackerResult;
use std::future::Future;

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Position within a paginated listing. Page numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    number: u32,
    per_page: u32,
}

impl PageRequest {
    /// Returns the first page with the given size. A size of zero is raised
    /// to one.
    #[must_use]
    pub const fn first(per_page: u32) -> Self {
        Self {
            number: 1,
            per_page: if per_page == 0 { 1 } else { per_page },
        }
    }

    /// Returns the request for the following page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            number: self.number.saturating_add(1),
            per_page: self.per_page,
        }
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Returns the page size.
    #[must_use]
    pub const fn per_page(self) -> u32 {
        self.per_page
    }

    /// Returns the zero-based index of the first item on this page.
    #[must_use]
    pub const fn offset(self) -> usize {
        (self.number.saturating_sub(1) as usize).saturating_mul(self.per_page as usize)
    }
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in tracker order.
    pub items: Vec<T>,
    /// Whether another page follows.
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Creates a page that is the last one in the listing.
    #[must_use]
    pub const fn last(items: Vec<T>) -> Self {
        Self {
            items,
            has_next: false,
        }
    }

    /// Creates a page followed by at least one more.
    #[must_use]
    pub const fn with_next(items: Vec<T>) -> Self {
        Self {
            items,
            has_next: true,
        }
    }
}

/// Fetches every page starting from the first and concatenates the items.
///
/// # Errors
///
/// Returns the first error produced by `fetch`; items gathered so far are
/// discarded.
pub async fn collect_pages<T, F, Fut>(per_page: u32, mut fetch: F) -> TrackerResult<Vec<T>>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = TrackerResult<Page<T>>>,
{
    let mut items = Vec::new();
    let mut request = PageRequest::first(per_page);
    loop {
        let page = fetch(request).await?;
        items.extend(page.items);
        if !page.has_next {
            return Ok(items);
        }
        request = request.next();
    }
}
