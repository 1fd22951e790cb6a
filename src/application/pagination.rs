//! Concurrent retrieval of every page of a collection.

use std::future::Future;

use futures::future::try_join_all;
use tracing::debug;

use crate::domain::collection::Collection;
use crate::domain::entities::Page;
use crate::error::ClientError;

/// Page size the upstream API serves.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound on the pages a single walk fetches.
pub const MAX_PAGES: u32 = 10_000;

/// Walks all pages of a collection starting from the first page's `count`.
///
/// Page 1 is fetched alone; the remaining `2..=ceil(count / page_size)` pages
/// are then fetched concurrently and returned in page-number order,
/// independent of the order in which they complete.
#[derive(Debug, Clone, Copy)]
pub struct PaginationWalker {
    page_size: u64,
}

impl PaginationWalker {
    /// Creates a walker for a fixed page size. A size of 0 is treated as 1.
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of pages holding `count` items. An empty collection still has
    /// its first page.
    pub fn total_pages(&self, count: u64) -> u32 {
        let pages = count.div_ceil(self.page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Fetches every page of `collection` with `fetch`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ClientError`] encountered. A failed page aborts the
    /// whole walk and drops the page fetches still in flight. A first page
    /// whose `count` needs more than [`MAX_PAGES`] pages fails with
    /// [`ClientError::TooManyPages`] before any further request.
    pub async fn fetch_all_pages<T, F, Fut>(
        &self,
        collection: Collection,
        fetch: F,
    ) -> Result<Vec<Page<T>>, ClientError>
    where
        F: Fn(u32) -> Fut,
        Fut: Future<Output = Result<Page<T>, ClientError>>,
    {
        let first = fetch(1).await?;
        let total_pages = self.total_pages(first.count);

        debug!(
            %collection,
            count = first.count,
            total_pages,
            "Fetched first page"
        );

        if total_pages > MAX_PAGES {
            return Err(ClientError::TooManyPages {
                collection: collection.as_str(),
                count: first.count,
                max_pages: MAX_PAGES,
            });
        }

        if total_pages == 1 {
            return Ok(vec![first]);
        }

        let rest = try_join_all((2..=total_pages).map(&fetch)).await?;

        let mut pages = Vec::with_capacity(rest.len() + 1);
        pages.push(first);
        pages.extend(rest);

        Ok(pages)
    }
}

impl Default for PaginationWalker {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
