//! Paginated collection result.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// One page of a collection.
///
/// `count` is the total number of items across every page of the collection,
/// not the length of `results`. Item order within a page is server-defined.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Creates a page without navigation links.
    pub fn new(count: u64, results: Vec<T>) -> Self {
        Self {
            count,
            next: None,
            previous: None,
            results,
        }
    }

    /// Returns true if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
