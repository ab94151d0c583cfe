//! Query descriptors for category listing.

use serde::{Deserialize, Serialize};

const DEFAULT_PER_PAGE: u32 = 10;
const DEFAULT_SORT: &str = "name";
const DEFAULT_DIRECTION: &str = "asc";

/// Page, filter and ordering request for a category list/search.
///
/// Pure data: interpreting `sort` and `direction` belongs to whichever
/// gateway executes the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySearchParams {
    /// Zero-based page index.
    pub page: u32,
    pub per_page: u32,
    /// Free-text filter; empty means no filter.
    pub terms: String,
    /// Field name to order by.
    pub sort: String,
    /// `asc` or `desc`.
    pub direction: String,
}

impl CategorySearchParams {
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: impl Into<String>,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction: direction.into(),
        }
    }
}

impl Default for CategorySearchParams {
    fn default() -> Self {
        Self::new(0, DEFAULT_PER_PAGE, "", DEFAULT_SORT, DEFAULT_DIRECTION)
    }
}
