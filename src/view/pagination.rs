//! Result-set pagination.
//!
//! # Design Decisions
//! - Fixed page size of 9, shared by every list route
//! - Pages are 1-based; out-of-range pages yield an empty slice, never
//!   an error
//! - `total_pages` is 0 for an empty result set

/// Number of drinks shown per list page.
pub const PAGE_SIZE: usize = 9;

/// One page of an ordered result set, plus its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<T> {
    /// The slice of results visible on this page.
    pub items: Vec<T>,
    /// The requested 1-based page number, echoed back unchanged.
    pub page: i64,
    /// ceil(total results / page size); 0 when there are no results.
    pub total_pages: usize,
}

/// Slice a full result sequence down to the requested page.
pub fn paginate<T>(results: Vec<T>, page: i64) -> PageWindow<T> {
    let total_pages = results.len().div_ceil(PAGE_SIZE);

    let items = if page < 1 {
        Vec::new()
    } else {
        let start = (page as usize - 1).saturating_mul(PAGE_SIZE);
        results.into_iter().skip(start).take(PAGE_SIZE).collect()
    };

    PageWindow {
        items,
        page,
        total_pages,
    }
}

/// Parse a raw `page` query value: absent or non-numeric means page 1.
///
/// Numeric values pass through unchanged, so `page=0` stays 0 and falls
/// out of range in [`paginate`] rather than being rejected.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(1)
}
