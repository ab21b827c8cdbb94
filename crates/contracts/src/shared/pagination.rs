//! Page metadata carried out-of-band in response headers.
//!
//! The server owns pagination policy: the client never computes page sizes or
//! page counts itself, it only reads what the headers say and falls back to
//! fixed defaults when a header is missing or garbled.

use serde::{Deserialize, Serialize};

pub const HEADER_TOTAL_PAGES: &str = "X-Total-Pages";
pub const HEADER_CURRENT_PAGE: &str = "X-Current-Page";
pub const HEADER_PAGE_SIZE: &str = "X-Page-Size";
pub const HEADER_TOTAL_COUNT: &str = "X-Total-Count";

/// All headers the decoder looks at
pub const PAGINATION_HEADERS: [&str; 4] = [
    HEADER_TOTAL_PAGES,
    HEADER_CURRENT_PAGE,
    HEADER_PAGE_SIZE,
    HEADER_TOTAL_COUNT,
];

/// Pagination descriptors of one fetched page (pages are 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl PageMeta {
    /// Decode the four pagination headers.
    ///
    /// `header` looks a header up by name; absent or unparsable values default to
    /// `1` / `requested_page` / `default_page_size` / `0`.
    pub fn from_headers<H>(header: H, requested_page: u32, default_page_size: u32) -> Self
    where
        H: Fn(&str) -> Option<String>,
    {
        Self {
            total_pages: parse_header(header(HEADER_TOTAL_PAGES)).unwrap_or(1),
            current_page: parse_header(header(HEADER_CURRENT_PAGE)).unwrap_or(requested_page),
            page_size: parse_header(header(HEADER_PAGE_SIZE)).unwrap_or(default_page_size),
            total_count: parse_header(header(HEADER_TOTAL_COUNT)).unwrap_or(0),
        }
    }
}

fn parse_header<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

/// A bounded slice of a server-side collection plus its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of rows on the server, falling back to the page length
    /// when the server did not report a count.
    pub fn total_or_len(&self) -> u64 {
        if self.meta.total_count > 0 {
            self.meta.total_count
        } else {
            self.items.len() as u64
        }
    }
}
