//! Response Pagination
//!
//! Wraps a fully materialized result sequence into a paged envelope with
//! navigation links. Engines sort first, then this layer slices, never the
//! other way around, so every page is a window into one consistent ranking.
//!
//! Envelope shape: `{links: {next, previous}, total_pages, count, results}`
//! where `count` is the total number of matches, not the page length.

use serde::{Deserialize, Serialize};


pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Client-supplied page selection. Both parameters are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl PageParams {
    /// 1-based page number; anything below 1 is treated as the first page.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Requested page size, clamped to 1..=100.
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Serialize)]
pub struct PageLinks {
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// One page of an ordered result sequence plus navigation metadata.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub links: PageLinks,
    pub total_pages: usize,
    pub count: usize,
    pub results: Vec<T>,
}

/// Slices `items` into the requested page and builds the envelope.
///
/// `path` and `query` describe the endpoint the links point back at; the
/// page parameters are appended to them. A page past the end yields empty
/// results and no `next` link.
pub fn paginate<T>(items: Vec<T>, params: &PageParams, path: &str, query: &[(&str, &str)]) -> Page<T> {
    let page = params.page();
    let page_size = params.page_size();

    let count = items.len();
    let total_pages = count.div_ceil(page_size).max(1);

    let results = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    let link = |target: usize| page_link(path, query, target, page_size);
    let next = if page < total_pages {
        Some(link(page + 1))
    } else {
        None
    };
    let previous = if page > 1 { Some(link(page - 1)) } else { None };

    Page {
        links: PageLinks { next, previous },
        total_pages,
        count,
        results,
    }
}

fn page_link(path: &str, query: &[(&str, &str)], page: usize, page_size: usize) -> String {
    let mut url = String::from(path);
    let mut separator = '?';
    for (name, value) in query {
        url.push(separator);
        url.push_str(name);
        url.push('=');
        url.push_str(&encode_component(value));
        separator = '&';
    }
    url.push(separator);
    url.push_str(&format!("page={}&page_size={}", page, page_size));
    url
}

/// Percent-encodes a query component, keeping the RFC 3986 unreserved set.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
