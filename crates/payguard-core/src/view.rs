//! Filtered views and pagination over a dataset.
//!
//! Both are stateless: the caller owns the selected filter and page index and
//! resets the page to 1 whenever the filter or the dataset changes.

use std::{fmt, str::FromStr};

use crate::record::Record;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Valid,
    Error,
}

impl Filter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::All => true,
            Filter::Valid => record.is_valid(),
            Filter::Error => !record.is_valid(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Filter::All => "all",
            Filter::Valid => "valid",
            Filter::Error => "error",
        };
        f.write_str(s)
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "valid" => Ok(Filter::Valid),
            "error" | "invalid" => Ok(Filter::Error),
            _ => Err(format!("Unknown filter '{}'. Supported: all, valid, error", s)),
        }
    }
}

/// Order-preserving projection of `records` through `filter`.
pub fn filter(records: &[Record], filter: Filter) -> Vec<&Record> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// One page of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based index that was requested
    pub index: usize,
    pub total_pages: usize,
    /// Length of the whole view
    pub total_items: usize,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Slice page `index` (1-based) out of `view`. Out-of-range indices give an
/// empty page rather than an error; a zero page size is treated as 1.
pub fn paginate<T>(view: &[T], index: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let items = if index == 0 {
        &view[..0]
    } else {
        let start = (index - 1).saturating_mul(page_size).min(view.len());
        let end = start.saturating_add(page_size).min(view.len());
        &view[start..end]
    };
    Page {
        items,
        index,
        total_pages: total_pages(view.len(), page_size),
        total_items: view.len(),
    }
}
