use std::error::Error;
use std::fmt;

use crate::config::HISTORY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    ZeroPageSize,
}

impl fmt::Display for PaginationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationError::ZeroPageSize => write!(f, "Page size must be at least 1"),
        }
    }
}

impl Error for PaginationError {}

/// Splits a collection into fixed-size pages. Out-of-range page requests are
/// clamped to the nearest valid page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

/// Where one page sits inside a collection of `total_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// 1-based page actually served (after clamping)
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Half-open index range into the collection
    pub start: usize,
    pub end: usize,
}

impl PageBounds {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// "Showing 11 to 15 of 15 records"
    pub fn range_label(&self) -> String {
        if self.total_items == 0 {
            return "Showing 0 of 0 records".to_string();
        }
        format!(
            "Showing {} to {} of {} records",
            self.start + 1,
            self.end,
            self.total_items
        )
    }
}

#[derive(Debug)]
pub struct Page<'a, T> {
    pub bounds: PageBounds,
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    pub fn range_label(&self) -> String {
        self.bounds.range_label()
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: HISTORY.page_size.max(1),
        }
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Page 0 becomes 1, anything past the end becomes the last page.
    pub fn clamp_page(&self, requested: usize, total_items: usize) -> usize {
        requested.clamp(1, self.total_pages(total_items).max(1))
    }

    pub fn bounds(&self, total_items: usize, requested: usize) -> PageBounds {
        let number = self.clamp_page(requested, total_items);
        let start = ((number - 1) * self.page_size).min(total_items);
        let end = (start + self.page_size).min(total_items);
        PageBounds {
            number,
            total_pages: self.total_pages(total_items),
            total_items,
            start,
            end,
        }
    }

    pub fn page<'a, T>(&self, items: &'a [T], requested: usize) -> Page<'a, T> {
        let bounds = self.bounds(items.len(), requested);
        Page {
            bounds,
            items: &items[bounds.start..bounds.end],
        }
    }
}
