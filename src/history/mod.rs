//! Historical wind records: sorted, paginated table views.

pub mod paginate;
pub mod record;
pub mod sorter;

pub use paginate::{Page, PageBounds, PaginationError, Paginator};
pub use record::{HistoricalRecord, load_records_from_path};
pub use sorter::{SortMode, sorted_view};

use std::path::Path;

use anyhow::Result;

/// The injected record collection plus the page size used to show it.
/// Views borrow from the collection and never reorder it.
#[derive(Debug, Clone, Default)]
pub struct HistoryTable {
    records: Vec<HistoricalRecord>,
    paginator: Paginator,
}

/// One rendered page of the table.
#[derive(Debug)]
pub struct TableView<'a> {
    pub mode: SortMode,
    pub bounds: PageBounds,
    pub rows: Vec<&'a HistoricalRecord>,
}

impl TableView<'_> {
    pub fn range_label(&self) -> String {
        self.bounds.range_label()
    }
}

impl HistoryTable {
    pub fn new(records: Vec<HistoricalRecord>) -> Self {
        Self {
            records,
            paginator: Paginator::default(),
        }
    }

    pub fn with_paginator(records: Vec<HistoricalRecord>, paginator: Paginator) -> Self {
        Self { records, paginator }
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        Ok(Self::new(load_records_from_path(path)?))
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.records.len())
    }

    pub fn view(&self, mode: SortMode, requested_page: usize) -> TableView<'_> {
        let mut sorted = sorted_view(&self.records, mode);
        let bounds = self.paginator.bounds(sorted.len(), requested_page);
        sorted.truncate(bounds.end);
        let rows = sorted.split_off(bounds.start);
        TableView { mode, bounds, rows }
    }
}
