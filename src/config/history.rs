//! Historical record table configuration

pub struct HistoryConfig {
    /// Rows per table page
    pub page_size: usize,
    /// Sort mode applied when none is requested (see `history::SortMode`)
    pub default_sort: &'static str,
}

pub const HISTORY: HistoryConfig = HistoryConfig {
    page_size: 10,
    default_sort: "date-desc",
};
