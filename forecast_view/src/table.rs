//! Filtered and paginated tabular view of the history series
//!
//! Filtering is a literal, case-sensitive substring test against the row's
//! printed date and printed value. `"120"` therefore also matches `1200`;
//! that looseness is what the search box has always done.

use crate::error::{Result, ViewError};
use crate::series::{format_date, format_value, Series};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use series_math::PageWindow;

/// Rows per page used by the data explorer
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One history observation as a table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub date: NaiveDate,
    pub value: f64,
    pub year: i32,
}

impl TableRow {
    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }

    pub fn formatted_value(&self) -> String {
        format_value(self.value)
    }

    /// True when `filter_text` occurs in the printed date or printed value
    pub fn matches(&self, filter_text: &str) -> bool {
        filter_text.is_empty()
            || self.formatted_date().contains(filter_text)
            || self.formatted_value().contains(filter_text)
    }
}

/// Project the history series into table rows
pub fn table_rows(history: &Series) -> Vec<TableRow> {
    history
        .iter()
        .map(|o| TableRow {
            date: o.date,
            value: o.value,
            year: o.year(),
        })
        .collect()
}

/// Search text and page position of the data explorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    filter_text: String,
    /// 1-based
    page_index: usize,
    page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableQuery {
    /// Create a query on page 1 with no filter
    pub fn new(page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(ViewError::InvalidArgument(
                "Page size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the search text; any change sends the view back to page 1
    pub fn set_filter_text(&mut self, filter_text: impl Into<String>) {
        let filter_text = filter_text.into();
        if filter_text != self.filter_text {
            self.filter_text = filter_text;
            self.page_index = 1;
        }
    }

    /// Request a page; out-of-range requests are clamped when the query runs
    pub fn set_page_index(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    pub fn with_filter(mut self, filter_text: impl Into<String>) -> Self {
        self.set_filter_text(filter_text);
        self
    }

    pub fn with_page(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Move one page forward from `current`, stopping at the last page
    pub fn next_page(&mut self, current: &TablePage) {
        self.page_index = (current.page_index + 1).min(current.total_pages);
    }

    /// Move one page back from `current`, stopping at page 1
    pub fn previous_page(&mut self, current: &TablePage) {
        self.page_index = current.page_index.saturating_sub(1).max(1);
    }
}

/// One page of matching rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePage {
    pub rows: Vec<TableRow>,
    pub total_matched: usize,
    pub total_pages: usize,
    /// Effective page index after clamping
    pub page_index: usize,
}

impl TablePage {
    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }
}

/// Filter `rows` by the query text and slice out the requested page
pub fn query(rows: &[TableRow], q: &TableQuery) -> Result<TablePage> {
    let matched: Vec<&TableRow> = rows.iter().filter(|r| r.matches(&q.filter_text)).collect();
    let window = PageWindow::new(matched.len(), q.page_size, q.page_index)?;

    if window.page_index() != q.page_index {
        debug!(
            "Clamped page {} to {} of {}",
            q.page_index,
            window.page_index(),
            window.total_pages()
        );
    }

    Ok(TablePage {
        rows: matched[window.range()].iter().map(|r| (*r).clone()).collect(),
        total_matched: window.total_items(),
        total_pages: window.total_pages(),
        page_index: window.page_index(),
    })
}
