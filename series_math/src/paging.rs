//! Page window calculations
//!
//! A `PageWindow` describes which slice of a filtered result set is visible.
//! Page indices are 1-based. There is always at least one page, so an empty
//! result still renders as "page 1 of 1".

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Visible slice of a paginated result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    page_index: usize,
    page_size: usize,
    total_items: usize,
    total_pages: usize,
}

impl PageWindow {
    /// Create a window over `total_items`, clamping `requested_page` into
    /// `[1, total_pages]`.
    pub fn new(total_items: usize, page_size: usize, requested_page: usize) -> Result<Self> {
        let total_pages = total_pages(total_items, page_size)?;
        let page_index = requested_page.clamp(1, total_pages);

        Ok(Self {
            page_index,
            page_size,
            total_items,
            total_pages,
        })
    }

    /// Effective 1-based page index after clamping
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Item range of this page, clamped to the available items
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page_index - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }

    /// Index of the previous page, staying on page 1 at the start
    pub fn previous_index(&self) -> usize {
        self.page_index.saturating_sub(1).max(1)
    }

    /// Index of the next page, staying on the last page at the end
    pub fn next_index(&self) -> usize {
        (self.page_index + 1).min(self.total_pages)
    }
}

/// `max(1, ceil(total_items / page_size))`
pub fn total_pages(total_items: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(MathError::InvalidInput(
            "Page size must be greater than zero".to_string(),
        ));
    }

    Ok(total_items.div_ceil(page_size).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_has_minimum_of_one() {
        assert_eq!(total_pages(0, 20).unwrap(), 1);
        assert_eq!(total_pages(1, 20).unwrap(), 1);
        assert_eq!(total_pages(20, 20).unwrap(), 1);
        assert_eq!(total_pages(21, 20).unwrap(), 2);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(matches!(total_pages(10, 0), Err(MathError::InvalidInput(_))));
        assert!(PageWindow::new(10, 0, 1).is_err());
    }

    #[test]
    fn test_window_range() {
        let window = PageWindow::new(45, 20, 3).unwrap();

        assert_eq!(window.total_pages(), 3);
        assert_eq!(window.range(), 40..45);
        assert!(window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn test_out_of_range_pages_are_clamped() {
        let high = PageWindow::new(45, 20, 99).unwrap();
        assert_eq!(high.page_index(), 3);

        let low = PageWindow::new(45, 20, 0).unwrap();
        assert_eq!(low.page_index(), 1);
        assert_eq!(low.range(), 0..20);
    }

    #[test]
    fn test_empty_window() {
        let window = PageWindow::new(0, 20, 5).unwrap();

        assert_eq!(window.page_index(), 1);
        assert_eq!(window.range(), 0..0);
        assert_eq!(window.previous_index(), 1);
        assert_eq!(window.next_index(), 1);
    }
}
