//! Page navigation over a result set.

use std::ops::Range;

/// Rows shown per results page.
pub const PAGE_SIZE: usize = 10;

/// Current page over `len` rows, 1-based.
///
/// There is no pager for an empty result set, so a `Pager` always has at least
/// one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    len: usize,
}

impl Pager {
    /// Pager positioned on the first page, or `None` when there are no rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use tgvmax::app::pagination::Pager;
    ///
    /// assert!(Pager::for_len(0).is_none());
    /// assert_eq!(Pager::for_len(50).map(|p| p.total_pages()), Some(5));
    /// assert_eq!(Pager::for_len(11).map(|p| p.total_pages()), Some(2));
    /// ```
    #[must_use]
    pub const fn for_len(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self { current: 1, len })
        }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.len.div_ceil(PAGE_SIZE)
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }

    /// Whether a page indicator is worth showing.
    #[must_use]
    pub const fn is_paginated(&self) -> bool {
        self.total_pages() > 1
    }

    /// Goes back one page. Returns `false` on the first page.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Goes forward one page. Returns `false` on the last page.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Row indices of the current page.
    #[must_use]
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current - 1) * PAGE_SIZE;
        start..(start + PAGE_SIZE).min(self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_no_ops() {
        let mut pager = Pager::for_len(25).unwrap();
        assert!(!pager.previous());
        assert_eq!(pager.current(), 1);

        assert!(pager.next());
        assert!(pager.next());
        assert!(!pager.next());
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut pager = Pager::for_len(25).unwrap();
        pager.next();
        pager.next();
        assert_eq!(pager.page_range(), 20..25);
    }

    #[test]
    fn test_single_page_is_not_paginated() {
        let pager = Pager::for_len(10).unwrap();
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.is_paginated());
        assert_eq!(pager.page_range(), 0..10);
    }
}
