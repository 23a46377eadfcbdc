use serde::Serialize;

use crate::domain::query::PaginationSpec;

/// Number of pages needed to show `total` leads, `limit` at a time.
pub fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(u64::from(limit))
}

/// Builds a pager sequence with `None` marking elided ranges.
fn page_links(
    last_page: u64,
    current_page: u64,
    left_edge: u64,
    left_current: u64,
    right_current: u64,
    right_edge: u64,
) -> Vec<Option<u64>> {
    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Pager view over the current [`PaginationSpec`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub total_pages: u64,
    pub pages: Vec<Option<u64>>,
}

impl PageWindow {
    pub fn new(pagination: &PaginationSpec) -> Self {
        let page = u64::from(pagination.page.max(1));
        let total_pages = total_pages(pagination.total, pagination.limit);

        Self {
            page,
            total_pages,
            pages: page_links(total_pages, page, 2, 2, 4, 2),
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(page: u32, limit: u32, total: u64) -> PaginationSpec {
        PaginationSpec { page, limit, total }
    }

    #[test]
    fn counts_partial_last_page() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn short_ranges_have_no_gaps() {
        let window = PageWindow::new(&pagination(1, 10, 35));
        assert_eq!(window.pages, vec![Some(1), Some(2), Some(3), Some(4)]);
        assert!(window.has_next());
        assert!(!window.has_previous());
    }

    #[test]
    fn long_ranges_are_elided_around_current_page() {
        let window = PageWindow::new(&pagination(10, 10, 200));
        assert_eq!(
            window.pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn empty_result_has_no_pages() {
        let window = PageWindow::new(&pagination(1, 10, 0));
        assert!(window.pages.is_empty());
        assert!(!window.has_next());
    }
}
