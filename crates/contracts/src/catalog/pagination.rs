use crate::shared::config::DEFAULT_ITEMS_PER_PAGE;
use std::ops::Range;

/// 1-based page cursor over the filtered product list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: if page_size == 0 {
                DEFAULT_ITEMS_PER_PAGE
            } else {
                page_size
            },
        }
    }

    pub fn at_page(mut self, page: usize) -> Self {
        self.go_to(page);
        self
    }

    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// ceil(total / page_size); zero for an empty list
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Index range of the current page within a list of `total` items
    pub fn slice_range(&self, total: usize) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// Pull the cursor back into `[1, total_pages]`. Returns true if it moved.
    pub fn clamp(&mut self, total: usize) -> bool {
        let last = self.total_pages(total).max(1);
        let clamped = self.current_page.clamp(1, last);
        let moved = clamped != self.current_page;
        self.current_page = clamped;
        moved
    }

    /// "Menampilkan 17-20 dari 20 produk", or empty when nothing matched
    pub fn status_line(&self, total: usize) -> String {
        let range = self.slice_range(total);
        if range.is_empty() {
            return String::new();
        }
        format!(
            "Menampilkan {}-{} dari {} produk",
            range.start + 1,
            range.end,
            total
        )
    }
}
