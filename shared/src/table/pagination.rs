//! Page arithmetic for the data table.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Pagination state. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    /// When false every row is on a single page.
    pub enabled: bool,
}

/// "Showing first–last of total" summary for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub first_row: usize,
    pub last_row: usize,
    pub total_rows: usize,
}

impl Pagination {
    pub fn new(page_size: usize, total_rows: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_rows,
            enabled: true,
        }
    }

    pub fn disabled(total_rows: usize) -> Self {
        Self {
            enabled: false,
            ..Self::new(total_rows.max(1), total_rows)
        }
    }

    /// `ceil(total_rows / page_size)`, zero when there are no rows.
    pub fn total_pages(&self) -> usize {
        if self.total_rows == 0 {
            0
        } else if !self.enabled {
            1
        } else {
            self.total_rows.div_ceil(self.page_size.max(1))
        }
    }

    /// Highest valid page number; page 1 stays valid for empty data.
    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.last_page())
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Index range of the current page within `len` ordered rows.
    pub fn range_for(&self, len: usize) -> Range<usize> {
        if !self.enabled {
            return 0..len;
        }
        page_range(len, self.current_page, self.page_size)
    }

    pub fn page_info(&self) -> PageInfo {
        let range = self.range_for(self.total_rows);
        if range.is_empty() {
            return PageInfo {
                first_row: 0,
                last_row: 0,
                total_rows: self.total_rows,
            };
        }
        PageInfo {
            first_row: range.start + 1,
            last_row: range.end,
            total_rows: self.total_rows,
        }
    }
}

/// Rows `[(page - 1) * page_size, page * page_size)` clipped to `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Sorted, de-duplicated page-size choices that always include `current`.
/// Zero sizes are dropped.
pub fn page_size_choices(options: &[usize], current: usize) -> Vec<usize> {
    let mut choices: Vec<usize> = options.iter().copied().filter(|&size| size > 0).collect();
    choices.push(current);
    choices.sort_unstable();
    choices.dedup();
    choices
}

/// Page numbers to offer as buttons: at most `max_buttons` pages around
/// `current`, shifted to stay inside `1..=total_pages`.
pub fn page_window(current: usize, total_pages: usize, max_buttons: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let max_buttons = max_buttons.max(1);
    if total_pages <= max_buttons {
        return (1..=total_pages).collect();
    }

    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(max_buttons / 2).max(1);
    let start = start.min(total_pages - max_buttons + 1);
    (start..start + max_buttons).collect()
}
