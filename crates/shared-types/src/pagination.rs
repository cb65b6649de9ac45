//! Page-window arithmetic for a 1-based page cursor.

use std::ops::Range;

/// Number of pages needed for `len` items, never less than one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}

/// Index range of the items shown on `page`, clipped to `len`.
pub fn page_range(page: usize, per_page: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(len);
    let end = start.saturating_add(per_page).min(len);
    start..end
}

/// Clamp `page` into `1..=total_pages(len, per_page)`.
pub fn clamp_page(page: usize, len: usize, per_page: usize) -> usize {
    page.clamp(1, total_pages(len, per_page))
}
