use std::ops::Range;

/// Meals revealed per "load more"
pub const PAGE_SIZE: usize = 6;

/// Whether a page exists after the one at `cursor`
pub fn has_more(len: usize, cursor: usize) -> bool {
    (cursor + 1) * PAGE_SIZE < len
}

/// Index range of page `cursor`, clamped to `len`
pub fn page_range(len: usize, cursor: usize) -> Range<usize> {
    let start = (cursor * PAGE_SIZE).min(len);
    let end = (start + PAGE_SIZE).min(len);
    start..end
}
