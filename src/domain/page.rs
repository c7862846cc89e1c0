//! Pagination cursor.

/// An (offset, size) cursor selecting one page of an ordered result set.
///
/// `offset` is a zero-based page index, not an item index. Callers clamp the
/// size before use; see [`Page::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    pub offset: usize,
    pub size: usize,
}

impl Page {
    pub fn new(offset: usize, size: usize) -> Self {
        Self { offset, size }
    }

    /// Build a page from raw caller input: negative offsets become 0 and the
    /// size is forced into `[min_size, max_size]`. If `min_size` exceeds
    /// `max_size`, every size becomes `max_size`.
    pub fn clamped(offset: i64, size: i64, min_size: usize, max_size: usize) -> Self {
        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let size = usize::try_from(size.max(0)).unwrap_or(usize::MAX);
        Self {
            offset,
            size: size.clamp(min_size.min(max_size), max_size),
        }
    }

    /// The same size, one page further.
    pub fn next(self) -> Self {
        Self {
            offset: self.offset.saturating_add(1),
            size: self.size,
        }
    }

    /// Index of the first item on this page.
    pub fn start_offset(&self) -> usize {
        self.offset.saturating_mul(self.size)
    }

    /// Index one past the last item on this page.
    pub fn end_offset(&self) -> usize {
        self.start_offset().saturating_add(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_with_inverted_bounds() {
        assert_eq!(Page::clamped(0, 1, 60, 50), Page::new(0, 50));
        assert_eq!(Page::clamped(3, 100, 60, 50), Page::new(3, 50));
    }

    #[test]
    fn test_offsets() {
        let page = Page::new(2, 10);
        assert_eq!(page.start_offset(), 20);
        assert_eq!(page.end_offset(), 30);
    }

    #[test]
    fn test_next_keeps_size() {
        let page = Page::new(0, 25).next();
        assert_eq!(page, Page::new(1, 25));
        assert_eq!(page.start_offset(), 25);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Page::clamped(-3, 0, 10, 50), Page::new(0, 10));
        assert_eq!(Page::clamped(4, 500, 10, 50), Page::new(4, 50));
        assert_eq!(Page::clamped(1, 20, 10, 50), Page::new(1, 20));
    }

    #[test]
    fn test_offsets_saturate() {
        let page = Page::new(usize::MAX, 50);
        assert_eq!(page.start_offset(), usize::MAX);
        assert_eq!(page.end_offset(), usize::MAX);
        assert_eq!(page.next().offset, usize::MAX);
    }
}
