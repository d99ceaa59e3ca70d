use std::ops::Range;

/// 1-based page counter. The visible window always starts at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    fn revealed(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    pub fn visible(&self, len: usize) -> Range<usize> {
        0..len.min(self.revealed())
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible(items.len())]
    }

    pub fn remaining(&self, len: usize) -> usize {
        len.saturating_sub(self.revealed())
    }

    pub fn has_more(&self, len: usize) -> bool {
        self.revealed() < len
    }

    /// Moves to the next page and returns the newly revealed range, or `None`
    /// when everything is already visible.
    pub fn advance(&mut self, len: usize) -> Option<Range<usize>> {
        if !self.has_more(len) {
            return None;
        }
        let start = self.revealed();
        self.page += 1;
        Some(start..len.min(self.revealed()))
    }
}
