//! Client-side pagination over the full in-memory record set. The pager never
//! owns or mutates the records; it only derives which slice of them is
//! visible, so redrawing after any state change is a pure recomputation.

/// Page sizes the user can cycle through. The first entry is the default.
pub(crate) const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 50];

/// Current page and page size. The page is 1-based and never drops below 1,
/// even when the record set is empty.
#[derive(Debug, Clone)]
pub(crate) struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub(crate) fn new() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }

    pub(crate) fn page(&self) -> usize {
        self.page
    }

    pub(crate) fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `len` records: `ceil(len / page_size)`,
    /// which is 0 for an empty set.
    pub(crate) fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Switch to one of the configured page sizes and jump back to the first
    /// page. Sizes outside [`PAGE_SIZE_OPTIONS`] are rejected.
    pub(crate) fn set_page_size(&mut self, size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page = 1;
        true
    }

    /// Rotate to the next configured page size, wrapping at the end.
    pub(crate) fn cycle_page_size(&mut self) -> usize {
        let current = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&size| size == self.page_size)
            .unwrap_or(0);
        let next = PAGE_SIZE_OPTIONS[(current + 1) % PAGE_SIZE_OPTIONS.len()];
        self.set_page_size(next);
        next
    }

    /// Advance one page; a no-op when already on the last page.
    pub(crate) fn next_page(&mut self, len: usize) -> bool {
        if self.page >= self.page_count(len) {
            return false;
        }
        self.page += 1;
        true
    }

    /// Step back one page; a no-op when already on the first page.
    pub(crate) fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Pull the page back into range after the record set shrinks, so a
    /// delete on the last page never leaves an empty-looking view behind.
    pub(crate) fn clamp(&mut self, len: usize) {
        let last = self.page_count(len).max(1);
        if self.page > last {
            self.page = last;
        }
    }

    /// Derive the visible slice: at most `page_size` items starting at
    /// `(page - 1) * page_size`, each paired with its 1-based position in the
    /// full sequence. Row numbers therefore keep counting across pages
    /// instead of restarting at 1.
    pub(crate) fn slice<'a, T>(&self, items: &'a [T]) -> Vec<(usize, &'a T)> {
        items
            .iter()
            .enumerate()
            .skip((self.page - 1) * self.page_size)
            .take(self.page_size)
            .map(|(index, item)| (index + 1, item))
            .collect()
    }
}
