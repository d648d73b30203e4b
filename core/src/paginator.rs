use std::slice::Chunks;

/// Fixed-size pages over a slice. Iterating it again starts from the first page.
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
}

/// Split `items` into pages of `page_size`; a page size of zero is treated as one.
pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator { items, page_size: page_size.max(1) }
}

impl<'a, T> Paginator<'a, T> {
    pub fn pages(&self) -> Chunks<'a, T> {
        self.items.chunks(self.page_size)
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = &'a [T];
    type IntoIter = Chunks<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}
