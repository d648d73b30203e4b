use std::collections::HashSet;
use std::sync::Arc;

/// Append-only term storage. Every index entry shares the single `Arc<str>` stored here.
#[derive(Debug, Default)]
pub struct Interner {
    terms: HashSet<Arc<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored copy of `term`, inserting it on first sight.
    pub fn intern(&mut self, term: &str) -> Arc<str> {
        if let Some(existing) = self.terms.get(term) {
            return Arc::clone(existing);
        }
        let stored: Arc<str> = Arc::from(term);
        self.terms.insert(Arc::clone(&stored));
        stored
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
