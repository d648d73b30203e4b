use crate::document::{DocId, DocumentStatus};
use crate::error::{Result, SearchError};
use std::collections::{btree_map, BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Source of truth for which documents exist. Removed ids are retired for good.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: BTreeMap<DocId, DocumentData>,
    retired: BTreeSet<DocId>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `id` may be used for a new document.
    pub fn validate_new_id(&self, id: DocId) -> Result<()> {
        if id < 0 {
            return Err(SearchError::InvalidId(id));
        }
        if self.documents.contains_key(&id) || self.retired.contains(&id) {
            return Err(SearchError::DuplicateId(id));
        }
        Ok(())
    }

    pub fn insert(&mut self, id: DocId, data: DocumentData) {
        self.documents.insert(id, data);
    }

    pub fn remove(&mut self, id: DocId) -> Option<DocumentData> {
        let removed = self.documents.remove(&id)?;
        self.retired.insert(id);
        Some(removed)
    }

    pub fn get(&self, id: DocId) -> Option<&DocumentData> {
        self.documents.get(&id)
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.documents.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn ids(&self) -> DocumentIds<'_> {
        DocumentIds(self.documents.keys())
    }
}

/// Ascending iterator over current document ids.
#[derive(Clone)]
pub struct DocumentIds<'a>(btree_map::Keys<'a, DocId, DocumentData>);

impl Iterator for DocumentIds<'_> {
    type Item = DocId;

    fn next(&mut self) -> Option<DocId> {
        self.0.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for DocumentIds<'_> {
    fn next_back(&mut self) -> Option<DocId> {
        self.0.next_back().copied()
    }
}

impl ExactSizeIterator for DocumentIds<'_> {}
