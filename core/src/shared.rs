use crate::document::{DocId, Document, DocumentStatus};
use crate::error::Result;
use crate::server::SearchServer;
use crate::ExecutionPolicy;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Cloneable handle allowing one writer or many concurrent readers of an engine.
#[derive(Debug, Clone, Default)]
pub struct SharedSearchServer {
    inner: Arc<RwLock<SearchServer>>,
}

impl SharedSearchServer {
    pub fn new(server: SearchServer) -> Self {
        Self { inner: Arc::new(RwLock::new(server)) }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, SearchServer> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, SearchServer> {
        self.inner.write()
    }

    pub fn add_document(
        &self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.inner.write().add_document(id, text, status, ratings)
    }

    pub fn remove_document(&self, id: DocId) {
        self.inner.write().remove_document(id);
    }

    pub fn remove_duplicates(&self) -> Vec<DocId> {
        self.inner.write().remove_duplicates()
    }

    pub fn find_top_documents(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
    ) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents_with_policy(policy, raw_query, |_, status, _| {
            status == DocumentStatus::Active
        })
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().document_count()
    }
}
