use crate::document::DocId;
use crate::server::SearchServer;
use std::collections::HashSet;
use std::sync::Arc;

/// Remove every document whose set of indexed terms equals that of a lower-id document.
///
/// Term sets are hashed as sorted term lists, so only exact set equality counts.
/// Returns the removed ids in ascending order.
pub fn remove_duplicates(server: &mut SearchServer) -> Vec<DocId> {
    let mut seen: HashSet<Vec<Arc<str>>> = HashSet::new();
    let mut duplicates = Vec::new();
    for id in server.document_ids() {
        let terms: Vec<Arc<str>> = server.word_frequencies(id).keys().cloned().collect();
        if !seen.insert(terms) {
            duplicates.push(id);
        }
    }
    for &id in &duplicates {
        tracing::info!(id, "found duplicate document");
        server.remove_document(id);
    }
    duplicates
}
