use crate::document::{average_rating, DocId, Document, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::index::{InvertedIndex, WordFreqs};
use crate::query::Query;
use crate::scorer::Scorer;
use crate::stop_words::StopWords;
use crate::store::{DocumentData, DocumentIds, DocumentStore};
use crate::tokenizer::tokenize;
use crate::ExecutionPolicy;
use rayon::prelude::*;

/// In-memory full-text search engine with TF-IDF ranking.
///
/// Mutations take `&mut self`; searches take `&self` and may run on many threads at once.
/// Wrap the engine in [`crate::SharedSearchServer`] when writers and readers overlap.
#[derive(Debug, Default)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    documents: DocumentStore,
}

impl SearchServer {
    /// Build an engine from space-separated stop words.
    pub fn new(stop_words_text: &str) -> Result<Self> {
        Ok(Self::with_stop_words(StopWords::parse(stop_words_text)?))
    }

    /// Build an engine from a list of stop words.
    pub fn from_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_stop_words(StopWords::from_words(stop_words)?))
    }

    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { stop_words, ..Self::default() }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Index a document. The stored rating is the truncated mean of `ratings`.
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.documents.validate_new_id(id)?;
        let words = self.split_into_words_no_stop(text)?;

        self.index.insert_document(id, &words);
        self.documents.insert(id, DocumentData { rating: average_rating(ratings), status });
        tracing::debug!(id, words = words.len(), ?status, "added document");
        Ok(())
    }

    /// Remove a document. Unknown ids are ignored.
    pub fn remove_document(&mut self, id: DocId) {
        self.remove_document_with_policy(ExecutionPolicy::Sequential, id);
    }

    pub fn remove_document_with_policy(&mut self, policy: ExecutionPolicy, id: DocId) {
        if self.documents.remove(id).is_none() {
            return;
        }
        self.index.remove_document(policy, id);
        tracing::debug!(id, ?policy, "removed document");
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Current document ids in ascending order.
    pub fn document_ids(&self) -> DocumentIds<'_> {
        self.documents.ids()
    }

    pub fn document_status(&self, id: DocId) -> Option<DocumentStatus> {
        self.documents.get(id).map(|data| data.status)
    }

    /// Term frequencies of a document; empty for an unknown id.
    pub fn word_frequencies(&self, id: DocId) -> &WordFreqs {
        self.index.word_frequencies(id)
    }

    /// Top active documents for `raw_query`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Active)
    }

    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Top documents accepted by `predicate(id, status, rating)`.
    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        self.find_top_documents_with_policy(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// Parallel counterpart of [`Self::find_top_documents`].
    pub fn find_top_documents_par(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_policy(ExecutionPolicy::Parallel, raw_query, |_, status, _| {
            status == DocumentStatus::Active
        })
    }

    pub fn find_top_documents_with_policy<P>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;
        Ok(Scorer::new(&self.index, &self.documents).find_top_documents(policy, &query, &predicate))
    }

    /// Plus words of `raw_query` present in the document, sorted, together with its status.
    /// Any minus word present in the document empties the word list.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocId,
    ) -> Result<(Vec<&str>, DocumentStatus)> {
        self.match_document_with_policy(ExecutionPolicy::Sequential, raw_query, id)
    }

    pub fn match_document_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        id: DocId,
    ) -> Result<(Vec<&str>, DocumentStatus)> {
        let status = self.documents.get(id).ok_or(SearchError::NotFound(id))?.status;
        let query = Query::parse(raw_query, &self.stop_words)?;

        let index = &self.index;
        let has_minus = match policy {
            ExecutionPolicy::Sequential => {
                query.minus_words.iter().any(|word| index.document_term(id, word).is_some())
            }
            ExecutionPolicy::Parallel => {
                query.minus_words.par_iter().any(|word| index.document_term(id, word).is_some())
            }
        };
        if has_minus {
            return Ok((Vec::new(), status));
        }

        let matched = match policy {
            ExecutionPolicy::Sequential => query
                .plus_words
                .iter()
                .filter_map(|word| index.document_term(id, word))
                .collect(),
            ExecutionPolicy::Parallel => query
                .plus_words
                .par_iter()
                .filter_map(|word| index.document_term(id, word))
                .collect(),
        };
        Ok((matched, status))
    }

    /// Remove documents whose term sets duplicate a lower-id document.
    /// Returns the removed ids in ascending order.
    pub fn remove_duplicates(&mut self) -> Vec<DocId> {
        crate::duplicates::remove_duplicates(self)
    }

    fn split_into_words_no_stop<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        Ok(tokenize(text)?
            .into_iter()
            .filter(|word| !self.stop_words.contains(word))
            .collect())
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocId;
    type IntoIter = DocumentIds<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.document_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "cat in the city";

    fn server_with(stop_words: &str, docs: &[(DocId, &str)]) -> SearchServer {
        let mut server = SearchServer::new(stop_words).unwrap();
        for (id, text) in docs {
            server.add_document(*id, text, DocumentStatus::Active, &[]).unwrap();
        }
        server
    }

    #[test]
    fn single_document_has_zero_relevance() {
        let server = server_with("in the", &[(0, CONTENT)]);
        assert!(server.find_top_documents("in").unwrap().is_empty());
        let found = server.find_top_documents("cat").unwrap();
        assert_eq!(found, vec![Document::new(0, 0.0, 0)]);
    }

    #[test]
    fn failed_add_leaves_engine_untouched() {
        let mut server = server_with("", &[(0, CONTENT)]);
        assert_eq!(
            server.add_document(0, "again", DocumentStatus::Active, &[]),
            Err(SearchError::DuplicateId(0))
        );
        assert_eq!(
            server.add_document(-1, "negative", DocumentStatus::Active, &[]),
            Err(SearchError::InvalidId(-1))
        );
        assert!(matches!(
            server.add_document(4, "big dog sta\x12rling", DocumentStatus::Active, &[]),
            Err(SearchError::InvalidInput(_))
        ));
        assert_eq!(server.document_count(), 1);
        assert!(server.word_frequencies(4).is_empty());
        assert!(server.find_top_documents("dog").unwrap().is_empty());
    }

    #[test]
    fn empty_document_counts_but_indexes_nothing() {
        let mut server = server_with("in the", &[]);
        server.add_document(3, "", DocumentStatus::Active, &[1]).unwrap();
        server.add_document(4, "in the", DocumentStatus::Active, &[1]).unwrap();
        assert_eq!(server.document_count(), 2);
        assert!(server.word_frequencies(3).is_empty());
        assert!(server.word_frequencies(4).is_empty());
        assert_eq!(server.index.term_count(), 0);
    }

    #[test]
    fn match_document_reports_not_found_before_parsing() {
        let server = server_with("", &[(42, CONTENT)]);
        assert_eq!(server.match_document("--cat", 10), Err(SearchError::NotFound(10)));
        assert!(matches!(server.match_document("--cat", 42), Err(SearchError::InvalidQuery(_))));
    }

    #[test]
    fn match_document_returns_interned_words() {
        let server = server_with("", &[(42, CONTENT)]);
        for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
            let (words, status) =
                server.match_document_with_policy(policy, "the cat cat dog", 42).unwrap();
            assert_eq!(words, vec!["cat", "the"]);
            assert_eq!(status, DocumentStatus::Active);
            let (words, _) =
                server.match_document_with_policy(policy, "cat the -city", 42).unwrap();
            assert!(words.is_empty());
        }
    }

    #[test]
    fn iterates_ids_in_order() {
        let server = server_with("", &[(9, "a"), (2, "b"), (5, "c")]);
        let ids: Vec<DocId> = (&server).into_iter().collect();
        assert_eq!(ids, vec![2, 5, 9]);
        let mut seen = Vec::new();
        for id in &server {
            seen.push(id);
        }
        assert_eq!(seen, ids);
    }

    #[test]
    fn removed_id_cannot_be_added_again() {
        let mut server = server_with("", &[(1, "cat")]);
        server.remove_document(1);
        assert_eq!(
            server.add_document(1, "cat", DocumentStatus::Active, &[]),
            Err(SearchError::DuplicateId(1))
        );
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut server = server_with("", &[(1, "cat")]);
        server.remove_document(100);
        server.remove_document_with_policy(ExecutionPolicy::Parallel, -5);
        assert_eq!(server.document_count(), 1);
    }
}
