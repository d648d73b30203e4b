use crate::interner::Interner;
use crate::{DocId, ExecutionPolicy};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

/// term -> document -> term frequency
pub type WordDocumentFreqs = BTreeMap<Arc<str>, BTreeMap<DocId, f64>>;
/// term -> term frequency, the per-document view
pub type WordFreqs = BTreeMap<Arc<str>, f64>;

static EMPTY_WORD_FREQS: WordFreqs = BTreeMap::new();

/// Forward and reverse term maps kept in lockstep.
///
/// Term frequency is the share of a document's indexed words that are this term, so every
/// stored value lies in (0, 1]. A term whose last document is removed is pruned.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    interner: Interner,
    word_to_document_freqs: WordDocumentFreqs,
    document_to_word_freqs: BTreeMap<DocId, WordFreqs>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the already filtered words of a new document. An empty word list still
    /// registers the document with an empty term map.
    pub fn insert_document(&mut self, id: DocId, words: &[&str]) {
        let inv_word_count = 1.0 / words.len() as f64;
        let word_freqs = self.document_to_word_freqs.entry(id).or_default();
        for word in words {
            let term = self.interner.intern(word);
            *self
                .word_to_document_freqs
                .entry(Arc::clone(&term))
                .or_default()
                .entry(id)
                .or_insert(0.0) += inv_word_count;
            *word_freqs.entry(term).or_insert(0.0) += inv_word_count;
        }
    }

    /// Drop a document from both maps. Returns false if it was not indexed.
    pub fn remove_document(&mut self, policy: ExecutionPolicy, id: DocId) -> bool {
        let Some(word_freqs) = self.document_to_word_freqs.remove(&id) else {
            return false;
        };
        match policy {
            ExecutionPolicy::Sequential => {
                for word in word_freqs.keys() {
                    if let Some(docs) = self.word_to_document_freqs.get_mut(word) {
                        docs.remove(&id);
                    }
                }
            }
            ExecutionPolicy::Parallel => {
                self.word_to_document_freqs
                    .par_iter_mut()
                    .filter(|(word, _)| word_freqs.contains_key(&***word))
                    .for_each(|(_, docs)| {
                        docs.remove(&id);
                    });
            }
        }
        for word in word_freqs.keys() {
            if self.word_to_document_freqs.get(word).is_some_and(BTreeMap::is_empty) {
                self.word_to_document_freqs.remove(word);
            }
        }
        true
    }

    /// Documents containing `word`, with their term frequencies.
    pub fn document_freqs(&self, word: &str) -> Option<&BTreeMap<DocId, f64>> {
        self.word_to_document_freqs.get(word)
    }

    /// Term frequencies of one document; empty for an unknown id.
    pub fn word_frequencies(&self, id: DocId) -> &WordFreqs {
        self.document_to_word_freqs.get(&id).unwrap_or(&EMPTY_WORD_FREQS)
    }

    /// The interned copy of `word` if the document contains it.
    pub fn document_term(&self, id: DocId, word: &str) -> Option<&str> {
        self.document_to_word_freqs
            .get(&id)?
            .get_key_value(word)
            .map(|(term, _)| &**term)
    }

    #[cfg(test)]
    pub fn contains_document(&self, id: DocId) -> bool {
        self.document_to_word_freqs.contains_key(&id)
    }

    /// Number of distinct terms currently indexed.
    pub fn term_count(&self) -> usize {
        self.word_to_document_freqs.len()
    }

    /// Number of terms ever interned, including those of removed documents.
    pub fn interned_count(&self) -> usize {
        self.interner.len()
    }

    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.document_to_word_freqs.keys().copied()
    }

    #[cfg(test)]
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.word_to_document_freqs.keys().map(|term| &**term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mirrored(index: &InvertedIndex) {
        for id in index.document_ids() {
            for (term, freq) in index.word_frequencies(id) {
                assert_eq!(index.document_freqs(term).and_then(|d| d.get(&id)), Some(freq));
            }
        }
        for term in index.terms() {
            let docs = index.document_freqs(term).unwrap();
            assert!(!docs.is_empty());
            for (id, freq) in docs {
                assert!(*freq > 0.0);
                assert_eq!(index.word_frequencies(*id).get(term), Some(freq));
            }
        }
    }

    #[test]
    fn insert_computes_term_frequencies() {
        let mut index = InvertedIndex::new();
        index.insert_document(42, &["fluffy", "cat", "fluffy", "tail"]);
        let freqs = index.word_frequencies(42);
        assert_eq!(freqs.len(), 3);
        assert!((freqs["fluffy"] - 0.5).abs() < 1e-9);
        assert!((freqs["cat"] - 0.25).abs() < 1e-9);
        assert_mirrored(&index);
    }

    #[test]
    fn empty_document_is_registered_without_terms() {
        let mut index = InvertedIndex::new();
        index.insert_document(3, &[]);
        assert!(index.contains_document(3));
        assert!(index.word_frequencies(3).is_empty());
        assert_eq!(index.term_count(), 0);
    }

    #[test]
    fn unknown_document_has_no_frequencies() {
        let index = InvertedIndex::new();
        assert!(index.word_frequencies(12).is_empty());
    }

    #[test]
    fn remove_prunes_orphaned_terms() {
        for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
            let mut index = InvertedIndex::new();
            index.insert_document(0, &["hello", "world"]);
            index.insert_document(1, &["hello", "rust"]);
            assert!(index.remove_document(policy, 0));
            assert!(index.document_freqs("world").is_none());
            assert_eq!(index.document_freqs("hello").unwrap().len(), 1);
            assert!(!index.contains_document(0));
            assert_mirrored(&index);
            assert!(!index.remove_document(policy, 0));
        }
    }

    #[test]
    fn terms_stay_interned_after_removal() {
        let mut index = InvertedIndex::new();
        index.insert_document(0, &["alpha", "beta"]);
        index.remove_document(ExecutionPolicy::Sequential, 0);
        assert_eq!(index.term_count(), 0);
        assert_eq!(index.interned_count(), 2);
    }

    #[test]
    fn document_term_returns_interned_word() {
        let mut index = InvertedIndex::new();
        index.insert_document(5, &["cat", "city"]);
        assert_eq!(index.document_term(5, "cat"), Some("cat"));
        assert_eq!(index.document_term(5, "dog"), None);
        assert_eq!(index.document_term(6, "cat"), None);
    }
}
