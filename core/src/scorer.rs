//! TF-IDF scoring over the inverted index.
//!
//! Both policies walk the same per-term contributions. The sequential path sums into a
//! plain ordered map; the parallel path fans plus words out over the rayon pool and sums
//! into a [`ConcurrentMap`]. Minus words are applied only after every plus word has been
//! accumulated.

use crate::concurrent_map::ConcurrentMap;
use crate::document::{sort_by_rank, DocId, Document, DocumentStatus};
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::store::DocumentStore;
use crate::ExecutionPolicy;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Maximum number of hits returned by a search.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
/// Target number of documents per shard of the parallel accumulator.
pub const DOCUMENTS_PER_SHARD: usize = 1000;

pub(crate) struct Scorer<'a> {
    index: &'a InvertedIndex,
    store: &'a DocumentStore,
}

impl<'a> Scorer<'a> {
    pub(crate) fn new(index: &'a InvertedIndex, store: &'a DocumentStore) -> Self {
        Self { index, store }
    }

    /// Score, filter, rank and truncate.
    pub(crate) fn find_top_documents<P>(
        &self,
        policy: ExecutionPolicy,
        query: &Query<'_>,
        predicate: &P,
    ) -> Vec<Document>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let relevance = match policy {
            ExecutionPolicy::Sequential => self.relevance_sequential(query, predicate),
            ExecutionPolicy::Parallel => self.relevance_parallel(query, predicate),
        };
        tracing::debug!(?policy, candidates = relevance.len(), "scored query");

        let mut matched: Vec<Document> = relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                let data = self.store.get(id)?;
                Some(Document::new(id, relevance, data.rating))
            })
            .collect();
        sort_by_rank(&mut matched);
        matched.truncate(MAX_RESULT_DOCUMENT_COUNT);
        matched
    }

    fn relevance_sequential<P>(&self, query: &Query<'_>, predicate: &P) -> BTreeMap<DocId, f64>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            self.for_each_contribution(word, predicate, |id, delta| {
                *relevance.entry(id).or_insert(0.0) += delta;
            });
        }
        self.for_each_excluded(query, |id| {
            relevance.remove(&id);
        });
        relevance
    }

    fn relevance_parallel<P>(&self, query: &Query<'_>, predicate: &P) -> BTreeMap<DocId, f64>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let relevance: ConcurrentMap<DocId, f64> =
            ConcurrentMap::new(self.store.len() / DOCUMENTS_PER_SHARD + 1);
        query.plus_words.par_iter().for_each(|word| {
            self.for_each_contribution(word, predicate, |id, delta| {
                *relevance.access(id) += delta;
            });
        });
        self.for_each_excluded(query, |id| relevance.erase(id));
        relevance.into_ordinary_map()
    }

    /// Visit `tf * idf` for every accepted document containing `word`.
    fn for_each_contribution<P, F>(&self, word: &str, predicate: &P, mut visit: F)
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
        F: FnMut(DocId, f64),
    {
        let Some(docs) = self.index.document_freqs(word) else {
            return;
        };
        let idf = self.inverse_document_freq(docs.len());
        for (&id, &term_freq) in docs {
            if let Some(data) = self.store.get(id) {
                if predicate(id, data.status, data.rating) {
                    visit(id, term_freq * idf);
                }
            }
        }
    }

    /// Visit every document containing at least one minus word.
    fn for_each_excluded<F>(&self, query: &Query<'_>, mut visit: F)
    where
        F: FnMut(DocId),
    {
        for word in &query.minus_words {
            if let Some(docs) = self.index.document_freqs(word) {
                docs.keys().for_each(|&id| visit(id));
            }
        }
    }

    fn inverse_document_freq(&self, containing: usize) -> f64 {
        (self.store.len() as f64 / containing as f64).ln()
    }
}
