//! In-process full-text search: an inverted index with stop words, minus words,
//! TF-IDF ranking, predicate filtering, removal and duplicate detection.

pub mod concurrent_map;
pub mod document;
pub mod duplicates;
pub mod error;
pub mod index;
pub mod interner;
pub mod paginator;
pub mod process_queries;
pub mod query;
pub mod request_queue;
pub mod scorer;
pub mod server;
pub mod shared;
pub mod stop_words;
pub mod store;
pub mod tokenizer;

pub use document::{DocId, Document, DocumentStatus, RELEVANCE_EPSILON};
pub use error::{Result, SearchError};
pub use paginator::{paginate, Paginator};
pub use process_queries::{process_queries, process_queries_joined};
pub use request_queue::{RequestQueue, REQUEST_WINDOW};
pub use scorer::{DOCUMENTS_PER_SHARD, MAX_RESULT_DOCUMENT_COUNT};
pub use server::SearchServer;
pub use shared::SharedSearchServer;

/// Whether an operation runs on the calling thread or fans out over the rayon pool.
/// Both produce the same results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    #[default]
    Sequential,
    Parallel,
}
