use crate::DocId;

/// Errors surfaced by the search engine. Validation happens before any state is touched,
/// so an `Err` always leaves the engine unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Text contains a control character (code point below 0x20).
    #[error("invalid input text: {0:?}")]
    InvalidInput(String),
    /// Negative document id.
    #[error("invalid document id: {0}")]
    InvalidId(DocId),
    /// The id is already used by a current or previously removed document.
    #[error("document id already used: {0}")]
    DuplicateId(DocId),
    /// Malformed query: a bare `-`, a double minus, or a control character.
    #[error("invalid query: {0:?}")]
    InvalidQuery(String),
    #[error("document not found: {0}")]
    NotFound(DocId),
}

pub type Result<T> = std::result::Result<T, SearchError>;
