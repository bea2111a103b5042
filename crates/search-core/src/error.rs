//! Error types for search-core.

use std::fmt;

/// Errors that can occur while mutating or querying a [`crate::SearchServer`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// `add_document` was called with a negative document id.
    NegativeId(i64),
    /// `add_document` was called with an id that already exists in the index.
    DuplicateId(i64),
    /// A document's text contains a control character (byte < 0x20).
    InvalidDocumentWord(String),
    /// A configured stop word contains a control character.
    InvalidStopWord(String),
    /// A query token is empty after stripping `-`, starts with a second `-`,
    /// or contains a control character.
    InvalidQueryWord(String),
    /// A parallel operation was run against a document id that does not exist.
    UnknownDocument(i64),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NegativeId(id) => write!(f, "document id must be non-negative, got {id}"),
            SearchError::DuplicateId(id) => write!(f, "document id {id} already exists"),
            SearchError::InvalidDocumentWord(word) => {
                write!(f, "document word contains a control character: {word:?}")
            }
            SearchError::InvalidStopWord(word) => {
                write!(f, "stop word contains a control character: {word:?}")
            }
            SearchError::InvalidQueryWord(word) => {
                write!(f, "invalid query word: {word:?}")
            }
            SearchError::UnknownDocument(id) => write!(f, "unknown document id {id}"),
        }
    }
}

impl std::error::Error for SearchError {}
