//! The match operation (§4.F): for one `(query, doc_id)` pair, returns the
//! matched plus-words, or none if any minus-word is present.

use crate::error::SearchError;
use crate::index::{DocumentStatus, SearchServer};
use crate::query::parse_query;

impl SearchServer {
    /// Matches `raw_query` against a single document.
    ///
    /// If any minus-word in the query is present in `doc_id`'s word set, the
    /// match short-circuits and returns an empty word list (the document's
    /// status is still reported). Otherwise returns the sorted, deduplicated
    /// plus-words present in the document, alongside its status.
    ///
    /// The sequential form does not check `doc_id` existence up front: an
    /// unknown id simply has an empty word row (per
    /// [`SearchServer::get_word_frequencies`]), so every plus-word fails to
    /// match and the status lookup surfaces as `None` below — the caller
    /// distinguishes "no match" from "unknown document" via the returned
    /// `Option<DocumentStatus>`.
    pub fn match_document(
        &self,
        raw_query: &str,
        doc_id: i64,
    ) -> Result<(Vec<&str>, Option<DocumentStatus>), SearchError> {
        let query = parse_query(raw_query, &self.stop_words)?;
        let status = self.status_of(doc_id);
        let doc_words = self.get_word_frequencies(doc_id);

        for &minus_word in &query.minus_words {
            if doc_words.contains_key(minus_word) {
                return Ok((Vec::new(), status));
            }
        }

        let mut matched: Vec<&str> = query
            .plus_words
            .into_iter()
            .filter(|word| doc_words.contains_key(*word))
            .collect();
        matched.sort_unstable();
        matched.dedup();
        Ok((matched, status))
    }

    /// As [`SearchServer::match_document`], but requires `doc_id` to exist:
    /// fails with [`SearchError::UnknownDocument`] otherwise. Intended for
    /// parallel call sites (§4.G) where silently matching against a
    /// nonexistent id would mask a caller bug.
    pub fn match_document_checked(
        &self,
        raw_query: &str,
        doc_id: i64,
    ) -> Result<(Vec<&str>, DocumentStatus), SearchError> {
        if !self.documents.contains_key(&doc_id) {
            return Err(SearchError::UnknownDocument(doc_id));
        }
        let (matched, status) = self.match_document(raw_query, doc_id)?;
        Ok((matched, status.expect("presence checked above")))
    }
}
