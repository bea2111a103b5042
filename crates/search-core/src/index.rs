//! The inverted index: dual word↔document maps plus document metadata.
//!
//! Word keys are owned [`String`]s rather than views borrowed into the
//! document's text. The source design keeps borrowed views alive only as
//! long as their owning document; reproducing that in safe Rust without a
//! self-referential struct or an arena is not worth the complexity here — the
//! invariants in the spec constrain semantics, not layout, and an owned key
//! is the straightforward substitution.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::OnceLock;

use crate::config::SearchServerConfig;
use crate::error::SearchError;
use crate::tokenizer::{is_valid_word, split_into_words};

/// Lifecycle status of an indexed document. Fixed at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DocumentRecord {
    pub(crate) rating: i32,
    pub(crate) status: DocumentStatus,
    pub(crate) text: String,
}

/// An in-memory inverted-index search engine over short text documents.
///
/// Construction fails if a stop word contains a control character
/// ([`SearchError::InvalidStopWord`]). After construction, documents are
/// added with [`SearchServer::add_document`] and are immutable until removed
/// with [`SearchServer::remove_document`]; mutation is always remove-then-add.
///
/// `add_document`, `remove_document`, and `remove_duplicates` take `&mut
/// self` and so cannot run concurrently with any other operation on the same
/// instance — the borrow checker enforces the single-writer rule from the
/// spec's concurrency model. Every read-only operation takes `&self` and may
/// be called from multiple threads against a shared `&SearchServer`.
#[derive(Debug, Clone)]
pub struct SearchServer {
    pub(crate) stop_words: HashSet<String>,
    pub(crate) word_to_doc_tf: HashMap<String, HashMap<i64, f64>>,
    pub(crate) doc_to_word_tf: HashMap<i64, HashMap<String, f64>>,
    pub(crate) documents_ids: BTreeSet<i64>,
    pub(crate) documents: HashMap<i64, DocumentRecord>,
    pub(crate) config: SearchServerConfig,
}

/// Accepts either a single whitespace-separated string of stop words or any
/// collection of word-like items, mirroring the two constructor overloads of
/// the source design.
pub trait StopWords {
    fn into_stop_words(self) -> Vec<String>;
}

impl StopWords for &str {
    fn into_stop_words(self) -> Vec<String> {
        split_into_words(self).into_iter().map(str::to_string).collect()
    }
}

impl StopWords for String {
    fn into_stop_words(self) -> Vec<String> {
        self.as_str().into_stop_words()
    }
}

impl<T: AsRef<str>> StopWords for Vec<T> {
    fn into_stop_words(self) -> Vec<String> {
        self.into_iter().map(|w| w.as_ref().to_string()).collect()
    }
}

impl<T: AsRef<str>> StopWords for HashSet<T> {
    fn into_stop_words(self) -> Vec<String> {
        self.into_iter().map(|w| w.as_ref().to_string()).collect()
    }
}

impl SearchServer {
    /// Builds a server with the default [`SearchServerConfig`].
    ///
    /// `stop_words` may be a single string (tokenised by [`crate::tokenizer`])
    /// or any collection of word-like items. Fails with
    /// [`SearchError::InvalidStopWord`] if any stop word contains a control
    /// character.
    pub fn new<S: StopWords>(stop_words: S) -> Result<Self, SearchError> {
        Self::with_config(stop_words, SearchServerConfig::default())
    }

    /// Builds a server with an explicit [`SearchServerConfig`].
    pub fn with_config<S: StopWords>(stop_words: S, config: SearchServerConfig) -> Result<Self, SearchError> {
        let mut stops = HashSet::new();
        for word in stop_words.into_stop_words() {
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(&word) {
                return Err(SearchError::InvalidStopWord(word));
            }
            stops.insert(word);
        }

        Ok(Self {
            stop_words: stops,
            word_to_doc_tf: HashMap::new(),
            doc_to_word_tf: HashMap::new(),
            documents_ids: BTreeSet::new(),
            documents: HashMap::new(),
            config,
        })
    }

    /// Configuration this server was built with.
    pub fn config(&self) -> &SearchServerConfig {
        &self.config
    }

    /// Adds a new document. `ratings` contributes the document's rating as
    /// the integer mean, truncated toward zero (`0` for an empty slice).
    ///
    /// Fails with [`SearchError::NegativeId`] if `id < 0`, with
    /// [`SearchError::DuplicateId`] if `id` already exists, or with
    /// [`SearchError::InvalidDocumentWord`] if any non-stop-word in `text`
    /// contains a control character. On any failure the index is left
    /// unchanged.
    pub fn add_document(
        &mut self,
        id: i64,
        text: impl Into<String>,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<(), SearchError> {
        if id < 0 {
            return Err(SearchError::NegativeId(id));
        }
        if self.documents.contains_key(&id) {
            return Err(SearchError::DuplicateId(id));
        }

        let text = text.into();
        let words: Vec<&str> = split_into_words(&text)
            .into_iter()
            .filter(|w| !self.stop_words.contains(*w))
            .collect();

        for word in &words {
            if !is_valid_word(word) {
                return Err(SearchError::InvalidDocumentWord((*word).to_string()));
            }
        }

        let rating = Self::compute_average_rating(ratings);

        #[cfg(feature = "tracing")]
        tracing::debug!(document_id = id, word_count = words.len(), "adding document");

        if words.is_empty() {
            self.documents.insert(id, DocumentRecord { rating, status, text });
            self.documents_ids.insert(id);
            return Ok(());
        }

        let inv = 1.0 / words.len() as f64;
        let mut word_tf: HashMap<String, f64> = HashMap::new();
        for word in words {
            *word_tf.entry(word.to_string()).or_insert(0.0) += inv;
        }
        for (word, tf) in &word_tf {
            self.word_to_doc_tf.entry(word.clone()).or_default().insert(id, *tf);
        }
        self.doc_to_word_tf.insert(id, word_tf);
        self.documents.insert(id, DocumentRecord { rating, status, text });
        self.documents_ids.insert(id);
        Ok(())
    }

    /// Removes `id` if present; a no-op otherwise. Purges both inverted
    /// views and the metadata record.
    pub fn remove_document(&mut self, id: i64) {
        #[cfg(feature = "tracing")]
        tracing::debug!(document_id = id, "removing document");
        if let Some(word_tf) = self.doc_to_word_tf.remove(&id) {
            for word in word_tf.keys() {
                if let Some(docs) = self.word_to_doc_tf.get_mut(word) {
                    docs.remove(&id);
                    if docs.is_empty() {
                        self.word_to_doc_tf.remove(word);
                    }
                }
            }
        }
        self.documents_ids.remove(&id);
        self.documents.remove(&id);
    }

    /// Word→term-frequency row for `id`, or an empty map if `id` is unknown.
    /// Never fails.
    pub fn get_word_frequencies(&self, id: i64) -> &HashMap<String, f64> {
        static EMPTY: OnceLock<HashMap<String, f64>> = OnceLock::new();
        self.doc_to_word_tf
            .get(&id)
            .unwrap_or_else(|| EMPTY.get_or_init(HashMap::new))
    }

    /// Number of live documents.
    pub fn document_count(&self) -> usize {
        self.documents_ids.len()
    }

    /// Live document ids in ascending order.
    pub fn iterate_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.documents_ids.iter().copied()
    }

    /// Document status for `id`, or `None` if unknown.
    pub fn status_of(&self, id: i64) -> Option<DocumentStatus> {
        self.documents.get(&id).map(|d| d.status)
    }

    /// Document rating for `id`, or `None` if unknown.
    pub fn rating_of(&self, id: i64) -> Option<i32> {
        self.documents.get(&id).map(|d| d.rating)
    }

    /// The word→doc_id view of the inverted index: term frequency of `word`
    /// in `id`, or `None` if `word` is not indexed or not present in `id`.
    /// Exposed so callers (and tests) can check the dual-view invariant
    /// (I2) against [`SearchServer::get_word_frequencies`] without reaching
    /// into crate-private fields.
    pub fn word_document_frequency(&self, word: &str, id: i64) -> Option<f64> {
        self.word_to_doc_tf.get(word).and_then(|docs| docs.get(&id)).copied()
    }

    /// Doc ids containing `word`, in no particular order. Empty if `word` is
    /// not indexed.
    pub fn document_ids_for_word(&self, word: &str) -> Vec<i64> {
        self.word_to_doc_tf
            .get(word)
            .map(|docs| docs.keys().copied().collect())
            .unwrap_or_default()
    }

    fn compute_average_rating(ratings: &[i32]) -> i32 {
        if ratings.is_empty() {
            return 0;
        }
        let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
        (sum / ratings.len() as i64) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_id() {
        let mut s = SearchServer::new::<&str>("").unwrap();
        assert_eq!(
            s.add_document(-1, "cat", DocumentStatus::Actual, &[1]),
            Err(SearchError::NegativeId(-1))
        );
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut s = SearchServer::new::<&str>("").unwrap();
        s.add_document(1, "cat", DocumentStatus::Actual, &[1]).unwrap();
        assert_eq!(
            s.add_document(1, "dog", DocumentStatus::Actual, &[1]),
            Err(SearchError::DuplicateId(1))
        );
    }

    #[test]
    fn rejects_control_character_in_document_and_rolls_back() {
        let mut s = SearchServer::new::<&str>("").unwrap();
        let before_count = s.document_count();
        let result = s.add_document(1, "cat\tdog", DocumentStatus::Actual, &[1]);
        assert!(result.is_err());
        assert_eq!(s.document_count(), before_count);
        assert!(!s.documents.contains_key(&1));
    }

    #[test]
    fn rejects_control_character_in_stop_words() {
        assert_eq!(
            SearchServer::new(vec!["ca\tt"]),
            Err(SearchError::InvalidStopWord("ca\tt".to_string()))
        );
    }

    #[test]
    fn term_frequencies_sum_to_one() {
        let mut s = SearchServer::new::<&str>("").unwrap();
        s.add_document(1, "cat dog cat", DocumentStatus::Actual, &[1]).unwrap();
        let freqs = s.get_word_frequencies(1);
        let sum: f64 = freqs.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((freqs["cat"] - 2.0 / 3.0).abs() < 1e-9);
        assert!((freqs["dog"] - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_document_has_no_word_row_but_is_live() {
        let mut s = SearchServer::new::<&str>("").unwrap();
        s.add_document(1, "", DocumentStatus::Actual, &[]).unwrap();
        assert_eq!(s.document_count(), 1);
        assert!(s.get_word_frequencies(1).is_empty());
    }

    #[test]
    fn remove_then_add_leaves_index_equivalent_to_before_add() {
        let mut s = SearchServer::new::<&str>("").unwrap();
        s.add_document(1, "cat dog", DocumentStatus::Actual, &[5]).unwrap();
        s.remove_document(1);
        assert_eq!(s.document_count(), 0);
        assert!(s.get_word_frequencies(1).is_empty());
        assert!(!s.word_to_doc_tf.contains_key("cat"));
        assert!(!s.word_to_doc_tf.contains_key("dog"));
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut s = SearchServer::new::<&str>("").unwrap();
        s.add_document(1, "cat", DocumentStatus::Actual, &[1]).unwrap();
        s.remove_document(42);
        assert_eq!(s.document_count(), 1);
    }

    #[test]
    fn average_rating_truncates_toward_zero() {
        let mut s = SearchServer::new::<&str>("").unwrap();
        s.add_document(1, "cat", DocumentStatus::Actual, &[-7, -2]).unwrap();
        assert_eq!(s.rating_of(1), Some(-4));
        s.add_document(2, "dog", DocumentStatus::Actual, &[]).unwrap();
        assert_eq!(s.rating_of(2), Some(0));
    }

    #[test]
    fn iterate_ids_is_ascending() {
        let mut s = SearchServer::new::<&str>("").unwrap();
        s.add_document(5, "a", DocumentStatus::Actual, &[1]).unwrap();
        s.add_document(1, "b", DocumentStatus::Actual, &[1]).unwrap();
        s.add_document(3, "c", DocumentStatus::Actual, &[1]).unwrap();
        assert_eq!(s.iterate_ids().collect::<Vec<_>>(), vec![1, 3, 5]);
    }
}
