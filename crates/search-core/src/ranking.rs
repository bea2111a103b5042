//! The ranking engine: composes the query parser, the inverted index, and
//! the lock-striped accumulator into `find_top_documents`.

use crate::accumulator::ConcurrentAccumulator;
use crate::error::SearchError;
use crate::index::{DocumentStatus, SearchServer};
use crate::query::parse_query;

/// Relevance-equality window for the top-K tie-break (§4.E step 6). Two
/// relevances within this absolute difference are treated as equal, and
/// broken by rating instead. A comparator that compares raw `f64`s directly
/// would produce a non-total order across floating-point noise and must be
/// avoided.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Maximum number of results `find_top_documents` ever returns.
pub const MAX_RESULTS: usize = 5;

/// One ranked search result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub id: i64,
    pub relevance: f64,
    pub rating: i32,
}

impl SearchServer {
    /// Ranks documents matching `raw_query` against `predicate`, sequentially.
    ///
    /// `predicate(id, status, rating)` filters which matching documents are
    /// eligible to be scored at all; minus-words still exclude documents
    /// after scoring regardless of the predicate. Returns at most
    /// [`MAX_RESULTS`] results, sorted by relevance descending with rating
    /// descending as a tie-break (relevances within [`RELEVANCE_EPSILON`] are
    /// considered equal). An empty query yields an empty result.
    pub fn find_top_documents<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<SearchResult>, SearchError>
    where
        F: Fn(i64, DocumentStatus, i32) -> bool + Sync,
    {
        self.rank(raw_query, predicate, false)
    }

    /// As [`SearchServer::find_top_documents`], but fans plus-word
    /// accumulation out across worker threads split into exactly four
    /// evenly-sized chunks, joined before the result is materialised.
    pub fn find_top_documents_parallel<F>(
        &self,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<SearchResult>, SearchError>
    where
        F: Fn(i64, DocumentStatus, i32) -> bool + Sync,
    {
        self.rank(raw_query, predicate, true)
    }

    /// Specialisation that only considers documents with the given `status`.
    ///
    /// The filter closure here is a plain comparison against a `Copy` value,
    /// so it is trivially `Sync` and satisfies [`SearchServer::find_top_documents`]'s bound.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.find_top_documents(raw_query, move |_, doc_status, _| doc_status == status)
    }

    /// Specialisation equivalent to `find_top_documents_with_status(query, DocumentStatus::Actual)`.
    pub fn find_top_documents_actual(&self, raw_query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    fn rank<F>(&self, raw_query: &str, predicate: F, parallel: bool) -> Result<Vec<SearchResult>, SearchError>
    where
        F: Fn(i64, DocumentStatus, i32) -> bool + Sync,
    {
        self.rank_with_shard_count(raw_query, predicate, parallel, self.config.query_shard_count)
    }

    /// As [`SearchServer::rank`], but with an explicit accumulator shard
    /// count. Used by the bulk dispatcher (§4.G), which runs many of these
    /// concurrently and so accumulates with [`crate::config::SearchServerConfig::bulk_shard_count`]
    /// shards instead of the smaller per-query default.
    ///
    /// `F: Sync` is required unconditionally, not just for `parallel` calls:
    /// the body below calls `accumulate_parallel` whenever `parallel` is
    /// true, and the compiler checks this generic function's body against
    /// its own declared bounds, not against what a given call site passes —
    /// a narrower bound here would fail to compile regardless of whether any
    /// caller actually runs in parallel mode.
    pub(crate) fn rank_with_shard_count<F>(
        &self,
        raw_query: &str,
        predicate: F,
        parallel: bool,
        shard_count: usize,
    ) -> Result<Vec<SearchResult>, SearchError>
    where
        F: Fn(i64, DocumentStatus, i32) -> bool + Sync,
    {
        let query = parse_query(raw_query, &self.stop_words)?;
        if query.plus_words.is_empty() {
            return Ok(Vec::new());
        }

        let accumulator = ConcurrentAccumulator::new(shard_count);
        if parallel {
            self.accumulate_parallel(&query.plus_words, &predicate, &accumulator);
        } else {
            for &word in &query.plus_words {
                self.accumulate_word(word, &predicate, &accumulator);
            }
        }

        let mut relevances = accumulator.materialize();
        for &minus_word in &query.minus_words {
            if let Some(postings) = self.word_to_doc_tf.get(minus_word) {
                for doc_id in postings.keys() {
                    relevances.remove(doc_id);
                }
            }
        }

        let mut results: Vec<SearchResult> = relevances
            .into_iter()
            .map(|(id, relevance)| SearchResult {
                id,
                relevance,
                rating: self.rating_of(id).unwrap_or(0),
            })
            .collect();

        sort_results(&mut results);
        results.truncate(MAX_RESULTS);
        Ok(results)
    }

    fn accumulate_parallel<F>(&self, plus_words: &[&str], predicate: &F, accumulator: &ConcurrentAccumulator)
    where
        F: Fn(i64, DocumentStatus, i32) -> bool + Sync,
    {
        let chunks = chunk_evenly(plus_words, 4);
        std::thread::scope(|scope| {
            for chunk in &chunks {
                scope.spawn(move || {
                    for &word in *chunk {
                        self.accumulate_word(word, predicate, accumulator);
                    }
                });
            }
        });
    }

    fn accumulate_word<F>(&self, word: &str, predicate: &F, accumulator: &ConcurrentAccumulator)
    where
        F: Fn(i64, DocumentStatus, i32) -> bool,
    {
        let Some(postings) = self.word_to_doc_tf.get(word) else {
            return;
        };
        let idf = (self.document_count() as f64 / postings.len() as f64).ln();
        for (&doc_id, &tf) in postings {
            let Some(status) = self.status_of(doc_id) else {
                continue;
            };
            let rating = self.rating_of(doc_id).unwrap_or(0);
            if predicate(doc_id, status, rating) {
                accumulator.add(doc_id, tf * idf);
            }
        }
    }
}

/// Splits `items` into exactly `n` chunks whose sizes differ by at most one,
/// in order. Chunks may be empty if `items` is shorter than `n`.
fn chunk_evenly<'a, T>(items: &'a [T], n: usize) -> Vec<&'a [T]> {
    let len = items.len();
    let base = len / n;
    let remainder = len % n;
    let mut chunks = Vec::with_capacity(n);
    let mut start = 0;
    for i in 0..n {
        let size = base + usize::from(i < remainder);
        chunks.push(&items[start..start + size]);
        start += size;
    }
    chunks
}

fn sort_results(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        if (a.relevance - b.relevance).abs() < RELEVANCE_EPSILON {
            b.rating.cmp(&a.rating)
        } else {
            b.relevance.partial_cmp(&a.relevance).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
}
