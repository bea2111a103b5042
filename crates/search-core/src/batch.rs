//! Bulk query dispatch (§4.G): run many queries against the same index in
//! parallel, preserving positional correspondence with the input.

use crate::error::SearchError;
use crate::index::{DocumentStatus, SearchServer};
use crate::ranking::SearchResult;

/// Runs every query in `queries` against `server` in parallel (one worker per
/// query, joined before returning) and returns the per-query results in
/// input order. Each query uses the default `Actual`-status filter, matching
/// `SearchServer::find_top_documents_actual`, but accumulates relevance with
/// [`crate::config::SearchServerConfig::bulk_shard_count`] shards rather than
/// the smaller per-query default, since many of these per-query accumulators
/// are alive across worker threads at once. A query that fails to parse
/// yields `Err` at its position rather than aborting the whole batch.
pub fn process_queries(server: &SearchServer, queries: &[String]) -> Vec<Result<Vec<SearchResult>, SearchError>> {
    let mut results: Vec<Result<Vec<SearchResult>, SearchError>> =
        queries.iter().map(|_| Ok(Vec::new())).collect();
    let shard_count = server.config().bulk_shard_count;

    std::thread::scope(|scope| {
        for (slot, query) in results.iter_mut().zip(queries.iter()) {
            scope.spawn(move || {
                *slot = server.rank_with_shard_count(
                    query,
                    |_, status, _| status == DocumentStatus::Actual,
                    false,
                    shard_count,
                );
            });
        }
    });

    results
}

/// As [`process_queries`], but concatenates the per-query result lists in
/// query order into one flat list. Stops at (and returns) the first
/// query-parse error encountered in input order.
pub fn process_queries_joined(server: &SearchServer, queries: &[String]) -> Result<Vec<SearchResult>, SearchError> {
    let per_query = process_queries(server, queries);
    let mut joined = Vec::with_capacity(per_query.len() * crate::ranking::MAX_RESULTS);
    for result in per_query {
        joined.extend(result?);
    }
    Ok(joined)
}
