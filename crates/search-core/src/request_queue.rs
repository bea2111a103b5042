//! The sliding request window (§4.I): tracks how many of the last `N`
//! submitted queries returned no results.

use std::collections::VecDeque;

use crate::error::SearchError;
use crate::index::{DocumentStatus, SearchServer};
use crate::ranking::SearchResult;

/// Wraps a [`SearchServer`] reference and records whether each submitted
/// query was empty, over a fixed-size trailing window.
pub struct RequestQueue<'s> {
    server: &'s SearchServer,
    window_size: usize,
    outcomes: VecDeque<bool>,
    empty_count: usize,
}

impl<'s> RequestQueue<'s> {
    /// Builds a queue over `server` using the server's configured
    /// [`crate::config::SearchServerConfig::window_size`].
    pub fn new(server: &'s SearchServer) -> Self {
        let window_size = server.config().window_size;
        Self::with_window_size(server, window_size)
    }

    /// Builds a queue with an explicit window size.
    pub fn with_window_size(server: &'s SearchServer, window_size: usize) -> Self {
        Self {
            server,
            window_size,
            outcomes: VecDeque::with_capacity(window_size.min(1024)),
            empty_count: 0,
        }
    }

    /// Runs `raw_query` through [`SearchServer::find_top_documents`] with
    /// `predicate`, records whether it was empty, and returns its results.
    pub fn add_find_request<F>(
        &mut self,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<SearchResult>, SearchError>
    where
        F: Fn(i64, DocumentStatus, i32) -> bool + Sync,
    {
        let results = self.server.find_top_documents(raw_query, predicate)?;
        self.record(results.is_empty());
        Ok(results)
    }

    /// As [`RequestQueue::add_find_request`], filtering by `status`.
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.add_find_request(raw_query, move |_, doc_status, _| doc_status == status)
    }

    /// As [`RequestQueue::add_find_request`], defaulting to `Actual` status.
    pub fn add_find_request_actual(&mut self, raw_query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.add_find_request_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Number of the buffered outcomes (over the trailing `window_size`
    /// submissions) that were empty.
    pub fn no_result_count(&self) -> usize {
        self.empty_count
    }

    fn record(&mut self, is_empty: bool) {
        if self.outcomes.len() >= self.window_size {
            if let Some(oldest) = self.outcomes.pop_front() {
                if oldest {
                    self.empty_count -= 1;
                }
            }
        }
        self.outcomes.push_back(is_empty);
        if is_empty {
            self.empty_count += 1;
        }
    }
}
