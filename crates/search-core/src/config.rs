//! Typed configuration for the numeric knobs the core exposes: accumulator
//! shard counts, the sliding-window size, and a default pagination size.
//!
//! None of these widen the feature surface — they are the same knobs the
//! components already take as constructor parameters, collected into one
//! `Copy` value so a caller configures a server once instead of threading
//! four arguments through every constructor.

/// Default number of shards used by a single-query relevance accumulator.
pub const DEFAULT_QUERY_SHARD_COUNT: usize = 8;
/// Default number of shards used by the cross-query bulk accumulator.
pub const DEFAULT_BULK_SHARD_COUNT: usize = 400;
/// Default sliding-window size ("minutes per day" in the source design; here
/// just a request count with no time base).
pub const DEFAULT_WINDOW_SIZE: usize = 1440;
/// Default page size for the result paginator's convenience constructor.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for a [`crate::SearchServer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchServerConfig {
    /// Shard count for the accumulator used by a single [`crate::SearchServer::find_top_documents`] call.
    pub query_shard_count: usize,
    /// Shard count for the accumulator shared across a bulk query batch.
    pub bulk_shard_count: usize,
    /// Size of the sliding request window (§4.I).
    pub window_size: usize,
    /// Default page size handed to the paginator's convenience constructor.
    pub default_page_size: usize,
}

impl Default for SearchServerConfig {
    fn default() -> Self {
        Self {
            query_shard_count: DEFAULT_QUERY_SHARD_COUNT,
            bulk_shard_count: DEFAULT_BULK_SHARD_COUNT,
            window_size: DEFAULT_WINDOW_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchServerConfig {
    pub fn with_query_shard_count(mut self, count: usize) -> Self {
        self.query_shard_count = count;
        self
    }

    pub fn with_bulk_shard_count(mut self, count: usize) -> Self {
        self.bulk_shard_count = count;
        self
    }

    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }
}
