//! An in-memory inverted-index document search engine.
//!
//! This crate indexes short text documents and answers ranked relevance
//! queries with TF-IDF scoring plus boolean `+`/`-` query terms, and runs
//! bulk query batches in parallel over a lock-striped concurrent
//! accumulator.
//!
//! # Design Philosophy
//!
//! This crate focuses on the **core** of a search engine: the inverted
//! index, the query parser, the ranking pipeline, and the parallel
//! execution strategy behind it. It does not attempt persistence, network
//! transport, or distribution across hosts — see the module docs below for
//! exact boundaries.
//!
//! **Key characteristics:**
//! - In-memory only (no persistence)
//! - Plain TF-IDF, not BM25 (no term-frequency saturation or length
//!   normalisation — see [`ranking`] for the formula actually used)
//! - Documents are immutable after insertion; mutation is remove-then-add
//! - `&mut SearchServer` for writers, `&SearchServer` for readers: the
//!   borrow checker enforces the single-writer/many-readers discipline the
//!   server's concurrency model requires
//!
//! # Quick Start
//!
//! ```rust
//! use search_core::prelude::*;
//!
//! let mut server = SearchServer::new("and in at").unwrap();
//! server
//!     .add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7])
//!     .unwrap();
//! server
//!     .add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3])
//!     .unwrap();
//!
//! let results = server.find_top_documents_actual("curly -collar").unwrap();
//! assert_eq!(results[0].id, 1);
//! ```
//!
//! # Module Map
//!
//! - [`tokenizer`]: whitespace splitting and control-character validation (§4.A)
//! - [`query`]: plus/minus/stop-word query parsing (§4.B)
//! - [`index`]: the dual-map inverted index and [`SearchServer`] itself (§4.C)
//! - [`accumulator`]: the lock-striped relevance accumulator (§4.D)
//! - [`ranking`]: `find_top_documents` and the top-K tie-break (§4.E)
//! - [`matching`]: `match_document` (§4.F)
//! - [`batch`]: parallel bulk query dispatch (§4.G)
//! - [`duplicates`]: duplicate document detection and removal (§4.H)
//! - [`request_queue`]: the sliding "no result" window (§4.I)
//! - [`paginator`]: fixed-size result pages (§4.J)
//! - [`config`]: the typed configuration surface for shard/window/page sizes
//! - [`error`]: the error enum surfaced by every fallible operation

pub mod accumulator;
pub mod batch;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod index;
pub mod matching;
pub mod paginator;
pub mod query;
pub mod ranking;
pub mod request_queue;
pub mod tokenizer;

pub use error::SearchError;
pub use index::{DocumentStatus, SearchServer};

/// Re-exports of the commonly used types, mirroring the `rank-*` family's
/// `prelude` convention.
pub mod prelude {
    pub use crate::batch::{process_queries, process_queries_joined};
    pub use crate::config::SearchServerConfig;
    pub use crate::duplicates::remove_duplicates;
    pub use crate::error::SearchError;
    pub use crate::index::{DocumentStatus, SearchServer};
    pub use crate::paginator::{paginate, Paginator};
    pub use crate::query::{parse_query, Query};
    pub use crate::ranking::{SearchResult, MAX_RESULTS, RELEVANCE_EPSILON};
    pub use crate::request_queue::RequestQueue;
}
