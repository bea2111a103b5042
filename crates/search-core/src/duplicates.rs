//! Duplicate detection (§4.H): finds documents whose word-set duplicates an
//! earlier document's and removes the later copies.

use std::collections::{BTreeSet, HashMap};

use crate::index::SearchServer;

/// Removes every document whose word-set (ignoring term frequencies)
/// duplicates an earlier document's, in ascending id order. The first
/// occurrence of each word-set is kept; later duplicates are removed via
/// [`SearchServer::remove_document`]. Each removal is reported with a
/// `tracing::info!` event carrying the removed id — a subscriber writing to
/// stdout reproduces the source design's `"Found duplicate document id N"`
/// line exactly. The event is only emitted when this crate's (default-on)
/// `tracing` feature is enabled; with it disabled, removal is silent.
///
/// ```
/// use search_core::prelude::*;
///
/// // A host binary installs a subscriber; the core crate never does this itself.
/// let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
/// let _guard = tracing::subscriber::set_default(subscriber);
///
/// let mut server = SearchServer::new::<&str>("").unwrap();
/// server.add_document(1, "a b c", DocumentStatus::Actual, &[1]).unwrap();
/// server.add_document(2, "c a b", DocumentStatus::Actual, &[1]).unwrap();
///
/// remove_duplicates(&mut server); // logs "Found duplicate document id 2"
/// assert_eq!(server.iterate_ids().collect::<Vec<_>>(), vec![1]);
/// ```
pub fn remove_duplicates(server: &mut SearchServer) {
    let mut seen: HashMap<BTreeSet<String>, i64> = HashMap::new();
    let mut to_remove = Vec::new();

    for id in server.iterate_ids() {
        let words: BTreeSet<String> = server.get_word_frequencies(id).keys().cloned().collect();
        if seen.contains_key(&words) {
            to_remove.push(id);
        } else {
            seen.insert(words, id);
        }
    }

    for id in to_remove {
        #[cfg(feature = "tracing")]
        tracing::info!(document_id = id, "Found duplicate document id {id}");
        server.remove_document(id);
    }
}
