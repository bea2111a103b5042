//! Query parsing: classifies raw query tokens into plus/minus/stop terms.

use std::collections::HashSet;

use crate::error::SearchError;
use crate::tokenizer::{is_valid_word, split_into_words};

/// A parsed query: deduplicated, lexicographically sorted plus- and
/// minus-word views borrowed from the original query string.
///
/// Sorting (rather than leaving insertion order) is required so that
/// parallel set operations over the two sides are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'q> {
    pub plus_words: Vec<&'q str>,
    pub minus_words: Vec<&'q str>,
}

/// Parses `raw_query` against `stop_words`.
///
/// Per token: a leading `-` marks a minus term and is stripped; the
/// remaining text must be non-empty, must not itself start with `-`, and
/// must contain no control character, or parsing fails with
/// [`SearchError::InvalidQueryWord`]. Stop words are silently dropped from
/// either side. Both sides are sorted ascending and deduplicated.
pub fn parse_query<'q>(raw_query: &'q str, stop_words: &HashSet<String>) -> Result<Query<'q>, SearchError> {
    let mut plus_words = Vec::new();
    let mut minus_words = Vec::new();

    for token in split_into_words(raw_query) {
        let (word, is_minus) = match token.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (token, false),
        };

        if is_minus {
            if word.is_empty() || word.starts_with('-') || !is_valid_word(word) {
                return Err(SearchError::InvalidQueryWord(token.to_string()));
            }
        } else if !is_valid_word(word) {
            return Err(SearchError::InvalidQueryWord(token.to_string()));
        }

        if stop_words.contains(word) {
            continue;
        }

        if is_minus {
            minus_words.push(word);
        } else {
            plus_words.push(word);
        }
    }

    plus_words.sort_unstable();
    plus_words.dedup();
    minus_words.sort_unstable();
    minus_words.dedup();

    Ok(Query { plus_words, minus_words })
}
