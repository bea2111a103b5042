//! Splits raw text into words and validates word content.
//!
//! Splitting is ASCII-space-only (`0x20`); runs of spaces collapse and empty
//! tokens are dropped. No stemming, case-folding, or Unicode-aware
//! segmentation is performed — that is a deliberate non-goal of the core.

/// Splits `text` into words on ASCII space, dropping empty tokens.
///
/// Returns borrowed views into `text`, in source order.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// True iff `word` contains no byte with value less than `0x20`.
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < 0x20)
}
