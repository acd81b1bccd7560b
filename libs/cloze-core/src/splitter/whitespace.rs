//! Whitespace splitter for space-delimited scripts.

use super::WordSplitter;

/// Splits on Unicode whitespace, one piece per word.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSplitter;

impl WordSplitter for WhitespaceSplitter {
    fn split_word(&self, word: &str) -> Vec<String> {
        word.split_whitespace().map(str::to_string).collect()
    }
}
