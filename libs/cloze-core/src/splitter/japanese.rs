//! Default splitter for mixed Japanese text.
//!
//! Rules, highest priority first:
//! - a single kanji
//! - one or two kana (hiragana, katakana, half-width katakana)
//! - up to five characters of anything else that is not ASCII whitespace or
//!   an ideographic space

use super::pattern::find_all;
use super::WordSplitter;
use regex::Regex;
use std::sync::LazyLock;

static JAPANESE_PIECE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[\x{4E00}-\x{9FA5}]",
        r"|[\x{3041}-\x{3096}\x{3099}\x{309D}-\x{30FE}\x{FF65}-\x{FF9D}]{1,2}",
        r"|[^\t\n\f\r \x{4E00}-\x{9FA5}\x{3041}-\x{30FE}\x{3000}]{1,5}",
    ))
    .expect("valid japanese splitter regex")
});

/// Kanji / kana / other-run splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseSplitter;

impl WordSplitter for JapaneseSplitter {
    fn split_word(&self, word: &str) -> Vec<String> {
        let pieces = find_all(&JAPANESE_PIECE, word);
        tracing::trace!(word, ?pieces, "japanese split");
        pieces
    }
}
