//! Regex-backed splitter.

use super::WordSplitter;
use crate::error::{Error, Result};
use regex::Regex;

/// Splits a word into every non-overlapping match of a pattern, left to right.
///
/// Text not covered by any match contributes nothing. Alternatives are tried
/// in the order they are written, so put higher priority rules first.
#[derive(Debug, Clone)]
pub struct PatternSplitter {
    regex: Regex,
}

impl PatternSplitter {
    /// Compile `pattern` into a splitter.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Use an already compiled regex.
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl WordSplitter for PatternSplitter {
    fn split_word(&self, word: &str) -> Vec<String> {
        find_all(&self.regex, word)
    }
}

pub(crate) fn find_all(regex: &Regex, word: &str) -> Vec<String> {
    regex
        .find_iter(word)
        .map(|m| m.as_str().to_string())
        .collect()
}
