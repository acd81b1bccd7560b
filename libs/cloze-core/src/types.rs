//! Core types for term extraction.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Reference name (trimmed) to the display text it was written with.
pub type ReferenceMap = HashMap<String, String>;

/// A resolved flashcard unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Surface text from the inline occurrence.
    pub text: String,
    /// Name linking inline occurrences to the definition.
    pub reference: String,
    /// Trimmed body of the definition paragraph.
    pub definition: String,
    /// Cloze pieces of `text`. Treat as an unordered set.
    pub splits: BTreeSet<String>,
}

impl Term {
    /// Whether `split` is one of this term's cloze pieces.
    pub fn has_split(&self, split: &str) -> bool {
        self.splits.contains(split)
    }
}

/// Definition paragraph as captured, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionRecord {
    pub reference: String,
    pub manual_splits: String,
    pub body: String,
}
