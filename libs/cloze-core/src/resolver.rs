//! Term resolution: match definitions against inline references and compute
//! each term's cloze splits.

use crate::splitter::WordSplitter;
use crate::types::{DefinitionRecord, ReferenceMap, Term};
use std::collections::{BTreeSet, HashSet};

/// Separator between manual splits, as in `[ref]: /ab/cd/`.
pub const SPLIT_SEPARATOR: char = '/';

/// Resolve `definitions` in order against `references`.
///
/// Definitions that are never referenced are dropped, and only the first
/// definition of each reference is kept.
pub fn resolve(
    references: &ReferenceMap,
    definitions: &[DefinitionRecord],
    splitter: &dyn WordSplitter,
) -> Vec<Term> {
    let mut terms = Vec::new();
    let mut seen_references = HashSet::new();

    for record in definitions {
        let Some(text) = references.get(&record.reference) else {
            tracing::debug!(reference = %record.reference, "definition never referenced, skipping");
            continue;
        };

        if !seen_references.insert(record.reference.as_str()) {
            tracing::debug!(reference = %record.reference, "duplicate definition, keeping the first");
            continue;
        }

        let manual_splits = parse_manual_splits(&record.manual_splits);
        let splits = compute_splits(text, &manual_splits, splitter);

        terms.push(Term {
            text: text.clone(),
            reference: record.reference.clone(),
            definition: record.body.trim().to_string(),
            splits,
        });
    }

    terms
}

/// Parse `ab/ cd //ef` into `{ab, cd, ef}`.
pub fn parse_manual_splits(raw: &str) -> BTreeSet<String> {
    raw.split(SPLIT_SEPARATOR)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Manual splits plus splitter output for whatever the manual splits leave.
pub fn compute_splits(
    text: &str,
    manual_splits: &BTreeSet<String>,
    splitter: &dyn WordSplitter,
) -> BTreeSet<String> {
    let mut splits = manual_splits.clone();

    for piece in unsplit_parts(text, manual_splits) {
        if piece.is_empty() {
            continue;
        }
        splits.extend(
            splitter
                .split_word(piece)
                .into_iter()
                .filter(|split| !split.is_empty()),
        );
    }

    splits
}

/// Fragments of `text` left once every manual split is cut out.
///
/// Scans left to right; where several manual splits match at the same
/// position the longest one is cut. Fragments may be empty.
pub fn unsplit_parts<'a>(text: &'a str, manual_splits: &BTreeSet<String>) -> Vec<&'a str> {
    if manual_splits.is_empty() {
        return vec![text];
    }

    let mut ordered: Vec<&str> = manual_splits.iter().map(String::as_str).collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut parts = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        match ordered.iter().find(|split| rest.starts_with(**split)) {
            Some(split) => {
                parts.push(&text[start..pos]);
                pos += split.len();
                start = pos;
            }
            None => {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    parts.push(&text[start..]);

    parts
}
