//! Shared fixtures for integration tests.

pub mod fixtures;

use std::collections::BTreeSet;

use cloze_core::{Extraction, Term};

/// Build a split set from string slices.
pub fn splits(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Find the term for `reference`, panicking with a readable message if missing.
pub fn expect_term<'a>(extraction: &'a Extraction, reference: &str) -> &'a Term {
    extraction
        .term(reference)
        .unwrap_or_else(|| panic!("expected a term with reference {reference}"))
}
