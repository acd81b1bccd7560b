//! Extraction entry point: classify, scan, resolve.

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::splitter::WordSplitter;
use crate::types::Term;
use crate::{paragraph, reference, resolver};
use serde::Serialize;

/// Terms found in a document plus the document with definitions removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub terms: Vec<Term>,
    /// Prose paragraphs joined by a single blank line.
    pub text: String,
}

impl Extraction {
    /// Find a term by its reference name.
    pub fn term(&self, reference: &str) -> Option<&Term> {
        self.terms.iter().find(|term| term.reference == reference)
    }
}

/// Extract every referenced, defined term from `text`.
///
/// Never fails: unreferenced or duplicate definitions are dropped and
/// malformed definitions stay in the returned text.
pub fn extract_terms(text: &str, splitter: &dyn WordSplitter) -> Extraction {
    let classified = paragraph::classify(text);
    let references = reference::scan(&classified.prose);
    let terms = resolver::resolve(&references, &classified.definitions, splitter);

    tracing::debug!(
        definitions = classified.definitions.len(),
        references = references.len(),
        terms = terms.len(),
        "extracted terms"
    );

    Extraction {
        terms,
        text: classified.prose,
    }
}

/// Extractor that owns its splitter.
pub struct Extractor {
    splitter: Box<dyn WordSplitter>,
}

impl Extractor {
    pub fn new(splitter: impl WordSplitter + 'static) -> Self {
        Self {
            splitter: Box::new(splitter),
        }
    }

    /// Build an extractor with the splitter named in `config`.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        Ok(Self {
            splitter: config.build_splitter()?,
        })
    }

    pub fn extract(&self, text: &str) -> Extraction {
        extract_terms(text, self.splitter.as_ref())
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(crate::splitter::JapaneseSplitter)
    }
}
