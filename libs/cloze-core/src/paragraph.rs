//! Paragraph classification.
//!
//! Input is split on blank lines. A paragraph whose line starts a definition
//! is captured as a [`DefinitionRecord`]; everything else is prose.
//!
//! ```markdown
//! Some prose mentioning [密林][].
//!
//! [密林]: /密/林
//! みつ‐りん【密林】
//! ```

use crate::types::DefinitionRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Two or more newlines with only whitespace between them.
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\s)*\n(?-u:\s)*\n").expect("valid paragraph break regex")
});

/// `[name]: /split/split/` followed by the body on the remaining lines.
///
/// Whitespace here is ASCII only, so full-width spaces stay part of a name or
/// a manual split.
static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^\[([^\t\n\v\f\r ]+)\]:(?-u:\s)*/([^\t\n\v\f\r ]*)(?-u:\s)*\n?(.*)")
        .expect("valid definition regex")
});

/// Separator used when prose paragraphs are joined back together.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Definitions found in a document plus the prose left once they are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedText {
    pub definitions: Vec<DefinitionRecord>,
    pub prose: String,
}

/// Split `text` into paragraphs and sort them into definitions and prose.
pub fn classify(text: &str) -> ClassifiedText {
    let mut definitions = Vec::new();
    let mut prose = Vec::new();

    for paragraph in PARAGRAPH_BREAK.split(text) {
        match parse_definition(paragraph) {
            Some(record) => {
                tracing::trace!(reference = %record.reference, "definition paragraph");
                definitions.push(record);
            }
            None => prose.push(paragraph),
        }
    }

    ClassifiedText {
        definitions,
        prose: prose.join(PARAGRAPH_SEPARATOR),
    }
}

/// Parse a single paragraph as a definition, if it is one.
pub fn parse_definition(paragraph: &str) -> Option<DefinitionRecord> {
    let caps = DEFINITION.captures(paragraph)?;
    Some(DefinitionRecord {
        reference: caps[1].to_string(),
        manual_splits: caps[2].to_string(),
        body: caps[3].to_string(),
    })
}
