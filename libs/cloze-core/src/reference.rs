//! Inline reference scanning.
//!
//! References look like markdown reference links: `[display][name]`, or the
//! shorthand `[display]` / `[display][]` where the name is the display text.

use crate::types::ReferenceMap;
use regex::Regex;
use std::sync::LazyLock;

static INLINE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\](\[([^\]]*)\])?").expect("valid inline reference regex")
});

/// One inline occurrence found in prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineReference<'a> {
    pub display: &'a str,
    /// Explicit name, empty for the shorthand forms.
    pub name: &'a str,
}

impl<'a> InlineReference<'a> {
    /// Name used to look up the definition.
    ///
    /// Only a truly empty name falls back to the display text; a blank one
    /// trims to `""`, which no definition can declare.
    pub fn effective_name(&self) -> &'a str {
        if self.name.is_empty() {
            self.display.trim()
        } else {
            self.name.trim()
        }
    }
}

/// Iterate over every inline reference in `prose`, left to right.
pub fn inline_references(prose: &str) -> impl Iterator<Item = InlineReference<'_>> {
    INLINE_REFERENCE.captures_iter(prose).map(|caps| InlineReference {
        display: caps.get(1).map_or("", |m| m.as_str()),
        name: caps.get(3).map_or("", |m| m.as_str()),
    })
}

/// Build the reference map for `prose`. Later occurrences of a name win.
pub fn scan(prose: &str) -> ReferenceMap {
    let mut references = ReferenceMap::new();
    for reference in inline_references(prose) {
        let name = reference.effective_name();
        if let Some(previous) = references.insert(name.to_string(), reference.display.to_string())
        {
            if previous != reference.display {
                tracing::debug!(
                    reference = name,
                    previous = %previous,
                    current = reference.display,
                    "reference used with differing display text, keeping the latest"
                );
            }
        }
    }
    references
}
