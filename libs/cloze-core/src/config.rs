//! Extractor configuration.

use crate::error::{Error, Result};
use crate::splitter::{get_splitter, PatternSplitter, WordSplitter};
use serde::{Deserialize, Serialize};

/// Environment variable naming the splitter.
pub const SPLITTER_ENV: &str = "CLOZE_SPLITTER";
/// Environment variable holding the pattern for the `pattern` splitter.
pub const PATTERN_ENV: &str = "CLOZE_SPLITTER_PATTERN";

/// Splitter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitterKind {
    Japanese,
    Whitespace,
    Pattern,
}

impl Default for SplitterKind {
    fn default() -> Self {
        Self::Japanese
    }
}

impl SplitterKind {
    /// Get the splitter name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Japanese => "japanese",
            Self::Whitespace => "whitespace",
            Self::Pattern => "pattern",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "japanese" => Some(Self::Japanese),
            "whitespace" => Some(Self::Whitespace),
            "pattern" => Some(Self::Pattern),
            _ => None,
        }
    }
}

/// Which splitter to use and how to build it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub splitter: SplitterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl ExtractorConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let splitter = match lookup(SPLITTER_ENV) {
            Some(name) => {
                let name = name.trim().to_lowercase();
                SplitterKind::from_str(&name).ok_or(Error::UnknownSplitter(name))?
            }
            None => SplitterKind::default(),
        };
        let pattern = lookup(PATTERN_ENV).filter(|p| !p.is_empty());

        Ok(Self { splitter, pattern })
    }

    /// Build the configured splitter.
    pub fn build_splitter(&self) -> Result<Box<dyn WordSplitter>> {
        match self.splitter {
            SplitterKind::Pattern => {
                let pattern = self.pattern.as_deref().ok_or(Error::MissingPattern)?;
                Ok(Box::new(PatternSplitter::new(pattern)?))
            }
            kind => get_splitter(kind.as_str())
                .ok_or_else(|| Error::UnknownSplitter(kind.as_str().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_japanese() {
        let config = ExtractorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ExtractorConfig::default());
        assert_eq!(config.splitter, SplitterKind::Japanese);
    }

    #[test]
    fn reads_splitter_name() {
        let config = ExtractorConfig::from_lookup(lookup(&[(SPLITTER_ENV, " Whitespace ")])).unwrap();
        assert_eq!(config.splitter, SplitterKind::Whitespace);
    }

    #[test]
    fn rejects_unknown_splitter() {
        let result = ExtractorConfig::from_lookup(lookup(&[(SPLITTER_ENV, "thai")]));
        assert!(matches!(result, Err(Error::UnknownSplitter(ref name)) if name == "thai"));
    }

    #[test]
    fn pattern_splitter_needs_pattern() {
        let config = ExtractorConfig {
            splitter: SplitterKind::Pattern,
            pattern: None,
        };
        assert!(matches!(config.build_splitter(), Err(Error::MissingPattern)));
    }

    #[test]
    fn builds_pattern_splitter() {
        let config = ExtractorConfig::from_lookup(lookup(&[
            (SPLITTER_ENV, "pattern"),
            (PATTERN_ENV, r"\w{1,2}"),
        ]))
        .unwrap();
        let splitter = config.build_splitter().unwrap();
        assert_eq!(splitter.split_word("abcde"), vec!["ab", "cd", "e"]);
    }

    #[test]
    fn builds_named_splitters() {
        let whitespace = ExtractorConfig {
            splitter: SplitterKind::Whitespace,
            pattern: None,
        };
        let splitter = whitespace.build_splitter().unwrap();
        assert_eq!(splitter.split_word("two words"), vec!["two", "words"]);

        let splitter = ExtractorConfig::default().build_splitter().unwrap();
        assert_eq!(splitter.split_word("碑文"), vec!["碑", "文"]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let config = ExtractorConfig {
            splitter: SplitterKind::Pattern,
            pattern: Some("(".to_string()),
        };
        assert!(matches!(config.build_splitter(), Err(Error::InvalidPattern { .. })));
    }

    #[test]
    fn splitter_kind_round_trips_names() {
        for kind in [SplitterKind::Japanese, SplitterKind::Whitespace, SplitterKind::Pattern] {
            assert_eq!(SplitterKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn deserializes_snake_case() {
        let config: ExtractorConfig = serde_json::from_str(r#"{"splitter":"whitespace"}"#).unwrap();
        assert_eq!(config.splitter, SplitterKind::Whitespace);
        assert_eq!(config.pattern, None);
    }
}
