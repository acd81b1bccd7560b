//! Cloze term extraction.
//!
//! Finds terms in a document written with markdown-style references and
//! out-of-band definitions, and works out the pieces ("splits") each term
//! should be clozed on.
//!
//! ```markdown
//! 「[マヘンドラパルバタ][b]」の遺跡を見つけた。
//!
//! [b]: /
//! マヘンドラパルバタ
//! ```
//!
//! Provides:
//! - Paragraph classification (definitions vs. prose)
//! - Inline reference scanning
//! - Term resolution with manual splits
//! - Pluggable word splitters (Japanese, whitespace, regex, plain functions)

pub mod config;
pub mod error;
pub mod extractor;
pub mod paragraph;
pub mod reference;
pub mod resolver;
pub mod splitter;
pub mod types;

pub use config::{ExtractorConfig, SplitterKind};
pub use error::{Error, Result};
pub use extractor::{extract_terms, Extraction, Extractor};
pub use splitter::{
    get_splitter, JapaneseSplitter, PatternSplitter, SplitterFn, WhitespaceSplitter, WordSplitter,
};
pub use types::{DefinitionRecord, ReferenceMap, Term};
