//! Word splitters used to fill in cloze pieces that were not declared by hand.

pub mod japanese;
pub mod pattern;
pub mod whitespace;

pub use japanese::JapaneseSplitter;
pub use pattern::PatternSplitter;
pub use whitespace::WhitespaceSplitter;

/// Trait for segmenting a fragment of a term into cloze pieces.
///
/// Pieces are expected to be substrings of `word`, but this is not checked:
/// whatever a splitter returns (apart from empty strings) becomes a split.
///
/// Any `Fn(&str) -> Vec<String>` is a splitter, so a plain function can be
/// passed wherever one is expected.
pub trait WordSplitter: Send + Sync {
    /// Split `word` into pieces. Order and overlap are up to the implementation.
    fn split_word(&self, word: &str) -> Vec<String>;
}

impl<F> WordSplitter for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn split_word(&self, word: &str) -> Vec<String> {
        self(word)
    }
}

/// Named wrapper around a splitting function.
#[derive(Clone, Copy)]
pub struct SplitterFn<F>(pub F);

impl<F> WordSplitter for SplitterFn<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn split_word(&self, word: &str) -> Vec<String> {
        (self.0)(word)
    }
}

impl<F> std::fmt::Debug for SplitterFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SplitterFn")
    }
}

/// Get a built-in splitter by name.
pub fn get_splitter(name: &str) -> Option<Box<dyn WordSplitter>> {
    match name {
        "japanese" => Some(Box::new(JapaneseSplitter)),
        "whitespace" => Some(Box::new(WhitespaceSplitter)),
        _ => None,
    }
}
