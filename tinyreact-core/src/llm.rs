use serde::{Deserialize, Serialize};

use crate::Runnable;

/// A fully rendered prompt plus the sequences that must end generation.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            stop: Vec::new(),
        }
    }

    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = stop;
        self
    }

    /// Cuts `text` at the earliest stop sequence, if any occurs.
    pub fn truncate_at_stop<'a>(&self, text: &'a str) -> &'a str {
        self.stop
            .iter()
            .filter(|seq| !seq.is_empty())
            .filter_map(|seq| text.find(seq.as_str()))
            .min()
            .map_or(text, |idx| &text[..idx])
    }
}

/// Text in, text out. Model clients and test stubs implement this through
/// [`Runnable`].
pub trait LanguageModel: Runnable<CompletionRequest, String> + Send + Sync {}

impl<T> LanguageModel for T where T: Runnable<CompletionRequest, String> + Send + Sync {}
