use super::phrases::VaguePhraseSet;
use super::word_count;
use std::sync::Arc;

pub const DEFAULT_MIN_WORDS: usize = 5;

/// Flags near-raw text that is too short or leans on a boilerplate phrase.
///
/// Input is expected lowercased but otherwise untouched, so multi-word
/// phrases such as "not known" keep their stopwords.
#[derive(Debug, Clone)]
pub struct VaguenessClassifier {
    phrases: Arc<VaguePhraseSet>,
    min_words: usize,
}

impl VaguenessClassifier {
    pub fn new(phrases: Arc<VaguePhraseSet>, min_words: usize) -> Self {
        Self { phrases, min_words }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    pub fn is_vague(&self, text: &str) -> bool {
        self.is_vague_with(text, self.min_words)
    }

    /// Same as [`Self::is_vague`] with a per-call word threshold.
    pub fn is_vague_with(&self, text: &str, min_words: usize) -> bool {
        if word_count(text) < min_words {
            return true;
        }
        self.phrases.matches(text)
    }
}
