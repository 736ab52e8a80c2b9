use super::resources::LinguisticResources;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit pattern compiles"));
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("non-word pattern compiles"));

/// True when `token` could appear in normalized output: non-empty, word
/// characters only, no digits.
pub(crate) fn is_clean_token(token: &str) -> bool {
    !token.is_empty()
        && !token.chars().any(char::is_whitespace)
        && !DIGITS.is_match(token)
        && !NON_WORD.is_match(token)
}

/// Cleans free text: lowercase, strip digits and punctuation, drop
/// stopwords, lemmatize, and rejoin with single spaces.
#[derive(Debug, Clone)]
pub struct Normalizer {
    resources: Arc<LinguisticResources>,
}

impl Normalizer {
    pub fn new(resources: Arc<LinguisticResources>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &Arc<LinguisticResources> {
        &self.resources
    }

    /// Absent input normalizes to the empty string.
    pub fn normalize(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };

        let lowered = text.to_lowercase();
        let without_digits = DIGITS.replace_all(&lowered, "");
        let stripped = NON_WORD.replace_all(&without_digits, "");

        let stopwords = self.resources.stopwords();
        let lemmas = self.resources.lemmas();

        stripped
            .split_whitespace()
            .filter(|token| !stopwords.contains(token))
            .map(|token| lemmas.lemmatize(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
