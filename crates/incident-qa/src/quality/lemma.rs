use super::normalizer::is_clean_token;
use super::resources::{ResourceError, StopwordSet};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Suffix detachment rules tried in order: noun, verb, then adjective.
const DETACHMENT_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
    ("er", ""),
    ("est", ""),
    ("er", "e"),
    ("est", "e"),
];

/// Word to base form mapping backed by a lexicon of known base forms and
/// irregular inflections.
///
/// The result of [`LemmaDictionary::lemmatize`] is always either a known
/// base form or the input unchanged, so lemmatizing twice is a no-op.
#[derive(Debug, Clone, Default)]
pub struct LemmaDictionary {
    bases: HashSet<String>,
    irregular: HashMap<String, String>,
}

impl LemmaDictionary {
    /// Parses a lexicon. Every entry must be a clean lowercase token and no
    /// base form may be a stopword.
    pub fn parse(
        source_name: &str,
        contents: &str,
        stopwords: &StopwordSet,
    ) -> Result<Self, ResourceError> {
        let mut dictionary = Self::default();

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let invalid = |detail: String| ResourceError::InvalidEntry {
                source_name: source_name.to_string(),
                line: index + 1,
                detail,
            };

            let fields: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
            for field in &fields {
                if !is_clean_token(field) {
                    return Err(invalid(format!(
                        "'{field}' contains digits, punctuation or symbols"
                    )));
                }
            }

            let base = match fields.as_slice() {
                [base] => base.clone(),
                [inflected, base] => {
                    dictionary.irregular.insert(inflected.clone(), base.clone());
                    base.clone()
                }
                _ => {
                    return Err(invalid(format!(
                        "expected one or two words, found {}",
                        fields.len()
                    )))
                }
            };

            if stopwords.contains(&base) {
                return Err(invalid(format!("base form '{base}' is a stopword")));
            }
            dictionary.bases.insert(base);
        }

        debug!(
            source = source_name,
            bases = dictionary.bases.len(),
            irregular = dictionary.irregular.len(),
            "lemma lexicon parsed"
        );

        Ok(dictionary)
    }

    pub fn lemmatize<'a>(&'a self, word: &'a str) -> &'a str {
        if self.bases.contains(word) {
            return word;
        }

        if let Some(base) = self.irregular.get(word) {
            return base;
        }

        for (suffix, replacement) in DETACHMENT_RULES {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{stem}{replacement}");
            if let Some(base) = self.bases.get(candidate.as_str()) {
                return base;
            }
        }

        word
    }

    pub fn is_base(&self, word: &str) -> bool {
        self.bases.contains(word)
    }

    /// Number of known base forms.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::resources::LinguisticResources;

    fn bundled() -> LinguisticResources {
        LinguisticResources::bundled().expect("bundled resources load")
    }

    #[test]
    fn detaches_regular_suffixes() {
        let resources = bundled();
        let lemmas = resources.lemmas();
        assert_eq!(lemmas.lemmatize("failed"), "fail");
        assert_eq!(lemmas.lemmatize("times"), "time");
        assert_eq!(lemmas.lemmatize("processes"), "process");
        assert_eq!(lemmas.lemmatize("caused"), "cause");
        assert_eq!(lemmas.lemmatize("leaking"), "leak");
        assert_eq!(lemmas.lemmatize("batches"), "batch");
        assert_eq!(lemmas.lemmatize("supervisors"), "supervisor");
    }

    #[test]
    fn resolves_irregular_forms() {
        let resources = bundled();
        let lemmas = resources.lemmas();
        assert_eq!(lemmas.lemmatize("children"), "child");
        assert_eq!(lemmas.lemmatize("broken"), "break");
        assert_eq!(lemmas.lemmatize("stopped"), "stop");
        assert_eq!(lemmas.lemmatize("analyses"), "analysis");
    }

    #[test]
    fn base_forms_and_unknown_words_are_fixed_points() {
        let resources = bundled();
        let lemmas = resources.lemmas();
        for word in ["process", "analysis", "fail", "gizmos", "thermocouple"] {
            let once = lemmas.lemmatize(word);
            assert_eq!(lemmas.lemmatize(once), once, "{word}");
        }
        assert_eq!(lemmas.lemmatize("gizmos"), "gizmos");
    }

    #[test]
    fn rejects_stopword_base_forms() {
        let stopwords = StopwordSet::parse("was\nbe\n");
        let err = LemmaDictionary::parse("custom", "pump\nwas\tbe\n", &stopwords)
            .expect_err("stopword lemma rejected");
        match err {
            ResourceError::InvalidEntry { line, detail, .. } => {
                assert_eq!(line, 2);
                assert!(detail.contains("'be'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_entries_with_digits_or_punctuation() {
        let stopwords = StopwordSet::default();
        assert!(LemmaDictionary::parse("custom", "co2", &stopwords).is_err());
        assert!(LemmaDictionary::parse("custom", "can't\tcan", &stopwords).is_err());
        assert!(LemmaDictionary::parse("custom", "a b c", &stopwords).is_err());
    }

    #[test]
    fn lowercases_entries() {
        let stopwords = StopwordSet::default();
        let lemmas =
            LemmaDictionary::parse("custom", "Valve\nValves\tvalve", &stopwords).expect("parses");
        assert!(lemmas.is_base("valve"));
        assert_eq!(lemmas.lemmatize("valves"), "valve");
    }
}
