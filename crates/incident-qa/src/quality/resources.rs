//! Process-wide linguistic resources: the stopword list and the lemma
//! lexicon. Both are read-only once loaded.

use super::lemma::LemmaDictionary;
use crate::config::ResourceConfig;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use stop_words::{get, LANGUAGE};
use tracing::{debug, info};

const BUNDLED_LEXICON: &str = include_str!("../../resources/lexicon_en.txt");

static SHARED: OnceCell<Arc<LinguisticResources>> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{source_name} line {line}: {detail}")]
    InvalidEntry {
        source_name: String,
        line: usize,
        detail: String,
    },
    #[error("vague phrase on line {line} is blank")]
    EmptyPhrase { line: usize },
}

/// Words dropped during normalization.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The NLTK English list shipped with the `stop-words` crate.
    pub fn bundled() -> Self {
        Self::from_words(get(LANGUAGE::English).iter().map(|word| word.to_string()))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// One entry per line; blank lines and `#` comments are skipped.
    pub fn parse(contents: &str) -> Self {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn from_path(path: &Path) -> Result<Self, ResourceError> {
        Ok(Self::parse(&read_resource(path)?))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Stopwords plus lemma lexicon, shared behind an `Arc`.
#[derive(Debug)]
pub struct LinguisticResources {
    stopwords: StopwordSet,
    lemmas: LemmaDictionary,
}

impl LinguisticResources {
    pub fn new(stopwords: StopwordSet, lemmas: LemmaDictionary) -> Self {
        Self { stopwords, lemmas }
    }

    /// Loads the bundled English resources.
    pub fn bundled() -> Result<Self, ResourceError> {
        Self::load(&ResourceConfig::default())
    }

    /// Loads resources honoring path overrides. Does not touch the shared
    /// handle; see [`initialize`].
    pub fn load(config: &ResourceConfig) -> Result<Self, ResourceError> {
        let stopwords = match &config.stopwords_path {
            Some(path) => StopwordSet::from_path(path)?,
            None => StopwordSet::bundled(),
        };

        let lemmas = match &config.lexicon_path {
            Some(path) => {
                let contents = read_resource(path)?;
                LemmaDictionary::parse(&path.display().to_string(), &contents, &stopwords)?
            }
            None => LemmaDictionary::parse("bundled lexicon", BUNDLED_LEXICON, &stopwords)?,
        };

        Ok(Self::new(stopwords, lemmas))
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn lemmas(&self) -> &LemmaDictionary {
        &self.lemmas
    }
}

/// Loads the process-wide resources on first call and hands out the same
/// handle afterwards. Later calls ignore `config`.
pub fn initialize(config: &ResourceConfig) -> Result<Arc<LinguisticResources>, ResourceError> {
    if let Some(existing) = SHARED.get() {
        debug!("linguistic resources already initialized");
        return Ok(existing.clone());
    }

    SHARED
        .get_or_try_init(|| -> Result<Arc<LinguisticResources>, ResourceError> {
            let resources = LinguisticResources::load(config)?;
            info!(
                stopwords = resources.stopwords.len(),
                lemmas = resources.lemmas.len(),
                "linguistic resources loaded"
            );
            Ok(Arc::new(resources))
        })
        .cloned()
}

/// The shared handle, if [`initialize`] has completed.
pub fn shared() -> Option<Arc<LinguisticResources>> {
    SHARED.get().cloned()
}

fn read_resource(path: &Path) -> Result<String, ResourceError> {
    std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
