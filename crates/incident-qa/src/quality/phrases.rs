use super::resources::ResourceError;
use std::path::Path;

/// Boilerplate non-answers that mark a field as vague. The trailing space on
/// "informed concerned " is significant.
pub const DEFAULT_VAGUE_PHRASES: [&str; 9] = [
    "human error",
    "not known",
    "unaware",
    "unable to identify",
    "informed concerned ",
    "na",
    "n/a",
    "not available",
    "lack of communication",
];

/// Immutable list of vague phrases matched by plain substring containment.
///
/// Containment is not word-boundary aware: "na" matches inside "dna" or
/// "maintenance". Callers relying on that must keep it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaguePhraseSet {
    phrases: Vec<String>,
}

impl Default for VaguePhraseSet {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_VAGUE_PHRASES
                .iter()
                .map(|phrase| phrase.to_string())
                .collect(),
        }
    }
}

impl VaguePhraseSet {
    /// Builds a set from custom phrases. Phrases are lowercased; blank
    /// phrases are rejected because they would match every text.
    pub fn new<I, S>(phrases: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collected = Vec::new();
        for (index, phrase) in phrases.into_iter().enumerate() {
            let phrase = phrase.as_ref();
            if phrase.trim().is_empty() {
                return Err(ResourceError::EmptyPhrase { line: index + 1 });
            }
            collected.push(phrase.to_lowercase());
        }

        Ok(Self { phrases: collected })
    }

    /// Parses one phrase per line. Only the line terminator is removed so
    /// significant trailing spaces survive.
    pub fn from_lines(contents: &str) -> Result<Self, ResourceError> {
        Self::new(contents.lines().map(|line| line.trim_end_matches('\r')))
    }

    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_lines(&contents)
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// First configured phrase contained in `text`, in configuration order.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.phrases
            .iter()
            .find(|phrase| text.contains(phrase.as_str()))
            .map(String::as_str)
    }
}
