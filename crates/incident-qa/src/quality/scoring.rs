use super::phrases::VaguePhraseSet;
use super::word_count;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Ordinal quality of a cleaned text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ScoreLevel {
    Empty,
    TooShort,
    VaguePhrase,
    Adequate,
    Detailed,
}

impl ScoreLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Empty,
            Self::TooShort,
            Self::VaguePhrase,
            Self::Adequate,
            Self::Detailed,
        ]
    }

    pub const fn value(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::TooShort => 1,
            Self::VaguePhrase => 2,
            Self::Adequate => 3,
            Self::Detailed => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::TooShort => "Too Short",
            Self::VaguePhrase => "Vague Phrase",
            Self::Adequate => "Adequate",
            Self::Detailed => "Detailed",
        }
    }
}

impl From<ScoreLevel> for u8 {
    fn from(level: ScoreLevel) -> Self {
        level.value()
    }
}

impl TryFrom<u8> for ScoreLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ordered()
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or_else(|| format!("score level must be between 0 and 4, got {value}"))
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Word-count cut-offs for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreThresholds {
    /// Texts with fewer words score [`ScoreLevel::TooShort`].
    pub short_below: usize,
    /// Phrase-free texts with at least this many words score
    /// [`ScoreLevel::Detailed`].
    pub detailed_from: usize,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            short_below: 5,
            detailed_from: 10,
        }
    }
}

/// Scores normalized text. First matching rule wins:
///
/// | condition | level |
/// |---|---|
/// | absent or blank | 0 |
/// | fewer than `short_below` words | 1 |
/// | contains a vague phrase | 2 |
/// | at least `detailed_from` words | 4 |
/// | otherwise | 3 |
#[derive(Debug, Clone)]
pub struct QualityScorer {
    phrases: Arc<VaguePhraseSet>,
    thresholds: ScoreThresholds,
}

impl QualityScorer {
    pub fn new(phrases: Arc<VaguePhraseSet>, thresholds: ScoreThresholds) -> Self {
        Self {
            phrases,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> ScoreThresholds {
        self.thresholds
    }

    pub fn score(&self, text: Option<&str>) -> ScoreLevel {
        let Some(text) = text.filter(|value| !value.trim().is_empty()) else {
            return ScoreLevel::Empty;
        };

        let words = word_count(text);
        if words < self.thresholds.short_below {
            ScoreLevel::TooShort
        } else if self.phrases.matches(text) {
            ScoreLevel::VaguePhrase
        } else if words >= self.thresholds.detailed_from {
            ScoreLevel::Detailed
        } else {
            ScoreLevel::Adequate
        }
    }
}
