//! Text normalization and quality scoring for incident report fields.

mod lemma;
mod normalizer;
mod phrases;
pub mod resources;
mod scoring;
mod vagueness;

pub use lemma::LemmaDictionary;
pub use normalizer::Normalizer;
pub use phrases::{VaguePhraseSet, DEFAULT_VAGUE_PHRASES};
pub use resources::{LinguisticResources, ResourceError, StopwordSet};
pub use scoring::{QualityScorer, ScoreLevel, ScoreThresholds};
pub use vagueness::{VaguenessClassifier, DEFAULT_MIN_WORDS};

use crate::config::AnalysisConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::trace;

/// Whitespace-delimited token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Result of running one raw field through the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAssessment {
    pub cleaned: String,
    pub vague: bool,
    pub score: ScoreLevel,
}

/// Stateless composition of normalizer, vagueness classifier and scorer.
///
/// The classifier sees the lowercased raw value; the scorer sees the
/// normalized value. Both share one phrase set.
#[derive(Debug, Clone)]
pub struct QualityEngine {
    normalizer: Normalizer,
    classifier: VaguenessClassifier,
    scorer: QualityScorer,
}

impl QualityEngine {
    pub fn new(
        resources: Arc<LinguisticResources>,
        phrases: Arc<VaguePhraseSet>,
        config: &AnalysisConfig,
    ) -> Self {
        let thresholds = ScoreThresholds {
            short_below: config.short_text_words,
            detailed_from: config.detailed_text_words,
        };

        Self {
            normalizer: Normalizer::new(resources),
            classifier: VaguenessClassifier::new(phrases.clone(), config.vague_min_words),
            scorer: QualityScorer::new(phrases, thresholds),
        }
    }

    /// Initializes the shared linguistic resources (once per process) and
    /// loads the configured phrase set.
    pub fn bootstrap(config: &AnalysisConfig) -> Result<Self, ResourceError> {
        let resources = resources::initialize(&config.resources)?;
        let phrases = match &config.resources.vague_phrases_path {
            Some(path) => VaguePhraseSet::load(path)?,
            None => VaguePhraseSet::default(),
        };

        Ok(Self::new(resources, Arc::new(phrases), config))
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn classifier(&self) -> &VaguenessClassifier {
        &self.classifier
    }

    pub fn scorer(&self) -> &QualityScorer {
        &self.scorer
    }

    pub fn assess(&self, raw: Option<&str>) -> FieldAssessment {
        self.assess_with_min_words(raw, self.classifier.min_words())
    }

    pub fn assess_with_min_words(&self, raw: Option<&str>, min_words: usize) -> FieldAssessment {
        let cleaned = self.normalizer.normalize(raw);
        let lowered = raw.unwrap_or_default().to_lowercase();
        let vague = self.classifier.is_vague_with(&lowered, min_words);
        let score = self.scorer.score(Some(&cleaned));

        trace!(%cleaned, vague, score = score.value(), "field assessed");

        FieldAssessment {
            cleaned,
            vague,
            score,
        }
    }
}
