use incident_qa::quality::{
    LinguisticResources, Normalizer, QualityScorer, ScoreLevel, ScoreThresholds, VaguePhraseSet,
    VaguenessClassifier, DEFAULT_MIN_WORDS, DEFAULT_VAGUE_PHRASES,
};
use std::sync::Arc;

fn normalizer() -> Normalizer {
    let resources = LinguisticResources::bundled().expect("bundled resources load");
    Normalizer::new(Arc::new(resources))
}

fn phrases() -> Arc<VaguePhraseSet> {
    Arc::new(VaguePhraseSet::default())
}

fn scorer() -> QualityScorer {
    QualityScorer::new(phrases(), ScoreThresholds::default())
}

fn classifier() -> VaguenessClassifier {
    VaguenessClassifier::new(phrases(), DEFAULT_MIN_WORDS)
}

#[test]
fn absent_inputs_have_fixed_results() {
    assert_eq!(normalizer().normalize(None), "");
    assert_eq!(scorer().score(None), ScoreLevel::Empty);
    assert_eq!(scorer().score(Some("")), ScoreLevel::Empty);
    assert!(classifier().is_vague(""));
}

#[test]
fn short_raw_text_is_vague_and_short_cleaned_text_scores_one() {
    let raw = "Seal replaced on Monday";
    assert!(classifier().is_vague(&raw.to_lowercase()));
    let cleaned = normalizer().normalize(Some(raw));
    assert_eq!(cleaned, "seal replace monday");
    assert_eq!(scorer().score(Some(&cleaned)), ScoreLevel::TooShort);
}

#[test]
fn normalizing_twice_changes_nothing() {
    let normalizer = normalizer();
    let samples = [
        "Operators didn't follow SOP #4; valves were left open!",
        "Root cause: NOT KNOWN (investigation pending)",
        "Children's ward -- 2 patients affected by mislabelled batches",
        "Retrained 12 technicians & updated 3 work instructions",
        "",
    ];
    for sample in samples {
        let once = normalizer.normalize(Some(sample));
        assert_eq!(normalizer.normalize(Some(&once)), once, "{sample}");
    }
}

#[test]
fn any_contained_phrase_marks_long_text_vague_and_scores_two() {
    let classifier = classifier();
    let scorer = scorer();
    let filler = "shift lead reviewed the line afterwards with";
    for phrase in DEFAULT_VAGUE_PHRASES {
        let text = format!("{filler} {phrase}x team");
        assert!(classifier.is_vague(&text), "{text}");
        assert_eq!(scorer.score(Some(&text)), ScoreLevel::VaguePhrase, "{text}");
    }
}

#[test]
fn vague_phrase_check_precedes_length_check() {
    let text = "human error caused the failure during the overnight shift change process";
    assert_eq!(scorer().score(Some(text)), ScoreLevel::VaguePhrase);
}

#[test]
fn word_count_boundaries_follow_the_score_table() {
    let scorer = scorer();
    assert_eq!(scorer.score(Some("one two three four")), ScoreLevel::TooShort);
    assert_eq!(scorer.score(Some("one two three four five")), ScoreLevel::Adequate);
    assert_eq!(
        scorer.score(Some("one two three four five six seven eight nine ten")),
        ScoreLevel::Detailed
    );
}

#[test]
fn short_na_is_vague() {
    assert!(classifier().is_vague("na"));
}

#[test]
fn vague_flag_and_score_can_disagree_after_normalization() {
    let raw = "Root cause is not known yet by the team";
    assert!(classifier().is_vague(&raw.to_lowercase()));

    let cleaned = normalizer().normalize(Some(raw));
    assert_eq!(cleaned, "root cause know yet team");
    assert_eq!(scorer().score(Some(&cleaned)), ScoreLevel::Adequate);
}
