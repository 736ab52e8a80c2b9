use incident_qa::config::AnalysisConfig;
use incident_qa::quality::{LinguisticResources, QualityEngine, ScoreLevel, VaguePhraseSet};
use incident_qa::workflows::incidents::{
    analyze, IncidentField, IncidentImportError, IncidentImporter,
};
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;

fn engine() -> QualityEngine {
    let resources = LinguisticResources::bundled().expect("bundled resources load");
    QualityEngine::new(
        Arc::new(resources),
        Arc::new(VaguePhraseSet::default()),
        &AnalysisConfig::default(),
    )
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_paths() -> Vec<PathBuf> {
    vec![
        fixture("Summary.csv"),
        fixture("January 2025.csv"),
        fixture("February 2025.csv"),
    ]
}

#[test]
fn importer_uses_only_monthly_files() {
    let import = IncidentImporter::from_paths(&fixture_paths()).expect("import succeeds");

    assert_eq!(import.sheets_used, vec!["January 2025", "February 2025"]);
    assert_eq!(import.sheets_skipped, vec!["Summary"]);
    assert_eq!(import.records.len(), 4);
    assert_eq!(
        import.headers,
        vec!["Incident ID", "Area", "RCA", "CA", "PA", "Month", "Owner"]
    );
}

#[test]
fn analysis_scores_each_field_independently() {
    let import = IncidentImporter::from_paths(&fixture_paths()).expect("import succeeds");
    let analysis = analyze(import, &engine());

    let first = &analysis.rows[0];
    assert!(first.root_cause.vague);
    assert_eq!(first.root_cause.cleaned, "human error");
    assert_eq!(first.root_cause.score, ScoreLevel::TooShort);
    assert_eq!(first.preventive_action.cleaned, "na");

    let detailed = &analysis.rows[1];
    assert!(!detailed.root_cause.vague);
    assert_eq!(
        detailed.root_cause.cleaned,
        "pump seal fail hour bearing housing crack"
    );
    assert_eq!(detailed.root_cause.score, ScoreLevel::Adequate);
    assert_eq!(detailed.corrective_action.score, ScoreLevel::Adequate);
    assert_eq!(detailed.preventive_action.score, ScoreLevel::Adequate);

    let blank = &analysis.rows[2];
    for field in IncidentField::ordered() {
        let assessment = blank.assessment(field);
        assert_eq!(assessment.cleaned, "");
        assert!(assessment.vague);
        assert_eq!(assessment.score, ScoreLevel::Empty);
    }

    let february = &analysis.rows[3];
    assert_eq!(february.record.month(), "February 2025");
    assert!(february.root_cause.vague, "raw text keeps 'not known'");
    assert_eq!(february.root_cause.cleaned, "root cause know time");
    assert_eq!(february.root_cause.score, ScoreLevel::TooShort);
    assert!(february.corrective_action.vague);
    assert_eq!(
        february.corrective_action.cleaned,
        "supervisor inform concern staff issue"
    );
    assert_eq!(february.corrective_action.score, ScoreLevel::Adequate);
}

#[test]
fn imported_cells_assess_like_the_raw_text() {
    let cell = "Supervisor and all staff were informed concerned ";
    let csv = format!("ID,RCA,CA,PA\n1,Seal worn,{cell},\n");
    let import = IncidentImporter::from_sheets(vec![("March 2025", csv.as_bytes())])
        .expect("import succeeds");
    assert_eq!(
        import.records[0].field(IncidentField::CorrectiveAction),
        Some(cell)
    );

    let engine = engine();
    let analysis = analyze(import, &engine);
    let corrective = &analysis.rows[0].corrective_action;
    assert!(corrective.vague);
    assert_eq!(corrective, &engine.assess(Some(cell)));
}

#[test]
fn summary_orders_periods_chronologically() {
    let sheets = vec![
        ("March 2025", "RCA,CA,PA\na,b,c\nd,e,f\n"),
        ("December 2024", "RCA,CA,PA\ng,h,i\n"),
    ];
    let import = IncidentImporter::from_sheets(
        sheets
            .into_iter()
            .map(|(name, csv)| (name, csv.as_bytes())),
    )
    .expect("import succeeds");
    let summary = analyze(import, &engine()).summary();

    assert_eq!(summary.periods.len(), 2);
    assert_eq!(summary.periods[0].label, "December 2024");
    assert_eq!(
        summary.periods[0].starts_on,
        NaiveDate::from_ymd_opt(2024, 12, 1)
    );
    assert_eq!(summary.periods[1].label, "March 2025");
    assert_eq!(summary.periods[1].rows, 2);
}

#[test]
fn summary_counts_scores_per_field() {
    let import = IncidentImporter::from_paths(&fixture_paths()).expect("import succeeds");
    let analysis = analyze(import, &engine());
    let summary = analysis.summary();

    assert_eq!(summary.rows, 4);
    let periods: Vec<(&str, usize)> = summary
        .periods
        .iter()
        .map(|period| (period.label.as_str(), period.rows))
        .collect();
    assert_eq!(periods, vec![("January 2025", 3), ("February 2025", 1)]);
    let rca = summary
        .field(IncidentField::RootCause)
        .expect("rca summary present");
    assert_eq!(rca.rows, 4);
    assert_eq!(rca.vague, 3);
    assert_eq!(rca.count_for(ScoreLevel::Empty), 1);
    assert_eq!(rca.count_for(ScoreLevel::TooShort), 2);
    assert_eq!(rca.count_for(ScoreLevel::Adequate), 1);
    assert!((rca.mean_score - 1.25).abs() < f64::EPSILON);

    let preview = analysis.preview(2);
    assert_eq!(preview.len(), 2);
    assert_eq!(preview[0].fields[0].raw.as_deref(), Some("Human error"));
}

#[test]
fn export_appends_clean_vague_and_score_columns() {
    let import = IncidentImporter::from_paths(&fixture_paths()).expect("import succeeds");
    let analysis = analyze(import, &engine());
    let csv = analysis.to_csv_string().expect("export renders");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "Incident ID,Area,RCA,CA,PA,Month,Owner,RCA_clean,CA_clean,PA_clean,RCA_vague,CA_vague,PA_vague,RCA_score,CA_score,PA_score"
    );
    assert_eq!(
        lines[3],
        "INC-003,Warehouse,,,,January 2025,,,,,True,True,True,0,0,0"
    );
    assert!(lines[4].starts_with("INC-004,,Root cause not known at this time,"));
    assert!(lines[4].ends_with(",True,True,True,1,3,1"));
}

#[test]
fn export_can_be_written_to_disk() {
    let import = IncidentImporter::from_paths(&fixture_paths()).expect("import succeeds");
    let analysis = analyze(import, &engine());
    let target = std::env::temp_dir().join(format!(
        "incident-qa-export-{}.csv",
        std::process::id()
    ));

    analysis.write_csv_file(&target).expect("export written");
    let written = std::fs::read_to_string(&target).expect("export readable");
    std::fs::remove_file(&target).ok();

    assert_eq!(written, analysis.to_csv_string().expect("export renders"));
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = IncidentImporter::from_paths(&[fixture("March 2025.csv")])
        .expect_err("file does not exist");
    assert!(matches!(err, IncidentImportError::Io { .. }));
}
