use crate::infra::bootstrap;
use clap::Args;
use incident_qa::error::AppError;
use incident_qa::quality::FieldAssessment;
use incident_qa::workflows::incidents::{
    analyze, IncidentAnalysis, IncidentImporter, DEFAULT_EXPORT_FILE_NAME,
};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Incident CSV files; only files named like "January 2025.csv" are used
    #[arg(required = true)]
    pub(crate) inputs: Vec<PathBuf>,
    /// Where to write the scored export
    #[arg(long, default_value = DEFAULT_EXPORT_FILE_NAME)]
    pub(crate) output: PathBuf,
    /// Number of rows to preview (defaults to APP_PREVIEW_ROWS)
    #[arg(long)]
    pub(crate) preview: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Text to assess; omit to assess an absent value
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Word count below which the text is flagged as vague
    #[arg(long)]
    pub(crate) min_words: Option<usize>,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        inputs,
        output,
        preview,
    } = args;

    let (config, engine) = bootstrap()?;
    let import = IncidentImporter::from_paths(&inputs)?;
    let analysis = analyze(import, &engine);

    analysis.write_csv_file(&output)?;
    info!(path = %output.display(), rows = analysis.len(), "incident export written");

    render_analysis(
        &analysis,
        preview.unwrap_or(config.analysis.preview_rows),
        &output,
    );
    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let (_, engine) = bootstrap()?;
    let min_words = args
        .min_words
        .unwrap_or_else(|| engine.classifier().min_words());
    let assessment = engine.assess_with_min_words(args.text.as_deref(), min_words);

    render_assessment(&assessment);
    Ok(())
}

fn render_analysis(analysis: &IncidentAnalysis, preview_rows: usize, output: &Path) {
    println!("Incident quality analysis");
    println!("Sheets analyzed: {}", analysis.sheets_used.join(", "));
    if !analysis.sheets_skipped.is_empty() {
        println!("Sheets skipped: {}", analysis.sheets_skipped.join(", "));
    }
    println!("Rows analyzed: {}", analysis.len());

    let summary = analysis.summary();
    println!("\nRows per month");
    for period in &summary.periods {
        println!("- {}: {}", period.label, period.rows);
    }

    println!("\nField summary");
    for field in &summary.fields {
        let distribution = field
            .score_counts
            .iter()
            .map(|entry| format!("{}={}", entry.score, entry.count))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "- {} ({}): {} vague of {}, mean score {:.2}, scores {}",
            field.label, field.column, field.vague, field.rows, field.mean_score, distribution
        );
    }

    let preview = analysis.preview(preview_rows);
    if !preview.is_empty() {
        println!("\nPreview (first {} rows)", preview.len());
        for row in preview {
            let fields = row
                .fields
                .iter()
                .map(|field| {
                    format!(
                        "{} score {}{} \"{}\"",
                        field.column,
                        field.score,
                        if field.vague { " vague" } else { "" },
                        field.cleaned
                    )
                })
                .collect::<Vec<_>>()
                .join(" | ");
            println!("- {} #{}: {}", row.month, row.row_number, fields);
        }
    }

    println!("\nExport written to {}", output.display());
}

fn render_assessment(assessment: &FieldAssessment) {
    println!("Cleaned: {}", assessment.cleaned);
    println!("Vague: {}", assessment.vague);
    println!(
        "Score: {} ({})",
        assessment.score,
        assessment.score.label()
    );
}
