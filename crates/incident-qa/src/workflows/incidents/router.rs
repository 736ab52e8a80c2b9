use std::io::Cursor;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::analysis::analyze;
use super::views::{AnalysisSummary, IncidentPreviewRow};
use super::IncidentImporter;
use crate::error::AppError;
use crate::quality::{QualityEngine, ScoreLevel};

#[derive(Clone)]
pub(crate) struct IncidentRouterState {
    engine: Arc<QualityEngine>,
    preview_rows: usize,
}

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub min_words: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssessResponse {
    pub cleaned: String,
    pub vague: bool,
    pub score: ScoreLevel,
    pub score_label: String,
}

#[derive(Debug, Deserialize)]
pub struct SheetPayload {
    pub name: String,
    pub csv: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub sheets: Vec<SheetPayload>,
    #[serde(default)]
    pub preview_rows: Option<usize>,
    #[serde(default)]
    pub include_export: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub rows_analyzed: usize,
    pub sheets_used: Vec<String>,
    pub sheets_skipped: Vec<String>,
    pub summary: AnalysisSummary,
    pub preview: Vec<IncidentPreviewRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_csv: Option<String>,
}

/// Router builder exposing text assessment and sheet analysis endpoints.
pub fn incident_router(engine: Arc<QualityEngine>, preview_rows: usize) -> Router {
    Router::new()
        .route("/api/v1/quality/assess", post(assess_handler))
        .route("/api/v1/incidents/analyze", post(analyze_handler))
        .with_state(IncidentRouterState {
            engine,
            preview_rows,
        })
}

pub(crate) async fn assess_handler(
    State(state): State<IncidentRouterState>,
    Json(request): Json<AssessRequest>,
) -> Json<AssessResponse> {
    let min_words = request
        .min_words
        .unwrap_or_else(|| state.engine.classifier().min_words());
    let assessment = state
        .engine
        .assess_with_min_words(request.text.as_deref(), min_words);

    Json(AssessResponse {
        cleaned: assessment.cleaned,
        vague: assessment.vague,
        score: assessment.score,
        score_label: assessment.score.label().to_string(),
    })
}

pub(crate) async fn analyze_handler(
    State(state): State<IncidentRouterState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let AnalyzeRequest {
        sheets,
        preview_rows,
        include_export,
    } = request;

    let import = IncidentImporter::from_sheets(
        sheets
            .into_iter()
            .map(|sheet| (sheet.name, Cursor::new(sheet.csv.into_bytes()))),
    )?;

    let analysis = analyze(import, &state.engine);

    let export_csv = if include_export {
        Some(analysis.to_csv_string().inspect_err(|error| {
            warn!(%error, "failed to render incident export");
        })?)
    } else {
        None
    };

    Ok(Json(AnalyzeResponse {
        rows_analyzed: analysis.len(),
        summary: analysis.summary(),
        preview: analysis.preview(preview_rows.unwrap_or(state.preview_rows)),
        sheets_used: analysis.sheets_used,
        sheets_skipped: analysis.sheets_skipped,
        export_csv,
    }))
}
