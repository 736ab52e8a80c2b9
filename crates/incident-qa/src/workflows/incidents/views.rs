use super::domain::IncidentField;
use crate::quality::ScoreLevel;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreCount {
    pub score: ScoreLevel,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSummary {
    pub field: IncidentField,
    pub column: &'static str,
    pub label: &'static str,
    pub rows: usize,
    pub vague: usize,
    pub score_counts: Vec<ScoreCount>,
    pub mean_score: f64,
}

impl FieldSummary {
    pub fn count_for(&self, score: ScoreLevel) -> usize {
        self.score_counts
            .iter()
            .find(|entry| entry.score == score)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}

/// Row count for one monthly sheet.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummary {
    pub label: String,
    pub starts_on: Option<NaiveDate>,
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub rows: usize,
    /// Oldest month first.
    pub periods: Vec<PeriodSummary>,
    pub fields: Vec<FieldSummary>,
}

impl AnalysisSummary {
    pub fn field(&self, field: IncidentField) -> Option<&FieldSummary> {
        self.fields.iter().find(|summary| summary.field == field)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldPreview {
    pub field: IncidentField,
    pub column: &'static str,
    pub raw: Option<String>,
    pub cleaned: String,
    pub vague: bool,
    pub score: ScoreLevel,
    pub score_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct IncidentPreviewRow {
    pub month: String,
    pub row_number: usize,
    pub fields: Vec<FieldPreview>,
}
