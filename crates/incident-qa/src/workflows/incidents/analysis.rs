use super::domain::{IncidentField, IncidentRecord, ReportingPeriod};
use super::views::{
    AnalysisSummary, FieldPreview, FieldSummary, IncidentPreviewRow, PeriodSummary, ScoreCount,
};
use super::IncidentImport;
use crate::quality::{FieldAssessment, QualityEngine, ScoreLevel};
use tracing::debug;

/// A record with its three field assessments.
#[derive(Debug, Clone)]
pub struct AnalyzedIncident {
    pub record: IncidentRecord,
    pub root_cause: FieldAssessment,
    pub corrective_action: FieldAssessment,
    pub preventive_action: FieldAssessment,
}

impl AnalyzedIncident {
    pub fn assessment(&self, field: IncidentField) -> &FieldAssessment {
        match field {
            IncidentField::RootCause => &self.root_cause,
            IncidentField::CorrectiveAction => &self.corrective_action,
            IncidentField::PreventiveAction => &self.preventive_action,
        }
    }
}

/// Output table of a run: the imported columns plus the per-field results.
#[derive(Debug, Clone)]
pub struct IncidentAnalysis {
    pub headers: Vec<String>,
    pub rows: Vec<AnalyzedIncident>,
    pub sheets_used: Vec<String>,
    pub sheets_skipped: Vec<String>,
}

/// Assesses every field of every imported record independently.
pub fn analyze(import: IncidentImport, engine: &QualityEngine) -> IncidentAnalysis {
    let IncidentImport {
        headers,
        records,
        sheets_used,
        sheets_skipped,
    } = import;

    let rows: Vec<AnalyzedIncident> = records
        .into_iter()
        .map(|record| AnalyzedIncident {
            root_cause: engine.assess(record.field(IncidentField::RootCause)),
            corrective_action: engine.assess(record.field(IncidentField::CorrectiveAction)),
            preventive_action: engine.assess(record.field(IncidentField::PreventiveAction)),
            record,
        })
        .collect();

    debug!(rows = rows.len(), "incident analysis complete");

    IncidentAnalysis {
        headers,
        rows,
        sheets_used,
        sheets_skipped,
    }
}

impl IncidentAnalysis {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> AnalysisSummary {
        let fields = IncidentField::ordered()
            .into_iter()
            .map(|field| self.field_summary(field))
            .collect();

        AnalysisSummary {
            rows: self.rows.len(),
            periods: self.period_summaries(),
            fields,
        }
    }

    fn period_summaries(&self) -> Vec<PeriodSummary> {
        let mut periods: Vec<(&ReportingPeriod, usize)> = Vec::new();
        for row in &self.rows {
            let period = &row.record.period;
            match periods.iter().position(|(seen, _)| seen.label == period.label) {
                Some(index) => periods[index].1 += 1,
                None => periods.push((period, 1)),
            }
        }
        periods.sort_by_key(|(period, _)| period.ordinal());

        periods
            .into_iter()
            .map(|(period, rows)| PeriodSummary {
                label: period.label.clone(),
                starts_on: period.first_day(),
                rows,
            })
            .collect()
    }

    fn field_summary(&self, field: IncidentField) -> FieldSummary {
        let assessments: Vec<&FieldAssessment> =
            self.rows.iter().map(|row| row.assessment(field)).collect();

        let vague = assessments.iter().filter(|a| a.vague).count();
        let score_counts = ScoreLevel::ordered()
            .into_iter()
            .map(|score| ScoreCount {
                score,
                label: score.label(),
                count: assessments.iter().filter(|a| a.score == score).count(),
            })
            .collect();

        let mean_score = if assessments.is_empty() {
            0.0
        } else {
            let total: u32 = assessments.iter().map(|a| u32::from(a.score.value())).sum();
            f64::from(total) / assessments.len() as f64
        };

        FieldSummary {
            field,
            column: field.column(),
            label: field.label(),
            rows: assessments.len(),
            vague,
            score_counts,
            mean_score,
        }
    }

    /// The first `limit` rows in display form.
    pub fn preview(&self, limit: usize) -> Vec<IncidentPreviewRow> {
        self.rows
            .iter()
            .take(limit)
            .map(|row| IncidentPreviewRow {
                month: row.record.month().to_string(),
                row_number: row.record.row_number,
                fields: IncidentField::ordered()
                    .into_iter()
                    .map(|field| {
                        let assessment = row.assessment(field);
                        FieldPreview {
                            field,
                            column: field.column(),
                            raw: row.record.field(field).map(str::to_string),
                            cleaned: assessment.cleaned.clone(),
                            vague: assessment.vague,
                            score: assessment.score,
                            score_label: assessment.score.label(),
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}
