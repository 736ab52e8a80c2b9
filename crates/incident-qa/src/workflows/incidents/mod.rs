//! Incident report workflow: monthly sheet import, per-field quality
//! assessment, summary, and CSV export.

mod analysis;
pub mod domain;
mod export;
mod parser;
pub mod router;
pub mod views;

pub use analysis::{analyze, AnalyzedIncident, IncidentAnalysis};
pub use domain::{IncidentField, IncidentRecord, ReportingPeriod, MONTH_COLUMN};
pub use export::DEFAULT_EXPORT_FILE_NAME;
pub use router::incident_router;
pub use views::{
    AnalysisSummary, FieldPreview, FieldSummary, IncidentPreviewRow, PeriodSummary, ScoreCount,
};

use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug)]
pub enum IncidentImportError {
    Io { path: PathBuf, source: std::io::Error },
    Csv(csv::Error),
    MissingColumn { sheet: String, column: &'static str },
    NoMonthlySheets,
}

impl std::fmt::Display for IncidentImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentImportError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            IncidentImportError::Csv(err) => write!(f, "invalid incident CSV data: {}", err),
            IncidentImportError::MissingColumn { sheet, column } => {
                write!(f, "sheet '{}' has no '{}' column", sheet, column)
            }
            IncidentImportError::NoMonthlySheets => {
                write!(f, "No valid 'Month Year' sheets found")
            }
        }
    }
}

impl std::error::Error for IncidentImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IncidentImportError::Io { source, .. } => Some(source),
            IncidentImportError::Csv(err) => Some(err),
            IncidentImportError::MissingColumn { .. } | IncidentImportError::NoMonthlySheets => {
                None
            }
        }
    }
}

impl From<csv::Error> for IncidentImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Rows gathered from every monthly sheet, in input order.
#[derive(Debug, Clone, Default)]
pub struct IncidentImport {
    /// Union of sheet headers in first-seen order, including `Month`.
    pub headers: Vec<String>,
    pub records: Vec<IncidentRecord>,
    pub sheets_used: Vec<String>,
    pub sheets_skipped: Vec<String>,
}

impl IncidentImport {
    fn absorb(&mut self, sheet_name: &str, parsed: parser::ParsedSheet) {
        for header in parsed.headers {
            if !self.headers.contains(&header) {
                self.headers.push(header);
            }
        }
        self.records.extend(parsed.records);
        self.sheets_used.push(sheet_name.to_string());
    }

    fn finish(self) -> Result<Self, IncidentImportError> {
        if self.sheets_used.is_empty() {
            return Err(IncidentImportError::NoMonthlySheets);
        }

        info!(
            sheets = self.sheets_used.len(),
            skipped = self.sheets_skipped.len(),
            rows = self.records.len(),
            "incident sheets imported"
        );
        Ok(self)
    }
}

/// Loads incident sheets. Only sheets named "Month YYYY" take part.
pub struct IncidentImporter;

impl IncidentImporter {
    /// Treats each CSV file as a sheet named after its file stem.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<IncidentImport, IncidentImportError> {
        let mut import = IncidentImport::default();

        for path in paths {
            let path = path.as_ref();
            let sheet_name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();

            let Some(period) = ReportingPeriod::parse(&sheet_name) else {
                debug!(path = %path.display(), "skipping file without a month-year name");
                import.sheets_skipped.push(sheet_name);
                continue;
            };

            let file = std::fs::File::open(path).map_err(|source| IncidentImportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let parsed = parser::parse_sheet(&period, file)?;
            import.absorb(&sheet_name, parsed);
        }

        import.finish()
    }

    /// Sheets given as `(name, reader)` pairs.
    pub fn from_sheets<I, N, R>(sheets: I) -> Result<IncidentImport, IncidentImportError>
    where
        I: IntoIterator<Item = (N, R)>,
        N: AsRef<str>,
        R: Read,
    {
        let mut import = IncidentImport::default();

        for (name, reader) in sheets {
            let sheet_name = name.as_ref();
            let Some(period) = ReportingPeriod::parse(sheet_name) else {
                debug!(sheet = sheet_name, "skipping sheet without a month-year name");
                import.sheets_skipped.push(sheet_name.to_string());
                continue;
            };

            let parsed = parser::parse_sheet(&period, reader)?;
            import.absorb(sheet_name, parsed);
        }

        import.finish()
    }
}
