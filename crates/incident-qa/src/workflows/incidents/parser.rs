use super::domain::{IncidentField, IncidentRecord, ReportingPeriod, MONTH_COLUMN};
use super::IncidentImportError;
use std::collections::HashMap;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ParsedSheet {
    pub(crate) headers: Vec<String>,
    pub(crate) records: Vec<IncidentRecord>,
}

/// Reads one CSV sheet, stamping every row with the sheet name in the
/// `Month` column. Headers are trimmed; cells are kept verbatim since
/// trailing whitespace can be part of a vague phrase.
pub(crate) fn parse_sheet<R: Read>(
    period: &ReportingPeriod,
    reader: R,
) -> Result<ParsedSheet, IncidentImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();

    for field in IncidentField::ordered() {
        if !headers.iter().any(|header| header == field.column()) {
            return Err(IncidentImportError::MissingColumn {
                sheet: period.label.clone(),
                column: field.column(),
            });
        }
    }

    if !headers.iter().any(|header| header == MONTH_COLUMN) {
        headers.push(MONTH_COLUMN.to_string());
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let mut values = HashMap::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if !cell.is_empty() {
                values.insert(header.clone(), cell.to_string());
            }
        }
        values.insert(MONTH_COLUMN.to_string(), period.label.clone());

        records.push(IncidentRecord {
            period: period.clone(),
            row_number: index + 1,
            values,
        });
    }

    Ok(ParsedSheet { headers, records })
}
