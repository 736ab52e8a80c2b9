use super::analysis::IncidentAnalysis;
use super::domain::IncidentField;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "RCA_Analysis_Output.csv";

impl IncidentAnalysis {
    /// Output header row: imported columns, then `*_clean`, `*_vague` and
    /// `*_score` for RCA, CA and PA.
    pub fn export_headers(&self) -> Vec<String> {
        let mut headers = self.headers.clone();
        for suffix in ["clean", "vague", "score"] {
            for field in IncidentField::ordered() {
                headers.push(format!("{}_{}", field.column(), suffix));
            }
        }
        headers
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.export_headers())?;

        for row in &self.rows {
            let mut record: Vec<String> = self
                .headers
                .iter()
                .map(|header| row.record.value(header).unwrap_or_default().to_string())
                .collect();

            for field in IncidentField::ordered() {
                record.push(row.assessment(field).cleaned.clone());
            }
            for field in IncidentField::ordered() {
                let flag = if row.assessment(field).vague {
                    "True"
                } else {
                    "False"
                };
                record.push(flag.to_string());
            }
            for field in IncidentField::ordered() {
                record.push(row.assessment(field).score.to_string());
            }

            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), csv::Error> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }

    pub fn to_csv_string(&self) -> Result<String, csv::Error> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
