use chrono::{Month, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(January|February|March|April|May|June|July|August|September|October|November|December)\s+([0-9]{4})$",
    )
    .expect("month-year pattern compiles")
});

/// Column carrying the sheet name on every imported row.
pub const MONTH_COLUMN: &str = "Month";

/// The three free-text fields of an incident report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentField {
    RootCause,
    CorrectiveAction,
    PreventiveAction,
}

impl IncidentField {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::RootCause,
            Self::CorrectiveAction,
            Self::PreventiveAction,
        ]
    }

    /// Spreadsheet column header.
    pub const fn column(self) -> &'static str {
        match self {
            Self::RootCause => "RCA",
            Self::CorrectiveAction => "CA",
            Self::PreventiveAction => "PA",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RootCause => "Root Cause Analysis",
            Self::CorrectiveAction => "Corrective Action",
            Self::PreventiveAction => "Preventive Action",
        }
    }
}

/// A sheet named like "January 2025".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub label: String,
    pub month: Month,
    pub year: i32,
}

impl ReportingPeriod {
    /// Parses a sheet name; `None` for anything that is not an exact,
    /// capitalized "Month YYYY".
    pub fn parse(sheet_name: &str) -> Option<Self> {
        let captures = MONTH_YEAR.captures(sheet_name)?;
        let month = captures.get(1)?.as_str().parse::<Month>().ok()?;
        let year = captures.get(2)?.as_str().parse::<i32>().ok()?;

        Some(Self {
            label: sheet_name.to_string(),
            month,
            year,
        })
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
    }

    /// Chronological sort key.
    pub fn ordinal(&self) -> (i32, u32) {
        (self.year, self.month.number_from_month())
    }
}

/// One spreadsheet row. Only non-empty cells are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentRecord {
    pub period: ReportingPeriod,
    pub row_number: usize,
    pub values: HashMap<String, String>,
}

impl IncidentRecord {
    /// Name of the sheet the row came from.
    pub fn month(&self) -> &str {
        &self.period.label
    }

    pub fn field(&self, field: IncidentField) -> Option<&str> {
        self.value(field.column())
    }

    pub fn value(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_year_sheet_names() {
        let period = ReportingPeriod::parse("January 2025").expect("valid sheet name");
        assert_eq!(period.month, Month::January);
        assert_eq!(period.year, 2025);
        assert_eq!(
            period.first_day(),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );

        assert!(ReportingPeriod::parse("September   2024").is_some());
        assert!(
            ReportingPeriod::parse("December 2024").map(|p| p.ordinal())
                < Some(period.ordinal())
        );
    }

    #[test]
    fn rejects_other_sheet_names() {
        for name in [
            "Summary",
            "january 2025",
            "Jan 2025",
            "January 25",
            "January 2025 (draft)",
            " January 2025",
        ] {
            assert!(ReportingPeriod::parse(name).is_none(), "{name}");
        }
    }
}
