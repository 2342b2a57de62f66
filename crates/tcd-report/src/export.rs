//! Tabular exports of a report.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tcd_indices::{ComputedResult, Lindegaard};

use crate::report::Report;
use crate::{ReportError, ReportResult};

/// Export column headers, in order.
pub const COLUMNS: [&str; 8] = [
    "Artery",
    "VPS",
    "VFD",
    "Vm",
    "PI",
    "RI",
    "Lindegaard",
    "Status",
];

/// JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportExport {
    pub session_id: String,
    pub generated_at: String,
    pub columns: Vec<String>,
    pub rows: Vec<ComputedResult>,
}

impl ReportExport {
    pub fn new(session_id: String, generated_at: String, report: &Report) -> Self {
        Self {
            session_id,
            generated_at,
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: report.all().to_vec(),
        }
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// One CSV line per result, header first, in report order.
pub fn to_csv(report: &Report) -> String {
    let mut csv = COLUMNS.join(",");
    csv.push('\n');
    for row in report {
        let fields = [
            csv_field(&row.artery),
            row.vps_cm_s.to_string(),
            row.vfd_cm_s.to_string(),
            row.vm_cm_s.to_string(),
            row.pi.to_string(),
            row.ri.to_string(),
            match row.lindegaard {
                Lindegaard::Ratio(r) => r.to_string(),
                Lindegaard::NotApplicable => Lindegaard::NOT_APPLICABLE_LABEL.to_string(),
            },
            csv_field(&row.status),
        ];
        csv.push_str(&fields.join(","));
        csv.push('\n');
    }
    csv
}

pub fn write_csv(path: &Path, report: &Report) -> ReportResult<()> {
    if report.is_empty() {
        return Err(ReportError::Empty);
    }
    std::fs::write(path, to_csv(report))?;
    Ok(())
}

pub fn write_json(path: &Path, export: &ReportExport) -> ReportResult<()> {
    if export.rows.is_empty() {
        return Err(ReportError::Empty);
    }
    let content = serde_json::to_string_pretty(export)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        assert_eq!(csv_field("Basilar"), "Basilar");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn empty_report_has_header_only() {
        assert_eq!(
            to_csv(&Report::new()),
            "Artery,VPS,VFD,Vm,PI,RI,Lindegaard,Status\n"
        );
    }
}
