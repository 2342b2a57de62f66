//! Caller-owned session state: one catalog, one report.

use std::path::Path;

use chrono::{DateTime, Utc};
use tcd_indices::{ComputedResult, Measurement, compute};
use tcd_reference::{ReferenceCatalog, load_catalog};
use tcd_report::{Report, ReportExport, write_csv, write_json};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::batch::MeasurementBatch;
use crate::error::AppResult;

/// The built-in catalog, or a validated catalog file when `path` is given.
pub fn load_reference_catalog(path: Option<&Path>) -> AppResult<ReferenceCatalog> {
    match path {
        Some(path) => {
            let catalog = load_catalog(path)?;
            info!(
                "Loaded reference catalog from {} ({} arteries)",
                path.display(),
                catalog.len()
            );
            Ok(catalog)
        }
        None => Ok(ReferenceCatalog::builtin()),
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: ReferenceCatalog,
    report: Report,
}

impl Session {
    pub fn new(catalog: ReferenceCatalog) -> Self {
        let id = Uuid::new_v4();
        info!("Started session {} with {} reference arteries", id, catalog.len());
        Self {
            id,
            started_at: Utc::now(),
            catalog,
            report: Report::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Compute one measurement and store the result.
    ///
    /// The report is only touched when the computation succeeds.
    pub fn submit(&mut self, measurement: &Measurement) -> AppResult<ComputedResult> {
        let result = match compute(measurement, &self.catalog) {
            Ok(result) => result,
            Err(err) => {
                warn!("Rejected measurement for '{}': {}", measurement.artery, err);
                return Err(err.into());
            }
        };

        debug!(
            artery = %result.artery,
            vm = result.vm_cm_s,
            pi = result.pi,
            ri = result.ri,
            lindegaard = %result.lindegaard,
            "Computed indices"
        );

        if self.report.upsert(result.clone()).is_some() {
            info!("Replaced {} -> {}", result.artery, result.status);
        } else {
            info!("Added {} -> {}", result.artery, result.status);
        }

        Ok(result)
    }

    /// Submit every entry in order, stopping at the first rejected one.
    ///
    /// Entries before the failure stay in the report. Returns how many were
    /// stored.
    pub fn submit_batch(&mut self, batch: &MeasurementBatch) -> AppResult<usize> {
        let measurements = batch.to_measurements();
        for measurement in &measurements {
            self.submit(measurement)?;
        }
        Ok(measurements.len())
    }

    pub fn clear(&mut self) {
        info!("Cleared report for session {}", self.id);
        self.report.clear();
    }

    pub fn export(&self) -> ReportExport {
        ReportExport::new(self.id.to_string(), Utc::now().to_rfc3339(), &self.report)
    }

    pub fn export_csv(&self, path: &Path) -> AppResult<()> {
        write_csv(path, &self.report)?;
        info!("Exported {} rows to {}", self.report.len(), path.display());
        Ok(())
    }

    pub fn export_json(&self, path: &Path) -> AppResult<()> {
        write_json(path, &self.export())?;
        info!("Exported {} rows to {}", self.report.len(), path.display());
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ReferenceCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn sessions_do_not_share_reports() {
        let mut a = Session::default();
        let b = Session::default();
        a.submit(&Measurement::new("Basilar", 70.0, 25.0)).unwrap();

        assert_eq!(a.report().len(), 1);
        assert!(b.report().is_empty());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn failed_submit_leaves_report_unchanged() {
        let mut session = Session::default();
        session
            .submit(&Measurement::new("Basilar", 70.0, 25.0))
            .unwrap();
        let before = session.report().clone();

        let err = session
            .submit(&Measurement::new("XYZ", 70.0, 25.0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(session.report(), &before);
    }

    #[test]
    fn export_carries_session_id() {
        let mut session = Session::default();
        session
            .submit(&Measurement::new("Basilar", 70.0, 25.0))
            .unwrap();
        let export = session.export();
        assert_eq!(export.session_id, session.id().to_string());
        assert_eq!(export.rows.len(), 1);
    }

    #[test]
    fn clear_empties_report() {
        let mut session = Session::default();
        session
            .submit(&Measurement::new("Basilar", 70.0, 25.0))
            .unwrap();
        session.clear();
        assert!(session.report().is_empty());
    }
}
