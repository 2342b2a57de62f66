//! Ordered, replace-by-artery result collection.

use tcd_indices::ComputedResult;

/// Results for one session, at most one row per artery.
///
/// Owned by the caller; nothing here is global or persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    rows: Vec<ComputedResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, replacing any row for the same artery.
    ///
    /// The new row always goes last, so a re-measured artery moves to the
    /// end of the report. Returns the replaced row, if any.
    pub fn upsert(&mut self, result: ComputedResult) -> Option<ComputedResult> {
        let previous = self
            .rows
            .iter()
            .position(|row| row.artery == result.artery)
            .map(|idx| self.rows.remove(idx));
        self.rows.push(result);
        previous
    }

    pub fn all(&self) -> &[ComputedResult] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComputedResult> {
        self.rows.iter()
    }

    pub fn get(&self, artery: &str) -> Option<&ComputedResult> {
        self.rows.iter().find(|row| row.artery == artery)
    }

    pub fn remove(&mut self, artery: &str) -> Option<ComputedResult> {
        let idx = self.rows.iter().position(|row| row.artery == artery)?;
        Some(self.rows.remove(idx))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// `(artery, Vm)` pairs in report order, for the Vm comparison chart.
    pub fn vm_series(&self) -> Vec<(&str, f64)> {
        self.rows
            .iter()
            .map(|row| (row.artery.as_str(), row.vm_cm_s))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ComputedResult;
    type IntoIter = std::slice::Iter<'a, ComputedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
