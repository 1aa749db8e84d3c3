pub mod csv;
pub mod store;
pub mod xlsx;

use serde::{Deserialize, Serialize};

use crate::model::SampleRecord;

/// A data row that could not be turned into a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based line (CSV) or row (XLSX) number in the source file.
    pub line_number: usize,
    pub reason: String,
}

/// Outcome of a dataset import: the accepted, fully assessed records plus
/// the rows that were skipped. Skipped rows are never fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub records: Vec<SampleRecord>,
    pub skipped: Vec<SkippedRow>,
}
