use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HmpiError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid {field}: not a finite coordinate")]
    InvalidCoordinate { field: &'static str },

    #[error("no metal concentration above zero; enter at least one measurement")]
    NoMetalData,

    #[error("failed to load guidelines from {path}: {reason}")]
    GuidelineLoad { path: PathBuf, reason: String },

    #[error("invalid guidelines: {0}")]
    GuidelineInvalid(String),

    #[error("unknown preset '{name}'. Available: {available}")]
    UnknownPreset { name: String, available: String },

    #[error("CSV file must contain a header row and at least one data row")]
    CsvEmpty,

    #[error("CSV header missing required column(s): {0}")]
    CsvHeader(String),

    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("failed to load dataset from {path}: {reason}")]
    StoreLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
