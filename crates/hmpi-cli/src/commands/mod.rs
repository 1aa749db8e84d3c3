pub mod assess;
pub mod export;
pub mod guidelines;
pub mod import;
pub mod risk;
pub mod summary;

use hmpi_core::error::HmpiError;
use hmpi_core::guidelines::builtin::default_guidelines;
use hmpi_core::guidelines::schema::GuidelineSet;
use std::path::PathBuf;

/// Custom guideline file when given, the who-epa preset otherwise.
pub(crate) fn resolve_guidelines(path: Option<PathBuf>) -> Result<GuidelineSet, HmpiError> {
    match path {
        Some(p) => hmpi_core::guidelines::load_guidelines(&p),
        None => default_guidelines(),
    }
}
