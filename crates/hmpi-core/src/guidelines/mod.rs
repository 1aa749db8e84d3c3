pub mod builtin;
pub mod schema;

use crate::error::HmpiError;
use rust_decimal::Decimal;
use schema::GuidelineSet;
use std::path::Path;

/// Load a guideline set from a JSON file.
pub fn load_guidelines(path: &Path) -> Result<GuidelineSet, HmpiError> {
    let content = std::fs::read_to_string(path).map_err(|e| HmpiError::GuidelineLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let set: GuidelineSet =
        serde_json::from_str(&content).map_err(|e| HmpiError::GuidelineLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_guidelines(&set)?;
    Ok(set)
}

/// Parse a guideline set from a JSON string (no file path context).
pub fn parse_guidelines_str(json: &str) -> Result<GuidelineSet, HmpiError> {
    let set: GuidelineSet = serde_json::from_str(json).map_err(HmpiError::Json)?;
    validate_guidelines(&set)?;
    Ok(set)
}

/// Validate that a guideline set is well-formed.
pub fn validate_guidelines(set: &GuidelineSet) -> Result<(), HmpiError> {
    if set.limits.is_empty() {
        return Err(HmpiError::GuidelineInvalid(
            "limits must not be empty".into(),
        ));
    }

    for (metal, entry) in &set.limits {
        if entry.limit <= Decimal::ZERO {
            return Err(HmpiError::GuidelineInvalid(format!(
                "limit for {} must be positive, got {}",
                metal.key(),
                entry.limit
            )));
        }
        if entry.hpi_weight == 0 {
            return Err(HmpiError::GuidelineInvalid(format!(
                "hpi_weight for {} must be at least 1",
                metal.key()
            )));
        }
        if !(entry.risk_weight > 0.0 && entry.risk_weight <= 1.0) {
            return Err(HmpiError::GuidelineInvalid(format!(
                "risk_weight for {} must be in (0, 1], got {}",
                metal.key(),
                entry.risk_weight
            )));
        }
    }

    Ok(())
}
