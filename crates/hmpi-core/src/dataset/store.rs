use std::io::Write;
use std::path::Path;

use crate::error::HmpiError;
use crate::model::SampleRecord;

/// Load the cached dataset. A missing file is an empty dataset, not an
/// error; a present-but-unreadable file is reported.
pub fn load(path: &Path) -> Result<Vec<SampleRecord>, HmpiError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| HmpiError::StoreLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| HmpiError::StoreLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Persist the dataset atomically: write to a temp file in the target
/// directory, then rename over the destination.
pub fn save(path: &Path, records: &[SampleRecord]) -> Result<(), HmpiError> {
    let json = serde_json::to_string_pretty(records)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path).map_err(|e| HmpiError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::builtin::default_guidelines;
    use crate::indices::compute_indices;
    use crate::model::{ConcentrationRecord, Metal};
    use rust_decimal_macros::dec;

    fn sample(location: &str) -> SampleRecord {
        let mut concentrations = ConcentrationRecord::new();
        concentrations.set(Metal::Lead, dec!(0.02));
        let indices = compute_indices(&concentrations, &default_guidelines().unwrap());
        SampleRecord {
            location: location.into(),
            latitude: 18.52,
            longitude: 73.85,
            date: Some("2024-01-15".into()),
            concentrations,
            indices,
        }
    }

    #[test]
    fn test_missing_file_is_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let records = load(&dir.path().join("absent.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        let records = vec![sample("Well A"), sample("Well B")];

        save(&path, &records).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].location, "Well A");
        assert_eq!(loaded[0].concentrations.get(Metal::Lead), dec!(0.02));
        assert_eq!(loaded[0].indices.hpi, records[0].indices.hpi);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");

        save(&path, &[sample("Old")]).unwrap();
        save(&path, &[sample("New A"), sample("New B")]).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].location, "New A");
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, HmpiError::StoreLoad { .. }));
    }
}
