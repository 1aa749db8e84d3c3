use rust_decimal::Decimal;
use std::str::FromStr;

use crate::dataset::{ImportReport, SkippedRow};
use crate::error::HmpiError;
use crate::guidelines::schema::GuidelineSet;
use crate::indices::compute_indices;
use crate::model::{ConcentrationRecord, Metal, SampleRecord};

/// Column order written by `export_csv` and accepted (in any order) by the
/// importers.
pub const CSV_HEADER: &str = "location,latitude,longitude,date,lead,mercury,cadmium,arsenic,chromium,copper,zinc,nickel,hpi,hei,contamination_degree";

/// Resolved column positions for one file. Header names are matched
/// case-insensitively and may appear in any order; unknown columns are
/// ignored.
#[derive(Debug)]
pub(crate) struct Columns {
    location: usize,
    latitude: usize,
    longitude: usize,
    date: Option<usize>,
    metals: Vec<(Metal, usize)>,
}

impl Columns {
    /// Resolve column positions from a header row. Missing required
    /// columns are an error before any data row is touched.
    pub(crate) fn resolve(header: &[String]) -> Result<Columns, HmpiError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let mut missing = Vec::new();
        let location = find("location");
        let latitude = find("latitude");
        let longitude = find("longitude");
        if location.is_none() {
            missing.push("location");
        }
        if latitude.is_none() {
            missing.push("latitude");
        }
        if longitude.is_none() {
            missing.push("longitude");
        }
        let (Some(location), Some(latitude), Some(longitude)) = (location, latitude, longitude)
        else {
            return Err(HmpiError::CsvHeader(missing.join(", ")));
        };

        let mut metals = Vec::new();
        for (idx, name) in header.iter().enumerate() {
            if let Some(metal) = Metal::from_str_loose(name) {
                metals.push((metal, idx));
            }
        }

        Ok(Columns {
            location,
            latitude,
            longitude,
            date: find("date"),
            metals,
        })
    }

    /// Build a sample from one row of field values, or explain why the
    /// row cannot be used.
    pub(crate) fn row_to_sample(
        &self,
        fields: &[String],
        guidelines: &GuidelineSet,
    ) -> Result<SampleRecord, String> {
        let field = |idx: usize| fields.get(idx).map(|s| s.trim()).unwrap_or("");

        let location = field(self.location);
        if location.is_empty() {
            return Err("missing location".into());
        }

        let latitude = parse_coordinate(field(self.latitude))
            .ok_or_else(|| "non-numeric latitude".to_string())?;
        let longitude = parse_coordinate(field(self.longitude))
            .ok_or_else(|| "non-numeric longitude".to_string())?;

        let date = self
            .date
            .map(|idx| field(idx).to_string())
            .filter(|d| !d.is_empty());

        let mut concentrations = ConcentrationRecord::new();
        for &(metal, idx) in &self.metals {
            let value = parse_concentration(field(idx));
            if value != Decimal::ZERO {
                concentrations.set(metal, value);
            }
        }

        let indices = compute_indices(&concentrations, guidelines);
        Ok(SampleRecord {
            location: location.to_string(),
            latitude,
            longitude,
            date,
            concentrations,
            indices,
        })
    }
}

/// Import a CSV document, assessing every accepted row against the given
/// guidelines. Malformed rows are skipped and recorded, never fatal.
pub fn import_csv(text: &str, guidelines: &GuidelineSet) -> Result<ImportReport, HmpiError> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return Err(HmpiError::CsvEmpty);
    };
    let header = split_fields(header_line);
    let columns = Columns::resolve(&header)?;

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    let mut saw_data_row = false;

    for (idx, line) in lines {
        saw_data_row = true;
        let fields = split_fields(line);
        match columns.row_to_sample(&fields, guidelines) {
            Ok(record) => records.push(record),
            Err(reason) => skipped.push(SkippedRow {
                line_number: idx + 1,
                reason,
            }),
        }
    }

    if !saw_data_row {
        return Err(HmpiError::CsvEmpty);
    }

    Ok(ImportReport { records, skipped })
}

/// Serialize records to CSV, import-compatible. The trailing index
/// columns are recomputed on import and ignored there.
pub fn export_csv(records: &[SampleRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&escape_field(&record.location));
        out.push(',');
        out.push_str(&record.latitude.to_string());
        out.push(',');
        out.push_str(&record.longitude.to_string());
        out.push(',');
        if let Some(ref date) = record.date {
            out.push_str(&escape_field(date));
        }
        for metal in Metal::ALL {
            out.push(',');
            out.push_str(&record.concentrations.get(metal).to_string());
        }
        out.push(',');
        out.push_str(&record.indices.hpi.to_string());
        out.push(',');
        out.push_str(&record.indices.hei.to_string());
        out.push(',');
        out.push_str(&record.indices.contamination_degree.to_string());
        out.push('\n');
    }

    out
}

/// Split one CSV line into fields, honoring double-quoted fields with
/// doubled-quote escapes (the form `export_csv` writes).
pub(crate) fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn escape_field(value: &str) -> String {
    if value.contains('"') || value.contains(',') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Latitude/longitude field: must parse as a finite number.
fn parse_coordinate(s: &str) -> Option<f64> {
    let value: f64 = s.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Metal field: unparseable or empty values read as zero.
pub(crate) fn parse_concentration(s: &str) -> Decimal {
    Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::builtin::default_guidelines;
    use rust_decimal_macros::dec;

    const HEADER: &str =
        "location,latitude,longitude,date,lead,mercury,cadmium,arsenic,chromium,copper,zinc,nickel";

    #[test]
    fn test_import_basic_rows() {
        let csv = format!(
            "{HEADER}\n\
             Well A,18.5204,73.8567,2024-01-15,0.005,0.002,0.001,0.008,0.02,0.1,0.5,0.03\n\
             Well B,19.0760,72.8777,2024-01-16,0.012,0.004,0.002,0.015,0.03,0.15,0.8,0.05\n"
        );
        let report = import_csv(&csv, &default_guidelines().unwrap()).unwrap();
        assert_eq!(report.records.len(), 2);
        assert!(report.skipped.is_empty());

        let a = &report.records[0];
        assert_eq!(a.location, "Well A");
        assert_eq!(a.latitude, 18.5204);
        assert_eq!(a.date.as_deref(), Some("2024-01-15"));
        assert_eq!(a.concentrations.get(Metal::Lead), dec!(0.005));
        assert_eq!(a.indices.hei, dec!(3.01));
    }

    #[test]
    fn test_header_case_and_order_insensitive() {
        let csv = "Latitude,LOCATION,longitude,Lead\n10.0,Site,20.0,0.05\n";
        let report = import_csv(csv, &default_guidelines().unwrap()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].concentrations.get(Metal::Lead), dec!(0.05));
    }

    #[test]
    fn test_missing_required_columns() {
        let err = import_csv("location,lead\nSite,0.05\n", &default_guidelines().unwrap()).unwrap_err();
        match err {
            HmpiError::CsvHeader(missing) => {
                assert!(missing.contains("latitude"));
                assert!(missing.contains("longitude"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_coordinates_skip_row() {
        let csv = format!(
            "{HEADER}\n\
             Good,10.0,20.0,,0.01,0,0,0,0,0,0,0\n\
             Bad,not-a-number,20.0,,0.01,0,0,0,0,0,0,0\n"
        );
        let report = import_csv(&csv, &default_guidelines().unwrap()).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_number, 3);
        assert!(report.skipped[0].reason.contains("latitude"));
    }

    #[test]
    fn test_missing_location_skips_row() {
        let csv = format!("{HEADER}\n,10.0,20.0,,0.01,0,0,0,0,0,0,0\n");
        let report = import_csv(&csv, &default_guidelines().unwrap()).unwrap();
        assert!(report.records.is_empty());
        assert_eq!(report.skipped[0].reason, "missing location");
    }

    #[test]
    fn test_unparseable_metal_reads_zero() {
        let csv = format!("{HEADER}\nSite,10.0,20.0,,abc,,0.001,0,0,0,0,0\n");
        let report = import_csv(&csv, &default_guidelines().unwrap()).unwrap();
        let record = &report.records[0];
        assert_eq!(record.concentrations.get(Metal::Lead), Decimal::ZERO);
        assert_eq!(record.concentrations.get(Metal::Mercury), Decimal::ZERO);
        assert_eq!(record.concentrations.get(Metal::Cadmium), dec!(0.001));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            import_csv("", &default_guidelines().unwrap()),
            Err(HmpiError::CsvEmpty)
        ));
        assert!(matches!(
            import_csv(&format!("{HEADER}\n"), &default_guidelines().unwrap()),
            Err(HmpiError::CsvEmpty)
        ));
    }

    #[test]
    fn test_quoted_location_with_comma() {
        let csv = format!("{HEADER}\n\"Pune, Station 3\",10.0,20.0,,0.01,0,0,0,0,0,0,0\n");
        let report = import_csv(&csv, &default_guidelines().unwrap()).unwrap();
        assert_eq!(report.records[0].location, "Pune, Station 3");
    }

    #[test]
    fn test_split_fields_doubled_quotes() {
        let fields = split_fields(r#""He said ""hi""",1,2"#);
        assert_eq!(fields, vec![r#"He said "hi""#, "1", "2"]);
    }

    #[test]
    fn test_export_import_round_trip() {
        let csv = format!(
            "{HEADER}\n\
             \"Pune, Station 3\",18.5204,73.8567,2024-01-15,0.005,0.002,0.001,0.008,0.02,0.1,0.5,0.03\n\
             Well B,19.076,72.8777,,0.012,0,0,0.015,0,0,0,0\n"
        );
        let guidelines = default_guidelines().unwrap();
        let first = import_csv(&csv, &guidelines).unwrap();
        let exported = export_csv(&first.records);
        let second = import_csv(&exported, &guidelines).unwrap();

        assert_eq!(first.records.len(), second.records.len());
        for (a, b) in first.records.iter().zip(&second.records) {
            assert_eq!(a.location, b.location);
            assert_eq!(a.latitude, b.latitude);
            assert_eq!(a.longitude, b.longitude);
            assert_eq!(a.date, b.date);
            for metal in Metal::ALL {
                assert_eq!(
                    a.concentrations.get(metal),
                    b.concentrations.get(metal),
                    "{metal} mismatch"
                );
            }
            assert_eq!(a.indices.hpi, b.indices.hpi);
        }
    }

    #[test]
    fn test_export_header_and_escaping() {
        let guidelines = default_guidelines().unwrap();
        let csv = format!("{HEADER}\n\"A, B\",1.5,2.5,2024-02-01,0.01,0,0,0,0,0,0,0\n");
        let report = import_csv(&csv, &guidelines).unwrap();
        let exported = export_csv(&report.records);
        let mut lines = exported.lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADER);
        let row = lines.next().unwrap();
        assert!(row.starts_with("\"A, B\",1.5,2.5,2024-02-01,0.01,"));
        assert!(row.ends_with(",100.00,1.00,1.00"));
    }
}
