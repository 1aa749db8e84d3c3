use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::dataset::csv::Columns;
use crate::dataset::{ImportReport, SkippedRow};
use crate::error::HmpiError;
use crate::guidelines::schema::GuidelineSet;

/// Import samples from an XLSX workbook.
///
/// Reads the first worksheet; the first row must be a header with the same
/// column contract as CSV import. Returns the same `ImportReport` shape so
/// the result slots directly into the callers of `import_csv`.
pub fn import_xlsx(bytes: &[u8], guidelines: &GuidelineSet) -> Result<ImportReport, HmpiError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| HmpiError::Spreadsheet(format!("failed to open xlsx: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| HmpiError::Spreadsheet("workbook has no worksheets".into()))?
        .map_err(|e| HmpiError::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(HmpiError::CsvEmpty);
    };
    let header: Vec<String> = header_row.iter().map(cell_text).collect();
    let columns = Columns::resolve(&header)?;

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    let mut saw_data_row = false;

    for (idx, row) in rows.enumerate() {
        let fields: Vec<String> = row.iter().map(cell_text).collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        saw_data_row = true;
        match columns.row_to_sample(&fields, guidelines) {
            Ok(record) => records.push(record),
            Err(reason) => skipped.push(SkippedRow {
                // Row 1 is the header, so data rows start at 2.
                line_number: idx + 2,
                reason,
            }),
        }
    }

    if !saw_data_row {
        return Err(HmpiError::CsvEmpty);
    }

    Ok(ImportReport { records, skipped })
}

/// Render a cell as the text the shared row parser expects.
///
/// Floats go through a string round-trip so 0.0035 does not surface as
/// 0.00349999... when parsed into a `Decimal`.
fn cell_text(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::String(s) => s.trim().to_string(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Empty => String::new(),
        other => format!("{other}"),
    }
}
