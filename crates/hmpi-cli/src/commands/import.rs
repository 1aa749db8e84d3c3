use hmpi_core::dataset::{csv, store, xlsx};
use hmpi_core::error::HmpiError;
use std::path::PathBuf;

use crate::commands::resolve_guidelines;
use crate::output;

pub fn run(
    input_file: PathBuf,
    guideline_file: Option<PathBuf>,
    output_format: &str,
    store_file: Option<PathBuf>,
) -> Result<(), HmpiError> {
    let guidelines = resolve_guidelines(guideline_file)?;

    let is_xlsx = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);

    let report = if is_xlsx {
        let bytes = std::fs::read(&input_file)?;
        xlsx::import_xlsx(&bytes, &guidelines)?
    } else {
        let text = std::fs::read_to_string(&input_file)?;
        csv::import_csv(&text, &guidelines)?
    };

    if !report.skipped.is_empty() {
        eprintln!("{} row(s) skipped:", report.skipped.len());
        for row in &report.skipped {
            eprintln!("  line {}: {}", row.line_number, row.reason);
        }
    }
    if report.records.is_empty() {
        eprintln!("No valid data rows found in {}", input_file.display());
        return Ok(());
    }
    eprintln!("Imported {} sample(s)", report.records.len());

    if let Some(path) = store_file {
        let mut records = store::load(&path)?;
        records.extend(report.records.iter().cloned());
        store::save(&path, &records)?;
        eprintln!("Stored; dataset now holds {} sample(s)", records.len());
    }

    match output_format {
        "json" => output::json::print(&report.records)?,
        _ => output::table::print_records(&report.records),
    }

    Ok(())
}
