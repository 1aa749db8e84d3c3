use hmpi_core::dataset::store;
use hmpi_core::error::HmpiError;
use hmpi_core::summary::DatasetSummary;
use std::path::PathBuf;

use crate::output;

pub fn run(store_file: PathBuf, output_format: &str) -> Result<(), HmpiError> {
    let records = store::load(&store_file)?;
    let summary = DatasetSummary::from_records(&records);

    match output_format {
        "json" => output::json::print(&summary)?,
        _ => output::table::print_summary(&summary),
    }

    Ok(())
}
