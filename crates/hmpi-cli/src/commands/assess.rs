use hmpi_core::dataset::store;
use hmpi_core::error::HmpiError;
use hmpi_core::model::SampleInput;
use std::path::PathBuf;

use crate::commands::resolve_guidelines;
use crate::output;

pub fn run(
    input: SampleInput,
    guideline_file: Option<PathBuf>,
    output_format: &str,
    store_file: Option<PathBuf>,
) -> Result<(), HmpiError> {
    let guidelines = resolve_guidelines(guideline_file)?;
    let record = hmpi_core::assess_sample(input, &guidelines)?;

    if let Some(path) = store_file {
        let mut records = store::load(&path)?;
        records.push(record.clone());
        store::save(&path, &records)?;
        eprintln!("Stored; dataset now holds {} sample(s)", records.len());
    }

    match output_format {
        "json" => output::json::print(&record)?,
        _ => output::table::print_sample(&record),
    }

    Ok(())
}
