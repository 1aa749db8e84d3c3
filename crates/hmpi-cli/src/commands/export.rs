use hmpi_core::dataset::{csv, store};
use hmpi_core::error::HmpiError;
use std::path::PathBuf;

pub fn run(store_file: PathBuf, out: Option<PathBuf>) -> Result<(), HmpiError> {
    let records = store::load(&store_file)?;
    if records.is_empty() {
        eprintln!("Dataset store {} is empty", store_file.display());
        return Ok(());
    }

    let csv_text = csv::export_csv(&records);

    match out {
        Some(path) => {
            std::fs::write(&path, &csv_text)?;
            eprintln!("Exported {} sample(s) to {}", records.len(), path.display());
        }
        None => print!("{csv_text}"),
    }

    Ok(())
}
