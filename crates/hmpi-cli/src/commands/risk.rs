use hmpi_core::error::HmpiError;
use hmpi_core::model::ConcentrationRecord;
use hmpi_core::risk::{exposure_screening, predict_risks};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use crate::commands::resolve_guidelines;
use crate::output;

pub fn run(
    concentrations: ConcentrationRecord,
    seed: Option<u64>,
    guideline_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), HmpiError> {
    let guidelines = resolve_guidelines(guideline_file)?;

    let assessment = match seed {
        Some(seed) => predict_risks(
            &concentrations,
            &guidelines,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => predict_risks(&concentrations, &guidelines, &mut rand::thread_rng()),
    };
    let screening = exposure_screening(&concentrations, &guidelines);

    match output_format {
        "json" => output::json::print(&serde_json::json!({
            "assessment": assessment,
            "screening": screening,
        }))?,
        _ => output::table::print_risk(&assessment, &screening),
    }

    Ok(())
}
