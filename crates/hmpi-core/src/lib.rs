pub mod dataset;
pub mod error;
pub mod guidelines;
pub mod indices;
pub mod model;
pub mod risk;
pub mod summary;

use error::HmpiError;
use guidelines::schema::GuidelineSet;
use model::{SampleInput, SampleRecord};

/// Main API entry point: validate a sample input and assess it against a
/// guideline set.
///
/// Rejects before computing anything: a rejected input produces no partial
/// result. Numeric leniency (unparseable fields read as zero) is the
/// ingestion layer's job, not this one's.
pub fn assess_sample(
    input: SampleInput,
    guidelines: &GuidelineSet,
) -> Result<SampleRecord, HmpiError> {
    if input.location.trim().is_empty() {
        return Err(HmpiError::MissingField("location"));
    }
    if !input.latitude.is_finite() {
        return Err(HmpiError::InvalidCoordinate { field: "latitude" });
    }
    if !input.longitude.is_finite() {
        return Err(HmpiError::InvalidCoordinate { field: "longitude" });
    }
    if !input.concentrations.has_positive() {
        return Err(HmpiError::NoMetalData);
    }

    let indices = indices::compute_indices(&input.concentrations, guidelines);

    Ok(SampleRecord {
        location: input.location,
        latitude: input.latitude,
        longitude: input.longitude,
        date: input.date,
        concentrations: input.concentrations,
        indices,
    })
}
