use crate::error::HmpiError;
use crate::guidelines::schema::GuidelineSet;

const WHO_EPA_JSON: &str = include_str!("../../../../guidelines/who-epa.json");

/// Available predefined guideline sets.
pub const PRESETS: &[&str] = &["who-epa"];

/// Load a predefined guideline set by name.
pub fn load_preset(name: &str) -> Result<GuidelineSet, HmpiError> {
    match name {
        "who-epa" => {
            let set: GuidelineSet = serde_json::from_str(WHO_EPA_JSON)?;
            Ok(set)
        }
        _ => Err(HmpiError::UnknownPreset {
            name: name.to_string(),
            available: PRESETS.join(", "),
        }),
    }
}

/// The default WHO/EPA guideline set.
pub fn default_guidelines() -> Result<GuidelineSet, HmpiError> {
    load_preset("who-epa")
}
