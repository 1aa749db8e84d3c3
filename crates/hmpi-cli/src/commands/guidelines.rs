use hmpi_core::error::HmpiError;
use hmpi_core::guidelines::builtin;
use hmpi_core::model::Metal;
use std::path::Path;

pub fn list() -> Result<(), HmpiError> {
    println!("Available predefined guideline sets:\n");
    for name in builtin::PRESETS {
        let set = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{})", name, set.name, set.version);
        if let Some(ref desc) = set.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), HmpiError> {
    let set = builtin::load_preset(preset)?;

    println!("{} (version {})\n", set.name, set.version);
    if let Some(ref desc) = set.description {
        println!("{}\n", desc);
    }

    println!(
        "  {:<10} {:<12} {:<12} {:<10}",
        "Metal", "Limit", "HPI weight", "Risk weight"
    );
    println!("  {}", "-".repeat(46));
    for metal in Metal::ALL {
        match set.get(metal) {
            Some(entry) => println!(
                "  {:<10} {:<12} {:<12} {:<10}",
                metal.to_string(),
                format!("{} {}", entry.limit, set.unit),
                entry.hpi_weight,
                entry.risk_weight
            ),
            None => println!("  {:<10} -", metal.to_string()),
        }
    }
    println!();
    println!("HPI tiers: <15 Excellent, <30 Good, <45 Poor, >=45 Very Poor");

    Ok(())
}

pub fn schema() -> Result<(), HmpiError> {
    print!(
        r#"JSON Guideline Schema
=====================

A guideline file defines the permissible limit and weights for each
metal. When you run `hmpi assess` or `hmpi import` with --guidelines,
every concentration is normalized against these limits.

Top-level fields:
  name          (string, required)  Human-readable name of the set
  description   (string, optional)  What this set is for
  version       (string, required)  Version identifier (e.g., "2024.1")
  unit          (string, required)  Concentration unit for display
                                    (e.g., "mg/L")
  limits        (object, required)  Map of metal -> guideline entry.
                                    Recognized metals: lead, mercury,
                                    cadmium, arsenic, chromium, copper,
                                    zinc, nickel. Metals left out simply
                                    never contribute to any index.

Each entry in "limits":
  limit         (string, required)  Permissible ceiling concentration.
                                    Quoted string, not a bare number, to
                                    preserve exact decimal precision
                                    (e.g., "0.01" not 0.01).
  hpi_weight    (integer, required) Weight in the HPI weighted mean.
                                    Must be at least 1.
  risk_weight   (number, required)  Toxicity weight for the exposure
                                    screening score, in (0, 1].

Example:
{{
  "name": "Site X drinking water limits",
  "description": "Project-specific limits from the 2023 survey",
  "version": "1.0",
  "unit": "mg/L",
  "limits": {{
    "lead":    {{ "limit": "0.015", "hpi_weight": 4, "risk_weight": 0.8 }},
    "arsenic": {{ "limit": "0.01",  "hpi_weight": 4, "risk_weight": 0.8 }}
  }}
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), HmpiError> {
    let set = hmpi_core::guidelines::load_guidelines(file)?;

    println!("Guideline set '{}' (v{}) is valid.", set.name, set.version);
    println!("  Metals covered: {}", set.limits.len());

    // Missing metals are allowed but worth pointing out.
    let missing: Vec<&str> = Metal::ALL
        .iter()
        .filter(|m| set.get(**m).is_none())
        .map(|m| m.key())
        .collect();
    if !missing.is_empty() {
        println!("\nWarnings:");
        println!(
            "  - no limit for: {} (these metals will never contribute)",
            missing.join(", ")
        );
    }

    Ok(())
}
