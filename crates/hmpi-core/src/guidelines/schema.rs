use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Metal;

/// A named, versioned table of regulatory limits for the tracked metals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidelineSet {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Concentration unit the limits are expressed in (display only).
    pub unit: String,
    pub limits: BTreeMap<Metal, MetalGuideline>,
}

/// Per-metal guideline entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalGuideline {
    /// Permissible ceiling concentration (as a string in JSON for exact
    /// decimal precision).
    pub limit: Decimal,
    /// Integer weight used in the HPI weighted mean.
    pub hpi_weight: u32,
    /// Toxicity weight used by the exposure screening score.
    pub risk_weight: f64,
}

impl GuidelineSet {
    /// Guideline entry for a metal, if the set defines one.
    pub fn get(&self, metal: Metal) -> Option<&MetalGuideline> {
        self.limits.get(&metal)
    }

    /// Permissible limit for a metal, if defined.
    pub fn limit(&self, metal: Metal) -> Option<Decimal> {
        self.limits.get(&metal).map(|g| g.limit)
    }
}
