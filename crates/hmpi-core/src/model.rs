use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::indices::outcome::IndexResult;

/// The eight heavy metals tracked by the engine, in canonical order.
///
/// The order matters: the risk heuristic, CSV columns, and all reports
/// enumerate metals in this sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    Lead,
    Mercury,
    Cadmium,
    Arsenic,
    Chromium,
    Copper,
    Zinc,
    Nickel,
}

impl Metal {
    pub const ALL: [Metal; 8] = [
        Metal::Lead,
        Metal::Mercury,
        Metal::Cadmium,
        Metal::Arsenic,
        Metal::Chromium,
        Metal::Copper,
        Metal::Zinc,
        Metal::Nickel,
    ];

    /// Lowercase key used in CSV headers, JSON, and guideline files.
    pub fn key(&self) -> &'static str {
        match self {
            Metal::Lead => "lead",
            Metal::Mercury => "mercury",
            Metal::Cadmium => "cadmium",
            Metal::Arsenic => "arsenic",
            Metal::Chromium => "chromium",
            Metal::Copper => "copper",
            Metal::Zinc => "zinc",
            Metal::Nickel => "nickel",
        }
    }

    /// Chemical element symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Metal::Lead => "Pb",
            Metal::Mercury => "Hg",
            Metal::Cadmium => "Cd",
            Metal::Arsenic => "As",
            Metal::Chromium => "Cr",
            Metal::Copper => "Cu",
            Metal::Zinc => "Zn",
            Metal::Nickel => "Ni",
        }
    }

    /// Parse a metal name leniently: English name or element symbol,
    /// any case, with an optional trailing "(Pb)"-style suffix.
    pub fn from_str_loose(s: &str) -> Option<Metal> {
        let mut name = s.trim();
        // Strip a trailing symbol in parentheses: "Lead (Pb)" -> "Lead"
        if let Some(idx) = name.rfind('(') {
            let after = &name[idx..];
            if after.len() <= 6 && after.ends_with(')') {
                name = name[..idx].trim_end();
            }
        }
        let lower = name.to_lowercase();
        match lower.as_str() {
            "lead" | "pb" => Some(Metal::Lead),
            "mercury" | "hg" => Some(Metal::Mercury),
            "cadmium" | "cd" => Some(Metal::Cadmium),
            "arsenic" | "as" => Some(Metal::Arsenic),
            "chromium" | "cr" => Some(Metal::Chromium),
            "copper" | "cu" => Some(Metal::Copper),
            "zinc" | "zn" => Some(Metal::Zinc),
            "nickel" | "ni" => Some(Metal::Nickel),
            _ => None,
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metal::Lead => "Lead",
            Metal::Mercury => "Mercury",
            Metal::Cadmium => "Cadmium",
            Metal::Arsenic => "Arsenic",
            Metal::Chromium => "Chromium",
            Metal::Copper => "Copper",
            Metal::Zinc => "Zinc",
            Metal::Nickel => "Nickel",
        };
        write!(f, "{name}")
    }
}

/// Measured concentrations in mg/L, keyed by metal.
///
/// Metals that were not measured read as zero. Non-positive values are
/// stored as given but never contribute to any index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcentrationRecord {
    concentrations: BTreeMap<Metal, Decimal>,
}

impl ConcentrationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a concentration, replacing any previous value for the metal.
    pub fn set(&mut self, metal: Metal, concentration: Decimal) {
        self.concentrations.insert(metal, concentration);
    }

    /// Concentration for a metal; zero when absent.
    pub fn get(&self, metal: Metal) -> Decimal {
        self.concentrations
            .get(&metal)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Iterate over the stored (metal, concentration) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Metal, Decimal)> + '_ {
        self.concentrations.iter().map(|(m, c)| (*m, *c))
    }

    /// True if at least one metal has a concentration above zero.
    pub fn has_positive(&self) -> bool {
        self.concentrations.values().any(|c| *c > Decimal::ZERO)
    }
}

impl FromIterator<(Metal, Decimal)> for ConcentrationRecord {
    fn from_iter<T: IntoIterator<Item = (Metal, Decimal)>>(iter: T) -> Self {
        Self {
            concentrations: iter.into_iter().collect(),
        }
    }
}

/// A sampling-site input before assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleInput {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-form sample date as entered ("2024-01-15"); not interpreted.
    #[serde(default)]
    pub date: Option<String>,
    pub concentrations: ConcentrationRecord,
}

/// An assessed sample: the input plus its computed indices.
///
/// Records are append-only; once built they are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRecord {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub date: Option<String>,
    pub concentrations: ConcentrationRecord,
    pub indices: IndexResult,
}
