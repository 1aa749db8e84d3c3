use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Metal;

/// Water quality tier derived from the HPI value.
///
/// The tiers partition [0, inf): boundaries at 15, 30 and 45 belong to the
/// upper tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityStatus {
    Excellent,
    Good,
    Poor,
    VeryPoor,
}

impl QualityStatus {
    pub fn from_hpi(hpi: Decimal) -> QualityStatus {
        if hpi < Decimal::from(15) {
            QualityStatus::Excellent
        } else if hpi < Decimal::from(30) {
            QualityStatus::Good
        } else if hpi < Decimal::from(45) {
            QualityStatus::Poor
        } else {
            QualityStatus::VeryPoor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityStatus::Excellent => "Excellent",
            QualityStatus::Good => "Good",
            QualityStatus::Poor => "Poor",
            QualityStatus::VeryPoor => "Very Poor",
        }
    }

    /// Display class tag consumed by the presentation layer.
    pub fn tier_class(&self) -> &'static str {
        match self {
            QualityStatus::Excellent => "status-excellent",
            QualityStatus::Good => "status-good",
            QualityStatus::Poor => "status-poor",
            QualityStatus::VeryPoor => "status-very-poor",
        }
    }
}

impl fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Qualitative bucket for the HEI ratio sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeiLevel {
    Acceptable,
    Moderate,
    High,
}

impl HeiLevel {
    pub fn from_hei(hei: Decimal) -> HeiLevel {
        if hei < Decimal::from(10) {
            HeiLevel::Acceptable
        } else if hei < Decimal::from(20) {
            HeiLevel::Moderate
        } else {
            HeiLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeiLevel::Acceptable => "Acceptable",
            HeiLevel::Moderate => "Moderate",
            HeiLevel::High => "High",
        }
    }

    pub fn tier_class(&self) -> &'static str {
        match self {
            HeiLevel::Acceptable => "status-excellent",
            HeiLevel::Moderate => "status-good",
            HeiLevel::High => "status-poor",
        }
    }
}

impl fmt::Display for HeiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Qualitative bucket for the contamination degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContaminationLevel {
    Low,
    Moderate,
    High,
}

impl ContaminationLevel {
    pub fn from_degree(degree: Decimal) -> ContaminationLevel {
        if degree < Decimal::from(5) {
            ContaminationLevel::Low
        } else if degree < Decimal::from(10) {
            ContaminationLevel::Moderate
        } else {
            ContaminationLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContaminationLevel::Low => "Low",
            ContaminationLevel::Moderate => "Moderate",
            ContaminationLevel::High => "High",
        }
    }

    pub fn tier_class(&self) -> &'static str {
        match self {
            ContaminationLevel::Low => "status-excellent",
            ContaminationLevel::Moderate => "status-good",
            ContaminationLevel::High => "status-poor",
        }
    }
}

impl fmt::Display for ContaminationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One metal's standing against its permissible limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalContribution {
    pub metal: Metal,
    pub concentration: Decimal,
    pub limit: Decimal,
    /// Concentration as a percentage of the limit, one decimal place.
    pub pct_of_limit: Decimal,
    /// True when the concentration is above the limit.
    pub exceeds: bool,
}

/// Computed pollution indices for one concentration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResult {
    /// Heavy Metal Pollution Index: weighted mean of sub-indices, 2 dp.
    pub hpi: Decimal,
    /// Heavy Metal Evaluation Index: sum of concentration/limit ratios, 2 dp.
    pub hei: Decimal,
    /// Contamination degree; the same ratio sum as HEI, reported under its
    /// own name and tier scale.
    pub contamination_degree: Decimal,
    pub status: QualityStatus,
    pub hei_level: HeiLevel,
    pub contamination_level: ContaminationLevel,
    /// Per-metal standing for every measured metal with a known limit.
    pub contributions: Vec<MetalContribution>,
}

impl IndexResult {
    /// Metals whose concentration exceeds the permissible limit.
    pub fn exceedances(&self) -> impl Iterator<Item = &MetalContribution> {
        self.contributions.iter().filter(|c| c.exceeds)
    }
}
