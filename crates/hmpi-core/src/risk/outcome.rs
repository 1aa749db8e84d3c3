use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Metal;

/// The fixed, ordered list of health outcomes the heuristic scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    NeurologicalDisorders,
    KidneyDisease,
    CardiovascularDisease,
    RespiratoryIssues,
    GastrointestinalProblems,
    SkinDisorders,
    CancerRisk,
    BoneDisease,
}

impl Disease {
    pub const ALL: [Disease; 8] = [
        Disease::NeurologicalDisorders,
        Disease::KidneyDisease,
        Disease::CardiovascularDisease,
        Disease::RespiratoryIssues,
        Disease::GastrointestinalProblems,
        Disease::SkinDisorders,
        Disease::CancerRisk,
        Disease::BoneDisease,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Disease::NeurologicalDisorders => "Neurological Disorders",
            Disease::KidneyDisease => "Kidney Disease",
            Disease::CardiovascularDisease => "Cardiovascular Disease",
            Disease::RespiratoryIssues => "Respiratory Issues",
            Disease::GastrointestinalProblems => "Gastrointestinal Problems",
            Disease::SkinDisorders => "Skin Disorders",
            Disease::CancerRisk => "Cancer Risk",
            Disease::BoneDisease => "Bone Disease",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Risk tier for a disease probability percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_probability(probability: u8) -> RiskLevel {
        if probability < 20 {
            RiskLevel::Low
        } else if probability < 40 {
            RiskLevel::Moderate
        } else if probability < 60 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    pub fn tier_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "status-excellent",
            RiskLevel::Moderate => "status-good",
            RiskLevel::High => "status-poor",
            RiskLevel::Critical => "status-very-poor",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Scored risk for a single disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRisk {
    pub disease: Disease,
    /// Integer percentage in [1, 95].
    pub probability: u8,
    pub level: RiskLevel,
    pub recommendations: Vec<String>,
}

/// Full disease-risk assessment for one concentration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Rounded mean of the per-disease probabilities.
    pub overall_probability: u8,
    pub overall_level: RiskLevel,
    /// Per-disease scores in canonical disease order.
    pub risks: Vec<DiseaseRisk>,
}

impl RiskAssessment {
    /// Diseases scored above the given probability, in order.
    pub fn above(&self, probability: u8) -> impl Iterator<Item = &DiseaseRisk> {
        self.risks.iter().filter(move |r| r.probability > probability)
    }
}

/// Tier for the deterministic exposure screening score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl ScreeningLevel {
    pub fn from_pct(pct: u8) -> ScreeningLevel {
        if pct < 30 {
            ScreeningLevel::Low
        } else if pct < 60 {
            ScreeningLevel::Moderate
        } else if pct < 80 {
            ScreeningLevel::High
        } else {
            ScreeningLevel::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScreeningLevel::Low => "Low Risk",
            ScreeningLevel::Moderate => "Moderate Risk",
            ScreeningLevel::High => "High Risk",
            ScreeningLevel::Critical => "Critical Risk",
        }
    }

    pub fn tier_class(&self) -> &'static str {
        match self {
            ScreeningLevel::Low => "status-excellent",
            ScreeningLevel::Moderate => "status-good",
            ScreeningLevel::High => "status-poor",
            ScreeningLevel::Critical => "status-very-poor",
        }
    }
}

impl fmt::Display for ScreeningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A metal above its permissible limit, as surfaced by the screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureFactor {
    pub metal: Metal,
    /// Concentration as a percentage of the limit, one decimal place.
    pub pct_of_limit: f64,
}

/// Deterministic weighted exposure score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    /// Score percentage in [0, 100].
    pub score_pct: u8,
    pub level: ScreeningLevel,
    /// Metals above their limit, in canonical metal order.
    pub factors: Vec<ExposureFactor>,
}
