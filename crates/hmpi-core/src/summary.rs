use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::indices::outcome::QualityStatus;
use crate::model::SampleRecord;

/// Number of samples in each quality tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub excellent: usize,
    pub good: usize,
    pub poor: usize,
    pub very_poor: usize,
}

/// One location in the HPI ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedLocation {
    pub location: String,
    pub hpi: Decimal,
    pub status: QualityStatus,
}

/// Aggregate statistics over an assessed dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub sample_count: usize,
    /// Mean HPI across all samples, two decimals.
    pub average_hpi: Decimal,
    /// Population standard deviation of the HPI values.
    pub std_dev_hpi: f64,
    pub tiers: TierCounts,
    /// Locations ordered worst-first by HPI.
    pub ranked: Vec<RankedLocation>,
}

impl DatasetSummary {
    pub fn from_records(records: &[SampleRecord]) -> DatasetSummary {
        let sample_count = records.len();

        let mut tiers = TierCounts::default();
        for record in records {
            match record.indices.status {
                QualityStatus::Excellent => tiers.excellent += 1,
                QualityStatus::Good => tiers.good += 1,
                QualityStatus::Poor => tiers.poor += 1,
                QualityStatus::VeryPoor => tiers.very_poor += 1,
            }
        }

        let average_hpi = if sample_count > 0 {
            let sum: Decimal = records.iter().map(|r| r.indices.hpi).sum();
            let mut avg = (sum / Decimal::from(sample_count))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            avg.rescale(2);
            avg
        } else {
            Decimal::ZERO
        };

        let std_dev_hpi = std_dev(records);

        let mut ranked: Vec<RankedLocation> = records
            .iter()
            .map(|r| RankedLocation {
                location: r.location.clone(),
                hpi: r.indices.hpi,
                status: r.indices.status,
            })
            .collect();
        ranked.sort_by(|a, b| b.hpi.cmp(&a.hpi));

        DatasetSummary {
            sample_count,
            average_hpi,
            std_dev_hpi,
            tiers,
            ranked,
        }
    }
}

/// Population standard deviation of the HPI values.
fn std_dev(records: &[SampleRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let values: Vec<f64> = records
        .iter()
        .map(|r| r.indices.hpi.to_f64().unwrap_or(0.0))
        .collect();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
