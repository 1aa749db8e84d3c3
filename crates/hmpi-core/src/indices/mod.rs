pub mod outcome;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::guidelines::schema::GuidelineSet;
use crate::model::ConcentrationRecord;
use outcome::{
    ContaminationLevel, HeiLevel, IndexResult, MetalContribution, QualityStatus,
};

/// Compute the pollution indices for one concentration record.
///
/// Only metals with a concentration above zero and a guideline entry
/// contribute. Deterministic; no side effects.
pub fn compute_indices(record: &ConcentrationRecord, guidelines: &GuidelineSet) -> IndexResult {
    let hpi = hpi(record, guidelines);
    let hei = ratio_sum(record, guidelines);
    // Contamination degree uses the same ratio sum as HEI.
    let contamination_degree = hei;

    IndexResult {
        hpi,
        hei,
        contamination_degree,
        status: QualityStatus::from_hpi(hpi),
        hei_level: HeiLevel::from_hei(hei),
        contamination_level: ContaminationLevel::from_degree(contamination_degree),
        contributions: contributions(record, guidelines),
    }
}

/// Weighted HPI: sum(weight * (c/limit * 100)) / sum(weight), 2 dp.
/// Zero when no metal contributes.
fn hpi(record: &ConcentrationRecord, guidelines: &GuidelineSet) -> Decimal {
    let mut weighted_sum = Decimal::ZERO;
    let mut total_weight = Decimal::ZERO;

    for (metal, concentration) in record.iter() {
        if concentration <= Decimal::ZERO {
            continue;
        }
        if let Some(entry) = guidelines.get(metal) {
            let sub_index = concentration / entry.limit * Decimal::ONE_HUNDRED;
            let weight = Decimal::from(entry.hpi_weight);
            weighted_sum += weight * sub_index;
            total_weight += weight;
        }
    }

    if total_weight > Decimal::ZERO {
        round2(weighted_sum / total_weight)
    } else {
        round2(Decimal::ZERO)
    }
}

/// Unweighted ratio sum over contributing metals, 2 dp.
fn ratio_sum(record: &ConcentrationRecord, guidelines: &GuidelineSet) -> Decimal {
    let mut sum = Decimal::ZERO;
    for (metal, concentration) in record.iter() {
        if concentration <= Decimal::ZERO {
            continue;
        }
        if let Some(limit) = guidelines.limit(metal) {
            sum += concentration / limit;
        }
    }
    round2(sum)
}

/// Per-metal standing against the limits, in canonical metal order.
fn contributions(
    record: &ConcentrationRecord,
    guidelines: &GuidelineSet,
) -> Vec<MetalContribution> {
    let mut out = Vec::new();
    for (metal, concentration) in record.iter() {
        if concentration <= Decimal::ZERO {
            continue;
        }
        let Some(limit) = guidelines.limit(metal) else {
            continue;
        };
        let pct = (concentration / limit * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        out.push(MetalContribution {
            metal,
            concentration,
            limit,
            pct_of_limit: pct,
            exceeds: concentration > limit,
        });
    }
    out
}

/// Round to two decimals and keep the two-decimal scale, so "0.00" and
/// "100.00" render as such.
fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::builtin::default_guidelines;
    use crate::model::Metal;
    use rust_decimal_macros::dec;

    fn reference_record() -> ConcentrationRecord {
        [
            (Metal::Lead, dec!(0.005)),
            (Metal::Mercury, dec!(0.002)),
            (Metal::Cadmium, dec!(0.001)),
            (Metal::Arsenic, dec!(0.008)),
            (Metal::Chromium, dec!(0.02)),
            (Metal::Copper, dec!(0.1)),
            (Metal::Zinc, dec!(0.5)),
            (Metal::Nickel, dec!(0.03)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_reference_record_indices() {
        let result = compute_indices(&reference_record(), &default_guidelines().unwrap());
        assert_eq!(result.hei, dec!(3.01));
        assert_eq!(result.contamination_degree, dec!(3.01));
        assert_eq!(result.hpi, dec!(42.99));
        assert_eq!(result.status, QualityStatus::Poor);
        assert_eq!(result.hei_level, HeiLevel::Acceptable);
        assert_eq!(result.contamination_level, ContaminationLevel::Low);
    }

    #[test]
    fn test_empty_record_is_zero() {
        let result = compute_indices(&ConcentrationRecord::new(), &default_guidelines().unwrap());
        assert_eq!(result.hpi, Decimal::ZERO);
        assert_eq!(result.hei, Decimal::ZERO);
        assert_eq!(result.contamination_degree, Decimal::ZERO);
        assert_eq!(result.status, QualityStatus::Excellent);
        assert!(result.contributions.is_empty());
    }

    #[test]
    fn test_zero_and_negative_do_not_contribute() {
        let mut record = ConcentrationRecord::new();
        record.set(Metal::Lead, Decimal::ZERO);
        record.set(Metal::Mercury, dec!(-0.01));
        let result = compute_indices(&record, &default_guidelines().unwrap());
        assert_eq!(result.hpi, Decimal::ZERO);
        assert_eq!(result.hei, Decimal::ZERO);
        assert!(result.contributions.is_empty());
    }

    #[test]
    fn test_metal_without_guideline_entry_ignored() {
        let json = r#"{
            "name": "Lead only",
            "version": "1.0",
            "unit": "mg/L",
            "limits": {
                "lead": { "limit": "0.01", "hpi_weight": 4, "risk_weight": 0.8 }
            }
        }"#;
        let guidelines = crate::guidelines::parse_guidelines_str(json).unwrap();

        let mut record = ConcentrationRecord::new();
        record.set(Metal::Zinc, dec!(100));
        let result = compute_indices(&record, &guidelines);
        assert_eq!(result.hpi, Decimal::ZERO);
        assert_eq!(result.hei, Decimal::ZERO);

        // With lead present, only lead contributes.
        record.set(Metal::Lead, dec!(0.02));
        let result = compute_indices(&record, &guidelines);
        assert_eq!(result.hpi, dec!(200.00));
        assert_eq!(result.hei, dec!(2.00));
        assert_eq!(result.contributions.len(), 1);
    }

    #[test]
    fn test_single_metal_hpi_is_its_sub_index() {
        // One contributing metal: the weighted mean collapses to the
        // sub-index regardless of weight.
        let mut record = ConcentrationRecord::new();
        record.set(Metal::Arsenic, dec!(0.005));
        let result = compute_indices(&record, &default_guidelines().unwrap());
        assert_eq!(result.hpi, dec!(50.00));
        assert_eq!(result.status, QualityStatus::VeryPoor);
    }

    #[test]
    fn test_exceedance_flags() {
        let mut record = ConcentrationRecord::new();
        record.set(Metal::Lead, dec!(0.02)); // 200% of 0.01
        record.set(Metal::Copper, dec!(0.5)); // 25% of 2.0
        let result = compute_indices(&record, &default_guidelines().unwrap());

        let lead = result
            .contributions
            .iter()
            .find(|c| c.metal == Metal::Lead)
            .unwrap();
        assert!(lead.exceeds);
        assert_eq!(lead.pct_of_limit, dec!(200.0));

        let copper = result
            .contributions
            .iter()
            .find(|c| c.metal == Metal::Copper)
            .unwrap();
        assert!(!copper.exceeds);
        assert_eq!(copper.pct_of_limit, dec!(25.0));

        assert_eq!(result.exceedances().count(), 1);
    }

    #[test]
    fn test_indices_never_negative() {
        let records = [
            ConcentrationRecord::new(),
            reference_record(),
            [(Metal::Zinc, dec!(0.0001))].into_iter().collect(),
            [(Metal::Mercury, dec!(50))].into_iter().collect(),
        ];
        for record in &records {
            let result = compute_indices(record, &default_guidelines().unwrap());
            assert!(result.hpi >= Decimal::ZERO);
            assert!(result.hei >= Decimal::ZERO);
            assert!(result.contamination_degree >= Decimal::ZERO);
        }
    }
}
