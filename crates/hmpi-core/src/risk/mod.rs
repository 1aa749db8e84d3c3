pub mod outcome;
pub mod recommendations;

use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::guidelines::schema::GuidelineSet;
use crate::model::{ConcentrationRecord, Metal};
use outcome::{
    Disease, DiseaseRisk, ExposureFactor, RiskAssessment, RiskLevel, ScreeningLevel,
    ScreeningResult,
};

/// Weighted terms over normalized concentration ratios, plus the upper
/// bound of the uniform jitter drawn for the disease.
fn model_terms(disease: Disease) -> (&'static [(Metal, f64)], f64) {
    match disease {
        Disease::NeurologicalDisorders => {
            (&[(Metal::Lead, 40.0), (Metal::Mercury, 50.0)], 10.0)
        }
        Disease::KidneyDisease => (
            &[
                (Metal::Cadmium, 40.0),
                (Metal::Lead, 30.0),
                (Metal::Mercury, 20.0),
            ],
            10.0,
        ),
        Disease::CardiovascularDisease => {
            (&[(Metal::Lead, 30.0), (Metal::Arsenic, 40.0)], 30.0)
        }
        Disease::RespiratoryIssues => {
            (&[(Metal::Chromium, 40.0), (Metal::Nickel, 30.0)], 30.0)
        }
        Disease::GastrointestinalProblems => {
            (&[(Metal::Copper, 30.0), (Metal::Zinc, 20.0)], 50.0)
        }
        Disease::SkinDisorders => (
            &[
                (Metal::Arsenic, 30.0),
                (Metal::Chromium, 20.0),
                (Metal::Nickel, 30.0),
            ],
            20.0,
        ),
        Disease::CancerRisk => (
            &[
                (Metal::Arsenic, 40.0),
                (Metal::Cadmium, 30.0),
                (Metal::Chromium, 20.0),
            ],
            10.0,
        ),
        Disease::BoneDisease => (&[(Metal::Cadmium, 40.0), (Metal::Lead, 30.0)], 30.0),
    }
}

/// Concentration/limit ratio as f64; zero for unmeasured metals, metals
/// without a guideline entry, and non-positive concentrations.
fn ratio(record: &ConcentrationRecord, guidelines: &GuidelineSet, metal: Metal) -> f64 {
    let concentration = record.get(metal);
    if concentration <= Decimal::ZERO {
        return 0.0;
    }
    match guidelines.limit(metal) {
        Some(limit) => {
            let c = concentration.to_f64().unwrap_or(0.0);
            let l = limit.to_f64().unwrap_or(0.0);
            if l > 0.0 {
                c / l
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}

/// Score the eight disease risks for one concentration record.
///
/// This is a screening heuristic, not a validated clinical model: each
/// probability is a weighted combination of normalized ratios plus a
/// bounded jitter term from the injected RNG, clamped to [1, 95].
/// Identical inputs and RNG state give identical assessments.
pub fn predict_risks<R: Rng + ?Sized>(
    record: &ConcentrationRecord,
    guidelines: &GuidelineSet,
    rng: &mut R,
) -> RiskAssessment {
    let mut risks = Vec::with_capacity(Disease::ALL.len());

    for disease in Disease::ALL {
        let (terms, jitter_bound) = model_terms(disease);
        let base: f64 = terms
            .iter()
            .map(|(metal, weight)| weight * ratio(record, guidelines, *metal))
            .sum();
        let jittered = (base + rng.gen_range(0.0..jitter_bound)).min(95.0);
        let probability = jittered.max(1.0).round() as u8;

        risks.push(DiseaseRisk {
            disease,
            probability,
            level: RiskLevel::from_probability(probability),
            recommendations: recommendations::for_disease(disease, probability),
        });
    }

    let mean = risks.iter().map(|r| r.probability as f64).sum::<f64>() / risks.len() as f64;
    let overall_probability = mean.round() as u8;

    RiskAssessment {
        overall_probability,
        overall_level: RiskLevel::from_probability(overall_probability),
        risks,
    }
}

/// Deterministic exposure screening: toxicity-weighted ratio sum scaled
/// to a percentage, with the metals above their limit listed as factors.
pub fn exposure_screening(
    record: &ConcentrationRecord,
    guidelines: &GuidelineSet,
) -> ScreeningResult {
    let mut score = 0.0;
    let mut factors = Vec::new();

    for (metal, concentration) in record.iter() {
        if concentration <= Decimal::ZERO {
            continue;
        }
        let Some(entry) = guidelines.get(metal) else {
            continue;
        };
        let r = ratio(record, guidelines, metal);
        score += r * entry.risk_weight;
        if r > 1.0 {
            factors.push(ExposureFactor {
                metal,
                pct_of_limit: (r * 1000.0).round() / 10.0,
            });
        }
    }

    let score_pct = (score * 20.0).min(100.0).round() as u8;

    ScreeningResult {
        score_pct,
        level: ScreeningLevel::from_pct(score_pct),
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::builtin::default_guidelines;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    fn record(pairs: &[(Metal, Decimal)]) -> ConcentrationRecord {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_probabilities_within_bounds_zero_vector() {
        let guidelines = default_guidelines().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let assessment = predict_risks(&ConcentrationRecord::new(), &guidelines, &mut rng);
        assert_eq!(assessment.risks.len(), 8);
        for risk in &assessment.risks {
            assert!((1..=95).contains(&risk.probability));
        }
    }

    #[test]
    fn test_probabilities_clamped_at_95_for_extreme_input() {
        let guidelines = default_guidelines().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        // Ratios in the thousands push every base far beyond the clamp.
        let extreme = record(&[
            (Metal::Lead, dec!(100)),
            (Metal::Mercury, dec!(100)),
            (Metal::Cadmium, dec!(100)),
            (Metal::Arsenic, dec!(100)),
            (Metal::Chromium, dec!(100)),
            (Metal::Copper, dec!(100)),
            (Metal::Zinc, dec!(100)),
            (Metal::Nickel, dec!(100)),
        ]);
        let assessment = predict_risks(&extreme, &guidelines, &mut rng);
        for risk in &assessment.risks {
            assert_eq!(risk.probability, 95);
            assert_eq!(risk.level, RiskLevel::Critical);
        }
        assert_eq!(assessment.overall_probability, 95);
    }

    #[test]
    fn test_same_seed_same_assessment() {
        let guidelines = default_guidelines().unwrap();
        let sample = record(&[(Metal::Lead, dec!(0.02)), (Metal::Arsenic, dec!(0.015))]);
        let a = predict_risks(&sample, &guidelines, &mut StdRng::seed_from_u64(42));
        let b = predict_risks(&sample, &guidelines, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_diseases_in_canonical_order() {
        let guidelines = default_guidelines().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let assessment = predict_risks(&ConcentrationRecord::new(), &guidelines, &mut rng);
        let order: Vec<Disease> = assessment.risks.iter().map(|r| r.disease).collect();
        assert_eq!(order, Disease::ALL.to_vec());
    }

    #[test]
    fn test_neurological_dominated_by_lead_and_mercury() {
        let guidelines = default_guidelines().unwrap();
        // Pb at 2x limit and Hg at 1x limit: base = 40*2 + 50*1 = 130 -> clamped.
        let sample = record(&[(Metal::Lead, dec!(0.02)), (Metal::Mercury, dec!(0.006))]);
        let mut rng = StdRng::seed_from_u64(3);
        let assessment = predict_risks(&sample, &guidelines, &mut rng);
        let neuro = &assessment.risks[0];
        assert_eq!(neuro.disease, Disease::NeurologicalDisorders);
        assert_eq!(neuro.probability, 95);
    }

    #[test]
    fn test_screening_zero_record() {
        let result = exposure_screening(&ConcentrationRecord::new(), &default_guidelines().unwrap());
        assert_eq!(result.score_pct, 0);
        assert_eq!(result.level, ScreeningLevel::Low);
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_screening_score_and_factors() {
        let guidelines = default_guidelines().unwrap();
        // Pb at 2x limit: score = 2 * 0.8 = 1.6 -> 32% -> Moderate.
        let sample = record(&[(Metal::Lead, dec!(0.02))]);
        let result = exposure_screening(&sample, &guidelines);
        assert_eq!(result.score_pct, 32);
        assert_eq!(result.level, ScreeningLevel::Moderate);
        assert_eq!(result.factors.len(), 1);
        assert_eq!(result.factors[0].metal, Metal::Lead);
        assert!((result.factors[0].pct_of_limit - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screening_caps_at_100() {
        let guidelines = default_guidelines().unwrap();
        let sample = record(&[(Metal::Mercury, dec!(0.6))]); // 100x limit
        let result = exposure_screening(&sample, &guidelines);
        assert_eq!(result.score_pct, 100);
        assert_eq!(result.level, ScreeningLevel::Critical);
    }

    #[test]
    fn test_screening_below_limit_has_no_factors() {
        let guidelines = default_guidelines().unwrap();
        let sample = record(&[(Metal::Copper, dec!(1.0))]); // half the limit
        let result = exposure_screening(&sample, &guidelines);
        assert!(result.factors.is_empty());
        assert_eq!(result.score_pct, 4); // 0.5 * 0.4 * 20
    }
}
