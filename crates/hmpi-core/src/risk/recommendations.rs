use crate::risk::outcome::Disease;

const URGENT: &str = "URGENT: Consult healthcare provider immediately";
const SCHEDULE: &str = "Schedule medical consultation within 30 days";

/// Baseline advice per disease.
fn base(disease: Disease) -> &'static [&'static str] {
    match disease {
        Disease::NeurologicalDisorders => &[
            "Regular neurological check-ups",
            "Cognitive function monitoring",
            "Limit exposure to lead and mercury sources",
        ],
        Disease::KidneyDisease => &[
            "Regular kidney function tests",
            "Monitor blood pressure",
            "Stay hydrated",
        ],
        Disease::CardiovascularDisease => &[
            "Regular cardiac check-ups",
            "Blood pressure monitoring",
            "Exercise and healthy diet",
        ],
        Disease::RespiratoryIssues => &[
            "Pulmonary function tests",
            "Avoid dust and chemical exposure",
            "Use protective equipment",
        ],
        Disease::GastrointestinalProblems => &[
            "Regular digestive health monitoring",
            "Balanced diet with adequate fiber",
            "Monitor copper and zinc intake",
        ],
        Disease::SkinDisorders => &[
            "Regular dermatological examinations",
            "Skin cancer screenings",
            "Use protective clothing",
        ],
        Disease::CancerRisk => &[
            "Regular cancer screenings",
            "Avoid tobacco and excessive alcohol",
            "Maintain healthy lifestyle",
        ],
        Disease::BoneDisease => &[
            "Bone density tests",
            "Adequate calcium and vitamin D intake",
            "Weight-bearing exercises",
        ],
    }
}

/// Advice list for a disease at the given probability. Probabilities above
/// 60 append the urgent-consultation line; above 40, the 30-day line.
pub fn for_disease(disease: Disease, probability: u8) -> Vec<String> {
    let mut out: Vec<String> = base(disease).iter().map(|s| s.to_string()).collect();
    if probability > 60 {
        out.push(URGENT.to_string());
    } else if probability > 40 {
        out.push(SCHEDULE.to_string());
    }
    out
}
