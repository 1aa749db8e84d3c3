use hmpi_core::model::SampleRecord;
use hmpi_core::risk::outcome::{RiskAssessment, ScreeningResult};
use hmpi_core::summary::DatasetSummary;

/// Full single-sample view: indices, tiers, per-metal standing.
pub fn print_sample(record: &SampleRecord) {
    println!("=== {} ===\n", record.location);
    println!(
        "  Coordinates: {}, {}{}",
        record.latitude,
        record.longitude,
        match record.date {
            Some(ref d) => format!("   Date: {d}"),
            None => String::new(),
        }
    );
    println!();

    let idx = &record.indices;
    println!(
        "  HPI                   {:<10} {}",
        idx.hpi.to_string(),
        idx.status
    );
    println!(
        "  HEI                   {:<10} {}",
        idx.hei.to_string(),
        idx.hei_level
    );
    println!(
        "  Contamination degree  {:<10} {}",
        idx.contamination_degree.to_string(),
        idx.contamination_level
    );
    println!();

    if !idx.contributions.is_empty() {
        println!(
            "  {:<10} {:>14} {:>10} {:>12}",
            "Metal", "Concentration", "Limit", "% of limit"
        );
        for c in &idx.contributions {
            let marker = if c.exceeds { "  <-- exceeds" } else { "" };
            println!(
                "  {:<10} {:>14} {:>10} {:>12}{}",
                c.metal.to_string(),
                c.concentration.to_string(),
                c.limit.to_string(),
                c.pct_of_limit.to_string(),
                marker
            );
        }
        println!();
    }

    let exceeding: Vec<String> = idx.exceedances().map(|c| c.metal.to_string()).collect();
    if exceeding.is_empty() {
        println!("  All measured concentrations are within the limits.");
    } else {
        println!("  Above permissible limits: {}", exceeding.join(", "));
    }
}

/// Compact one-line-per-sample listing for imports.
pub fn print_records(records: &[SampleRecord]) {
    let max_name = records
        .iter()
        .map(|r| r.location.len())
        .max()
        .unwrap_or(10)
        .max("Location".len());

    println!(
        "  {:<width$}  {:>8}  {:>8}  {:>8}  Status",
        "Location",
        "HPI",
        "HEI",
        "Cd",
        width = max_name
    );
    for record in records {
        println!(
            "  {:<width$}  {:>8}  {:>8}  {:>8}  {}",
            record.location,
            record.indices.hpi.to_string(),
            record.indices.hei.to_string(),
            record.indices.contamination_degree.to_string(),
            record.indices.status,
            width = max_name
        );
    }
}

/// Disease-risk table plus the deterministic screening block.
pub fn print_risk(assessment: &RiskAssessment, screening: &ScreeningResult) {
    println!(
        "  Overall risk: {}% ({})\n",
        assessment.overall_probability, assessment.overall_level
    );

    let max_name = assessment
        .risks
        .iter()
        .map(|r| r.disease.label().len())
        .max()
        .unwrap_or(10);

    for risk in &assessment.risks {
        println!(
            "  {:<width$}  {:>3}%  {}",
            risk.disease.label(),
            risk.probability,
            risk.level,
            width = max_name
        );
    }
    println!();

    // Advice only for the elevated outcomes, as on the dashboard.
    let elevated: Vec<_> = assessment.above(30).collect();
    if !elevated.is_empty() {
        println!("  Recommendations:");
        for risk in elevated {
            println!("    {} ({}% risk):", risk.disease, risk.probability);
            for rec in &risk.recommendations {
                println!("      - {rec}");
            }
        }
        println!();
    }

    println!(
        "  Exposure screening: {}% ({})",
        screening.score_pct, screening.level
    );
    for factor in &screening.factors {
        println!(
            "    {} at {}% of its permissible limit",
            factor.metal, factor.pct_of_limit
        );
    }
}

/// Dataset-level statistics.
pub fn print_summary(summary: &DatasetSummary) {
    if summary.sample_count == 0 {
        println!("  No samples in the dataset.");
        return;
    }

    println!("  Samples: {}", summary.sample_count);
    println!(
        "  Average HPI: {} (std dev {:.2})\n",
        summary.average_hpi, summary.std_dev_hpi
    );

    println!("  Quality tiers:");
    println!("    Excellent  {:>4}", summary.tiers.excellent);
    println!("    Good       {:>4}", summary.tiers.good);
    println!("    Poor       {:>4}", summary.tiers.poor);
    println!("    Very Poor  {:>4}", summary.tiers.very_poor);
    println!();

    println!("  Most polluted locations:");
    for ranked in summary.ranked.iter().take(5) {
        println!(
            "    {:<30} HPI {:>8}  {}",
            ranked.location,
            ranked.hpi.to_string(),
            ranked.status
        );
    }
}
