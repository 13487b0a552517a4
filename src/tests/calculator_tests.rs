//! # Calculator Pipeline Test Suite
//!
//! End-to-end scenarios for the savings calculator: raw form strings through
//! parsing, estimation, chart derivation, and certificate output. These
//! complement the unit tests that live alongside each library module by
//! exercising the same path the binary takes.

use jalraksha_lib::config::Config;
use jalraksha_lib::input::RawSubmission;
use jalraksha_lib::{catalog, certificate, charts, estimator, EstimatorResult};
use std::collections::BTreeSet;

use crate::{parse_fields, CliSubmission};

/// Test helper: the worked example the campaign uses in its materials,
/// a four-person household with a 100 m² roof in a 1200 mm rainfall zone.
fn reference_submission(sources: &[&str]) -> RawSubmission {
    RawSubmission {
        roof_area: "100".to_string(),
        annual_rainfall: "1200".to_string(),
        household_size: "4".to_string(),
        daily_water_usage: "150".to_string(),
        grey_water_sources: sources.iter().map(|id| id.to_string()).collect(),
        water_cost: "20".to_string(),
    }
}

#[test]
fn reference_household_rainwater_only() {
    let result = estimator::compute(&reference_submission(&[]).to_input());

    assert_eq!(
        result,
        EstimatorResult {
            rainwater_harvest_liters: 96_000,
            grey_water_reuse_liters: 0,
            total_savings_liters: 96_000,
            household_coverage_percent: 43.8,
            tank_size_liters: 24_000,
            cost_savings: 1_920,
        }
    );
}

#[test]
fn reference_household_with_sink_and_shower() {
    let result =
        estimator::compute(&reference_submission(&["bathroom_sink", "shower"]).to_input());

    // (30 + 80) × 4 × 365 = 160 600 L of greywater on top of the harvest;
    // coverage clamps at 100% (unclamped it would be ~117.2%)
    assert_eq!(result.grey_water_reuse_liters, 160_600);
    assert_eq!(result.total_savings_liters, 256_600);
    assert_eq!(result.household_coverage_percent, 100.0);
}

#[test]
fn defaults_flow_through_the_whole_pipeline() {
    // Only the mandatory fields filled in, everything else blank
    let raw = RawSubmission {
        roof_area: "100".to_string(),
        annual_rainfall: "1200".to_string(),
        ..RawSubmission::default()
    };
    assert!(raw.is_complete());

    let result = estimator::compute(&raw.to_input());

    // household 1, usage 150, cost 20: demand = 54 750 L, harvest = 96 000 L
    assert_eq!(result.rainwater_harvest_liters, 96_000);
    assert_eq!(result.household_coverage_percent, 100.0);
    assert_eq!(result.cost_savings, 1_920);
}

#[test]
fn rounded_total_stays_within_one_liter_of_component_sum() {
    // Fractional yields force the independent roundings apart
    let mut raw = reference_submission(&["shower"]);
    raw.roof_area = "97.3".to_string();
    raw.annual_rainfall = "1133.7".to_string();

    let result = estimator::compute(&raw.to_input());
    let component_sum = result.rainwater_harvest_liters + result.grey_water_reuse_liters;
    assert!(
        (result.total_savings_liters - component_sum).abs() <= 1,
        "total {} drifted from component sum {}",
        result.total_savings_liters,
        component_sum
    );
}

#[test]
fn negative_inputs_propagate_but_coverage_stays_bounded() {
    // Hand-built input that bypasses the parsing surface entirely
    let input = jalraksha_lib::EstimatorInput {
        roof_area_sq_meters: -100.0,
        annual_rainfall_mm: 1200.0,
        household_size: 4,
        daily_usage_per_person_liters: 150.0,
        grey_water_sources: BTreeSet::new(),
        water_cost_per_thousand_liters: 20.0,
    };

    let result = estimator::compute(&input);
    assert_eq!(result.rainwater_harvest_liters, -96_000);
    assert!((0.0..=100.0).contains(&result.household_coverage_percent));
}

#[test]
fn every_catalog_source_contributes_its_yield() {
    for source in &catalog::GREY_WATER_SOURCES {
        let result = estimator::compute(&reference_submission(&[source.id]).to_input());

        let expected = (source.liters_per_person_per_day * 4.0 * 365.0).round() as i64;
        assert_eq!(
            result.grey_water_reuse_liters, expected,
            "source {} produced the wrong annual yield",
            source.id
        );
    }
}

#[test]
fn charts_follow_the_result_through_the_pipeline() {
    let result = estimator::compute(&reference_submission(&[]).to_input());

    let slices = charts::savings_breakdown(Some(&result));
    assert_eq!(slices[0].value, 96_000);

    let months = charts::monthly_projection(Some(&result));
    assert_eq!(months.len(), 12);
    assert!(months.iter().all(|m| m.rainwater_liters == 8_000));
    assert!(months.iter().all(|m| m.grey_water_liters == 0));
}

#[test]
fn json_snapshot_round_trips() {
    let result = estimator::compute(&reference_submission(&["kitchen_safe"]).to_input());

    let json = serde_json::to_string_pretty(&result).unwrap();
    let restored: EstimatorResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, restored);
}

#[test]
fn certificate_snapshot_carries_the_projection() {
    let result = estimator::compute(&reference_submission(&[]).to_input());
    let pledge = certificate::Pledge {
        name: "Rahul Patel".to_string(),
        email: "rahul@example.com".to_string(),
        commitments: vec!["rainwater_harvest".to_string()],
    };
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = certificate::write_to(dir.path(), &pledge, Some(&result), date, &Config::default())
        .unwrap();

    let body = std::fs::read_to_string(path).unwrap();
    assert!(body.contains("Rahul Patel"));
    assert!(body.contains("rainwater harvesting in my home/community"));
    assert!(body.contains("96000 L"));
    assert!(body.contains("43.8% of household demand"));
}

// -- Command line field parsing --

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn cli_fields_populate_the_submission() {
    let parsed = parse_fields(&args(&[
        "roof_area=100",
        "rainfall=1200",
        "household=4",
        "sources=shower, washing_machine",
        "email=priya@example.com",
    ]))
    .unwrap();

    assert_eq!(parsed.raw.roof_area, "100");
    assert_eq!(parsed.raw.household_size, "4");
    assert!(parsed.raw.grey_water_sources.contains("shower"));
    assert!(parsed.raw.grey_water_sources.contains("washing_machine"));
    assert_eq!(parsed.email, "priya@example.com");
}

#[test]
fn cli_flags_are_not_fields() {
    let parsed = parse_fields(&args(&[
        "--json",
        "--certificate",
        "Priya Sharma",
        "roof_area=100",
    ]))
    .unwrap();

    assert_eq!(parsed.raw.roof_area, "100");
    // The certificate name is a flag value, not a FIELD=VALUE pair
    assert_eq!(parsed, CliSubmission {
        raw: RawSubmission {
            roof_area: "100".to_string(),
            ..RawSubmission::default()
        },
        email: String::new(),
        commitments: Vec::new(),
    });
}

#[test]
fn cli_rejects_unknown_fields() {
    assert!(parse_fields(&args(&["pool_volume=50"])).is_err());
    assert!(parse_fields(&args(&["just-a-word"])).is_err());
}

#[test]
fn cli_duplicate_sources_collapse() {
    let parsed = parse_fields(&args(&["sources=shower,shower,shower"])).unwrap();
    assert_eq!(parsed.raw.grey_water_sources.len(), 1);
}
