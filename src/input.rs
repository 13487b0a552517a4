//! # Form Input Surface
//!
//! Bridges raw form strings and the typed [`EstimatorInput`] record. The
//! estimator never sees a parse failure: every numeric field carries a
//! documented default that kicks in when the entry is missing, unparseable,
//! non-finite, or zero.
//!
//! ## Defaulting Semantics
//!
//! A field falls back to its default not just on garbage but also on a
//! literal `0`. For roof area and rainfall the default is itself zero, so
//! those fields simply read as "no system". For household size, daily
//! usage, and water cost, an intentional zero becomes the default; saved
//! submissions rely on this coalescing rule staying put.
//!
//! | field | default |
//! |---|---|
//! | roof area | 0 m² |
//! | annual rainfall | 0 mm |
//! | household size | 1 person |
//! | daily usage per person | 150 L |
//! | water cost per 1000 L | 20 |
//!
//! Completeness (`roof area` and `rainfall` non-empty) is a UX gate for the
//! calculate button, not a correctness requirement: the estimator tolerates
//! an incomplete submission and returns a zero-valued projection.

use crate::EstimatorInput;
use std::collections::BTreeSet;

/// Household size assumed when the field is blank, unparseable, or ≤ 0.
pub const DEFAULT_HOUSEHOLD_SIZE: u32 = 1;

/// Daily per-person usage assumed when the field is blank or unparseable.
/// Matches the urban Indian household average the campaign quotes.
pub const DEFAULT_DAILY_USAGE_LITERS: f64 = 150.0;

/// Municipal water cost per 1000 L assumed when the field is blank.
pub const DEFAULT_WATER_COST: f64 = 20.0;

/// Raw calculator form state: everything still a string, exactly as typed.
///
/// Selected greywater sources are kept as an id set (checkboxes collapse to
/// set semantics); unknown ids are carried through untouched and discarded
/// later by the estimator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSubmission {
    pub roof_area: String,
    pub annual_rainfall: String,
    pub household_size: String,
    pub daily_water_usage: String,
    pub grey_water_sources: BTreeSet<String>,
    pub water_cost: String,
}

impl RawSubmission {
    /// The calculate gate: both mandatory fields carry a non-empty entry.
    ///
    /// Purely a UX affordance: [`RawSubmission::to_input`] works fine on an
    /// incomplete submission, it just produces a zero-harvest projection.
    pub fn is_complete(&self) -> bool {
        !self.roof_area.trim().is_empty() && !self.annual_rainfall.trim().is_empty()
    }

    /// Parse the submission into a typed input, substituting the documented
    /// default for every field that does not parse to a usable number.
    ///
    /// Never fails; this is the single place defaulting happens.
    pub fn to_input(&self) -> EstimatorInput {
        EstimatorInput {
            roof_area_sq_meters: parse_or(&self.roof_area, 0.0),
            annual_rainfall_mm: parse_or(&self.annual_rainfall, 0.0),
            household_size: parse_count_or(&self.household_size, DEFAULT_HOUSEHOLD_SIZE),
            daily_usage_per_person_liters: parse_or(
                &self.daily_water_usage,
                DEFAULT_DAILY_USAGE_LITERS,
            ),
            grey_water_sources: self.grey_water_sources.clone(),
            water_cost_per_thousand_liters: parse_or(&self.water_cost, DEFAULT_WATER_COST),
        }
    }
}

/// Parse a numeric field, falling back to `default` when the entry is
/// unparseable, non-finite, or zero (the form's coalescing rule).
fn parse_or(raw: &str, default: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => default,
    }
}

/// Parse a person count, falling back to `default` when the entry is
/// unparseable or not positive.
fn parse_count_or(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => value.min(u32::MAX as i64) as u32,
        _ => default,
    }
}
