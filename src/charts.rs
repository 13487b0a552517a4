//! Chart series derivation.
//!
//! Reshapes an [`EstimatorResult`] into the two display series the
//! calculator shows: a two-slice savings breakdown and a synthetic twelve
//! month projection. Both derivations are plain arithmetic redistribution
//! of the annual totals; the structs derive `Serialize` so any chart
//! consumer can take them as JSON.
//!
//! The "not yet calculated" state is `None`, which derives to an empty
//! series, distinct from a computed result whose values happen to be zero.

use crate::EstimatorResult;
use serde::Serialize;

/// Fixed calendar-month labels for the projection series.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One labeled slice of the savings breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    /// Annual liters for this slice
    pub value: i64,
}

/// Projected savings for a single month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySavings {
    pub month: &'static str,
    pub rainwater_liters: i64,
    pub grey_water_liters: i64,
}

/// Derive the two-slice breakdown for a proportion chart.
///
/// Always exactly two slices, rainwater first, for a computed result;
/// empty before any calculation has run.
pub fn savings_breakdown(result: Option<&EstimatorResult>) -> Vec<ChartSlice> {
    let Some(result) = result else {
        return Vec::new();
    };

    vec![
        ChartSlice {
            label: "Rainwater Harvest",
            value: result.rainwater_harvest_liters,
        },
        ChartSlice {
            label: "Greywater Reuse",
            value: result.grey_water_reuse_liters,
        },
    ]
}

/// Redistribute the annual totals into a uniform twelve-month series.
///
/// A flat approximation for a trend chart: every month gets one twelfth of
/// each annual component, rounded to whole liters. Rainfall seasonality is
/// not modeled.
pub fn monthly_projection(result: Option<&EstimatorResult>) -> Vec<MonthlySavings> {
    let Some(result) = result else {
        return Vec::new();
    };

    let rainwater = (result.rainwater_harvest_liters as f64 / 12.0).round() as i64;
    let grey_water = (result.grey_water_reuse_liters as f64 / 12.0).round() as i64;

    MONTH_LABELS
        .iter()
        .map(|&month| MonthlySavings {
            month,
            rainwater_liters: rainwater,
            grey_water_liters: grey_water,
        })
        .collect()
}
