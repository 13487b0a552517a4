//! # Water Savings Estimator
//!
//! The core of the calculator: a fixed set of arithmetic formulas that turn
//! one household's parameters into a projected annual savings record.
//!
//! ## Model Characteristics
//!
//! ### Rainwater Harvest
//! Annual harvest is `roof area (m²) × rainfall (mm) × 0.8`. One millimeter
//! of rain over one square meter is one liter, so the product is liters per
//! year before losses; the 0.8 catchment-efficiency factor models runoff,
//! evaporation, and first-flush discard losses and is not configurable.
//!
//! ### Greywater Reuse
//! Each selected source contributes its catalog yield per person per day.
//! The household total is annualized over 365 days. Unknown source ids
//! resolve to nothing; a stale or mistyped id never fails a calculation.
//!
//! ### Coverage, Tank, Cost
//! - Coverage is total savings over annual demand, capped at 100% and
//!   defined as 0 when demand is zero (no division-by-zero surprises).
//! - The recommended tank holds roughly a quarter of the annual harvest
//!   (three monsoon months of inflow), rounded up to the next 1000 L.
//! - Cost savings price the total at the per-1000 L municipal rate.
//!
//! ### Accuracy Trade-offs
//! This is a planning estimate, not a hydrological simulation:
//! - ✅ **Deterministic**: identical input always yields identical output
//! - ✅ **Total**: all-zero input produces an all-zero result, not an error
//! - ❌ **No seasonality**: rainfall is treated as a uniform annual figure
//! - ❌ **No demand curve**: household usage is a flat per-person rate
//!
//! Inputs are taken at face value; the estimator neither clamps nor rejects
//! negative values. The parsing surface in [`crate::input`] is where raw
//! user entries get defaulted into sane ranges.

use crate::{catalog, EstimatorInput, EstimatorResult};

/// Fraction of roof runoff that actually reaches storage.
///
/// Fixed campaign-wide factor covering evaporation, overflow, and
/// first-flush discard losses.
const CATCHMENT_EFFICIENCY: f64 = 0.8;

/// Days used to annualize daily rates.
const DAYS_PER_YEAR: f64 = 365.0;

/// The recommended tank stores this fraction of the annual harvest.
const TANK_SHARE_OF_HARVEST: f64 = 0.25;

/// Tank recommendations are rounded up to this increment.
const TANK_INCREMENT_LITERS: f64 = 1000.0;

/// Compute the projected annual savings for one household.
///
/// Pure and total: no IO, no randomness, no hidden state, and no error
/// path. The caller owns defaulting (see [`crate::input`]); whatever finite
/// numbers arrive here flow through the formula unchanged.
///
/// # Example
/// ```
/// use jalraksha_lib::{estimator, EstimatorInput};
/// use std::collections::BTreeSet;
///
/// let input = EstimatorInput {
///     roof_area_sq_meters: 100.0,
///     annual_rainfall_mm: 1200.0,
///     household_size: 4,
///     daily_usage_per_person_liters: 150.0,
///     grey_water_sources: BTreeSet::from(["bathroom_sink".to_string(), "shower".to_string()]),
///     water_cost_per_thousand_liters: 20.0,
/// };
///
/// let result = estimator::compute(&input);
/// assert_eq!(result.grey_water_reuse_liters, 160_600);
/// assert_eq!(result.household_coverage_percent, 100.0);
/// ```
pub fn compute(input: &EstimatorInput) -> EstimatorResult {
    let household_size = input.household_size as f64;

    // Annual rainwater harvest: m² × mm × efficiency = liters
    let rainwater_harvest =
        input.roof_area_sq_meters * input.annual_rainfall_mm * CATCHMENT_EFFICIENCY;

    // Daily greywater for the whole household; unknown ids contribute nothing
    let daily_grey_water: f64 = input
        .grey_water_sources
        .iter()
        .filter_map(|id| catalog::lookup(id))
        .map(|source| source.liters_per_person_per_day)
        .sum::<f64>()
        * household_size;

    let annual_grey_water = daily_grey_water * DAYS_PER_YEAR;

    // Totals are combined before any rounding
    let total_savings = rainwater_harvest + annual_grey_water;
    let annual_demand = input.daily_usage_per_person_liters * household_size * DAYS_PER_YEAR;

    // Coverage: capped at 100%, and 0 (not NaN) when demand is zero
    let coverage_percent = if annual_demand > 0.0 {
        (total_savings / annual_demand * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    // Tank sized for a quarter of the harvest, rounded up to whole 1000 L
    let tank_size =
        (rainwater_harvest * TANK_SHARE_OF_HARVEST / TANK_INCREMENT_LITERS).ceil()
            * TANK_INCREMENT_LITERS;

    let cost_savings = total_savings / 1000.0 * input.water_cost_per_thousand_liters;

    EstimatorResult {
        rainwater_harvest_liters: rainwater_harvest.round() as i64,
        grey_water_reuse_liters: annual_grey_water.round() as i64,
        total_savings_liters: total_savings.round() as i64,
        household_coverage_percent: round_to_tenth(coverage_percent),
        tank_size_liters: tank_size as i64,
        cost_savings: cost_savings.round() as i64,
    }
}

/// Round a percentage to one decimal place for presentation.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
