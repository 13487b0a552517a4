//! # JalRaksha Water Savings Core Library
//!
//! This library provides the data model and deterministic logic behind the
//! JalRaksha campaign's water savings calculator. It estimates how much of a
//! household's annual water demand can be offset by rainwater harvesting and
//! greywater reuse, and reshapes those estimates into chart-ready series.
//!
//! ## Design Philosophy
//!
//! ### Pure Computation
//! - **No IO in the core**: the estimator is a total, synchronous function
//!   over its input record. It never reads files, never touches the network,
//!   and never fails: degenerate input produces degenerate-but-valid output
//!   (zeros, 0% coverage) rather than errors.
//! - **Stateless invocations**: an [`EstimatorInput`] is built once per
//!   calculation and discarded after producing an [`EstimatorResult`].
//!   Nothing is cached or shared between submissions, so every call is
//!   trivially safe to repeat or run concurrently.
//! - **Serialization-friendly**: both records derive `Serialize` /
//!   `Deserialize` so results can be exported as JSON snapshots for the
//!   certificate writer or any external chart consumer.
//!
//! ### Data Flow
//! 1. **Collect**: [`input::RawSubmission`] holds raw form strings
//! 2. **Parse**: unparseable fields fall back to documented defaults
//! 3. **Compute**: [`estimator::compute`] applies the fixed formula set
//! 4. **Derive**: [`charts`] reshapes the result for display
//! 5. **Present**: terminal charts, recommendations, certificate snapshot
//!
//! ## Core Types
//!
//! The library exports two primary records:
//! - [`EstimatorInput`]: parsed household parameters for one calculation
//! - [`EstimatorResult`]: the derived annual savings projection

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Module declarations
pub mod advice;
pub mod catalog;
pub mod certificate;
pub mod charts;
pub mod config;
pub mod counter;
pub mod estimator;
pub mod input;
pub mod renderer;

/// Household parameters for a single savings calculation.
///
/// Callers are responsible for substituting the documented defaults for
/// unparseable fields before constructing this record, normally by going
/// through [`input::RawSubmission::to_input`]. The estimator itself takes
/// these values at face value.
///
/// Greywater sources are stored as ids against the table in [`catalog`];
/// set semantics collapse duplicates, and ids the catalog does not know are
/// silently ignored during computation.
///
/// # Example
/// ```
/// use jalraksha_lib::EstimatorInput;
/// use std::collections::BTreeSet;
///
/// let input = EstimatorInput {
///     roof_area_sq_meters: 100.0,
///     annual_rainfall_mm: 1200.0,
///     household_size: 4,
///     daily_usage_per_person_liters: 150.0,
///     grey_water_sources: BTreeSet::from(["shower".to_string()]),
///     water_cost_per_thousand_liters: 20.0,
/// };
///
/// assert_eq!(input.household_size, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatorInput {
    /// Catchment (roof) area in square meters
    pub roof_area_sq_meters: f64,
    /// Annual rainfall in millimeters
    pub annual_rainfall_mm: f64,
    /// Number of people in the household
    pub household_size: u32,
    /// Daily water usage per person in liters
    pub daily_usage_per_person_liters: f64,
    /// Selected greywater source ids (see [`catalog::GREY_WATER_SOURCES`])
    pub grey_water_sources: BTreeSet<String>,
    /// Municipal water cost per 1000 liters, in local currency
    pub water_cost_per_thousand_liters: f64,
}

/// Projected annual savings derived from one [`EstimatorInput`].
///
/// All liter figures are annual totals rounded to whole liters; the
/// coverage percentage carries one decimal place and is clamped to
/// `[0, 100]`. Because the three liter fields are rounded independently
/// from the unrounded intermediates, `total_savings_liters` can differ
/// from the sum of the two component fields by one liter.
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
///     grey_water_sources: BTreeSet::new(),
///     water_cost_per_thousand_liters: 20.0,
/// };
///
/// let result = estimator::compute(&input);
/// assert_eq!(result.rainwater_harvest_liters, 96_000);
/// assert_eq!(result.tank_size_liters, 24_000);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatorResult {
    /// Annual rainwater harvest in liters
    pub rainwater_harvest_liters: i64,
    /// Annual greywater reuse in liters
    pub grey_water_reuse_liters: i64,
    /// Combined annual savings in liters
    pub total_savings_liters: i64,
    /// Share of annual household demand covered, percent in [0, 100]
    pub household_coverage_percent: f64,
    /// Recommended storage tank size in liters (multiple of 1000)
    pub tank_size_liters: i64,
    /// Annual water-bill savings in local currency units
    pub cost_savings: i64,
}
