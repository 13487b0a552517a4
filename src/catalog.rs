//! Greywater source catalog.
//!
//! Fixed table of household greywater sources with typical per-person daily
//! yields. The table is process-wide static data, never mutated; everything
//! downstream resolves source ids against it.

/// One reusable greywater source and its typical daily yield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreyWaterSource {
    /// Stable identifier used in submissions ("shower", "bathroom_sink", ...)
    pub id: &'static str,
    /// Human-readable label for forms and certificates
    pub label: &'static str,
    /// Average reusable output in liters per day per person
    pub liters_per_person_per_day: f64,
}

/// All greywater sources the calculator knows about.
///
/// Yields are campaign averages for urban Indian households. Kitchen water
/// is limited to pre-rinse output; post-wash kitchen water carries too much
/// food waste and grease to reuse without treatment.
pub const GREY_WATER_SOURCES: [GreyWaterSource; 4] = [
    GreyWaterSource {
        id: "bathroom_sink",
        label: "Bathroom Sink",
        liters_per_person_per_day: 30.0,
    },
    GreyWaterSource {
        id: "shower",
        label: "Shower/Bath",
        liters_per_person_per_day: 80.0,
    },
    GreyWaterSource {
        id: "washing_machine",
        label: "Washing Machine",
        liters_per_person_per_day: 100.0,
    },
    GreyWaterSource {
        id: "kitchen_safe",
        label: "Kitchen (Pre-rinse only)",
        liters_per_person_per_day: 20.0,
    },
];

/// Resolve a source id against the catalog.
///
/// Returns `None` for ids the catalog does not know; callers treat unknown
/// ids as contributing nothing rather than as errors.
pub fn lookup(id: &str) -> Option<&'static GreyWaterSource> {
    GREY_WATER_SOURCES.iter().find(|source| source.id == id)
}
