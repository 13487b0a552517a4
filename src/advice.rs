//! Recommendation lines shown alongside a computed projection.

use crate::EstimatorResult;

/// Coverage band a projection falls into, by percent of demand covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageTier {
    /// 80% or more of demand covered
    Excellent,
    /// 50% to 80% of demand covered
    Good,
    /// Below 50%
    NeedsWork,
}

impl CoverageTier {
    pub fn for_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            CoverageTier::Excellent
        } else if percent >= 50.0 {
            CoverageTier::Good
        } else {
            CoverageTier::NeedsWork
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CoverageTier::Excellent => "Excellent! Your system can cover most of your water needs.",
            CoverageTier::Good => "Good coverage! Consider additional water saving measures.",
            CoverageTier::NeedsWork => {
                "Consider increasing roof area or adding more greywater sources for better coverage."
            }
        }
    }
}

/// Assemble the recommendation lines for a projection.
///
/// Deterministic string building only; `currency_symbol` comes from the
/// campaign config so kiosks outside India can relabel the savings line.
pub fn recommendations(result: &EstimatorResult, currency_symbol: &str) -> Vec<String> {
    vec![
        format!(
            "Install a {}L storage tank for optimal rainwater collection",
            result.tank_size_liters
        ),
        format!(
            "You could save approximately {}{} annually on water bills",
            currency_symbol, result.cost_savings
        ),
        CoverageTier::for_percent(result.household_coverage_percent)
            .message()
            .to_string(),
    ]
}
