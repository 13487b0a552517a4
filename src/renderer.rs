//! # Terminal Chart Rendering
//!
//! Renders the derived chart series to the terminal: horizontal proportion
//! bars for the savings breakdown and a twelve-column bar chart for the
//! monthly projection. Layout is driven by the `[display]` section of the
//! configuration; the data always comes in pre-derived from [`crate::charts`].

use crate::charts::{ChartSlice, MonthlySavings};
use crate::config::Config;

/// Space reserved on the left of the monthly chart for liter labels.
const Y_AXIS_WIDTH: usize = 9;

/// Columns each month occupies: rainwater bar, greywater bar, two gaps.
const MONTH_SLOT: usize = 4;

/// Scale a value into a bar length of at most `span` cells.
///
/// Zero `max` means an all-zero series; every bar collapses to nothing
/// rather than dividing by zero.
fn scaled_length(value: i64, max: i64, span: usize) -> usize {
    if max <= 0 || value <= 0 {
        return 0;
    }
    let cells = (value as f64 / max as f64 * span as f64).round() as usize;
    cells.min(span)
}

/// Render the savings breakdown as labeled proportion bars.
pub fn draw_breakdown(slices: &[ChartSlice], config: &Config) {
    if slices.is_empty() {
        println!("No projection calculated yet.");
        return;
    }

    let width = config.display.chart_width;
    let total: i64 = slices.iter().map(|slice| slice.value).sum();
    let label_width = slices
        .iter()
        .map(|slice| slice.label.len())
        .max()
        .unwrap_or(0);

    println!("Water Savings Breakdown");
    for slice in slices {
        let filled = scaled_length(slice.value, total, width);
        let share = if total > 0 {
            slice.value as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        let mut bar = String::with_capacity(width);
        bar.extend(std::iter::repeat('█').take(filled));
        bar.extend(std::iter::repeat('░').take(width - filled));

        println!(
            "{:<label_width$}  {}  {:>5.1}%  {:>9} L",
            slice.label, bar, share, slice.value
        );
    }
}

/// Render the monthly projection as a twelve-column bar chart.
///
/// Each month gets a rainwater column and a greywater column; the y-axis
/// is labeled in liters at the top, midpoint, and baseline, grid assembly
/// mirroring the breakdown bars' character style.
pub fn draw_monthly(months: &[MonthlySavings], config: &Config) {
    if months.is_empty() {
        println!("No projection calculated yet.");
        return;
    }

    let rows = config.display.chart_rows.max(2);
    let max_value = months
        .iter()
        .flat_map(|m| [m.rainwater_liters, m.grey_water_liters])
        .max()
        .unwrap_or(0);

    let chart_width = months.len() * MONTH_SLOT;
    let mut grid = vec![vec![' '; Y_AXIS_WIDTH + chart_width]; rows];

    // Y-axis labels at the top, midpoint, and baseline
    for (row, value) in [
        (0, max_value),
        (rows / 2, max_value / 2),
        (rows - 1, 0),
    ] {
        let label = format!("{:>7} ", value);
        for (i, ch) in label.chars().enumerate().take(Y_AXIS_WIDTH - 1) {
            grid[row][i] = ch;
        }
        grid[row][Y_AXIS_WIDTH - 1] = '│';
    }
    for row in grid.iter_mut() {
        if row[Y_AXIS_WIDTH - 1] == ' ' {
            row[Y_AXIS_WIDTH - 1] = '│';
        }
    }

    // Fill each month's two bars from the baseline up
    for (index, month) in months.iter().enumerate() {
        let column = Y_AXIS_WIDTH + index * MONTH_SLOT;
        let rain_height = scaled_length(month.rainwater_liters, max_value, rows);
        let grey_height = scaled_length(month.grey_water_liters, max_value, rows);

        for level in 0..rain_height {
            grid[rows - 1 - level][column] = '█';
        }
        for level in 0..grey_height {
            grid[rows - 1 - level][column + 1] = '▒';
        }
    }

    println!("Monthly Water Savings Projection");
    for row in grid {
        println!("{}", row.into_iter().collect::<String>());
    }

    // Month labels below the baseline
    let mut labels = " ".repeat(Y_AXIS_WIDTH);
    for month in months {
        labels.push_str(&format!("{:<MONTH_SLOT$}", month.month));
    }
    println!("{}", labels);
    println!("{}█ Rainwater  ▒ Greywater", " ".repeat(Y_AXIS_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts;
    use crate::EstimatorResult;

    fn result() -> EstimatorResult {
        EstimatorResult {
            rainwater_harvest_liters: 96_000,
            grey_water_reuse_liters: 160_600,
            total_savings_liters: 256_600,
            household_coverage_percent: 100.0,
            tank_size_liters: 24_000,
            cost_savings: 5_132,
        }
    }

    #[test]
    fn scaled_length_is_proportional_and_bounded() {
        assert_eq!(scaled_length(50, 100, 40), 20);
        assert_eq!(scaled_length(100, 100, 40), 40);
        assert_eq!(scaled_length(0, 100, 40), 0);
        // Rounding never overshoots the span
        assert_eq!(scaled_length(999, 1000, 40), 40);
    }

    #[test]
    fn scaled_length_survives_degenerate_series() {
        assert_eq!(scaled_length(10, 0, 40), 0);
        assert_eq!(scaled_length(-5, 100, 40), 0);
    }

    #[test]
    fn draw_breakdown_handles_all_states() {
        let config = Config::default();

        draw_breakdown(&charts::savings_breakdown(Some(&result())), &config);
        draw_breakdown(&charts::savings_breakdown(None), &config);

        // All-zero projection renders empty bars, not a crash
        let zero = EstimatorResult {
            rainwater_harvest_liters: 0,
            grey_water_reuse_liters: 0,
            total_savings_liters: 0,
            household_coverage_percent: 0.0,
            tank_size_liters: 0,
            cost_savings: 0,
        };
        draw_breakdown(&charts::savings_breakdown(Some(&zero)), &config);
    }

    #[test]
    fn draw_monthly_handles_all_states() {
        let config = Config::default();

        draw_monthly(&charts::monthly_projection(Some(&result())), &config);
        draw_monthly(&charts::monthly_projection(None), &config);
    }
}
