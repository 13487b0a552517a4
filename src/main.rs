//! # JalRaksha Calculator Entry Point
//!
//! This binary is the campaign's terminal front end for the water savings
//! calculator: it collects a submission from the command line, runs the
//! estimator, renders the breakdown and monthly charts, prints the
//! recommendations, and can write a pledge certificate alongside the
//! projection. It can also replay the campaign's headline counters.

// Test modules
#[cfg(test)]
mod tests;

// Re-export library types for internal use
pub use jalraksha_lib::{EstimatorInput, EstimatorResult};

use anyhow::bail;
use chrono::Local;
use jalraksha_lib::{advice, certificate, charts, config::Config, counter, estimator, renderer};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use std::{env, thread};

/// Everything a command line can hand the calculator: the calculator form
/// fields plus the optional pledge details for a certificate.
#[derive(Debug, Default, PartialEq)]
struct CliSubmission {
    raw: jalraksha_lib::input::RawSubmission,
    email: String,
    commitments: Vec<String>,
}

/// Parse `key=value` arguments into a submission.
///
/// Flags (`--json`, `--certificate`, ...) are handled separately by the
/// caller; anything else must be one of the known field keys.
fn parse_fields(args: &[String]) -> anyhow::Result<CliSubmission> {
    let mut submission = CliSubmission::default();

    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--certificate" {
            // Flag value consumed by the caller
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }

        let Some((key, value)) = arg.split_once('=') else {
            bail!("expected FIELD=VALUE, got {arg:?} (try --help)");
        };

        match key {
            "roof_area" => submission.raw.roof_area = value.to_string(),
            "rainfall" => submission.raw.annual_rainfall = value.to_string(),
            "household" => submission.raw.household_size = value.to_string(),
            "daily_usage" => submission.raw.daily_water_usage = value.to_string(),
            "water_cost" => submission.raw.water_cost = value.to_string(),
            "sources" => {
                submission.raw.grey_water_sources = value
                    .split(',')
                    .filter(|id| !id.trim().is_empty())
                    .map(|id| id.trim().to_string())
                    .collect::<BTreeSet<String>>();
            }
            "email" => submission.email = value.to_string(),
            "commitments" => {
                submission.commitments = value
                    .split(',')
                    .filter(|id| !id.trim().is_empty())
                    .map(|id| id.trim().to_string())
                    .collect();
            }
            _ => bail!("unknown field {key:?} (try --help)"),
        }
    }

    Ok(submission)
}

/// Find the value following a `--flag`.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .cloned()
}

fn print_usage() {
    println!("Usage: jalraksha [OPTIONS] [FIELD=VALUE]...");
    println!();
    println!("Fields:");
    println!("  roof_area=100            Roof area in square meters (required)");
    println!("  rainfall=1200            Annual rainfall in millimeters (required)");
    println!("  household=4              People in the household (default 1)");
    println!("  daily_usage=150          Liters per person per day (default 150)");
    println!("  sources=shower,...       Greywater sources: bathroom_sink, shower,");
    println!("                           washing_machine, kitchen_safe");
    println!("  water_cost=20            Cost per 1000 L (default 20)");
    println!("  email=you@example.com    Pledger email (for --certificate)");
    println!("  commitments=fix_leaks,.. Pledge commitments (for --certificate)");
    println!();
    println!("Options:");
    println!("  --json                Print the projection as JSON");
    println!("  --certificate <NAME>  Write a pledge certificate for NAME");
    println!("  --stats               Show the campaign impact counters");
    println!("  --help                Show this help");
}

/// Replay the homepage count-up: sixty frames over two seconds, landing
/// exactly on the campaign targets.
fn show_campaign_stats() {
    const STEPS: u32 = 60;
    const DURATION: Duration = Duration::from_millis(2000);

    for step in 0..=STEPS {
        let frame = counter::interpolate(&counter::CAMPAIGN_TARGETS, step as f64 / STEPS as f64);
        print!(
            "\r{:>5} pledges | {:>6} L saved | {:>3} campaigns | {:>5} people reached",
            frame.pledges, frame.water_saved_liters, frame.campaigns, frame.people_reached
        );
        let _ = std::io::stdout().flush();
        thread::sleep(DURATION / STEPS);
    }
    println!();
}

fn print_summary(result: &EstimatorResult, config: &Config) {
    let currency = &config.campaign.currency_symbol;
    println!("{} Water Savings Projection", config.campaign.name);
    println!();
    println!("  Rainwater harvest:  {:>9} L/year", result.rainwater_harvest_liters);
    println!("  Greywater reuse:    {:>9} L/year", result.grey_water_reuse_liters);
    println!("  Total savings:      {:>9} L/year", result.total_savings_liters);
    println!("  Household coverage: {:>8}%", result.household_coverage_percent);
    println!("  Recommended tank:   {:>9} L", result.tank_size_liters);
    println!("  Cost savings:       {:>8}{}/year", currency, result.cost_savings);
    println!();
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") || args.is_empty() {
        print_usage();
        return Ok(());
    }

    if args.iter().any(|arg| arg == "--stats") {
        show_campaign_stats();
        return Ok(());
    }

    let json_output = args.iter().any(|arg| arg == "--json");
    let certificate_name = flag_value(&args, "--certificate");
    let submission = parse_fields(&args)?;
    let config = Config::load();

    // The calculate gate: same rule the campaign's form enforces
    if !submission.raw.is_complete() {
        eprintln!("Roof area and annual rainfall are required to calculate savings.");
        eprintln!();
        print_usage();
        return Ok(());
    }

    let input = submission.raw.to_input();
    let result = estimator::compute(&input);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result, &config);
        renderer::draw_breakdown(&charts::savings_breakdown(Some(&result)), &config);
        println!();
        renderer::draw_monthly(&charts::monthly_projection(Some(&result)), &config);
        println!();
        println!("Recommendations:");
        for line in advice::recommendations(&result, &config.campaign.currency_symbol) {
            println!("  - {}", line);
        }
    }

    if let Some(name) = certificate_name {
        let pledge = certificate::Pledge {
            name,
            email: submission.email.clone(),
            commitments: submission.commitments.clone(),
        };
        let path = certificate::write_to(
            Path::new("."),
            &pledge,
            Some(&result),
            Local::now().date_naive(),
            &config,
        )?;
        println!("Certificate written to {}", path.display());
    }

    Ok(())
}
