//! # Pledge Certificate Snapshots
//!
//! Renders a pledge (and optionally the pledger's computed savings
//! projection) into a plain-text certificate and writes it to disk. The
//! snapshot is the only artifact the campaign hands back to a pledger;
//! submissions themselves are never persisted anywhere.
//!
//! Rendering is deterministic string assembly; only the final write can
//! fail, and those failures surface through [`CertificateError`].

use crate::{config::Config, EstimatorResult};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::{fs, io};
use thiserror::Error;

/// Errors that can occur while producing a certificate file.
#[derive(Error, Debug)]
pub enum CertificateError {
    /// The pledge is missing a name, an email, or any commitment
    #[error("pledge is incomplete: name, email, and at least one commitment are required")]
    Incomplete,

    /// Writing the snapshot to disk failed
    #[error("certificate IO: {0}")]
    Io(#[from] io::Error),
}

/// One commitment a pledger can take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commitment {
    pub id: &'static str,
    pub text: &'static str,
}

/// The campaign's fixed commitment list.
pub const COMMITMENTS: [Commitment; 5] = [
    Commitment {
        id: "fix_leaks",
        text: "I will fix water leaks immediately and check for leaks regularly",
    },
    Commitment {
        id: "rainwater_harvest",
        text: "I will implement rainwater harvesting in my home/community",
    },
    Commitment {
        id: "greywater_reuse",
        text: "I will reuse greywater for irrigation and non-potable uses",
    },
    Commitment {
        id: "water_conscious",
        text: "I will be mindful of water usage in daily activities",
    },
    Commitment {
        id: "spread_awareness",
        text: "I will educate others about water conservation importance",
    },
];

/// A signed pledge, as collected by the pledge form.
///
/// Commitment ids are resolved against [`COMMITMENTS`]; unknown ids are
/// skipped during rendering, the same way the estimator skips unknown
/// greywater sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pledge {
    pub name: String,
    pub email: String,
    pub commitments: Vec<String>,
}

impl Pledge {
    /// The submit gate the pledge form enforces: a name, an email, and at
    /// least one commitment.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.commitments.is_empty()
    }

    /// Certificate filename for this pledge: spaces in the name collapse
    /// to dashes, e.g. `JalRaksha-Certificate-Priya-Sharma.txt`.
    pub fn file_name(&self, campaign_name: &str) -> String {
        let dashed: Vec<&str> = self.name.split_whitespace().collect();
        format!("{}-Certificate-{}.txt", campaign_name, dashed.join("-"))
    }
}

/// Render the certificate body as plain text.
///
/// Includes the pledger's identity, the chosen commitments, the issue
/// date, and, when a savings projection was calculated alongside the
/// pledge, the headline figures from that projection.
pub fn render(
    pledge: &Pledge,
    result: Option<&EstimatorResult>,
    date: NaiveDate,
    config: &Config,
) -> String {
    let mut lines = Vec::new();
    let campaign = &config.campaign.name;

    lines.push("CERTIFICATE OF COMMITMENT".to_string());
    lines.push(format!("{} Water Conservation Pledge", campaign));
    lines.push(String::new());
    lines.push("This certifies that".to_string());
    lines.push(String::new());
    lines.push(format!("    {}", pledge.name));
    lines.push(String::new());
    lines.push("has pledged to contribute to water conservation efforts and committed to:".to_string());
    lines.push(String::new());

    for id in &pledge.commitments {
        if let Some(commitment) = COMMITMENTS.iter().find(|c| c.id == id.as_str()) {
            lines.push(format!("  [x] {}", commitment.text));
        }
    }

    if let Some(result) = result {
        lines.push(String::new());
        lines.push("Projected annual water savings:".to_string());
        lines.push(format!(
            "  Rainwater harvest: {} L",
            result.rainwater_harvest_liters
        ));
        lines.push(format!(
            "  Greywater reuse:   {} L",
            result.grey_water_reuse_liters
        ));
        lines.push(format!(
            "  Total savings:     {} L ({}% of household demand)",
            result.total_savings_liters, result.household_coverage_percent
        ));
    }

    lines.push(String::new());
    lines.push(format!("Date: {}", date.format("%-d %B %Y")));
    lines.push(format!("{} Initiative - NSS Water Conservation Project", campaign));
    lines.push(String::new());

    lines.join("\n")
}

/// Render a certificate and write it into `dir`.
///
/// Returns the path of the written file. Fails with
/// [`CertificateError::Incomplete`] before touching the filesystem when the
/// pledge would render an unsigned certificate.
pub fn write_to(
    dir: &Path,
    pledge: &Pledge,
    result: Option<&EstimatorResult>,
    date: NaiveDate,
    config: &Config,
) -> Result<PathBuf, CertificateError> {
    if !pledge.is_complete() {
        return Err(CertificateError::Incomplete);
    }

    let path = dir.join(pledge.file_name(&config.campaign.name));
    fs::write(&path, render(pledge, result, date, config))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pledge() -> Pledge {
        Pledge {
            name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            commitments: vec!["fix_leaks".to_string(), "greywater_reuse".to_string()],
        }
    }

    fn issue_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn render_includes_identity_commitments_and_date() {
        let body = render(&pledge(), None, issue_date(), &Config::default());

        assert!(body.contains("Priya Sharma"));
        assert!(body.contains("JalRaksha Water Conservation Pledge"));
        assert!(body.contains("fix water leaks immediately"));
        assert!(body.contains("reuse greywater for irrigation"));
        assert!(body.contains("15 January 2024"));
        // Commitments not taken stay off the certificate
        assert!(!body.contains("educate others"));
    }

    #[test]
    fn render_with_projection_includes_savings_figures() {
        let result = EstimatorResult {
            rainwater_harvest_liters: 96_000,
            grey_water_reuse_liters: 160_600,
            total_savings_liters: 256_600,
            household_coverage_percent: 100.0,
            tank_size_liters: 24_000,
            cost_savings: 5_132,
        };

        let body = render(&pledge(), Some(&result), issue_date(), &Config::default());
        assert!(body.contains("256600 L"));
        assert!(body.contains("100% of household demand"));
    }

    #[test]
    fn unknown_commitment_ids_are_skipped() {
        let mut signed = pledge();
        signed.commitments.push("plant_a_forest".to_string());

        let body = render(&signed, None, issue_date(), &Config::default());
        assert!(!body.contains("plant_a_forest"));
    }

    #[test]
    fn file_name_collapses_spaces() {
        assert_eq!(
            pledge().file_name("JalRaksha"),
            "JalRaksha-Certificate-Priya-Sharma.txt"
        );
    }

    #[test]
    fn write_to_creates_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_to(dir.path(), &pledge(), None, issue_date(), &Config::default())
            .unwrap();

        assert!(path.ends_with("JalRaksha-Certificate-Priya-Sharma.txt"));
        let body = fs::read_to_string(path).unwrap();
        assert!(body.contains("CERTIFICATE OF COMMITMENT"));
    }

    #[test]
    fn incomplete_pledge_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut unsigned = pledge();
        unsigned.commitments.clear();

        let err = write_to(
            dir.path(),
            &unsigned,
            None,
            issue_date(),
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CertificateError::Incomplete));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
