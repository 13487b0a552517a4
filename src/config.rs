//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! jalraksha.toml file. Configuration styles presentation only: campaign
//! branding and chart dimensions. The estimator's constants and field
//! defaults are fixed in code, not configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from jalraksha.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Campaign branding
    pub campaign: CampaignConfig,
    /// Terminal chart configuration
    pub display: DisplayConfig,
}

/// Campaign branding configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct CampaignConfig {
    /// Campaign name used in headings and certificate filenames
    pub name: String,
    /// Currency symbol for the cost-savings line (e.g., "₹")
    pub currency_symbol: String,
}

/// Terminal chart configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Height of the monthly bar chart in rows
    pub chart_rows: usize,
    /// Width of the breakdown proportion bars in characters
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            campaign: CampaignConfig {
                name: "JalRaksha".to_string(),
                currency_symbol: "₹".to_string(),
            },
            display: DisplayConfig {
                chart_rows: 12,
                chart_width: 40,
            },
        }
    }
}

impl Config {
    /// Load configuration from jalraksha.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("jalraksha.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save current configuration to jalraksha.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("jalraksha.toml", contents)?;
        println!("Configuration saved to jalraksha.toml");
        Ok(())
    }
}
