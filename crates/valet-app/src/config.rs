//! Configuration management for valet-billing
//!
//! Config stored at: ~/.config/valet-billing/config.toml

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use valet_domain::arithmetic::{ArithmeticContext, Rounding, DEFAULT_DECIMAL_PLACES};
use valet_domain::model::Employee;
use valet_domain::service::{PricingConfig, RateTable};
use valet_domain::BillingPipeline;
use valet_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Price charged per fuel unit added
    #[serde(default = "default_fuel_price")]
    pub fuel_price_per_unit: Decimal,

    /// Decimal places kept on receipt values
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,

    /// Rounding rule for receipt values (half-up, half-even, down)
    #[serde(default)]
    pub rounding: Rounding,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Flat parking fee per vehicle size
    #[serde(default)]
    pub parking_rates: RateTable,

    /// Employee pool used when a batch supplies none
    #[serde(default)]
    pub employees: Vec<Employee>,
}

fn default_fuel_price() -> Decimal {
    PricingConfig::default().fuel_price_per_unit
}

fn default_decimal_places() -> u32 {
    DEFAULT_DECIMAL_PLACES
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fuel_price_per_unit: default_fuel_price(),
            decimal_places: default_decimal_places(),
            rounding: Rounding::default(),
            output_format: default_output_format(),
            parking_rates: RateTable::default(),
            employees: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("valet-billing");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a file, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            parking_rates: self.parking_rates.clone(),
            fuel_price_per_unit: self.fuel_price_per_unit,
        }
    }

    pub fn arithmetic(&self) -> ArithmeticContext {
        ArithmeticContext::new(self.decimal_places, self.rounding)
    }

    pub fn pipeline(&self) -> BillingPipeline {
        BillingPipeline::new(self.pricing(), self.arithmetic())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Valet Billing Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Fuel price:     {} / unit", self.fuel_price_per_unit)?;
        writeln!(f, "Precision:      {} places ({})", self.decimal_places, self.rounding)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Parking rates:")?;
        for (size, fee) in self.parking_rates.iter() {
            writeln!(f, "  {:<12} {}", size.label(), fee)?;
        }
        if self.employees.is_empty() {
            writeln!(f, "Employees:      (none)")?;
        } else {
            writeln!(f, "Employees:")?;
            for e in &self.employees {
                writeln!(f, "  {:<12} {}%", e.name, e.commission_pct)?;
            }
        }

        Ok(())
    }
}
