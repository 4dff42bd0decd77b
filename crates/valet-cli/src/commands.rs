//! Command handlers

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::info;
use valet_app::app::BillingService;
use valet_app::config::Config;
use valet_app::export::export_to_excel;
use valet_infra::FileBatchSource;
use valet_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::output_report;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(ref path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = Config::load_from(&config_path)?;
    info!(path = %config_path.display(), "Loaded configuration");

    match &cli.command {
        Commands::Run {
            vehicles,
            employees,
            output,
        } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_run(&config, vehicles.clone(), employees.clone(), output.clone(), output_format)
        }

        Commands::Config {
            show,
            init,
            set_fuel_price,
            set_decimal_places,
            set_output,
        } => cmd_config(
            &config_path,
            config,
            *show,
            *init,
            *set_fuel_price,
            *set_decimal_places,
            *set_output,
        ),
    }
}

fn cmd_run(
    config: &Config,
    vehicles_path: PathBuf,
    employees_path: Option<PathBuf>,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    if !vehicles_path.exists() {
        return Err(Error::FileNotFound(format!(
            "Vehicle file not found: {}",
            vehicles_path.display()
        )));
    }

    let mut source = FileBatchSource::new(vehicles_path);
    if let Some(path) = employees_path {
        source = source.with_employees(path);
    }

    let service = BillingService::from_config(config);
    let report = service.bill(&source)?;

    output_report(output_format, &report)?;

    if let Some(path) = output {
        export_to_excel(&report, &path)?;
        eprintln!("Exported to: {}", path.display());
    }

    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}

fn cmd_config(
    config_path: &Path,
    mut config: Config,
    show: bool,
    init: bool,
    set_fuel_price: Option<Decimal>,
    set_decimal_places: Option<u32>,
    set_output: Option<OutputFormat>,
) -> Result<()> {
    let mut changed = false;

    if init {
        if config_path.exists() {
            println!("Config file already exists: {}", config_path.display());
        } else {
            config = Config::default();
            changed = true;
        }
    }

    if let Some(price) = set_fuel_price {
        config.fuel_price_per_unit = price;
        changed = true;
        println!("Fuel price set to: {}", price);
    }

    if let Some(places) = set_decimal_places {
        config.decimal_places = places;
        changed = true;
        println!("Decimal places set to: {}", places);
    }

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
        println!("Output format set to: {}", format);
    }

    if changed {
        config.save_to(config_path)?;
        println!("Configuration saved to: {}", config_path.display());
    }

    if show || !changed {
        println!("{}", config);
        println!("Config file:    {}", config_path.display());
    }

    Ok(())
}
