//! CLI definition using clap

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use valet_types::OutputFormat;

#[derive(Parser)]
#[command(name = "valet-billing")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle service billing and commissioned workload distribution")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path. Defaults to ~/.config/valet-billing/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bill a queue of vehicles
    Run {
        /// Vehicle queue file (.json or .csv)
        vehicles: PathBuf,

        /// Employee pool file (.json or .csv). Uses the configured pool if not specified.
        #[arg(long, short = 'e')]
        employees: Option<PathBuf>,

        /// Also export the report to this Excel file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,

        /// Set fuel price per unit
        #[arg(long)]
        set_fuel_price: Option<Decimal>,

        /// Set decimal places kept on receipt values
        #[arg(long)]
        set_decimal_places: Option<u32>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,
    },
}
