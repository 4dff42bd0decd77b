//! Error types for valet-billing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("No parking rate configured for size '{size}' (vehicle {licence_plate})")]
    MissingRate { licence_plate: String, size: String },

    #[error("Employee pool is empty; no assignee available")]
    EmptyEmployeePool,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Job distribution finished with jobs nobody owns. Always a logic defect.
    #[error("Assignment invariant violated: {unassigned} of {total} jobs left unassigned")]
    AssignmentInvariantViolation { unassigned: usize, total: usize },

    /// A monetary or fuel calculation left the representable decimal range
    #[error("Arithmetic overflow while billing vehicle {licence_plate}")]
    ArithmeticOverflow { licence_plate: String },

    #[error("Input load error: {0}")]
    InputLoad(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal conditions raised while billing a batch
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BillingWarning {
    #[error("Invalid commission {commission_pct}% for {employee} on {licence_plate}; using 0")]
    #[serde(rename_all = "camelCase")]
    InvalidCommission {
        employee: String,
        licence_plate: String,
        commission_pct: Decimal,
    },
}
