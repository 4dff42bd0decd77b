//! External-facing projections

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-vehicle receipt. Numeric fields serialize as plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub licence_plate: String,
    pub employee_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub fuel_added: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Totals for one employee across the batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub commission_pct: Decimal,
    pub jobs: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub commission: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_to_pay: Decimal,
}
