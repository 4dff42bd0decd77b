//! Billing use case - wraps the pipeline with config and batch metadata

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use valet_domain::model::{Employee, EmployeeSummary, Receipt, Vehicle};
use valet_domain::repository::BatchSource;
use valet_domain::service::{summarize_by_employee, total_due};
use valet_domain::BillingPipeline;
use valet_types::{BillingWarning, Result};

use crate::config::Config;

/// Result of one billed batch, ready for output or export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub receipts: Vec<Receipt>,
    pub employees: Vec<EmployeeSummary>,
    pub warnings: Vec<BillingWarning>,
    /// Exact sum of every amount due, rounded once; may differ in the last
    /// place from the sum of the rounded receipt prices
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
}

impl BatchReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Bills batches with a fixed pipeline and a fallback employee pool
#[derive(Debug, Clone)]
pub struct BillingService {
    pipeline: BillingPipeline,
    default_employees: Vec<Employee>,
}

impl BillingService {
    pub fn new(pipeline: BillingPipeline, default_employees: Vec<Employee>) -> Self {
        Self {
            pipeline,
            default_employees,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pipeline(), config.employees.clone())
    }

    /// Load inputs from `source` and bill them.
    ///
    /// Employees from the source replace the configured pool entirely.
    pub fn bill(&self, source: &impl BatchSource) -> Result<BatchReport> {
        let vehicles = source.vehicles()?;
        match source.employees()? {
            Some(employees) => self.bill_batch(&vehicles, &employees),
            None => self.bill_batch(&vehicles, &self.default_employees),
        }
    }

    pub fn bill_batch(&self, vehicles: &[Vehicle], employees: &[Employee]) -> Result<BatchReport> {
        let batch_id = Uuid::new_v4();
        let outcome = self.pipeline.run_batch(vehicles, employees)?;

        let ctx = self.pipeline.arithmetic();
        let employees = summarize_by_employee(&outcome.payable, ctx)?;
        let grand_total = total_due(&outcome.payable, ctx)?;

        info!(
            batch_id = %batch_id,
            vehicles = vehicles.len(),
            grand_total = %grand_total,
            "Batch report ready"
        );

        Ok(BatchReport {
            batch_id,
            generated_at: Utc::now(),
            receipts: outcome.receipts,
            employees,
            warnings: outcome.warnings,
            grand_total,
        })
    }
}
