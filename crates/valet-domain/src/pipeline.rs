//! Orchestration of the billing stages

use tracing::{debug, info};
use valet_types::{BillingWarning, Result};

use crate::arithmetic::ArithmeticContext;
use crate::model::{Employee, PayableJob, Receipt, Vehicle};
use crate::service::{apply_commission, assign, present, price_queue, PricingConfig};

/// Everything a single batch produced
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub receipts: Vec<Receipt>,
    pub payable: Vec<PayableJob>,
    pub warnings: Vec<BillingWarning>,
}

/// Pricing -> assignment -> commission -> presentation over one batch.
///
/// Holds only immutable settings, so one pipeline can serve many batches.
#[derive(Debug, Clone, Default)]
pub struct BillingPipeline {
    pricing: PricingConfig,
    arithmetic: ArithmeticContext,
}

impl BillingPipeline {
    pub fn new(pricing: PricingConfig, arithmetic: ArithmeticContext) -> Self {
        Self { pricing, arithmetic }
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    pub fn arithmetic(&self) -> &ArithmeticContext {
        &self.arithmetic
    }

    /// Receipts for the batch, in assignment order
    pub fn run(&self, vehicles: &[Vehicle], employees: &[Employee]) -> Result<Vec<Receipt>> {
        Ok(self.run_batch(vehicles, employees)?.receipts)
    }

    /// Full outcome including payable jobs and warnings.
    ///
    /// Any fatal error aborts the whole batch; nothing partial is returned.
    pub fn run_batch(
        &self,
        vehicles: &[Vehicle],
        employees: &[Employee],
    ) -> Result<BatchOutcome> {
        let priced = price_queue(vehicles, &self.pricing)?;
        debug!(jobs = priced.len(), "Priced queue");

        let assigned = assign(employees, &priced)?;
        debug!(jobs = assigned.len(), employees = employees.len(), "Assigned jobs");

        let commission = apply_commission(&assigned)?;
        let receipts = present(&commission.payable, &self.arithmetic);

        info!(
            receipts = receipts.len(),
            warnings = commission.warnings.len(),
            "Batch billed"
        );

        Ok(BatchOutcome {
            receipts,
            payable: commission.payable,
            warnings: commission.warnings,
        })
    }
}
