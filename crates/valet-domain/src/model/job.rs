//! Job records handed between pipeline stages

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Employee, Vehicle};

/// Vehicle with its service price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedJob {
    pub vehicle: Vehicle,
    /// Fuel units added, zero when not refuelled
    pub fuel_added: Decimal,
    /// Parking fee plus fuel fee
    pub net_total: Decimal,
}

/// Priced job together with the employee who handles it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedJob {
    pub employee: Employee,
    pub job: PricedJob,
    /// Number of jobs this employee received in the batch
    pub num_jobs: usize,
}

/// Assigned job with the amount due
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableJob {
    pub assigned: AssignedJob,
    pub commission: Decimal,
    /// `net_total + commission`
    pub total_to_pay: Decimal,
}

impl PayableJob {
    pub fn employee(&self) -> &Employee {
        &self.assigned.employee
    }

    pub fn job(&self) -> &PricedJob {
        &self.assigned.job
    }
}
