//! Commission and amount-due calculation

use rust_decimal::Decimal;
use tracing::warn;
use valet_types::{BillingWarning, Error, Result};

use crate::model::{AssignedJob, PayableJob};

/// Payable jobs plus any non-fatal warnings raised along the way
#[derive(Debug, Clone, Default)]
pub struct CommissionRun {
    pub payable: Vec<PayableJob>,
    pub warnings: Vec<BillingWarning>,
}

/// Apply commission to every assigned job, preserving order.
///
/// A negative commission percentage never blocks payment: the job is billed
/// with zero commission and a warning is recorded. Overflow is fatal.
pub fn apply_commission(jobs: &[AssignedJob]) -> Result<CommissionRun> {
    let mut run = CommissionRun {
        payable: Vec::with_capacity(jobs.len()),
        warnings: Vec::new(),
    };

    for assigned in jobs {
        let pct = assigned.employee.commission_pct;
        let net_total = assigned.job.net_total;
        let overflow = || Error::ArithmeticOverflow {
            licence_plate: assigned.job.vehicle.licence_plate.clone(),
        };

        let commission = if pct < Decimal::ZERO {
            warn!(
                employee = %assigned.employee.name,
                licence_plate = %assigned.job.vehicle.licence_plate,
                commission_pct = %pct,
                "Invalid commission, billing with zero commission"
            );
            run.warnings.push(BillingWarning::InvalidCommission {
                employee: assigned.employee.name.clone(),
                licence_plate: assigned.job.vehicle.licence_plate.clone(),
                commission_pct: pct,
            });
            Decimal::ZERO
        } else {
            commission_on(net_total, pct).ok_or_else(overflow)?
        };
        let total_to_pay = net_total.checked_add(commission).ok_or_else(overflow)?;

        run.payable.push(PayableJob {
            assigned: assigned.clone(),
            commission,
            total_to_pay,
        });
    }

    Ok(run)
}

/// `net_total * pct / 100`, or `None` if the product overflows.
/// No upper bound on `pct`: above 100% the commission exceeds the job's own total.
pub fn commission_on(net_total: Decimal, commission_pct: Decimal) -> Option<Decimal> {
    net_total
        .checked_mul(commission_pct)?
        .checked_div(Decimal::ONE_HUNDRED)
}
