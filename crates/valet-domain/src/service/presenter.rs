//! Projection of payable jobs into external receipts

use rust_decimal::Decimal;
use valet_types::{Error, Result};

use crate::arithmetic::ArithmeticContext;
use crate::model::{EmployeeSummary, PayableJob, Receipt};

/// One receipt per payable job, rounded with `ctx`
pub fn present(jobs: &[PayableJob], ctx: &ArithmeticContext) -> Vec<Receipt> {
    jobs.iter()
        .map(|p| Receipt {
            licence_plate: p.job().vehicle.licence_plate.clone(),
            employee_name: p.employee().name.clone(),
            fuel_added: ctx.round(p.job().fuel_added),
            price: ctx.round(p.total_to_pay),
        })
        .collect()
}

/// Per-employee totals in the order employees first appear.
///
/// Sums are taken on exact values and rounded once at the end.
pub fn summarize_by_employee(
    jobs: &[PayableJob],
    ctx: &ArithmeticContext,
) -> Result<Vec<EmployeeSummary>> {
    let mut summaries: Vec<EmployeeSummary> = Vec::new();

    for p in jobs {
        let employee = p.employee();
        let idx = match summaries.iter().position(|s| s.name == employee.name) {
            Some(idx) => idx,
            None => {
                summaries.push(EmployeeSummary {
                    name: employee.name.clone(),
                    commission_pct: employee.commission_pct,
                    jobs: 0,
                    net_total: Decimal::ZERO,
                    commission: Decimal::ZERO,
                    total_to_pay: Decimal::ZERO,
                });
                summaries.len() - 1
            }
        };
        let s = &mut summaries[idx];
        s.jobs += 1;
        s.net_total = add(s.net_total, p.job().net_total, p)?;
        s.commission = add(s.commission, p.commission, p)?;
        s.total_to_pay = add(s.total_to_pay, p.total_to_pay, p)?;
    }

    for s in &mut summaries {
        s.net_total = ctx.round(s.net_total);
        s.commission = ctx.round(s.commission);
        s.total_to_pay = ctx.round(s.total_to_pay);
    }
    Ok(summaries)
}

/// Exact sum of every amount due, rounded once with `ctx`.
///
/// Not the sum of receipt prices: those are rounded per job, so the two can
/// differ in the last decimal place.
pub fn total_due(jobs: &[PayableJob], ctx: &ArithmeticContext) -> Result<Decimal> {
    let total = jobs
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| add(acc, p.total_to_pay, p))?;
    Ok(ctx.round(total))
}

fn add(acc: Decimal, value: Decimal, job: &PayableJob) -> Result<Decimal> {
    acc.checked_add(value).ok_or_else(|| Error::ArithmeticOverflow {
        licence_plate: job.job().vehicle.licence_plate.clone(),
    })
}
