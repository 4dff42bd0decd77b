//! Job distribution across the employee pool
//!
//! Employees are ranked by commission, jobs by value, and the ranked jobs are
//! handed out in contiguous chunks so the most valuable work lands with the
//! highest earners. Any remainder after even division goes entirely to the
//! top-ranked employee, so the first employee may carry more jobs than the
//! rest.

use std::cmp::Ordering;

use tracing::{debug, error};
use valet_types::{ConfigError, Error, Result};

use crate::model::{AssignedJob, Employee, PricedJob};

/// Assign every priced job to exactly one employee.
///
/// Inputs are left untouched; the ranking works over borrowed views.
pub fn assign(employees: &[Employee], jobs: &[PricedJob]) -> Result<Vec<AssignedJob>> {
    if employees.is_empty() {
        return Err(ConfigError::EmptyEmployeePool.into());
    }
    if jobs.is_empty() {
        return Ok(Vec::new());
    }

    let staff = ranked_desc(employees, |a, b| a.commission_pct.cmp(&b.commission_pct));
    let queue = ranked_desc(jobs, |a, b| a.net_total.cmp(&b.net_total));
    let counts = plan_chunks(queue.len(), staff.len());

    debug!(
        jobs = queue.len(),
        employees = staff.len(),
        top_count = counts[0],
        "Planned job distribution"
    );

    distribute(&staff, &queue, &counts)
}

/// Provisional job count per ranked employee.
///
/// Every employee gets `max(1, jobs / employees)`; the leftover from the
/// division is added to the first employee only.
pub fn plan_chunks(total_jobs: usize, total_employees: usize) -> Vec<usize> {
    if total_employees == 0 {
        return Vec::new();
    }

    let chunk = (total_jobs / total_employees).max(1);
    let mut counts = vec![chunk; total_employees];
    let leftover = total_jobs.saturating_sub(chunk * total_employees);
    if leftover > 0 {
        counts[0] += leftover;
    }
    counts
}

/// Stable descending order; ties keep their input order.
fn ranked_desc<T>(items: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Vec<&T> {
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| cmp(*b, *a));
    ranked
}

fn distribute(
    staff: &[&Employee],
    queue: &[&PricedJob],
    counts: &[usize],
) -> Result<Vec<AssignedJob>> {
    let mut assigned = Vec::with_capacity(queue.len());
    let mut cursor = 0;

    for (employee, &count) in staff.iter().zip(counts) {
        if cursor >= queue.len() {
            break;
        }
        let end = (cursor + count).min(queue.len());
        let chunk = &queue[cursor..end];
        let num_jobs = chunk.len();

        debug!(employee = %employee.name, num_jobs, "Assigned jobs");

        assigned.extend(chunk.iter().map(|job| AssignedJob {
            employee: (*employee).clone(),
            job: (*job).clone(),
            num_jobs,
        }));
        cursor = end;
    }

    let unassigned = queue.len() - cursor;
    if unassigned > 0 {
        error!(unassigned, total = queue.len(), "Jobs left without an assignee");
        return Err(Error::AssignmentInvariantViolation {
            unassigned,
            total: queue.len(),
        });
    }

    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Vehicle, VehicleSize};
    use rust_decimal::Decimal;
    use std::collections::BTreeMap;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn priced(plate: &str, net_total: Decimal) -> PricedJob {
        PricedJob {
            vehicle: Vehicle::new(plate, VehicleSize::Small, d("10"), d("0.5")),
            fuel_added: Decimal::ZERO,
            net_total,
        }
    }

    fn sample_jobs() -> Vec<PricedJob> {
        vec![
            priced("A", d("50.75")),
            priced("B", d("40.75")),
            priced("C", d("35")),
            priced("D", d("35")),
        ]
    }

    fn plates_for<'a>(assigned: &'a [AssignedJob], name: &str) -> Vec<&'a str> {
        assigned
            .iter()
            .filter(|a| a.employee.name == name)
            .map(|a| a.job.vehicle.licence_plate.as_str())
            .collect()
    }

    #[test]
    fn test_plan_chunks_even_split() {
        assert_eq!(plan_chunks(4, 2), vec![2, 2]);
    }

    #[test]
    fn test_plan_chunks_front_loads_leftover() {
        assert_eq!(plan_chunks(11, 3), vec![5, 3, 3]);
        assert_eq!(plan_chunks(3, 2), vec![2, 1]);
    }

    #[test]
    fn test_plan_chunks_fewer_jobs_than_employees() {
        assert_eq!(plan_chunks(2, 5), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_plan_chunks_no_employees() {
        assert!(plan_chunks(3, 0).is_empty());
    }

    #[test]
    fn test_two_employees_four_jobs() {
        let employees = vec![
            Employee::new("Ian", d("11")),
            Employee::new("Alan", d("15")),
        ];
        let assigned = assign(&employees, &sample_jobs()).unwrap();

        assert_eq!(assigned.len(), 4);
        assert_eq!(plates_for(&assigned, "Alan"), vec!["A", "B"]);
        assert_eq!(plates_for(&assigned, "Ian"), vec!["C", "D"]);
        assert!(assigned.iter().all(|a| a.num_jobs == 2));
    }

    #[test]
    fn test_leftover_goes_to_top_earner() {
        let employees = vec![
            Employee::new("Low", d("5")),
            Employee::new("Top", d("30")),
            Employee::new("Mid", d("10")),
        ];
        let jobs: Vec<_> = (1..=5)
            .map(|i| priced(&format!("J{i}"), Decimal::from(i * 10)))
            .collect();
        let assigned = assign(&employees, &jobs).unwrap();

        assert_eq!(plates_for(&assigned, "Top"), vec!["J5", "J4", "J3"]);
        assert_eq!(plates_for(&assigned, "Mid"), vec!["J2"]);
        assert_eq!(plates_for(&assigned, "Low"), vec!["J1"]);
        let top = assigned.iter().find(|a| a.employee.name == "Top").unwrap();
        assert_eq!(top.num_jobs, 3);
    }

    #[test]
    fn test_fewer_jobs_than_employees_leaves_some_idle() {
        let employees = vec![
            Employee::new("A", d("20")),
            Employee::new("B", d("10")),
            Employee::new("C", d("5")),
        ];
        let jobs = vec![priced("X", d("40")), priced("Y", d("30"))];
        let assigned = assign(&employees, &jobs).unwrap();

        assert_eq!(plates_for(&assigned, "A"), vec!["X"]);
        assert_eq!(plates_for(&assigned, "B"), vec!["Y"]);
        assert!(plates_for(&assigned, "C").is_empty());
    }

    #[test]
    fn test_commission_ties_keep_input_order() {
        let employees = vec![
            Employee::new("First", d("10")),
            Employee::new("Second", d("10")),
        ];
        let jobs = vec![priced("P", d("10")), priced("Q", d("20"))];
        let assigned = assign(&employees, &jobs).unwrap();

        assert_eq!(plates_for(&assigned, "First"), vec!["Q"]);
        assert_eq!(plates_for(&assigned, "Second"), vec!["P"]);
    }

    #[test]
    fn test_negative_commission_ranks_last() {
        let employees = vec![
            Employee::new("Broken", d("-5")),
            Employee::new("Fine", d("0")),
        ];
        let jobs = vec![priced("P", d("10")), priced("Q", d("20"))];
        let assigned = assign(&employees, &jobs).unwrap();

        assert_eq!(plates_for(&assigned, "Fine"), vec!["Q"]);
        assert_eq!(plates_for(&assigned, "Broken"), vec!["P"]);
    }

    #[test]
    fn test_zero_jobs_returns_empty() {
        let employees = vec![Employee::new("Ian", d("11"))];
        assert!(assign(&employees, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_pool_is_config_error() {
        let err = assign(&[], &sample_jobs()).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::EmptyEmployeePool)));

        let err = assign(&[], &[]).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::EmptyEmployeePool)));
    }

    #[test]
    fn test_inputs_are_not_reordered() {
        let employees = vec![
            Employee::new("Ian", d("11")),
            Employee::new("Alan", d("15")),
        ];
        let jobs = vec![priced("C", d("35")), priced("A", d("50.75"))];
        let employees_before = employees.clone();
        let jobs_before = jobs.clone();

        assign(&employees, &jobs).unwrap();

        assert_eq!(employees, employees_before);
        assert_eq!(jobs, jobs_before);
    }

    #[test]
    fn test_short_plan_is_invariant_violation() {
        let ian = Employee::new("Ian", d("11"));
        let jobs = sample_jobs();
        let staff = vec![&ian];
        let queue: Vec<&PricedJob> = jobs.iter().collect();

        let err = distribute(&staff, &queue, &[3]).unwrap_err();
        match err {
            Error::AssignmentInvariantViolation { unassigned, total } => {
                assert_eq!(unassigned, 1);
                assert_eq!(total, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        prop_compose! {
            fn arb_employees()(pcts in prop::collection::vec(-50i64..200, 1..12)) -> Vec<Employee> {
                pcts.into_iter()
                    .enumerate()
                    .map(|(i, pct)| Employee::new(format!("E{i}"), Decimal::from(pct)))
                    .collect()
            }
        }

        prop_compose! {
            fn arb_jobs()(cents in prop::collection::vec(2500i64..20000, 0..80)) -> Vec<PricedJob> {
                cents.into_iter()
                    .enumerate()
                    .map(|(i, c)| priced(&format!("V{i}"), Decimal::new(c, 2)))
                    .collect()
            }
        }

        proptest! {
            #[test]
            fn test_every_job_assigned_exactly_once(
                employees in arb_employees(),
                jobs in arb_jobs(),
            ) {
                let assigned = assign(&employees, &jobs).unwrap();
                prop_assert_eq!(assigned.len(), jobs.len());

                let mut seen: Vec<&str> = assigned
                    .iter()
                    .map(|a| a.job.vehicle.licence_plate.as_str())
                    .collect();
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), jobs.len());
            }

            #[test]
            fn test_num_jobs_sum_to_total(employees in arb_employees(), jobs in arb_jobs()) {
                let assigned = assign(&employees, &jobs).unwrap();

                let mut per_employee: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
                for a in &assigned {
                    let entry = per_employee
                        .entry(a.employee.name.as_str())
                        .or_insert((a.num_jobs, 0));
                    prop_assert_eq!(entry.0, a.num_jobs);
                    entry.1 += 1;
                }
                for (declared, actual) in per_employee.values() {
                    prop_assert_eq!(declared, actual);
                }
                let total: usize = per_employee.values().map(|(n, _)| n).sum();
                prop_assert_eq!(total, jobs.len());
            }

            #[test]
            fn test_top_job_goes_to_top_earner(employees in arb_employees(), jobs in arb_jobs()) {
                prop_assume!(!jobs.is_empty());
                let assigned = assign(&employees, &jobs).unwrap();

                let max_pct = employees.iter().map(|e| e.commission_pct).max().unwrap();
                let top_earner = employees.iter().find(|e| e.commission_pct == max_pct).unwrap();
                let max_total = jobs.iter().map(|j| j.net_total).max().unwrap();

                prop_assert_eq!(&assigned[0].employee.name, &top_earner.name);
                prop_assert_eq!(assigned[0].job.net_total, max_total);
            }
        }
    }
}
