//! Output formatting module

use valet_app::app::BatchReport;
use valet_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &BatchReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBilling Report");
    println!("==============");
    println!("Batch:     {}", report.batch_id);
    println!("Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));

    if report.receipts.is_empty() {
        println!("\nNo vehicles in queue.");
        return Ok(());
    }

    println!("\n--- Receipts ---");
    println!("{:<16} {:<16} {:>12} {:>14}", "Plate", "Employee", "Fuel Added", "Price");
    println!("{}", "-".repeat(61));
    for r in &report.receipts {
        println!(
            "{:<16} {:<16} {:>12} {:>14}",
            truncate_str(&r.licence_plate, 16),
            truncate_str(&r.employee_name, 16),
            r.fuel_added,
            r.price
        );
    }

    println!("\n--- Employees ---");
    println!(
        "{:<16} {:>8} {:>6} {:>14} {:>14} {:>14}",
        "Name", "Comm %", "Jobs", "Net", "Commission", "To Pay"
    );
    println!("{}", "-".repeat(77));
    for s in &report.employees {
        println!(
            "{:<16} {:>8} {:>6} {:>14} {:>14} {:>14}",
            truncate_str(&s.name, 16),
            s.commission_pct,
            s.jobs,
            s.net_total,
            s.commission,
            s.total_to_pay
        );
    }

    println!("\nGrand total: {}", report.grand_total);

    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
