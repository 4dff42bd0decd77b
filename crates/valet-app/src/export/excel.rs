//! Excel export functionality

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use valet_types::{Error, Result};

use crate::app::BatchReport;

fn xlsx_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

fn num(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Export a batch report to an Excel file
pub fn export_to_excel(report: &BatchReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, report)?;

    let receipts_sheet = workbook.add_worksheet();
    write_receipts_sheet(receipts_sheet, report)?;

    workbook.save(output_path).map_err(xlsx_err)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &BatchReport) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Valet Billing Report", &header_format)
        .map_err(xlsx_err)?;

    sheet.write_string(2, 0, "Batch ID:").map_err(xlsx_err)?;
    sheet
        .write_string(2, 1, report.batch_id.to_string())
        .map_err(xlsx_err)?;
    sheet.write_string(3, 0, "Generated:").map_err(xlsx_err)?;
    sheet
        .write_string(3, 1, report.generated_at.to_rfc3339())
        .map_err(xlsx_err)?;
    sheet.write_string(4, 0, "Vehicles:").map_err(xlsx_err)?;
    sheet
        .write_number(4, 1, report.receipts.len() as f64)
        .map_err(xlsx_err)?;
    sheet.write_string(5, 0, "Grand total:").map_err(xlsx_err)?;
    sheet
        .write_number(5, 1, num(report.grand_total))
        .map_err(xlsx_err)?;
    sheet.write_string(6, 0, "Warnings:").map_err(xlsx_err)?;
    sheet
        .write_number(6, 1, report.warnings.len() as f64)
        .map_err(xlsx_err)?;

    let headers = ["Employee", "Commission %", "Jobs", "Net Total", "Commission", "Total To Pay"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(8, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (i, s) in report.employees.iter().enumerate() {
        let row = 9 + i as u32;
        sheet.write_string(row, 0, &s.name).map_err(xlsx_err)?;
        sheet.write_number(row, 1, num(s.commission_pct)).map_err(xlsx_err)?;
        sheet.write_number(row, 2, s.jobs as f64).map_err(xlsx_err)?;
        sheet.write_number(row, 3, num(s.net_total)).map_err(xlsx_err)?;
        sheet.write_number(row, 4, num(s.commission)).map_err(xlsx_err)?;
        sheet.write_number(row, 5, num(s.total_to_pay)).map_err(xlsx_err)?;
    }

    Ok(())
}

fn write_receipts_sheet(sheet: &mut Worksheet, report: &BatchReport) -> Result<()> {
    sheet.set_name("Receipts").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let headers = ["Licence Plate", "Employee", "Fuel Added", "Price"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (i, r) in report.receipts.iter().enumerate() {
        let row = 1 + i as u32;
        sheet.write_string(row, 0, &r.licence_plate).map_err(xlsx_err)?;
        sheet.write_string(row, 1, &r.employee_name).map_err(xlsx_err)?;
        sheet.write_number(row, 2, num(r.fuel_added)).map_err(xlsx_err)?;
        sheet.write_number(row, 3, num(r.price)).map_err(xlsx_err)?;
    }

    sheet.autofit();

    Ok(())
}
