//! JSON and CSV loaders for vehicles and employees
//!
//! JSON files hold an array of records in the external camelCase shape.
//! CSV files use flat snake_case headers:
//!   vehicles:  licence_plate, size, capacity, level
//!   employees: name, commission_pct

use std::fs::File;
use std::path::Path;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use valet_domain::model::{Employee, Vehicle, VehicleSize};
use valet_types::{Error, Result};

/// Input file format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("csv") => Ok(InputFormat::Csv),
            _ => Err(Error::InputLoad(format!(
                "Unsupported input format (expected .json or .csv): {}",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct VehicleRecord {
    licence_plate: String,
    size: VehicleSize,
    capacity: Decimal,
    level: Decimal,
}

impl From<VehicleRecord> for Vehicle {
    fn from(r: VehicleRecord) -> Self {
        Vehicle::new(r.licence_plate, r.size, r.capacity, r.level)
    }
}

#[derive(Debug, Deserialize)]
struct EmployeeRecord {
    name: String,
    commission_pct: Decimal,
}

impl From<EmployeeRecord> for Employee {
    fn from(r: EmployeeRecord) -> Self {
        Employee::new(r.name, r.commission_pct)
    }
}

/// Load the vehicle queue, keeping file order
pub fn load_vehicles(path: &Path) -> Result<Vec<Vehicle>> {
    let vehicles = match InputFormat::from_path(path)? {
        InputFormat::Json => read_json::<Vehicle>(path)?,
        InputFormat::Csv => read_csv::<VehicleRecord>(path)?
            .into_iter()
            .map(Vehicle::from)
            .collect(),
    };
    debug!(path = %path.display(), count = vehicles.len(), "Loaded vehicles");
    Ok(vehicles)
}

/// Load the employee pool
pub fn load_employees(path: &Path) -> Result<Vec<Employee>> {
    let employees = match InputFormat::from_path(path)? {
        InputFormat::Json => read_json::<Employee>(path)?,
        InputFormat::Csv => read_csv::<EmployeeRecord>(path)?
            .into_iter()
            .map(Employee::from)
            .collect(),
    };
    debug!(path = %path.display(), count = employees.len(), "Loaded employees");
    Ok(employees)
}

fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(File::open(path)?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = open(path)?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(|e| Error::InputLoad(format!("{}: {}", path.display(), e)))
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = open(path)?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    reader
        .deserialize::<T>()
        .enumerate()
        .map(|(i, record)| {
            // header is line 1
            record.map_err(|e| {
                Error::InputLoad(format!("{} line {}: {}", path.display(), i + 2, e))
            })
        })
        .collect()
}
