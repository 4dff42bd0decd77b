//! File-backed implementation of BatchSource

use std::path::{Path, PathBuf};

use valet_domain::model::{Employee, Vehicle};
use valet_domain::repository::BatchSource;
use valet_types::Result;

use crate::loader::{load_employees, load_vehicles};

/// Batch inputs read from a vehicle file and an optional employee file
#[derive(Debug, Clone)]
pub struct FileBatchSource {
    vehicles_path: PathBuf,
    employees_path: Option<PathBuf>,
}

impl FileBatchSource {
    pub fn new(vehicles_path: PathBuf) -> Self {
        Self {
            vehicles_path,
            employees_path: None,
        }
    }

    pub fn with_employees(mut self, employees_path: PathBuf) -> Self {
        self.employees_path = Some(employees_path);
        self
    }

    pub fn vehicles_path(&self) -> &Path {
        &self.vehicles_path
    }

    pub fn employees_path(&self) -> Option<&Path> {
        self.employees_path.as_deref()
    }
}

impl BatchSource for FileBatchSource {
    fn vehicles(&self) -> Result<Vec<Vehicle>> {
        load_vehicles(&self.vehicles_path)
    }

    fn employees(&self) -> Result<Option<Vec<Employee>>> {
        self.employees_path
            .as_deref()
            .map(load_employees)
            .transpose()
    }
}
