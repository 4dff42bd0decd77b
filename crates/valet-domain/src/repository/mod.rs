//! Source trait for batch inputs

use valet_types::Result;

use crate::model::{Employee, Vehicle};

/// Supplies the two input collections of a batch
pub trait BatchSource {
    /// Vehicles in queue order
    fn vehicles(&self) -> Result<Vec<Vehicle>>;

    /// Employee pool, or `None` when the source carries no employees
    fn employees(&self) -> Result<Option<Vec<Employee>>>;
}
