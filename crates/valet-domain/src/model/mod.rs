//! Domain model types

pub mod employee;
pub mod job;
pub mod receipt;
pub mod vehicle;

pub use employee::Employee;
pub use job::{AssignedJob, PayableJob, PricedJob};
pub use receipt::{EmployeeSummary, Receipt};
pub use vehicle::{FuelState, Vehicle, VehicleSize};
