//! Infrastructure layer - loaders feeding the billing pipeline

pub mod batch_source;
pub mod loader;

pub use batch_source::FileBatchSource;
pub use loader::{load_employees, load_vehicles, InputFormat};
