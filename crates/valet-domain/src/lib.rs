//! Domain layer for valet billing
//!
//! Prices a queue of vehicles, splits the priced jobs across a commissioned
//! employee pool and produces per-job receipts.

pub mod arithmetic;
pub mod model;
pub mod pipeline;
pub mod repository;
pub mod service;

pub use arithmetic::{ArithmeticContext, Rounding};
pub use pipeline::{BatchOutcome, BillingPipeline};
