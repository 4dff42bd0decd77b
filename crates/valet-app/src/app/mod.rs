//! Application use cases

pub mod billing_service;

pub use billing_service::{BatchReport, BillingService};
