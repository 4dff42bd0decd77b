//! Billing pipeline stages

pub mod commission_calculator;
pub mod fee_calculator;
pub mod load_assigner;
pub mod presenter;

pub use commission_calculator::{apply_commission, CommissionRun};
pub use fee_calculator::{price_queue, PricingConfig, RateTable};
pub use load_assigner::assign;
pub use presenter::{present, summarize_by_employee, total_due};
