//! Application service layer - config, billing use case, export

pub mod app;
pub mod config;
pub mod export;
