//! Vehicle type definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parking size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleSize {
    Small,
    Large,
}

impl VehicleSize {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleSize::Small => "small",
            VehicleSize::Large => "large",
        }
    }
}

impl std::fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fuel tank reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelState {
    /// Tank capacity in fuel units
    pub capacity: Decimal,
    /// Fraction of capacity currently in the tank. Out-of-range readings are kept as-is.
    pub level: Decimal,
}

/// A vehicle waiting in the service queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub licence_plate: String,
    pub size: VehicleSize,
    pub fuel: FuelState,
}

impl Vehicle {
    pub fn new(
        licence_plate: impl Into<String>,
        size: VehicleSize,
        capacity: Decimal,
        level: Decimal,
    ) -> Self {
        Self {
            licence_plate: licence_plate.into(),
            size,
            fuel: FuelState { capacity, level },
        }
    }
}
