//! Parking and refuel pricing

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use valet_types::{ConfigError, Error, Result};

use crate::model::{PricedJob, Vehicle, VehicleSize};

/// Refuel only when the tank is at or below this percentage (and not negative)
pub const REFUEL_THRESHOLD_PCT: Decimal = Decimal::TEN;

/// Flat parking fee per vehicle size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<VehicleSize, Decimal>);

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
            .with_rate(VehicleSize::Small, Decimal::from(25))
            .with_rate(VehicleSize::Large, Decimal::from(35))
    }
}

impl RateTable {
    /// Empty table; every lookup fails until rates are added
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_rate(mut self, size: VehicleSize, fee: Decimal) -> Self {
        self.0.insert(size, fee);
        self
    }

    pub fn fee_for(&self, size: VehicleSize) -> Option<Decimal> {
        self.0.get(&size).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VehicleSize, &Decimal)> {
        self.0.iter()
    }
}

/// Pricing inputs fixed for the lifetime of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    pub parking_rates: RateTable,
    pub fuel_price_per_unit: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            parking_rates: RateTable::default(),
            fuel_price_per_unit: Decimal::new(175, 2),
        }
    }
}

/// Price every vehicle in queue order
pub fn price_queue(vehicles: &[Vehicle], pricing: &PricingConfig) -> Result<Vec<PricedJob>> {
    vehicles.iter().map(|v| price_vehicle(v, pricing)).collect()
}

pub fn price_vehicle(vehicle: &Vehicle, pricing: &PricingConfig) -> Result<PricedJob> {
    let parking_fee = pricing
        .parking_rates
        .fee_for(vehicle.size)
        .ok_or_else(|| ConfigError::MissingRate {
            licence_plate: vehicle.licence_plate.clone(),
            size: vehicle.size.to_string(),
        })?;

    let overflow = || Error::ArithmeticOverflow {
        licence_plate: vehicle.licence_plate.clone(),
    };
    let fuel_added = fuel_to_add(vehicle).ok_or_else(overflow)?;
    let net_total = fuel_added
        .checked_mul(pricing.fuel_price_per_unit)
        .and_then(|fuel_fee| fuel_fee.checked_add(parking_fee))
        .ok_or_else(overflow)?;

    Ok(PricedJob {
        vehicle: vehicle.clone(),
        fuel_added,
        net_total,
    })
}

/// Tank level on a 0-100 scale, `None` if the level is out of range
pub fn fuel_percentage(vehicle: &Vehicle) -> Option<Decimal> {
    vehicle.fuel.level.checked_mul(Decimal::ONE_HUNDRED)
}

/// Eligible iff 0 <= pct <= 10, both ends inclusive
pub fn needs_refuel(vehicle: &Vehicle) -> bool {
    matches!(
        fuel_percentage(vehicle),
        Some(pct) if pct >= Decimal::ZERO && pct <= REFUEL_THRESHOLD_PCT
    )
}

/// `capacity - capacity * level` when eligible, zero otherwise
fn fuel_to_add(vehicle: &Vehicle) -> Option<Decimal> {
    if !needs_refuel(vehicle) {
        return Some(Decimal::ZERO);
    }
    let capacity = vehicle.fuel.capacity;
    capacity
        .checked_mul(vehicle.fuel.level)
        .and_then(|used| capacity.checked_sub(used))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn vehicle(plate: &str, size: VehicleSize, capacity: &str, level: &str) -> Vehicle {
        Vehicle::new(plate, size, d(capacity), d(level))
    }

    fn price(plate: &str, size: VehicleSize, capacity: &str, level: &str) -> PricedJob {
        price_vehicle(&vehicle(plate, size, capacity, level), &PricingConfig::default()).unwrap()
    }

    #[test]
    fn test_large_low_fuel_refuels() {
        let job = price("A", VehicleSize::Large, "10", "0.1");
        assert_eq!(job.fuel_added, d("9"));
        assert_eq!(job.net_total, d("50.75"));
    }

    #[test]
    fn test_small_low_fuel_refuels() {
        let job = price("B", VehicleSize::Small, "10", "0.1");
        assert_eq!(job.fuel_added, d("9"));
        assert_eq!(job.net_total, d("40.75"));
    }

    #[test]
    fn test_negative_level_is_not_refuelled() {
        let job = price("C", VehicleSize::Large, "10", "-1.1");
        assert_eq!(job.fuel_added, Decimal::ZERO);
        assert_eq!(job.net_total, d("35"));
    }

    #[test]
    fn test_high_level_is_not_refuelled() {
        let job = price("D", VehicleSize::Large, "10", "0.9");
        assert_eq!(job.fuel_added, Decimal::ZERO);
        assert_eq!(job.net_total, d("35"));
    }

    #[test]
    fn test_threshold_bounds_are_inclusive() {
        let empty = price("E", VehicleSize::Small, "40", "0");
        assert_eq!(empty.fuel_added, d("40"));
        assert_eq!(empty.net_total, d("95"));

        let at_ten = price("F", VehicleSize::Small, "40", "0.10");
        assert_eq!(at_ten.fuel_added, d("36"));

        let just_over = price("G", VehicleSize::Small, "40", "0.1000001");
        assert_eq!(just_over.fuel_added, Decimal::ZERO);

        let just_under_zero = price("H", VehicleSize::Small, "40", "-0.0000001");
        assert_eq!(just_under_zero.fuel_added, Decimal::ZERO);
    }

    #[test]
    fn test_parking_fee_ignores_fuel_state() {
        for level in ["-3", "0.5", "1", "2.5"] {
            let small = price("S", VehicleSize::Small, "55", level);
            let large = price("L", VehicleSize::Large, "55", level);
            assert_eq!(small.net_total, d("25"));
            assert_eq!(large.net_total, d("35"));
        }
    }

    #[test]
    fn test_fuel_arithmetic_is_exact() {
        // 0.07 * 100 = 7% -> refuel 1 - 0.07 = 0.93 of a 3-unit tank
        let job = price("X", VehicleSize::Small, "3", "0.07");
        assert_eq!(job.fuel_added, d("2.79"));
        assert_eq!(job.net_total, d("29.8825"));
    }

    #[test]
    fn test_price_queue_preserves_order() {
        let vehicles = vec![
            vehicle("1", VehicleSize::Large, "10", "0.9"),
            vehicle("2", VehicleSize::Small, "10", "0.05"),
            vehicle("3", VehicleSize::Large, "10", "0"),
        ];
        let jobs = price_queue(&vehicles, &PricingConfig::default()).unwrap();
        let plates: Vec<_> = jobs.iter().map(|j| j.vehicle.licence_plate.as_str()).collect();
        assert_eq!(plates, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_missing_rate_is_config_error() {
        let pricing = PricingConfig {
            parking_rates: RateTable::new().with_rate(VehicleSize::Small, d("25")),
            ..PricingConfig::default()
        };
        let vehicles = vec![
            vehicle("ok", VehicleSize::Small, "10", "0.5"),
            vehicle("bad", VehicleSize::Large, "10", "0.5"),
        ];
        let err = price_queue(&vehicles, &pricing).unwrap_err();
        match err {
            Error::Config(ConfigError::MissingRate { licence_plate, size }) => {
                assert_eq!(licence_plate, "bad");
                assert_eq!(size, "large");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_fuel_price() {
        let pricing = PricingConfig {
            fuel_price_per_unit: d("2"),
            ..PricingConfig::default()
        };
        let job = price_vehicle(&vehicle("A", VehicleSize::Large, "10", "0.1"), &pricing).unwrap();
        assert_eq!(job.net_total, d("53"));
    }

    #[test]
    fn test_overflowing_capacity_is_error() {
        let big = Vehicle::new("BIG", VehicleSize::Large, Decimal::MAX, Decimal::ZERO);
        let err = price_vehicle(&big, &PricingConfig::default()).unwrap_err();
        match err {
            Error::ArithmeticOverflow { licence_plate } => assert_eq!(licence_plate, "BIG"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_overflowing_fuel_fee_is_error() {
        let pricing = PricingConfig {
            fuel_price_per_unit: Decimal::MAX,
            ..PricingConfig::default()
        };
        let queue = vec![vehicle("A", VehicleSize::Large, "10", "0.1")];
        let err = price_queue(&queue, &pricing).unwrap_err();
        assert!(matches!(err, Error::ArithmeticOverflow { .. }));
    }

    #[test]
    fn test_out_of_range_level_is_not_refuelled() {
        let v = Vehicle::new("Z", VehicleSize::Small, d("10"), Decimal::MAX);
        assert_eq!(fuel_percentage(&v), None);
        assert!(!needs_refuel(&v));
        assert_eq!(price_vehicle(&v, &PricingConfig::default()).unwrap().net_total, d("25"));
    }
}
