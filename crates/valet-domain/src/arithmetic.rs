//! Decimal precision settings applied at the presentation boundary

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Default number of decimal places kept on external values
pub const DEFAULT_DECIMAL_PLACES: u32 = 5;

/// Rounding rule used when converting to external values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// 0.5 rounds away from zero
    #[default]
    HalfUp,
    /// Banker's rounding
    HalfEven,
    /// Truncate toward zero
    Down,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            Rounding::Down => RoundingStrategy::ToZero,
        }
    }
}

impl std::fmt::Display for Rounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rounding::HalfUp => write!(f, "half-up"),
            Rounding::HalfEven => write!(f, "half-even"),
            Rounding::Down => write!(f, "down"),
        }
    }
}

/// Precision context passed explicitly to the stages that round.
///
/// Internal stages never round; only the presenter applies this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticContext {
    pub decimal_places: u32,
    pub rounding: Rounding,
}

impl Default for ArithmeticContext {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            rounding: Rounding::HalfUp,
        }
    }
}

impl ArithmeticContext {
    pub fn new(decimal_places: u32, rounding: Rounding) -> Self {
        Self {
            decimal_places,
            rounding,
        }
    }

    /// Round a value for external use. Trailing zeros are dropped.
    pub fn round(&self, value: Decimal) -> Decimal {
        value
            .round_dp_with_strategy(self.decimal_places, self.rounding.strategy())
            .normalize()
    }
}
