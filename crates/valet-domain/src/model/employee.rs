use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Commissioned employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    /// Commission percentage. Negative is invalid; above 100 is allowed.
    pub commission_pct: Decimal,
}

impl Employee {
    pub fn new(name: impl Into<String>, commission_pct: Decimal) -> Self {
        Self {
            name: name.into(),
            commission_pct,
        }
    }
}
