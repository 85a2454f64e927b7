//! Exchange-rate table.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use famfin_core::{DomainError, DomainResult};

static STANDARD: LazyLock<RateTable> = LazyLock::new(|| {
    RateTable::new()
        .with_rate("USD", 1.0)
        .with_rate("GBP", 0.5)
        .with_rate("EUR", 1.5)
        .with_rate("CAN", 1.25)
});

/// Units of each currency per one US dollar.
///
/// Keys are stored upper-cased, so lookups are case-insensitive. A table
/// deserialized from JSON is validated: every rate must be finite and positive.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// An empty table; every conversion through it falls back to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed table used by [`Money::convert`](crate::Money::convert):
    /// USD 1.0, GBP 0.5, EUR 1.5, CAN 1.25.
    pub fn standard() -> &'static RateTable {
        &STANDARD
    }

    /// Builder: set the rate for `currency` (units per USD).
    pub fn with_rate(mut self, currency: &str, per_usd: f64) -> Self {
        self.rates.insert(currency.to_uppercase(), per_usd);
        self
    }

    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(&currency.to_uppercase()).copied()
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.rate(currency).is_some()
    }

    /// Known currency codes, in sorted order.
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Parse a table from a JSON object such as `{"USD": 1.0, "JPY": 150.0}`.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("rate table: {e}")))
    }
}

impl TryFrom<BTreeMap<String, f64>> for RateTable {
    type Error = DomainError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        raw.into_iter().try_fold(Self::new(), |table, (code, rate)| {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(DomainError::validation(format!(
                    "rate for {code} must be a positive number (got {rate})"
                )));
            }
            Ok(table.with_rate(&code, rate))
        })
    }
}

impl From<RateTable> for BTreeMap<String, f64> {
    fn from(table: RateTable) -> Self {
        table.rates
    }
}
